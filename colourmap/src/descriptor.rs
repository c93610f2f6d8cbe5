//! Parser for the colour map mini-language.
//!
//! A descriptor is a run of words written without spaces, read case
//! insensitively from left to right:
//!
//! - colours (`Red`, `Sky`, `#ff8000`, ...) are layered on top of each other
//!   and averaged into a single anchor: `BlueRed` is purple;
//! - modifiers (`Light`, `Dark`, `Transparent`, `Translucent`, `Opaque`) change
//!   the next colour. When several are stacked, the one nearest the colour
//!   applies first, so `DarkLightRed` is dark(light(red));
//! - duplicates (`Double`, `Triple`, ... `Tredecuple`) repeat the next word.
//!   Before a colour they weight it (`DarkDoubleRed` = `DarkRedDarkRed`),
//!   before a modifier they stack it (`TripleDarkRed` = `DarkDarkDarkRed`) and
//!   before `To` they repeat the next anchor
//!   (`BlueDoubleToDarkRed` = `BlueToDarkRedToDarkRed`);
//! - `To` finishes the current anchor and starts the next one.
//!
//! Anything else is skipped one character at a time under the default
//! [`RecoveryPolicy::Lenient`].

use colourfx::{decode_hex, Colour, ColourStop, GradientDescriptor, Modifier, DUPLICATES};
use log::{debug, trace};

use crate::{ColourMapError, MalformedReason, Palette};

const SEPARATOR: &str = "to";

/// Every modifier reaches a fixed point after this many applications to an
/// 8-bit channel, so longer runs are cut short.
const MODIFIER_FIXED_POINT: u64 = 8;

/// What to do with characters that do not start any known word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecoveryPolicy {
    /// Drop the character and carry on.
    #[default]
    Lenient,
    /// Reject the descriptor.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Colour(Colour),
    Modifier(Modifier),
    Duplicate(u64),
    Separator,
    Unrecognised(char),
}

/// Splits a lower case descriptor into tokens, yielding each with its byte
/// offset.
pub struct Tokenizer<'a> {
    palette: &'a Palette,
    text: &'a str,
    position: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(palette: &'a Palette, text: &'a str) -> Self {
        Self {
            palette,
            text,
            position: 0,
        }
    }

    fn match_word(&self, rest: &str) -> Option<(usize, Token)> {
        if let Some((len, colour)) = self.palette.longest_match(rest) {
            return Some((len, Token::Colour(colour)));
        }

        if let Some(digits) = rest.strip_prefix('#').filter(|d| !d.starts_with('#')) {
            if let Some((len, colour)) = decode_hex(digits) {
                return Some((len + 1, Token::Colour(colour)));
            }
        }

        if let Some(modifier) = Modifier::ALL
            .into_iter()
            .find(|m| rest.starts_with(m.keyword()))
        {
            return Some((modifier.keyword().len(), Token::Modifier(modifier)));
        }

        if let Some((word, count)) = DUPLICATES.iter().find(|(w, _)| rest.starts_with(w)) {
            return Some((word.len(), Token::Duplicate(*count)));
        }

        if rest.starts_with(SEPARATOR) {
            return Some((SEPARATOR.len(), Token::Separator));
        }

        None
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = (usize, Token);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.position..];
        let first = rest.chars().next()?;

        let (len, token) = self
            .match_word(rest)
            .unwrap_or((first.len_utf8(), Token::Unrecognised(first)));
        let position = self.position;
        self.position += len;
        Some((position, token))
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Group {
    /// Colours with the number of times each was written.
    members: Vec<(Colour, u64)>,
    /// How many consecutive anchors this group turns into.
    repeat: u64,
}

impl Group {
    fn new(repeat: u64) -> Self {
        Self {
            members: Vec::new(),
            repeat,
        }
    }
}

/// Everything the parser has seen so far. Each token moves it to the next
/// state through [`ParserState::step`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParserState {
    groups: Vec<Group>,
    modifiers: Vec<(Modifier, u64)>,
    duplicate: u64,
}

impl Default for ParserState {
    fn default() -> Self {
        Self {
            groups: vec![Group::new(1)],
            modifiers: Vec::new(),
            duplicate: 1,
        }
    }
}

impl ParserState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(mut self, token: Token) -> Self {
        match token {
            Token::Colour(colour) => {
                let colour = self.apply_modifiers(colour);
                let weight = std::mem::replace(&mut self.duplicate, 1);
                self.modifiers.clear();
                self.current_group().members.push((colour, weight));
            }
            Token::Modifier(modifier) => {
                let count = std::mem::replace(&mut self.duplicate, 1);
                self.modifiers.push((modifier, count));
            }
            Token::Duplicate(count) => {
                self.duplicate = self.duplicate.saturating_mul(count);
            }
            Token::Separator => {
                let count = std::mem::replace(&mut self.duplicate, 1);
                let current = self.current_group();
                if current.members.is_empty() {
                    current.repeat = current.repeat.saturating_add(count.saturating_sub(1));
                } else {
                    self.groups.push(Group::new(count));
                }
            }
            Token::Unrecognised(_) => {}
        }
        self
    }

    fn current_group(&mut self) -> &mut Group {
        let last = self.groups.len() - 1;
        &mut self.groups[last]
    }

    /// Applies pending modifiers, the most recently written one first.
    fn apply_modifiers(&self, colour: Colour) -> Colour {
        self.modifiers
            .iter()
            .rev()
            .fold(colour, |colour, &(modifier, count)| {
                (0..count.min(MODIFIER_FIXED_POINT)).fold(colour, |c, _| modifier.apply(c))
            })
    }

    /// Modifiers waiting for the next colour, in the order they were written.
    pub fn pending_modifiers(&self) -> Vec<Modifier> {
        self.modifiers
            .iter()
            .flat_map(|&(modifier, count)| {
                std::iter::repeat(modifier).take(count.min(MODIFIER_FIXED_POINT) as usize)
            })
            .collect()
    }

    pub fn pending_duplicate(&self) -> u64 {
        self.duplicate
    }

    /// Number of anchors the state would produce if the input ended here.
    pub fn anchor_count(&self) -> u64 {
        self.groups
            .iter()
            .filter(|group| !group.members.is_empty())
            .fold(0u64, |total, group| total.saturating_add(group.repeat))
    }

    /// Averages every group into its anchor.
    pub fn finish(self) -> Result<GradientDescriptor, MalformedReason> {
        // A new group only opens once the current one has a colour, so only
        // the last group can be empty.
        match self.groups.last() {
            Some(group) if !group.members.is_empty() => {}
            _ if self.groups.len() == 1 => return Err(MalformedReason::NoColours),
            _ => return Err(MalformedReason::TrailingEmptyGroup),
        }

        let found = self.anchor_count();
        if found > GradientDescriptor::MAX_ANCHORS as u64 {
            return Err(MalformedReason::TooManyAnchors {
                found,
                limit: GradientDescriptor::MAX_ANCHORS,
            });
        }

        let anchors = self
            .groups
            .iter()
            .filter_map(|group| Some((ColourStop::weighted_mean(&group.members)?, group.repeat)))
            .flat_map(|(anchor, repeat)| std::iter::repeat(anchor).take(repeat as usize))
            .collect();
        GradientDescriptor::new(anchors).ok_or(MalformedReason::NoColours)
    }
}

/// Lower case copy of a descriptor that remembers where each of its
/// characters came from. Some characters change their encoded length when
/// lowercased, so offsets in the copy can differ from the input.
struct LowerCased {
    text: String,
    /// `(offset in text, offset in input)` for every input character.
    origins: Vec<(usize, usize)>,
}

impl LowerCased {
    fn new(input: &str) -> Self {
        let mut text = String::with_capacity(input.len());
        let mut origins = Vec::with_capacity(input.len());
        for (offset, character) in input.char_indices() {
            origins.push((text.len(), offset));
            text.extend(character.to_lowercase());
        }
        Self { text, origins }
    }

    /// Offset in the input of the character that produced `offset`.
    fn original_offset(&self, offset: usize) -> usize {
        let index = self.origins.partition_point(|&(lowered, _)| lowered <= offset);
        index
            .checked_sub(1)
            .map_or(0, |index| self.origins[index].1)
    }
}

/// Turns descriptor text into gradient anchors.
pub struct DescriptorParser<'a> {
    palette: &'a Palette,
    policy: RecoveryPolicy,
}

impl<'a> DescriptorParser<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self {
            palette,
            policy: RecoveryPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: RecoveryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn parse(&self, descriptor: &str) -> Result<GradientDescriptor, ColourMapError> {
        let text = LowerCased::new(descriptor);

        Tokenizer::new(self.palette, &text.text)
            .try_fold(ParserState::new(), |state, (position, token)| {
                match (token, self.policy) {
                    (Token::Unrecognised(character), RecoveryPolicy::Strict) => {
                        Err(MalformedReason::UnexpectedCharacter {
                            position: text.original_offset(position),
                            character,
                        })
                    }
                    (Token::Unrecognised(character), RecoveryPolicy::Lenient) => {
                        trace!(
                            "Skipping {:?} at offset {}",
                            character,
                            text.original_offset(position)
                        );
                        Ok(state)
                    }
                    (token, _) => Ok(state.step(token)),
                }
            })
            .and_then(ParserState::finish)
            .inspect(|gradient| {
                debug!(
                    "Parsed colour map {:?} into {} anchors",
                    descriptor,
                    gradient.len()
                )
            })
            .map_err(|reason| ColourMapError::MalformedDescriptor {
                descriptor: descriptor.to_owned(),
                reason,
            })
    }
}

/// Parses a descriptor using only the built-in colour names.
pub fn parse(descriptor: &str) -> Result<GradientDescriptor, ColourMapError> {
    DescriptorParser::new(&Palette::default()).parse(descriptor)
}
