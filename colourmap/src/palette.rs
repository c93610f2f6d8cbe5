use std::collections::BTreeMap;

use colourfx::{Colour, NAMED_COLOURS};

/// Colour names understood by the parser: the built-in ones plus any
/// registered by the user. User names shadow built-ins of the same name.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    custom: BTreeMap<String, Colour>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, colour: Colour) -> Option<Colour> {
        self.custom.insert(name.to_lowercase(), colour)
    }

    pub fn get(&self, name: &str) -> Option<Colour> {
        let name = name.to_lowercase();
        self.custom
            .get(&name)
            .copied()
            .or_else(|| Colour::from_name(&name))
    }

    pub fn custom(&self) -> impl Iterator<Item = (&str, Colour)> {
        self.custom.iter().map(|(name, colour)| (name.as_str(), *colour))
    }

    /// Finds the longest colour name `text` starts with. `text` is expected to
    /// be lower case already.
    pub fn longest_match(&self, text: &str) -> Option<(usize, Colour)> {
        let custom = self
            .custom
            .iter()
            .map(|(name, colour)| (name.as_str(), *colour));
        let builtin: &[(&str, Colour)] = NAMED_COLOURS;

        // Custom names come first, so they win ties with built-ins.
        custom
            .chain(builtin.iter().copied())
            .filter(|(name, _)| !name.is_empty() && text.starts_with(name))
            .fold(None, |best: Option<(usize, Colour)>, (name, colour)| match best {
                Some((len, _)) if len >= name.len() => best,
                _ => Some((name.len(), colour)),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_names() {
        let palette = Palette::new();
        assert_eq!(
            palette.longest_match("redtoblue"),
            Some((3, Colour::rgb(255, 0, 0)))
        );
        assert_eq!(palette.longest_match("tored"), None);
        assert_eq!(palette.get("Purple"), Some(Colour::rgb(127, 0, 255)));
    }

    #[test]
    fn custom_names_take_part_in_longest_match() {
        let mut palette = Palette::new();
        palette.insert("RedWine", Colour::rgb(114, 47, 55));
        assert_eq!(
            palette.longest_match("redwinetored"),
            Some((7, Colour::rgb(114, 47, 55)))
        );
        assert_eq!(
            palette.longest_match("redtored"),
            Some((3, Colour::rgb(255, 0, 0)))
        );
    }

    #[test]
    fn custom_names_shadow_builtins() {
        let mut palette = Palette::new();
        palette.insert("sky", Colour::rgb(135, 206, 235));
        assert_eq!(palette.get("SKY"), Some(Colour::rgb(135, 206, 235)));
        assert_eq!(
            palette.longest_match("skyblue"),
            Some((3, Colour::rgb(135, 206, 235)))
        );
    }
}
