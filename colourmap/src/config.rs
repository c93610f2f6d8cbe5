//! Reader for colour files.
//!
//! A colour file is a list of `key=value` lines:
//!
//! ```text
//! colour.Teal=#008080
//! map.Sea.colour=DarkBlueToTealToWhite
//! map.Sea.colour.Alt.night=BlackToDarkTeal
//! map.Sea.tracks=true
//! ```
//!
//! `colour.<Name>` adds a named colour usable in descriptors. `map.<Name>.colour`
//! sets a colour map, and any extra segments after `colour` register an
//! alternate map named by the segments in reverse followed by the map name,
//! `nightAltSea` above. Alternates share the capabilities of their map.

use std::collections::BTreeMap;

use colourfx::Colour;
use log::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColourFileError {
    #[error("line {line}: expected key=value")]
    MissingSeparator { line: usize },

    #[error("line {line}: incomplete key {key:?}")]
    IncompleteKey { line: usize, key: String },
}

/// Where a colour map may be used. Not interpreted by this crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub tracks: bool,
    pub clicks: bool,
    pub keyboard: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedColour {
    /// Name as written in the file.
    pub name: String,
    pub colour: Colour,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapEntry {
    /// Name as written in the file.
    pub name: String,
    pub descriptor: Option<String>,
    /// Lower case name of the map holding this entry's capabilities.
    capabilities_of: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColourFile {
    colours: BTreeMap<String, NamedColour>,
    maps: BTreeMap<String, MapEntry>,
    capabilities: BTreeMap<String, Capabilities>,
}

impl ColourFile {
    pub fn parse(text: &str) -> Result<Self, ColourFileError> {
        let mut file = Self::default();
        for (index, line) in text.lines().enumerate() {
            file.parse_line(index + 1, line)?;
        }
        debug!(
            "Loaded {} colours and {} colour maps",
            file.colours.len(),
            file.maps.len()
        );
        Ok(file)
    }

    fn parse_line(&mut self, line: usize, text: &str) -> Result<(), ColourFileError> {
        if text.trim().is_empty() {
            return Ok(());
        }

        let (key, value) = text
            .split_once('=')
            .ok_or(ColourFileError::MissingSeparator { line })?;
        let (key, value) = (key.trim(), value.trim());
        let incomplete = || ColourFileError::IncompleteKey {
            line,
            key: key.to_owned(),
        };

        let parts: Vec<&str> = key.split('.').collect();
        match parts.as_slice() {
            ["colour", name, ..] if !name.is_empty() => match Colour::from_hex_str(value) {
                Some(colour) => {
                    self.colours.insert(
                        name.to_lowercase(),
                        NamedColour {
                            name: (*name).to_owned(),
                            colour,
                        },
                    );
                }
                None => warn!("Line {}: {:?} is not a hex colour, skipping", line, value),
            },
            ["colour", ..] => return Err(incomplete()),
            ["map", name, field, rest @ ..] if !name.is_empty() => {
                self.parse_map_field(line, name, &field.to_lowercase(), rest, value)
            }
            ["map", ..] => return Err(incomplete()),
            _ => debug!("Line {}: ignoring unknown key {:?}", line, key),
        }
        Ok(())
    }

    fn parse_map_field(&mut self, line: usize, name: &str, field: &str, rest: &[&str], value: &str) {
        let key = name.to_lowercase();
        self.maps.entry(key.clone()).or_insert_with(|| MapEntry {
            name: name.to_owned(),
            descriptor: None,
            capabilities_of: key.clone(),
        });
        self.capabilities.entry(key.clone()).or_default();

        match field {
            "colour" => {
                let alternate: String = rest.iter().rev().copied().chain([name]).collect();
                let alternate_key = alternate.to_lowercase();
                if alternate_key == key {
                    if let Some(entry) = self.maps.get_mut(&key) {
                        entry.descriptor = Some(value.to_owned());
                    }
                } else {
                    self.maps.insert(
                        alternate_key,
                        MapEntry {
                            name: alternate,
                            descriptor: Some(value.to_owned()),
                            capabilities_of: key,
                        },
                    );
                }
            }
            "tracks" | "clicks" | "keyboard" => {
                let enabled = value
                    .chars()
                    .next()
                    .is_some_and(|c| matches!(c.to_ascii_lowercase(), 't' | 'y'));
                let capabilities = self.capabilities.entry(key).or_default();
                match field {
                    "tracks" => capabilities.tracks = enabled,
                    "clicks" => capabilities.clicks = enabled,
                    _ => capabilities.keyboard = enabled,
                }
            }
            _ => debug!("Line {}: ignoring unknown map field {:?}", line, field),
        }
    }

    pub fn colour(&self, name: &str) -> Option<&NamedColour> {
        self.colours.get(&name.to_lowercase())
    }

    pub fn colours(&self) -> impl Iterator<Item = &NamedColour> {
        self.colours.values()
    }

    pub fn map(&self, name: &str) -> Option<&MapEntry> {
        self.maps.get(&name.to_lowercase())
    }

    pub fn maps(&self) -> impl Iterator<Item = &MapEntry> {
        self.maps.values()
    }

    pub fn capabilities(&self, map: &str) -> Option<Capabilities> {
        let entry = self.map(map)?;
        self.capabilities.get(&entry.capabilities_of).copied()
    }
}
