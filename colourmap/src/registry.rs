use std::collections::BTreeMap;

use colourfx::{Colour, GradientDescriptor};
use log::debug;

use crate::{
    presets, ColourFile, ColourMapError, DescriptorParser, MalformedReason, Palette,
    RecoveryPolicy,
};

/// Where the descriptor for a name came from.
enum Source<'a> {
    User(&'a str),
    Preset(&'a str),
    Raw,
}

/// Resolves colour map names to gradients.
///
/// Names are looked up, ignoring case, among the maps registered by the user,
/// then among the built-in presets. A name found in neither is parsed as a
/// descriptor itself, so `BlueToRed` works without being registered.
#[derive(Debug, Clone, Default)]
pub struct ColourMapRegistry {
    palette: Palette,
    maps: BTreeMap<String, String>,
    policy: RecoveryPolicy,
}

impl ColourMapRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the colours and maps of a colour file added. Maps without
    /// a descriptor are left out.
    pub fn from_colour_file(file: &ColourFile) -> Self {
        let mut registry = Self::new();
        for named in file.colours() {
            registry.insert_colour(&named.name, named.colour);
        }
        for map in file.maps() {
            if let Some(descriptor) = &map.descriptor {
                registry.insert_map(&map.name, descriptor);
            }
        }
        registry
    }

    pub fn with_policy(mut self, policy: RecoveryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn insert_colour(&mut self, name: &str, colour: Colour) {
        self.palette.insert(name, colour);
    }

    pub fn insert_map(&mut self, name: &str, descriptor: &str) {
        self.maps.insert(name.to_lowercase(), descriptor.to_owned());
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Names of all registered and built-in maps, user maps first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.maps.keys().map(String::as_str).chain(
            presets::PRESETS
                .iter()
                .map(|(name, _)| *name)
                .filter(|name| !self.maps.contains_key(*name)),
        )
    }

    /// Descriptor text registered under `name`, if any.
    pub fn descriptor(&self, name: &str) -> Option<&str> {
        match self.source(name) {
            Source::User(descriptor) | Source::Preset(descriptor) => Some(descriptor),
            Source::Raw => None,
        }
    }

    fn source(&self, name: &str) -> Source<'_> {
        if let Some(descriptor) = self.maps.get(&name.to_lowercase()) {
            Source::User(descriptor)
        } else if let Some(descriptor) = presets::preset(name) {
            Source::Preset(descriptor)
        } else {
            Source::Raw
        }
    }

    /// Gradient for `name`, which needs at least two anchors.
    pub fn resolve(&self, name: &str) -> Result<GradientDescriptor, ColourMapError> {
        let parser = DescriptorParser::new(&self.palette).with_policy(self.policy);

        let gradient = match self.source(name) {
            Source::User(descriptor) => {
                debug!("Using user colour map {:?}: {}", name, descriptor);
                parser.parse(descriptor)?
            }
            Source::Preset(descriptor) => {
                debug!("Using built-in colour map {:?}: {}", name, descriptor);
                parser.parse(descriptor)?
            }
            Source::Raw => {
                debug!("No colour map named {:?}, parsing it as a descriptor", name);
                parser.parse(name).map_err(|e| match e {
                    ColourMapError::MalformedDescriptor {
                        reason: MalformedReason::NoColours,
                        ..
                    } => ColourMapError::UnknownPreset(name.to_owned()),
                    e => e,
                })?
            }
        };

        if gradient.len() < 2 {
            return Err(ColourMapError::InsufficientAnchors {
                name: name.to_owned(),
                found: gradient.len(),
            });
        }
        Ok(gradient)
    }
}
