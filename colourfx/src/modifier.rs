use serde::{Deserialize, Serialize};

use crate::Colour;

/// Words that repeat whatever follows them, with their multipliers.
pub const DUPLICATES: &[(&str, u64)] = &[
    ("single", 1),
    ("double", 2),
    ("triple", 3),
    ("quadruple", 4),
    ("quintuple", 5),
    ("pentuple", 5),
    ("sextuple", 6),
    ("hextuple", 6),
    ("septuple", 7),
    ("heptuple", 7),
    ("octuple", 8),
    ("nonuple", 9),
    ("decuple", 10),
    ("undecuple", 11),
    ("hendecuple", 11),
    ("duodecuple", 12),
    ("tredecuple", 13),
];

pub fn duplicate_count(word: &str) -> Option<u64> {
    DUPLICATES
        .iter()
        .find(|(w, _)| w.eq_ignore_ascii_case(word))
        .map(|(_, count)| *count)
}

/// A transform applied to the colour written right after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    Light,
    Dark,
    Transparent,
    Translucent,
    Opaque,
}

/// Shift-and-offset description of a modifier. A negative alpha shift shifts
/// left instead.
struct Transform {
    colour_shift: u32,
    colour_offset: u16,
    alpha_shift: i32,
}

impl Modifier {
    pub const ALL: [Modifier; 5] = [
        Self::Light,
        Self::Dark,
        Self::Transparent,
        Self::Translucent,
        Self::Opaque,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Transparent => "transparent",
            Self::Translucent => "translucent",
            Self::Opaque => "opaque",
        }
    }

    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.keyword().eq_ignore_ascii_case(word))
    }

    fn transform(self) -> Transform {
        let (colour_shift, colour_offset, alpha_shift) = match self {
            Self::Light => (1, 128, 0),
            Self::Dark => (1, 0, 0),
            Self::Transparent => (0, 0, 8),
            Self::Translucent => (0, 0, 1),
            Self::Opaque => (0, 0, -1),
        };
        Transform {
            colour_shift,
            colour_offset,
            alpha_shift,
        }
    }

    pub fn apply(self, colour: Colour) -> Colour {
        let Transform {
            colour_shift,
            colour_offset,
            alpha_shift,
        } = self.transform();

        let channel = |c: u8| (((c as u16) >> colour_shift) + colour_offset).min(255) as u8;
        let alpha = if alpha_shift >= 0 {
            (colour.a as u16) >> alpha_shift
        } else {
            (colour.a as u16) << alpha_shift.unsigned_abs()
        };

        Colour::rgba(
            channel(colour.r),
            channel(colour.g),
            channel(colour.b),
            alpha.min(255) as u8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_and_dark() {
        let red = Colour::rgb(255, 0, 0);
        assert_eq!(Modifier::Light.apply(red), Colour::rgb(255, 128, 128));
        assert_eq!(Modifier::Dark.apply(red), Colour::rgb(127, 0, 0));
        assert_eq!(
            Modifier::Dark.apply(Modifier::Light.apply(red)),
            Colour::rgb(127, 64, 64),
            "light then dark"
        );
        assert_eq!(
            Modifier::Light.apply(Modifier::Dark.apply(red)),
            Colour::rgb(191, 128, 128),
            "dark then light"
        );
    }

    #[test]
    fn alpha_modifiers() {
        let blue = Colour::rgb(0, 0, 255);
        assert_eq!(Modifier::Transparent.apply(blue), Colour::rgba(0, 0, 255, 0));
        assert_eq!(Modifier::Translucent.apply(blue), Colour::rgba(0, 0, 255, 127));
        assert_eq!(
            Modifier::Opaque.apply(Colour::rgba(0, 0, 255, 100)),
            Colour::rgba(0, 0, 255, 200)
        );
        assert_eq!(Modifier::Opaque.apply(blue), blue, "capped at 255");
    }

    #[test]
    fn keywords() {
        for modifier in Modifier::ALL {
            assert_eq!(Modifier::from_keyword(modifier.keyword()), Some(modifier));
        }
        assert_eq!(Modifier::from_keyword("DARK"), Some(Modifier::Dark));
        assert_eq!(Modifier::from_keyword("darker"), None);
    }

    #[test]
    fn duplicates() {
        assert_eq!(duplicate_count("double"), Some(2));
        assert_eq!(duplicate_count("Hendecuple"), Some(11));
        assert_eq!(duplicate_count("tredecuple"), Some(13));
        assert_eq!(duplicate_count("twice"), None);
    }
}
