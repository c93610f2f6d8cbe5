use serde::{Deserialize, Serialize};

/// Colours that can be referred to by name in a colour map descriptor.
pub const NAMED_COLOURS: &[(&str, Colour)] = &[
    ("red", Colour::rgb(255, 0, 0)),
    ("green", Colour::rgb(0, 255, 0)),
    ("blue", Colour::rgb(0, 0, 255)),
    ("yellow", Colour::rgb(255, 255, 0)),
    ("cyan", Colour::rgb(0, 255, 255)),
    ("magenta", Colour::rgb(255, 0, 255)),
    ("white", Colour::rgb(255, 255, 255)),
    ("grey", Colour::rgb(127, 127, 127)),
    ("gray", Colour::rgb(127, 127, 127)),
    ("black", Colour::rgb(0, 0, 0)),
    ("orange", Colour::rgb(255, 127, 0)),
    ("pink", Colour::rgb(255, 0, 127)),
    ("purple", Colour::rgb(127, 0, 255)),
    ("sky", Colour::rgb(0, 164, 255)),
];

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Produces an opaque colour with given RGB values. The values range from 0 to 255.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Produces a gray of the given brightness, where 0 is black and 255 is white.
    pub fn gray(brightness: u8) -> Self {
        Self::rgb(brightness, brightness, brightness)
    }

    pub fn black() -> Self {
        Self::gray(0)
    }

    pub fn white() -> Self {
        Self::gray(255)
    }

    /// Looks up one of the [`NAMED_COLOURS`], ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        NAMED_COLOURS
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, colour)| *colour)
    }

    /// Produces an instance of Colour from a hex colour code. The code can start
    /// with a hash symbol. 3, 4, 6 and 8-digit codes are accepted.
    ///
    /// Unlike [`decode_hex`], the whole code has to be consumed, so trailing
    /// garbage makes the function return `None`.
    pub fn from_hex_str(code: &str) -> Option<Self> {
        let digits = code.trim().trim_start_matches('#');
        match decode_hex(digits) {
            Some((consumed, colour)) if consumed == digits.len() => Some(colour),
            _ => None,
        }
    }

    /// Produces an 8-digit hex code with a hash symbol at the beginning.
    pub fn to_hex_string(&self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }

    pub fn channels(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Relative luminance using the Rec. 709 coefficients. Alpha is ignored.
    pub fn luminance(&self) -> f64 {
        0.2126 * self.r as f64 + 0.7152 * self.g as f64 + 0.0722 * self.b as f64
    }
}

/// A single colour anchor of a gradient.
///
/// Channels stay in floating point so that averaging several colours into one
/// anchor does not lose precision before the gradient is sampled.
#[derive(Clone, Copy, Default, Debug, PartialEq, Deserialize, Serialize)]
pub struct ColourStop {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl ColourStop {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Elementwise mean of the given colours, each counted `weight` times.
    ///
    /// Returns `None` when the total weight is zero.
    pub fn weighted_mean<'a, I>(colours: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a (Colour, u64)>,
    {
        let mut sum = [0f64; 4];
        let mut total = 0u64;
        for (colour, weight) in colours {
            let weight_f = *weight as f64;
            for (s, c) in sum.iter_mut().zip(colour.channels()) {
                *s += c as f64 * weight_f;
            }
            total = total.saturating_add(*weight);
        }

        if total == 0 {
            return None;
        }
        let total = total as f64;
        Some(Self::new(
            sum[0] / total,
            sum[1] / total,
            sum[2] / total,
            sum[3] / total,
        ))
    }

    /// Returns a linear interpolation between self and other. A ratio of 0.0
    /// gives self and 1.0 gives other.
    pub fn lerp(&self, other: &Self, ratio: f64) -> Self {
        let lerp_component = |a: f64, b: f64| a * (1.0 - ratio) + b * ratio;
        Self {
            r: lerp_component(self.r, other.r),
            g: lerp_component(self.g, other.g),
            b: lerp_component(self.b, other.b),
            a: lerp_component(self.a, other.a),
        }
    }

    /// Drops the fractional part of every channel.
    pub fn truncate(&self) -> Colour {
        let channel = |c: f64| c.clamp(0.0, 255.0) as u8;
        Colour::rgba(channel(self.r), channel(self.g), channel(self.b), channel(self.a))
    }
}

impl From<Colour> for ColourStop {
    fn from(colour: Colour) -> Self {
        Self::new(
            colour.r as f64,
            colour.g as f64,
            colour.b as f64,
            colour.a as f64,
        )
    }
}

#[derive(Clone, Copy)]
enum HexLayout {
    Rgba8,
    Rgb8,
    Rgba4,
    Rgb4,
}

impl HexLayout {
    const BY_LENGTH: [HexLayout; 4] = [Self::Rgba8, Self::Rgb8, Self::Rgba4, Self::Rgb4];

    fn digits(self) -> usize {
        match self {
            Self::Rgba8 => 8,
            Self::Rgb8 => 6,
            Self::Rgba4 => 4,
            Self::Rgb4 => 3,
        }
    }

    fn decode(self, digits: &[u8]) -> Option<Colour> {
        let nibble = |i: usize| (digits[i] as char).to_digit(16).map(|d| d as u8);
        let byte = |i: usize| Some(nibble(2 * i)? << 4 | nibble(2 * i + 1)?);
        let short = |i: usize| nibble(i).map(|d| d * 0x11);

        match self {
            Self::Rgba8 => Some(Colour::rgba(byte(0)?, byte(1)?, byte(2)?, byte(3)?)),
            Self::Rgb8 => Some(Colour::rgb(byte(0)?, byte(1)?, byte(2)?)),
            Self::Rgba4 => Some(Colour::rgba(short(0)?, short(1)?, short(2)?, short(3)?)),
            Self::Rgb4 => Some(Colour::rgb(short(0)?, short(1)?, short(2)?)),
        }
    }
}

/// Decodes a hex colour from the start of `text`, optionally preceded by `#`.
///
/// The longest layout (RRGGBBAA, RRGGBB, RGBA, RGB) whose digits are all valid
/// wins, so `"ff00zz"` falls back to the `ff0` shorthand. Returns the number of
/// digits used (not counting the `#`) along with the colour, or `None` when no
/// layout fits.
pub fn decode_hex(text: &str) -> Option<(usize, Colour)> {
    let digits = text.strip_prefix('#').unwrap_or(text).as_bytes();

    HexLayout::BY_LENGTH
        .iter()
        .filter(|layout| layout.digits() <= digits.len())
        .find_map(|layout| {
            layout
                .decode(&digits[..layout.digits()])
                .map(|colour| (layout.digits(), colour))
        })
}
