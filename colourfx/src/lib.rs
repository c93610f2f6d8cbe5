mod color;
mod gradient;
mod modifier;

pub use color::{decode_hex, Colour, ColourStop, NAMED_COLOURS};
pub use gradient::{GradientCache, GradientCacheBuilder, GradientDescriptor};
pub use modifier::{duplicate_count, Modifier, DUPLICATES};
