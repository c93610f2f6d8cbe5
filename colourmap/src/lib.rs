mod config;
mod descriptor;
mod error;
mod palette;
mod presets;
mod registry;

pub use config::{Capabilities, ColourFile, ColourFileError, MapEntry, NamedColour};
pub use descriptor::{parse, DescriptorParser, ParserState, RecoveryPolicy, Token, Tokenizer};
pub use error::{ColourMapError, MalformedReason};
pub use palette::Palette;
pub use presets::{preset, PRESETS};
pub use registry::ColourMapRegistry;

pub use colourfx::{Colour, ColourStop, GradientCache, GradientDescriptor};
