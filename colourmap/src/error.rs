use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    NoColours,
    TrailingEmptyGroup,
    /// Repeated transitions expand to more anchors than a gradient can hold.
    TooManyAnchors { found: u64, limit: usize },
    UnexpectedCharacter { position: usize, character: char },
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NoColours => write!(f, "no colours found"),
            Self::TrailingEmptyGroup => write!(f, "ends with a transition to nothing"),
            Self::TooManyAnchors { found, limit } => {
                write!(f, "expands to {found} colours, at most {limit} allowed")
            }
            Self::UnexpectedCharacter {
                position,
                character,
            } => write!(f, "unexpected character {character:?} at offset {position}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColourMapError {
    #[error("invalid colour map {descriptor:?}: {reason}")]
    MalformedDescriptor {
        descriptor: String,
        reason: MalformedReason,
    },

    #[error("not enough colours to generate colour map {name:?}: got {found}, need at least 2")]
    InsufficientAnchors { name: String, found: usize },

    #[error("unknown colour map: {0:?}")]
    UnknownPreset(String),
}
