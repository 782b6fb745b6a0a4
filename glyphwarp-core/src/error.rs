//! Error types for schema loading and rendering.

use std::fmt;
use std::io;
use std::path::PathBuf;

use glyphwarp_graphics::GraphicsError;

use crate::letter::Letter;

// ---------------------------------------------------------------------------
// Schema errors
// ---------------------------------------------------------------------------

/// A parameter schema could not be loaded or failed validation.
#[derive(Debug)]
pub enum SchemaError {
    /// The schema file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The schema text is not valid JSON of the expected shape.
    Json(serde_json::Error),
    /// A top-level key does not name a supported letter.
    UnknownLetter(String),
    /// A parameter name is not defined for its letter.
    UnknownParameter { letter: Letter, param: String },
    /// `min` is greater than `max`.
    InvalidRange {
        letter: Letter,
        param: String,
        min: f64,
        max: f64,
    },
    /// `default` lies outside `[min, max]`.
    DefaultOutOfRange {
        letter: Letter,
        param: String,
        default: f64,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read schema {}: {source}", path.display())
            }
            Self::Json(e) => write!(f, "malformed schema: {e}"),
            Self::UnknownLetter(name) => write!(f, "schema names unknown letter `{name}`"),
            Self::UnknownParameter { letter, param } => {
                write!(f, "letter {letter} has no parameter `{param}`")
            }
            Self::InvalidRange {
                letter,
                param,
                min,
                max,
            } => write!(f, "{letter}.{param}: min {min} is greater than max {max}"),
            Self::DefaultOutOfRange {
                letter,
                param,
                default,
            } => write!(f, "{letter}.{param}: default {default} is outside [min, max]"),
        }
    }
}

impl std::error::Error for SchemaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SchemaError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

// ---------------------------------------------------------------------------
// Core errors
// ---------------------------------------------------------------------------

/// An error raised while resolving parameters or rendering a glyph.
#[derive(Debug)]
pub enum CoreError {
    /// The requested letter is not one of the supported glyphs.
    UnsupportedLetter(String),
    /// A parameter key is not defined for the letter (strict key policy).
    UnknownParameter { letter: Letter, param: String },
    /// The schema is invalid.
    Schema(SchemaError),
    /// Rasterization or dilation failed.
    Graphics(GraphicsError),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedLetter(name) => {
                write!(f, "unsupported letter `{name}` (expected one of A, B, C, F, X, W)")
            }
            Self::UnknownParameter { letter, param } => {
                write!(f, "unknown parameter `{param}` for letter {letter}")
            }
            Self::Schema(e) => write!(f, "{e}"),
            Self::Graphics(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Schema(e) => Some(e),
            Self::Graphics(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SchemaError> for CoreError {
    fn from(e: SchemaError) -> Self {
        Self::Schema(e)
    }
}

impl From<GraphicsError> for CoreError {
    fn from(e: GraphicsError) -> Self {
        Self::Graphics(e)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = CoreError::UnknownParameter {
            letter: Letter::A,
            param: "shear".into(),
        };
        assert_eq!(e.to_string(), "unknown parameter `shear` for letter A");

        let e = CoreError::from(GraphicsError::InvalidThickness(0));
        assert!(e.to_string().contains("thickness 0"));

        let e = SchemaError::InvalidRange {
            letter: Letter::C,
            param: "cut_top".into(),
            min: 5.0,
            max: 1.0,
        };
        assert_eq!(e.to_string(), "C.cut_top: min 5 is greater than max 1");
    }

    #[test]
    fn sources_are_chained() {
        use std::error::Error;
        let e = CoreError::from(SchemaError::UnknownLetter("Q".into()));
        assert!(e.source().is_some());
        assert!(CoreError::UnsupportedLetter("Q".into()).source().is_none());
    }
}
