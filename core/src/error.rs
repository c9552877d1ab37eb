use core::fmt;

use crate::graph::Weight;

#[derive(Debug)]
pub enum Error {
    Image(image::ImageError),
    SizeMismatch { expected: usize, actual: usize },
    NegativeWeight(Weight),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image(e) => write!(f, "failed to load image: {e}"),
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected} pixels, got {actual}")
            }
            Self::NegativeWeight(w) => {
                write!(f, "graph contains a negative edge weight: {w}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Self::Image(e)
    }
}
