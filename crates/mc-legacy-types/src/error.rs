//! Coordinate decoding errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoordError {
    #[error("buffer too short: need {needed} bytes, have {remaining}")]
    BufferTooShort { needed: usize, remaining: usize },
}
