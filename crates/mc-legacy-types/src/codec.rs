//! Fixed-width binary encoding traits.

use bytes::{Buf, BufMut};

use crate::error::CoordError;

/// Encode a value onto a buffer.
pub trait Encode {
    fn encode(&self, buf: &mut impl BufMut);
}

/// Decode a value from a buffer.
pub trait Decode: Sized {
    fn decode(buf: &mut impl Buf) -> Result<Self, CoordError>;
}

/// Ensure `buf` holds at least `needed` bytes before a fixed-width read.
pub(crate) fn require(buf: &impl Buf, needed: usize) -> Result<(), CoordError> {
    if buf.remaining() < needed {
        return Err(CoordError::BufferTooShort {
            needed,
            remaining: buf.remaining(),
        });
    }
    Ok(())
}
