//! Immutable integer block and chunk coordinates.
//!
//! Both types write their fields as big-endian `i32` values in declaration
//! order, which matches the layout used by persisted coordinate lists.

use std::fmt;

use bytes::{Buf, BufMut};
use serde::{Deserialize, Serialize};

use crate::codec::{require, Decode, Encode};
use crate::error::CoordError;

// ---------------------------------------------------------------------------
// IntVector2 (i32 x, z)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntVector2 {
    pub x: i32,
    pub z: i32,
}

impl IntVector2 {
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Extend to a 3D coordinate with the given y.
    pub fn with_y(&self, y: i32) -> IntVector3 {
        IntVector3::new(self.x, y, self.z)
    }
}

/// Wire format: i32_be(x) + i32_be(z).
impl Encode for IntVector2 {
    fn encode(&self, buf: &mut impl BufMut) {
        buf.put_i32(self.x);
        buf.put_i32(self.z);
    }
}

impl Decode for IntVector2 {
    fn decode(buf: &mut impl Buf) -> Result<Self, CoordError> {
        require(&*buf, 8)?;
        let x = buf.get_i32();
        let z = buf.get_i32();
        Ok(Self { x, z })
    }
}

impl fmt::Display for IntVector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.x, self.z)
    }
}

// ---------------------------------------------------------------------------
// IntVector3 (i32 x, y, z)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntVector3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl IntVector3 {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Drop the y coordinate.
    pub fn xz(&self) -> IntVector2 {
        IntVector2::new(self.x, self.z)
    }
}

/// Wire format: i32_be(x) + i32_be(y) + i32_be(z).
impl Encode for IntVector3 {
    fn encode(&self, buf: &mut impl BufMut) {
        buf.put_i32(self.x);
        buf.put_i32(self.y);
        buf.put_i32(self.z);
    }
}

impl Decode for IntVector3 {
    fn decode(buf: &mut impl Buf) -> Result<Self, CoordError> {
        require(&*buf, 12)?;
        let x = buf.get_i32();
        let y = buf.get_i32();
        let z = buf.get_i32();
        Ok(Self { x, y, z })
    }
}

impl fmt::Display for IntVector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}, {}}}", self.x, self.y, self.z)
    }
}
