//! Plain value types shared by the legacy translation crates.

pub mod codec;
pub mod error;
pub mod vector;

pub use codec::{Decode, Encode};
pub use error::CoordError;
pub use vector::{IntVector2, IntVector3};
