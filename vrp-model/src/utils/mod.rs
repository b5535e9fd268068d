//! Contains utility logic.

mod collections;
pub use self::collections::*;

mod error;
pub use self::error::*;
