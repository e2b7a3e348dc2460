//! Shared value types used across the tumble workspace.

mod color;
mod types;

pub use color::{Color, ColorError};
pub use types::{ObjectId, Transform, Viewport};
