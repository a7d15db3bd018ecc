//! Built-in language profiles.
//!
//! Every table is built once, on first use, and shared afterwards.

mod portuguese;
mod spanish;

pub use portuguese::Portuguese;
pub use spanish::Spanish;
