//! Supporting types for the sorted list.
//!
//! ## Types
//!
//! - [`ListError`]: Error taxonomy for list and cursor operations
//! - [`ListResult`]: `Result` alias over [`ListError`]
//! - [`SequenceRoot`]: SHA-256 digest of an ordered value sequence

mod error;
mod root;

pub use error::{ListError, ListResult};
pub use root::SequenceRoot;
