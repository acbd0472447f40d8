//! Public API traits and types for the Saber KEM workspace
//!
//! This crate provides the public API surface shared by the workspace
//! members: trait definitions, error types, and common byte-container
//! types used throughout the library.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::SecretBytes;

pub use traits::{Kem, Serialize, SerializeSecret};

// Re-export trait modules for direct access
pub use traits::{kem, serialize};
