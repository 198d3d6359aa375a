//! Bijective ObjectId/UUID Codec
//!
//! This crate implements a lossless, reversible transform between 12-byte
//! MongoDB ObjectIds and 16-byte RFC 4122 shaped UUIDs. The encoder forces
//! the UUID version and variant bits and embeds the displaced bits in the
//! UUID's trailing group, so the decoder reconstructs the original ObjectId
//! exactly with no mapping tables and no state.

use thiserror::Error;

// Re-export core types and modules
pub mod codec;
pub mod constants;
pub mod object_id;
pub mod uuid;
pub mod validation;

pub use codec::{decode, encode, object_id_to_uuid, uuid_to_object_id};
pub use constants::*;
pub use object_id::ObjectId;
pub use uuid::Uuid;

/// Codec errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Invalid ObjectId length: expected {expected} hex characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Invalid UUID format: expected {expected} hex characters after hyphen removal, got {actual}")]
    InvalidFormat { expected: usize, actual: usize },

    #[error("Invalid hex character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },
}

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;
