//! ObjectId Representation
//!
//! A MongoDB ObjectId is treated as 12 opaque bytes. Callers may interpret
//! them as timestamp + machine + pid + counter, but the transform never
//! looks inside.

use crate::constants::OBJECT_ID_BYTE_LEN;
use crate::{validation, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use zerocopy::{AsBytes, FromBytes, FromZeroes};

/// 12-byte MongoDB ObjectId
#[repr(transparent)]
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    AsBytes,
    FromBytes,
    FromZeroes,
    Serialize,
    Deserialize,
)]
pub struct ObjectId([u8; OBJECT_ID_BYTE_LEN]);

impl ObjectId {
    /// Wrap raw bytes without validation
    pub fn from_bytes(bytes: [u8; OBJECT_ID_BYTE_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw byte access
    pub fn as_bytes(&self) -> &[u8; OBJECT_ID_BYTE_LEN] {
        &self.0
    }

    /// Parse from a 24-character hex string (either case)
    pub fn from_hex(input: &str) -> Result<Self> {
        validation::check_object_id_len(input)?;

        let mut bytes = [0u8; OBJECT_ID_BYTE_LEN];
        hex::decode_to_slice(input, &mut bytes).map_err(validation::map_hex_error)?;
        Ok(Self(bytes))
    }

    /// Render as 24 lowercase hex characters
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; OBJECT_ID_BYTE_LEN]> for ObjectId {
    fn from(bytes: [u8; OBJECT_ID_BYTE_LEN]) -> Self {
        Self(bytes)
    }
}

impl FromStr for ObjectId {
    type Err = crate::CodecError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObjectId").field(&self.to_hex()).finish()
    }
}
