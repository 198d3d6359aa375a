//! UUID Representation
//!
//! A 16-byte UUID rendered canonically as 32 hex characters in 8-4-4-4-12
//! hyphenated groups. Only the structural version/variant positions are
//! meaningful to this crate; everything else is carried ObjectId data.

use crate::constants::{UUID_BYTE_LEN, UUID_HEX_LEN};
use crate::{validation, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use zerocopy::{AsBytes, FromBytes, FromZeroes};

/// 16-byte UUID value
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
pub struct Uuid([u8; UUID_BYTE_LEN]);

impl Uuid {
    /// Wrap raw bytes without validation
    pub fn from_bytes(bytes: [u8; UUID_BYTE_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw byte access
    pub fn as_bytes(&self) -> &[u8; UUID_BYTE_LEN] {
        &self.0
    }

    /// Parse from a hex string, ignoring hyphens wherever they appear.
    ///
    /// The hyphen-stripped input must be exactly 32 hex characters; reported
    /// character positions refer to the stripped input.
    pub fn from_hex(input: &str) -> Result<Self> {
        let stripped: String = input.chars().filter(|&c| c != '-').collect();
        validation::check_uuid_len(&stripped)?;

        let mut bytes = [0u8; UUID_BYTE_LEN];
        hex::decode_to_slice(stripped.as_str(), &mut bytes).map_err(validation::map_hex_error)?;
        Ok(Self(bytes))
    }

    /// Render as 32 lowercase hex characters in 8-4-4-4-12 groups
    pub fn hyphenated(&self) -> String {
        let h = hex::encode(self.0);
        format!(
            "{}-{}-{}-{}-{}",
            &h[0..8],
            &h[8..12],
            &h[12..16],
            &h[16..20],
            &h[20..UUID_HEX_LEN]
        )
    }

    /// Version nibble (first hex digit of the third group)
    pub fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Variant field (top two bits of the fourth group's first byte)
    pub fn variant(&self) -> u8 {
        self.0[8] >> 6
    }
}

impl From<[u8; UUID_BYTE_LEN]> for Uuid {
    fn from(bytes: [u8; UUID_BYTE_LEN]) -> Self {
        Self(bytes)
    }
}

impl FromStr for Uuid {
    type Err = crate::CodecError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hyphenated())
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Uuid").field(&self.hyphenated()).finish()
    }
}
