//! Input Validation
//!
//! Length and hex-alphabet guards shared by the string-level entry points.

use crate::constants::{OBJECT_ID_HEX_LEN, UUID_HEX_LEN};
use crate::{CodecError, Result};

/// Validate an encoder input: exactly 24 characters
pub fn check_object_id_len(input: &str) -> Result<()> {
    if input.len() != OBJECT_ID_HEX_LEN {
        return Err(CodecError::InvalidLength {
            expected: OBJECT_ID_HEX_LEN,
            actual: input.len(),
        });
    }
    Ok(())
}

/// Validate a decoder input after hyphen removal: exactly 32 characters
pub fn check_uuid_len(stripped: &str) -> Result<()> {
    if stripped.len() != UUID_HEX_LEN {
        return Err(CodecError::InvalidFormat {
            expected: UUID_HEX_LEN,
            actual: stripped.len(),
        });
    }
    Ok(())
}

/// Map a hex decode failure onto the codec error taxonomy.
///
/// Length guards run before any decoding, so the only reachable variant is
/// `InvalidHexCharacter`; the length variants are mapped totally anyway.
pub(crate) fn map_hex_error(err: hex::FromHexError) -> CodecError {
    match err {
        hex::FromHexError::InvalidHexCharacter { c, index } => CodecError::InvalidCharacter {
            character: c,
            position: index,
        },
        hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
            CodecError::InvalidCharacter {
                character: '\0',
                position: 0,
            }
        }
    }
}
