//! Encoder / Decoder Implementation
//!
//! The forward transform rewrites the two constrained UUID positions
//! (version nibble, variant bits) and parks the displaced bits in the
//! UUID's trailing group. The reverse transform reads them back, so
//! `decode(encode(id)) == id` holds for every ObjectId.
//!
//! Both directions are pure, single-pass, and branch-free except for the
//! input guards on the string surface.

use crate::constants::*;
use crate::object_id::ObjectId;
use crate::uuid::Uuid;
use crate::Result;
use byteorder::{BigEndian, ByteOrder};
use tracing::trace;

/// Encode an ObjectId into an RFC 4122 shaped UUID.
///
/// Infallible: well-formedness is guaranteed by the type. Bytes 14-15 of
/// the output are filler; the decoder never reads them.
pub fn encode(object_id: &ObjectId) -> Uuid {
    let src = object_id.as_bytes();

    let p3 = BigEndian::read_u16(&src[6..8]);
    let p4 = BigEndian::read_u16(&src[8..10]);
    let saved_version = (p3 & VERSION_MASK) >> VERSION_SHIFT;
    let saved_variant = (p4 & VARIANT_MASK) >> VARIANT_SHIFT;

    let mut out = [0u8; UUID_BYTE_LEN];
    out[..6].copy_from_slice(&src[..6]);
    BigEndian::write_u16(&mut out[6..8], (p3 & VERSION_KEEP_MASK) | UUID_VERSION_BITS);
    BigEndian::write_u16(&mut out[8..10], (p4 & VARIANT_KEEP_MASK) | UUID_VARIANT_BITS);
    out[10..12].copy_from_slice(&src[10..12]);
    out[DISPLACED_VERSION_BYTE] = saved_version as u8;
    out[DISPLACED_VARIANT_BYTE] = saved_variant as u8;

    trace!(
        saved_version,
        saved_variant,
        "displaced version/variant bits into trailing group"
    );

    Uuid::from_bytes(out)
}

/// Decode a UUID produced by [`encode`] back into the original ObjectId.
///
/// Infallible: any 16-byte value decodes to some ObjectId. Displaced bytes
/// outside their domain (hand-crafted inputs) are masked to 4 and 2 bits
/// rather than overflowing. Filler bytes are ignored.
pub fn decode(uuid: &Uuid) -> ObjectId {
    let src = uuid.as_bytes();

    let version = ((src[DISPLACED_VERSION_BYTE] & DISPLACED_VERSION_MAX) as u16) << VERSION_SHIFT;
    let variant = ((src[DISPLACED_VARIANT_BYTE] & DISPLACED_VARIANT_MAX) as u16) << VARIANT_SHIFT;
    let p3 = (BigEndian::read_u16(&src[6..8]) & VERSION_KEEP_MASK) | version;
    let p4 = (BigEndian::read_u16(&src[8..10]) & VARIANT_KEEP_MASK) | variant;

    let mut out = [0u8; OBJECT_ID_BYTE_LEN];
    out[..6].copy_from_slice(&src[..6]);
    BigEndian::write_u16(&mut out[6..8], p3);
    BigEndian::write_u16(&mut out[8..10], p4);
    out[10..12].copy_from_slice(&src[10..12]);

    trace!(
        restored_version = version >> VERSION_SHIFT,
        restored_variant = variant >> VARIANT_SHIFT,
        "restored displaced bits into ObjectId fields"
    );

    ObjectId::from_bytes(out)
}

/// Convert a 24-character hex ObjectId string into a hyphenated UUID string.
///
/// Fails with `InvalidLength` unless the input is exactly 24 characters and
/// `InvalidCharacter` if any character is not a hex digit. Output is
/// lowercase regardless of input case.
pub fn object_id_to_uuid(object_id: &str) -> Result<String> {
    let parsed = ObjectId::from_hex(object_id)?;
    Ok(encode(&parsed).hyphenated())
}

/// Convert a UUID string back into the 24-character hex ObjectId it encodes.
///
/// Hyphens are stripped wherever they appear; fails with `InvalidFormat`
/// unless 32 characters remain and `InvalidCharacter` if any character is
/// not a hex digit. Output is lowercase regardless of input case.
pub fn uuid_to_object_id(uuid: &str) -> Result<String> {
    let parsed = Uuid::from_hex(uuid)?;
    Ok(decode(&parsed).to_hex())
}

impl ObjectId {
    /// Typed equivalent of [`object_id_to_uuid`]
    pub fn to_uuid(&self) -> Uuid {
        encode(self)
    }
}

impl Uuid {
    /// Typed equivalent of [`uuid_to_object_id`]
    pub fn to_object_id(&self) -> ObjectId {
        decode(self)
    }
}
