//! Transform Layout Constants
//!
//! Central registry of the bit-level layout shared by the encoder and decoder.
//! These values define where the displaced version/variant bits live inside
//! the UUID and must remain stable: a decoder built against a different
//! layout cannot reconstruct ObjectIds produced by this encoder.

/// ObjectId size in raw bytes
pub const OBJECT_ID_BYTE_LEN: usize = 12;

/// ObjectId size as a hex string (24 characters, no separators)
pub const OBJECT_ID_HEX_LEN: usize = 24;

/// UUID size in raw bytes
pub const UUID_BYTE_LEN: usize = 16;

/// UUID size as a hex string after hyphen removal (32 characters)
pub const UUID_HEX_LEN: usize = 32;

/// Mask selecting the version nibble of the third 16-bit field
pub const VERSION_MASK: u16 = 0xF000;

/// Mask keeping everything except the version nibble
pub const VERSION_KEEP_MASK: u16 = 0x0FFF;

/// Right-shift that moves the version nibble down to a value in [0, 15]
pub const VERSION_SHIFT: u32 = 12;

/// Version bits forced into every encoded UUID (version 4)
pub const UUID_VERSION_BITS: u16 = 0x4000;

/// Mask selecting the two variant bits of the fourth 16-bit field
pub const VARIANT_MASK: u16 = 0xC000;

/// Mask keeping everything except the variant bits
pub const VARIANT_KEEP_MASK: u16 = 0x3FFF;

/// Right-shift that moves the variant bits down to a value in [0, 3]
pub const VARIANT_SHIFT: u32 = 14;

/// Variant bits forced into every encoded UUID (RFC 4122 variant `10`)
pub const UUID_VARIANT_BITS: u16 = 0x8000;

/// UUID byte carrying the displaced version nibble
pub const DISPLACED_VERSION_BYTE: usize = 12;

/// UUID byte carrying the displaced variant bits
pub const DISPLACED_VARIANT_BYTE: usize = 13;

/// Domain of the displaced version payload (a single nibble)
pub const DISPLACED_VERSION_MAX: u8 = 0x0F;

/// Domain of the displaced variant payload (two bits)
pub const DISPLACED_VARIANT_MAX: u8 = 0x03;
