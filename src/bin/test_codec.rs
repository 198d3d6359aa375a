//! Comprehensive Codec Test Binary
//!
//! Validates all major components: string conversions, typed byte-level
//! conversions, structural UUID compliance, and error reporting. This test
//! binary demonstrates the codec works end to end without a test harness.

use anyhow::Result;
use oid_uuid_codec::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("🚀 ObjectId/UUID Codec Test Suite");
    println!("==================================");

    println!("\n1️⃣  Testing string surface round-trip...");
    test_string_round_trip()?;
    println!("✅ String round-trip successful");

    println!("\n2️⃣  Testing typed byte-level round-trip...");
    test_typed_round_trip()?;
    println!("✅ Typed round-trip successful");

    println!("\n3️⃣  Testing structural UUID compliance...");
    test_structural_compliance()?;
    println!("✅ Structural compliance validated");

    println!("\n4️⃣  Testing error reporting...");
    test_error_reporting()?;
    println!("✅ Error reporting working");

    println!("\n5️⃣  Testing conversion throughput...");
    test_throughput()?;
    println!("✅ Throughput within reasonable bounds");

    println!("\n🎉 All codec tests passed!");

    Ok(())
}

fn test_string_round_trip() -> Result<()> {
    let samples = [
        "507f1f77bcf86cd799439011",
        "000000000000000000000000",
        "ffffffffffffffffffffffff",
        "64f1c2a9e13b4a001f8e9d30",
    ];

    for object_id in samples {
        let uuid = object_id_to_uuid(object_id)?;
        let recovered = uuid_to_object_id(&uuid)?;
        assert_eq!(recovered, object_id, "Round-trip failed for {}", object_id);
        println!("  ✓ {} -> {}", object_id, uuid);
    }

    Ok(())
}

fn test_typed_round_trip() -> Result<()> {
    let id = ObjectId::from_hex("507f1f77bcf86cd799439011")?;
    let uuid = id.to_uuid();
    let recovered = uuid.to_object_id();

    assert_eq!(recovered, id, "Typed round-trip failed");
    println!("  ✓ {:?} -> {:?}", id, uuid);

    // Typed and string paths must agree
    let via_string = object_id_to_uuid(&id.to_hex())?;
    assert_eq!(via_string, uuid.hyphenated(), "Surface mismatch");
    println!("  ✓ String and typed surfaces agree");

    Ok(())
}

fn test_structural_compliance() -> Result<()> {
    // Exercise every displaced version nibble and variant bit pattern
    for version in 0u8..16 {
        for variant in 0u8..4 {
            let mut bytes = [0x5au8; 12];
            bytes[6] = (version << 4) | 0x0c;
            bytes[8] = (variant << 6) | 0x1d;

            let uuid = ObjectId::from_bytes(bytes).to_uuid();
            assert_eq!(uuid.version(), 4, "Version nibble not forced to 4");
            assert_eq!(uuid.variant(), 0b10, "Variant bits not forced to 10");
            assert_eq!(uuid.to_object_id(), ObjectId::from_bytes(bytes));
        }
    }
    println!("  ✓ All 64 version/variant combinations reversible");

    let rendered = object_id_to_uuid("507f1f77bcf86cd799439011")?;
    for position in [8, 13, 18, 23] {
        assert_eq!(
            rendered.as_bytes()[position],
            b'-',
            "Missing hyphen at {}",
            position
        );
    }
    println!("  ✓ Hyphens at canonical positions");

    Ok(())
}

fn test_error_reporting() -> Result<()> {
    let err = object_id_to_uuid("507f1f77bcf86cd79943901").unwrap_err();
    println!("  ✓ 23-char ObjectId: {}", err);

    let err = uuid_to_object_id("507f1f77-bcf8-4cd7-9943-90110602000").unwrap_err();
    println!("  ✓ 31-char UUID: {}", err);

    let err = object_id_to_uuid("507f1f77bcf86cd79943901z").unwrap_err();
    println!("  ✓ Non-hex ObjectId: {}", err);

    Ok(())
}

fn test_throughput() -> Result<()> {
    use std::time::Instant;

    let id = ObjectId::from_hex("507f1f77bcf86cd799439011")?;
    let num_conversions = 1_000_000;

    let start = Instant::now();
    for _ in 0..num_conversions {
        let uuid = encode(&id);
        let _recovered = decode(&uuid);
    }
    let elapsed = start.elapsed();
    let per_sec = (num_conversions as f64) / elapsed.as_secs_f64();

    println!("  ⚡ Typed round-trips: {:.0} ops/s", per_sec);
    assert!(per_sec > 100_000.0, "Conversion throughput too slow");

    Ok(())
}
