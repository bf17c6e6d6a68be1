//! # Address Decode Tests
//!
//! Unit tests for tag/index/offset extraction. Verifies field boundaries,
//! zero-extension of short addresses, and the equality-only tag semantics.

use pretty_assertions::assert_eq;

use cachesim_core::common::addr::{Address, DecodedAccess, Tag};
use cachesim_core::config::{CacheConfig, CacheGeometry, ReplacementPolicy};

/// Reference geometry: 512 B, 2-way ⇒ 2 sets, 1 index bit, 24 tag bits.
fn two_set_geometry() -> CacheGeometry {
    CacheGeometry::new(&CacheConfig {
        size_bytes: 512,
        ways: 2,
        policy: ReplacementPolicy::Nmru,
    })
    .unwrap()
}

/// Single-set geometry: 512 B fully associative ⇒ 0 index bits.
fn one_set_geometry() -> CacheGeometry {
    CacheGeometry::new(&CacheConfig {
        size_bytes: 512,
        ways: 4,
        policy: ReplacementPolicy::Nmru,
    })
    .unwrap()
}

#[test]
fn zero_address_decodes_to_zero_fields() {
    let decoded = two_set_geometry().decode(Address::new(0));
    assert_eq!(
        decoded,
        DecodedAccess {
            tag: Tag(0),
            index: 0,
            offset: 0,
        }
    );
}

/// Bit 7 is the lone index bit of the reference geometry.
#[test]
fn index_bit_selects_the_second_set() {
    let decoded = two_set_geometry().decode(Address::new(0x0000_0080));
    assert_eq!(decoded.index, 1);
    assert_eq!(decoded.offset, 0);
    assert_eq!(decoded.tag, Tag(0));
}

#[test]
fn offset_spans_the_low_seven_bits() {
    let decoded = two_set_geometry().decode(Address::new(0x0000_007F));
    assert_eq!(decoded.offset, 0x7F);
    assert_eq!(decoded.index, 0);
    assert_eq!(decoded.tag, Tag(0));
}

/// Bit 8 is past the index field, so it lands in the tag.
#[test]
fn tag_starts_above_the_index_field() {
    let decoded = two_set_geometry().decode(Address::new(0x0000_0100));
    assert_eq!(decoded.index, 0);
    assert_eq!(decoded.tag, Tag(1));
}

#[test]
fn all_ones_address_fills_every_field() {
    let decoded = two_set_geometry().decode(Address::new(0xFFFF_FFFF));
    assert_eq!(decoded.offset, 0x7F);
    assert_eq!(decoded.index, 1);
    assert_eq!(decoded.tag, Tag(0x00FF_FFFF));
}

/// An address with few significant bits decodes with zero tag bits —
/// the missing high bits zero-extend rather than fault.
#[test]
fn short_address_zero_extends() {
    let decoded = two_set_geometry().decode(Address::new(0xFF));
    assert_eq!(decoded.offset, 0x7F);
    assert_eq!(decoded.index, 1);
    assert_eq!(decoded.tag, Tag(0));
}

/// With zero index bits every address selects set 0 and the tag is the
/// whole block number.
#[test]
fn single_set_geometry_has_no_index_field() {
    let geometry = one_set_geometry();
    for addr in [0u32, 0x80, 0x4000, 0xFFFF_FF80] {
        let decoded = geometry.decode(Address::new(addr));
        assert_eq!(decoded.index, 0);
        assert_eq!(decoded.tag, Tag(addr >> 7));
    }
}

/// With 25 index bits the tag field is empty; decoding must not wrap.
#[test]
fn zero_width_tag_decodes_to_zero() {
    let geometry = CacheGeometry::new(&CacheConfig {
        size_bytes: 128 << 25,
        ways: 1,
        policy: ReplacementPolicy::Nmru,
    })
    .unwrap();
    let decoded = geometry.decode(Address::new(0xFFFF_FFFF));
    assert_eq!(decoded.tag, Tag(0));
    assert_eq!(decoded.index, (1 << 25) - 1);
}

/// Decoding is pure: the same address always yields the same fields.
#[test]
fn decode_is_deterministic() {
    let geometry = two_set_geometry();
    let addr = Address::new(0x04D6_BA49);
    assert_eq!(geometry.decode(addr), geometry.decode(addr));
}

#[test]
fn address_display_is_fixed_width_hex() {
    assert_eq!(Address::new(0x80).to_string(), "0x00000080");
}

#[test]
fn decoded_access_display_names_every_field() {
    let rendered = two_set_geometry().decode(Address::new(0x0000_0180)).to_string();
    assert_eq!(rendered, "tag=0x1 index=1 offset=0");
}

#[test]
fn tags_compare_by_value() {
    assert_eq!(Tag(0x1234), Tag(0x1234));
    assert_ne!(Tag(0x1234), Tag(0x1235));
}
