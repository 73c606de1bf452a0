//! Tests for field resolution, scalar coercion, and the array-backing locator.

mod common;

use common::{byte_elements, MockType, MockValue};
use spyglass_core::backing::locate_backing;
use spyglass_core::host::InspectedValue;
use spyglass_core::resolve::{coerce_unsigned, find_field, find_field_direct};
use spyglass_core::types::Address;

#[test]
fn test_find_field_own_field_wins()
{
    let value = MockValue::typed("holder").with_child("head_", MockValue::scalar(0x1000));
    let field = find_field(&value, "head_").expect("field should resolve");
    assert_eq!(field.unsigned_value(0), 0x1000);
}

#[test]
fn test_find_field_searches_base_chain()
{
    // head_ lives two levels down an inheritance chain.
    let grandparent = MockValue::typed("grandparent").with_child("head_", MockValue::scalar(0x2000));
    let parent = MockValue::typed("parent").with_base(grandparent);
    let value = MockValue::typed("derived")
        .with_child("unrelated", MockValue::scalar(1))
        .with_base(parent);

    let field = find_field(&value, "head_").expect("inherited field should resolve");
    assert_eq!(field.unsigned_value(0), 0x2000);
}

#[test]
fn test_find_field_absent_is_none()
{
    let value = MockValue::typed("holder").with_child("other", MockValue::scalar(1));
    assert!(find_field(&value, "head_").is_none());
}

#[test]
fn test_find_field_ignores_non_base_children()
{
    // A plain member that happens to contain the field must not be searched.
    let member = MockValue::typed("member").with_child("head_", MockValue::scalar(0x3000));
    let value = MockValue::typed("holder").with_child("member", member);
    assert!(find_field(&value, "head_").is_none());
}

#[test]
fn test_find_field_direct_does_not_recurse()
{
    let base = MockValue::typed("base").with_child("elementsCount", MockValue::scalar(3));
    let value = MockValue::typed("derived").with_base(base);

    assert!(find_field_direct(&value, "elementsCount").is_none());
    assert!(find_field(&value, "elementsCount").is_some());
}

#[test]
fn test_coerce_prefers_dereference()
{
    // Reference-like field: the raw accessor would yield the pointer, the
    // referent holds the real count.
    let field = MockValue::default()
        .with_unsigned(0x7fff_1000)
        .with_text("0x7fff1000")
        .with_deref(MockValue::scalar(42));
    assert_eq!(coerce_unsigned(Some(&field as &dyn InspectedValue), 0), 42);
}

#[test]
fn test_coerce_parses_decimal_text()
{
    let field = MockValue::default().with_text("17");
    assert_eq!(coerce_unsigned(Some(&field as &dyn InspectedValue), 0), 17);
}

#[test]
fn test_coerce_parses_hex_text_without_referent()
{
    let field = MockValue::default().with_text("0x3000");
    assert_eq!(coerce_unsigned(Some(&field as &dyn InspectedValue), 0), 0x3000);
}

#[test]
fn test_coerce_negative_hex_text_is_address_shaped()
{
    // Negative hex renderings count as address-shaped, not decimal; with no
    // referent there is no unsigned reading, so the raw accessor answers.
    let field = MockValue::default().with_unsigned(9).with_text("-0x10");
    assert_eq!(coerce_unsigned(Some(&field as &dyn InspectedValue), 0), 9);

    // With a referent the dereference path wins as for any reference.
    let referenced = MockValue::default()
        .with_unsigned(9)
        .with_text("-0x10")
        .with_deref(MockValue::scalar(5));
    assert_eq!(coerce_unsigned(Some(&referenced as &dyn InspectedValue), 0), 5);
}

#[test]
fn test_coerce_falls_back_to_raw_accessor()
{
    let field = MockValue::default().with_unsigned(9).with_text("not a number");
    assert_eq!(coerce_unsigned(Some(&field as &dyn InspectedValue), 0), 9);
}

#[test]
fn test_coerce_total_failure_returns_default()
{
    let field = MockValue::default();
    assert_eq!(coerce_unsigned(Some(&field as &dyn InspectedValue), 123), 123);
    assert_eq!(coerce_unsigned(None, 123), 123);
}

#[test]
fn test_locate_backing_libstdcxx()
{
    let array = MockValue::typed("std::array<std::byte, 10>").with_child("_M_elems", byte_elements(0x4000, 10));
    let backing = locate_backing(&array);
    assert_eq!(backing.base, Address::new(0x4000));
    assert_eq!(backing.byte_len, 10);
    assert_eq!(backing.repr.map(|repr| repr.library), Some("libstdc++"));
}

#[test]
fn test_locate_backing_libcxx()
{
    let array = MockValue::typed("std::array<std::byte, 8>").with_child("__elems_", byte_elements(0x6000, 8));
    let backing = locate_backing(&array);
    assert_eq!(backing.base, Address::new(0x6000));
    assert_eq!(backing.byte_len, 8);
    assert_eq!(backing.repr.map(|repr| repr.library), Some("libc++"));
}

#[test]
fn test_locate_backing_falls_back_to_field_address()
{
    let array = MockValue::typed("std::array<std::byte, 16>")
        .with_address_of(0x5000)
        .with_value_type(MockType::byte_array(16));
    let backing = locate_backing(&array);
    assert_eq!(backing.base, Address::new(0x5000));
    assert_eq!(backing.byte_len, 16);
    assert!(backing.repr.is_none());
}

#[test]
fn test_locate_backing_unresolvable()
{
    let array = MockValue::typed("opaque");
    let backing = locate_backing(&array);
    assert_eq!(backing.base, Address::ZERO);
    assert_eq!(backing.byte_len, 0);
    assert!(backing.repr.is_none());
}
