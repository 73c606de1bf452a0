//! # Field Resolution and Scalar Coercion
//!
//! Leaf utilities shared by all decoders.
//!
//! Field layout of the inspected containers is not statically known to this
//! crate: it varies by library implementation, inheritance depth, and how the
//! host surfaces reference-like fields on a given compiler/build combination.
//! These helpers absorb that variance so the decoders can ask simple
//! questions ("what is the `tail_` field?", "what number is in this field?")
//! and get best-effort answers that never panic.

use crate::host::InspectedValue;

/// Find a field by name, searching base-class sub-objects if needed.
///
/// Own fields are checked first. If the name is absent, each base-class
/// sub-object is searched recursively in declaration order and the first
/// match wins. Returns `None` (never panics) when no base chain contains the
/// field, e.g. because it was optimized out.
///
/// This tolerates arbitrary inheritance depth without the caller knowing the
/// hierarchy.
pub fn find_field(value: &dyn InspectedValue, name: &str) -> Option<Box<dyn InspectedValue>>
{
    if let Some(field) = value.child_by_name(name) {
        return Some(field);
    }

    for index in 0..value.num_children() {
        let Some(child) = value.child_at(index) else {
            continue;
        };
        if !child.is_base_class() {
            continue;
        }
        if let Some(field) = find_field(child.as_ref(), name) {
            return Some(field);
        }
    }

    None
}

/// Find a direct field by name, without searching base classes.
///
/// Some host builds cannot classify base-class children at all. The vector
/// decoders use this variant because their container layouts are known not
/// to reach fields through inheritance, so a direct lookup is sufficient —
/// an accepted limitation for those two types.
pub fn find_field_direct(value: &dyn InspectedValue, name: &str) -> Option<Box<dyn InspectedValue>>
{
    value.child_by_name(name)
}

/// Best-effort unsigned read of a possibly reference-like field.
///
/// Different reference representations surface differently across
/// host/compiler/build combinations, so this layers the known-good
/// strategies in order:
///
/// 1. Dereference once and read the referent's unsigned value (covers
///    reference types on hosts that model them as pointers).
/// 2. Parse the field's textual value as a decimal integer — or, when the
///    text is hex-prefixed and therefore address-shaped, attempt one more
///    dereference before falling back to a hex parse.
/// 3. Fall back to the raw unsigned accessor (which may return the pointer
///    itself for references).
///
/// Any failure at a step falls through to the next; total failure returns
/// `default`. The layering is deliberate — each path corresponds to a real
/// representation met in the field, so do not collapse it to one strategy.
pub fn coerce_unsigned(field: Option<&dyn InspectedValue>, default: u64) -> u64
{
    let Some(value) = field else {
        return default;
    };

    // 1) Dereference first (common for references): this usually yields the
    //    numeric value directly.
    if let Some(referent) = value.dereference() {
        return referent.unsigned_value(default);
    }

    // 2) Parse the textual rendering.
    if let Some(text) = value.value_text() {
        let text = text.trim();
        if !text.is_empty() {
            if text.starts_with("0x") || text.starts_with("-0x") {
                // Likely an address; some hosts need a second dereference hop.
                if let Some(referent) = value.dereference() {
                    return referent.unsigned_value(default);
                }
                // A negative hex rendering has no unsigned reading; it falls
                // through to the raw accessor below.
                if let Some(hex_digits) = text.strip_prefix("0x") {
                    if let Ok(parsed) = u64::from_str_radix(hex_digits, 16) {
                        tracing::trace!(value = parsed, "coerced field from hex text");
                        return parsed;
                    }
                }
            } else if let Ok(parsed) = text.parse::<u64>() {
                return parsed;
            }
        }
    }

    // 3) Raw accessor.
    value.unsigned_value(default)
}
