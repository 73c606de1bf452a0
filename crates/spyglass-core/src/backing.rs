//! # Array-Backing Locator
//!
//! Resolves where a container's inline byte buffer actually lives.
//!
//! `static_vector` stores its elements in a `std::array<std::byte, N>`
//! field, and the two major standard-library implementations name the inline
//! storage of `std::array` differently. Rather than probing member names at
//! every access, each known representation is declared once as a layout
//! descriptor, probed in order, and the match is recorded in the per-cycle
//! layout facts. This isolates ABI variance so the element-level decoders
//! stay implementation-agnostic.

use crate::host::InspectedValue;
use crate::types::Address;

/// Statically declared layout of one known `std::array` representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayRepr
{
    /// Name of the inline elements field.
    pub elems_field: &'static str,
    /// Library the representation belongs to (for logging only).
    pub library: &'static str,
}

/// The `std::array` representations this crate knows how to decode.
pub const KNOWN_ARRAY_REPRS: [ArrayRepr; 2] = [
    ArrayRepr {
        elems_field: "_M_elems",
        library: "libstdc++",
    },
    ArrayRepr {
        elems_field: "__elems_",
        library: "libc++",
    },
];

/// Location of a container's backing byte buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackingArray
{
    /// Load address of the first backing byte.
    pub base: Address,
    /// Total backing bytes (0 when it could not be determined).
    pub byte_len: u64,
    /// The representation that matched, if any.
    pub repr: Option<ArrayRepr>,
}

/// Locate the first element and byte count of a raw fixed-size byte array.
///
/// Each known representation is tried in order; if the array exposes at
/// least one element under a representation's field name, the load address
/// of that first element and the child count are returned.
///
/// If neither representation matches, falls back to the address of the
/// array field itself, with the byte count recovered from the declared
/// array length (`std::array<std::byte, N>`) when the host can provide it,
/// else 0 — the caller must then derive any count from elsewhere.
pub fn locate_backing(array: &dyn InspectedValue) -> BackingArray
{
    for repr in KNOWN_ARRAY_REPRS {
        let Some(elems) = array.child_by_name(repr.elems_field) else {
            continue;
        };
        let count = elems.num_children();
        if count == 0 {
            continue;
        }
        if let Some(base) = elems.child_at(0).and_then(|first| first.load_address()) {
            tracing::trace!(library = repr.library, bytes = count, "matched backing array representation");
            return BackingArray {
                base,
                byte_len: count as u64,
                repr: Some(repr),
            };
        }
    }

    // Neither representation matched; take the address of the array field
    // itself and recover the byte count from the declared type if possible.
    let base = array.address_of().unwrap_or(Address::ZERO);
    let byte_len = array
        .value_type()
        .and_then(|ty| ty.fixed_array_len())
        .unwrap_or(0);
    tracing::debug!(%base, byte_len, "backing array representation not recognized, using field address");

    BackingArray {
        base,
        byte_len,
        repr: None,
    }
}
