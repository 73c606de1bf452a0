//! # Host Capability Traits
//!
//! The seam between the decoders and the debugger host that owns the
//! inspected process.
//!
//! The decoders never talk to a process directly. Everything they know about
//! the target — field layout, scalar values, typed views, raw bytes — comes
//! through [`InspectedValue`], which the host implements over whatever
//! introspection machinery it has (a scripting bridge, DWARF plus a live
//! task port, a core-file reader, or an in-memory mock for tests).
//!
//! ## Why use traits?
//!
//! Traits allow us to:
//! - Keep the decoding logic host-agnostic
//! - Swap implementations easily (e.g., for testing)
//! - Hide host-specific details behind a clean interface
//!
//! ## Design Philosophy
//!
//! Every method that can fail returns `Option` or `Result` — "absent" is a
//! normal answer here, never a panic. Inspected memory is untrusted input:
//! fields may be optimized out, partially initialized, or corrupt, and the
//! host itself may be unable to classify children on some binary builds.

use std::any::Any;

use crate::error::SpyglassResult;
use crate::types::Address;

/// An opaque, host-owned handle into a typed region of process memory
///
/// This is the decoders' entire view of the target. A value may recursively
/// contain base-class sub-objects (exposed through [`child_at`] /
/// [`is_base_class`]) which are used only for field lookup, never surfaced
/// as output entities.
///
/// ## Lifecycle
///
/// The host creates a handle per inspection request. Decoders never retain
/// one past a decode call, except the synthetic-children providers which own
/// their handle for the duration of one browsing session and re-derive all
/// layout facts when the host signals `update`.
///
/// [`child_at`]: InspectedValue::child_at
/// [`is_base_class`]: InspectedValue::is_base_class
pub trait InspectedValue
{
    /// Declared type name of this value (e.g. `wbr::static_vector<int, 16>`).
    ///
    /// Returns `None` when the host has no type information for the value.
    fn type_name(&self) -> Option<String>;

    /// Look up a direct child field by name.
    ///
    /// This checks *own* fields only; it does not search base-class
    /// sub-objects. Use [`crate::resolve::find_field`] for inherited lookup.
    fn child_by_name(&self, name: &str) -> Option<Box<dyn InspectedValue>>;

    /// Number of children the host exposes for this value.
    ///
    /// Children include base-class sub-objects when the host can model them.
    fn num_children(&self) -> usize;

    /// Child at a given position, in declaration order.
    fn child_at(&self, index: usize) -> Option<Box<dyn InspectedValue>>;

    /// Whether this child is a base-class sub-object rather than a field.
    fn is_base_class(&self) -> bool;

    /// Dereference one level of pointer/reference indirection.
    ///
    /// Returns `None` when the value is not reference-like or the host
    /// cannot resolve the referent.
    fn dereference(&self) -> Option<Box<dyn InspectedValue>>;

    /// Best-effort unsigned scalar value, or `default` when unavailable.
    ///
    /// This is the *raw* accessor: for reference-like values some hosts
    /// return the referent's value here and others return the address.
    /// [`crate::resolve::coerce_unsigned`] layers the fallbacks needed to
    /// get a usable number regardless of which representation applies.
    fn unsigned_value(&self, default: u64) -> u64;

    /// Textual rendering of the scalar value (e.g. `"42"`, `"0x7f0a1c00"`).
    fn value_text(&self) -> Option<String>;

    /// Host-produced one-line summary, if any formatter already applies.
    fn summary_text(&self) -> Option<String>;

    /// Load address of this value in the inspected process.
    fn load_address(&self) -> Option<Address>;

    /// Address of the storage backing this value (`&value` in the target).
    fn address_of(&self) -> Option<Address>;

    /// Declared type of this value.
    fn value_type(&self) -> Option<Box<dyn TypeHandle>>;

    /// First template argument of this value's declared type.
    ///
    /// For `static_vector<T, N>` and friends this is the element type `T`.
    fn element_type(&self) -> Option<Box<dyn TypeHandle>>;

    /// Materialize a typed view at an arbitrary address.
    ///
    /// This is what lets the host's generic array browser and indexing
    /// expressions (`v[i]`) work transparently on synthetic children.
    fn view_at(&self, label: &str, address: Address, ty: &dyn TypeHandle) -> Option<Box<dyn InspectedValue>>;

    /// Read raw bytes from the inspected process.
    ///
    /// Callers are required to bound `length` before issuing the read; the
    /// decoders never pass a length derived from an unclamped target field.
    ///
    /// ## Errors
    ///
    /// - `MemoryRead`: the range is unmapped, truncated, or unreadable
    /// - `Io`: transport failure (core file, remote stub, ...)
    fn read_memory(&self, address: Address, length: usize) -> SpyglassResult<Vec<u8>>;
}

/// A handle to a type known to the host.
pub trait TypeHandle
{
    /// Fully qualified type name, if known.
    fn name(&self) -> Option<String>;

    /// Size of one instance in bytes (0 when unknown).
    fn byte_size(&self) -> u64;

    /// Length of a fixed-size array type, from its non-type template
    /// argument (e.g. the `N` in `std::array<std::byte, N>`).
    ///
    /// Returns `None` for non-array types or when the host cannot recover
    /// template arguments.
    fn fixed_array_len(&self) -> Option<u64>;

    /// Downcast support for host implementations.
    ///
    /// [`InspectedValue::view_at`] receives a `&dyn TypeHandle` that the
    /// host will usually need to downcast back to its concrete type.
    fn as_any(&self) -> &dyn Any;
}
