//! # Container Decoders
//!
//! The three decoders and the contracts they expose to the host.
//!
//! Each decoder turns an opaque [`InspectedValue`] into either a one-line
//! summary string or a lazily indexable synthetic-children view. All of them
//! share one rule: **no failure ever escapes a decoder call.** Missing
//! layout, unreadable memory, corrupt bounds, and undecodable bytes all
//! collapse to a diagnostic placeholder or an absent child, because a panic
//! here would take down the whole host debugger session — a far worse
//! outcome than a degraded display string.
//!
//! Corrupt bounds are not reported as errors either; they are clamped to a
//! safe range and logged at `debug` level. The inspected process is
//! untrusted input.

pub mod static_string;
pub mod static_vector;
pub mod static_vector_adapter;

use crate::host::InspectedValue;

/// Absolute sanity bound on any decoded length or element count.
///
/// A corrupt pointer pair or count field can imply a length in the exabytes;
/// nothing legitimate stored in these containers approaches 2^31.
pub const LENGTH_SANITY_CAP: u64 = 1 << 31;

/// One-line textual rendering of a container value.
pub trait SummaryProvider
{
    /// Produce the summary string. Never panics; degrades to a diagnostic
    /// placeholder on any internal failure.
    fn summary(&self, value: &dyn InspectedValue) -> String;
}

/// The synthetic-children contract for indexable containers.
///
/// A provider owns its value handle for one browsing session. Layout facts
/// are derived lazily and cached until [`update`] signals that the
/// underlying memory or type may have changed (e.g. the debugger stepped),
/// at which point everything is re-derived on next access.
///
/// The child index is signed because hosts pass through whatever their UI
/// or expression evaluator produced; negative indexes yield an absent child
/// rather than a panic.
///
/// [`update`]: SyntheticChildren::update
pub trait SyntheticChildren
{
    /// Drop all cached layout facts; the next access re-derives them.
    fn update(&mut self);

    /// Number of children (the container's logical size, clamped).
    fn num_children(&mut self) -> usize;

    /// Typed view of the child at `index`, or `None` when the index is out
    /// of bounds or the layout does not support element access.
    fn child_at(&mut self, index: i64) -> Option<Box<dyn InspectedValue>>;

    /// Whether the container has any children at all.
    fn has_children(&mut self) -> bool;
}

/// Canonical tag for each container type this crate can decode.
///
/// Dispatch is an explicit registry keyed on this tag (see
/// [`crate::registry::FormatterRegistry`]); the only place a type *name* is
/// examined is [`ContainerKind::classify`], run once per type at setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind
{
    /// Fixed-capacity string with head/tail pointers.
    StaticString,
    /// Fixed-capacity vector backed by an inline raw byte array.
    StaticVector,
    /// Fixed-capacity vector adapter backed by a pointer/count pair.
    StaticVectorAdapter,
}

impl ContainerKind
{
    /// Classify a declared type name into a container kind.
    ///
    /// Strips template arguments and namespace qualification, then matches
    /// the base name exactly. Intended to run once per type when the host
    /// wires up its formatters, not per access.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use spyglass_core::decoders::ContainerKind;
    ///
    /// let kind = ContainerKind::classify("wbr::static_vector<int, 16>");
    /// assert_eq!(kind, Some(ContainerKind::StaticVector));
    /// assert_eq!(ContainerKind::classify("std::vector<int>"), None);
    /// ```
    #[must_use]
    pub fn classify(type_name: &str) -> Option<Self>
    {
        let base = type_name.split('<').next().unwrap_or(type_name).trim();
        let base = base.rsplit("::").next().unwrap_or(base);
        match base {
            "static_string" => Some(ContainerKind::StaticString),
            "static_vector" => Some(ContainerKind::StaticVector),
            "static_vector_adapter" => Some(ContainerKind::StaticVectorAdapter),
            _ => None,
        }
    }

    /// Label used in summary output and diagnostics for this kind.
    #[must_use]
    pub const fn label(self) -> &'static str
    {
        match self {
            ContainerKind::StaticString => "static_string",
            ContainerKind::StaticVector => "static_vector",
            ContainerKind::StaticVectorAdapter => "static_vector_adapter",
        }
    }
}

/// Clamp a decoded element count against derived capacity and the absolute
/// sanity bound.
///
/// Source memory may be corrupt, partially initialized, or mid-mutation, so
/// `count <= capacity` is enforced here rather than assumed.
pub(crate) fn clamp_count(count: u64, capacity: u64) -> u64
{
    let mut clamped = count.min(LENGTH_SANITY_CAP);
    if capacity > 0 && clamped > capacity {
        tracing::debug!(count, capacity, "element count exceeds capacity, clamping");
        clamped = capacity;
    }
    clamped
}
