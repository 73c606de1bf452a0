//! # spyglass-core
//!
//! Safe decoding of fixed-capacity container types straight out of an
//! inspected process's memory.
//!
//! This crate implements debugger formatters for three container types —
//! `static_string`, `static_vector`, and `static_vector_adapter` — without
//! executing any code in the target. Given an opaque value handle supplied
//! by a debugger host, it resolves the container's field layout, derives
//! bounded layout facts, and produces either a one-line summary string or a
//! lazily indexable synthetic-children view.
//!
//! ## Design constraints
//!
//! - **Never crash the host.** All internal failures degrade to diagnostic
//!   placeholder strings or absent children. There are no panics on the
//!   decode paths and no errors propagate out of a decoder call.
//! - **Never over-read memory.** Every read is capped before it is issued;
//!   lengths and counts decoded from the target are clamped against
//!   capacity and an absolute sanity bound first. The inspected process is
//!   untrusted input.
//! - **Tolerate layout variance.** Inheritance flattening, the two known
//!   `std::array` internal representations, and reference fields that
//!   surface as addresses on some builds are all absorbed by the resolver,
//!   the backing locator, and the layered value coercer.
//!
//! ## Wiring into a host
//!
//! The host implements [`host::InspectedValue`] and [`host::TypeHandle`]
//! over its own introspection machinery, classifies declared type names
//! once via [`decoders::ContainerKind::classify`], and dispatches through a
//! [`registry::FormatterRegistry`].

pub mod backing;
pub mod decoders;
pub mod error;
pub mod host;
pub mod prelude;
pub mod preview;
pub mod registry;
pub mod resolve;
pub mod types;

// Re-export commonly used types
pub use decoders::{ContainerKind, SummaryProvider, SyntheticChildren};
pub use error::{SpyglassError, SpyglassResult};
pub use host::{InspectedValue, TypeHandle};
pub use registry::FormatterRegistry;
pub use types::Address;
