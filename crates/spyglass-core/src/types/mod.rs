//! # Types
//!
//! Host-agnostic types used throughout the decoders.
//!
//! These types abstract away details of the concrete debugger host, allowing
//! the decoding logic to work with concepts like "memory address" without
//! knowing whether the host is a live-process debugger or a core-file reader.

pub mod address;

// Re-export all public types
pub use address::Address;
