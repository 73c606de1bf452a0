//! # Error Types
//!
//! Error handling for the host capability seam.
//!
//! We use `thiserror` to automatically generate `Error` trait implementations
//! and nice error messages.
//!
//! Note that these errors only travel across the *host* boundary (e.g. a
//! failed target-memory read). The decoder entry points themselves never
//! return errors: a failure inside a decoder collapses to a diagnostic
//! placeholder string or an absent child, because a panic or propagated error
//! would destabilize the host debugger session.

use thiserror::Error;

use crate::types::Address;

/// Errors surfaced by host capability implementations.
#[derive(Error, Debug)]
pub enum SpyglassError
{
    /// A target-memory read failed or returned short data.
    ///
    /// This happens when:
    /// - The address is not mapped in the inspected process
    /// - The region was unmapped between layout resolution and the read
    /// - A core file does not contain the requested range
    #[error("Failed to read {length} bytes at {address}: {reason}")]
    MemoryRead
    {
        /// Address the read was issued against.
        address: Address,
        /// Number of bytes requested.
        length: usize,
        /// Host-provided description of the failure.
        reason: String,
    },

    /// I/O error (for core-file access, sockets to a remote stub, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for `Result<T, SpyglassError>`
///
/// ```rust
/// use spyglass_core::error::SpyglassResult;
/// fn foo() -> SpyglassResult<()>
/// {
///     Ok(())
/// }
/// ```
pub type SpyglassResult<T> = std::result::Result<T, SpyglassError>;
