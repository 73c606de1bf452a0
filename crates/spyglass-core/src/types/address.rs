//! Memory address type.

use std::fmt;
use std::ops::{Add, Sub};

/// Strongly typed memory address
///
/// This wrapper around `u64` provides type safety when working with addresses
/// read out of an inspected process. It prevents accidentally mixing addresses
/// with other `u64` values (like lengths, counts, or capacities), which
/// matters here because most of the decoding logic juggles exactly those
/// values side by side.
///
/// ## Example
///
/// ```rust
/// use spyglass_core::types::Address;
///
/// let addr = Address::from(0x1000);
/// let next_addr = addr + 0x100; // Add offset
/// assert_eq!(next_addr.value(), 0x1100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(u64);

impl Address
{
    /// The null address (0x0)
    ///
    /// Used as a sentinel for "no backing storage resolved". Decoders treat a
    /// zero base address as absent and refuse to materialize children from it.
    pub const ZERO: Self = Address(0);

    /// Create a new address from a `u64` value
    ///
    /// This is equivalent to `Address::from(value)` but can be used in const contexts.
    pub const fn new(value: u64) -> Self
    {
        Address(value)
    }

    /// Get the raw `u64` value of this address
    ///
    /// ## Example
    ///
    /// ```rust
    /// use spyglass_core::types::Address;
    ///
    /// let addr = Address::from(0x1000);
    /// assert_eq!(addr.value(), 0x1000);
    /// ```
    pub const fn value(self) -> u64
    {
        self.0
    }

    /// Whether this is the null address.
    #[must_use]
    pub const fn is_null(self) -> bool
    {
        self.0 == 0
    }

    /// Add an offset to this address, checking for overflow
    ///
    /// Returns `Some(new_address)` if the addition doesn't overflow, or `None` if it does.
    pub fn checked_add(self, offset: u64) -> Option<Self>
    {
        self.0.checked_add(offset).map(Address)
    }

    /// Add an offset to this address, saturating at the maximum value
    ///
    /// If the addition would overflow, returns `Address::new(u64::MAX)` instead.
    pub fn saturating_add(self, offset: u64) -> Self
    {
        Address(self.0.saturating_add(offset))
    }
}

impl From<u64> for Address
{
    fn from(value: u64) -> Self
    {
        Address(value)
    }
}

impl From<Address> for u64
{
    fn from(address: Address) -> Self
    {
        address.0
    }
}

impl fmt::Display for Address
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "0x{:016x}", self.0)
    }
}

impl Add<u64> for Address
{
    type Output = Address;

    fn add(self, rhs: u64) -> Self::Output
    {
        Address(self.0.wrapping_add(rhs))
    }
}

impl Sub<u64> for Address
{
    type Output = Address;

    fn sub(self, rhs: u64) -> Self::Output
    {
        Address(self.0.wrapping_sub(rhs))
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_address_arithmetic()
    {
        let addr = Address::new(0x1000);
        assert_eq!((addr + 0x10).value(), 0x1010);
        assert_eq!((addr - 0x10).value(), 0xff0);
        assert_eq!(addr.checked_add(0x10), Some(Address::new(0x1010)));
        assert_eq!(addr.checked_add(u64::MAX), None);
        assert_eq!(addr.saturating_add(u64::MAX), Address::new(u64::MAX));
    }

    #[test]
    fn test_address_null_sentinel()
    {
        assert!(Address::ZERO.is_null());
        assert!(!Address::new(0x1000).is_null());
    }

    #[test]
    fn test_address_display()
    {
        assert_eq!(Address::new(0x1000).to_string(), "0x0000000000001000");
    }
}
