//! Common module for library exports

pub use crate::backing::{locate_backing, ArrayRepr, BackingArray, KNOWN_ARRAY_REPRS};
pub use crate::decoders::{ContainerKind, SummaryProvider, SyntheticChildren};
pub use crate::error::{SpyglassError, SpyglassResult};
pub use crate::host::{InspectedValue, TypeHandle};
pub use crate::registry::FormatterRegistry;
pub use crate::resolve::{coerce_unsigned, find_field, find_field_direct};
pub use crate::types::address::Address;
