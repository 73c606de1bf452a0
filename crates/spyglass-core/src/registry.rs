//! # Formatter Registry
//!
//! Explicit dispatch from container kind to decoder implementation.
//!
//! The host decides *which* types it wants decoded (usually once, while
//! wiring up its formatter support) by classifying declared type names into
//! [`ContainerKind`] tags. From then on every lookup is a table access keyed
//! on the tag — no string or pattern matching happens per inspection
//! request.

use std::collections::HashMap;

use crate::decoders::static_string::StaticStringSummary;
use crate::decoders::static_vector::{self, StaticVectorSummary};
use crate::decoders::static_vector_adapter::{self, StaticVectorAdapterSummary};
use crate::decoders::{ContainerKind, SummaryProvider, SyntheticChildren};
use crate::host::InspectedValue;

/// Constructor for a synthetic-children provider bound to one value handle.
pub type SyntheticConstructor = fn(Box<dyn InspectedValue>) -> Box<dyn SyntheticChildren>;

struct DecoderEntry
{
    summary: Box<dyn SummaryProvider>,
    synthetic: Option<SyntheticConstructor>,
}

/// Table of registered decoders, keyed by [`ContainerKind`].
///
/// ## Example
///
/// ```rust
/// use spyglass_core::decoders::ContainerKind;
/// use spyglass_core::registry::FormatterRegistry;
///
/// let registry = FormatterRegistry::with_defaults();
/// assert!(registry.supports(ContainerKind::StaticString));
/// ```
#[derive(Default)]
pub struct FormatterRegistry
{
    entries: HashMap<ContainerKind, DecoderEntry>,
}

impl FormatterRegistry
{
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Create a registry with all built-in decoders registered.
    #[must_use]
    pub fn with_defaults() -> Self
    {
        let mut registry = Self::new();
        registry.register(ContainerKind::StaticString, Box::new(StaticStringSummary), None);
        registry.register(
            ContainerKind::StaticVector,
            Box::new(StaticVectorSummary),
            Some(static_vector::attach_children as SyntheticConstructor),
        );
        registry.register(
            ContainerKind::StaticVectorAdapter,
            Box::new(StaticVectorAdapterSummary),
            Some(static_vector_adapter::attach_children as SyntheticConstructor),
        );
        registry
    }

    /// Register (or replace) the decoder for a kind.
    pub fn register(
        &mut self,
        kind: ContainerKind,
        summary: Box<dyn SummaryProvider>,
        synthetic: Option<SyntheticConstructor>,
    )
    {
        self.entries.insert(kind, DecoderEntry { summary, synthetic });
    }

    /// Whether a decoder is registered for the kind.
    #[must_use]
    pub fn supports(&self, kind: ContainerKind) -> bool
    {
        self.entries.contains_key(&kind)
    }

    /// Produce a summary for a value of the given kind.
    ///
    /// Returns `None` only when no decoder is registered for the kind; the
    /// decoders themselves always return a string.
    #[must_use]
    pub fn summarize(&self, kind: ContainerKind, value: &dyn InspectedValue) -> Option<String>
    {
        self.entries.get(&kind).map(|entry| entry.summary.summary(value))
    }

    /// Classify a value by its declared type name and summarize it.
    ///
    /// Convenience for hosts that hand over raw values; prefer classifying
    /// once per type and calling [`summarize`] when dispatch is hot.
    ///
    /// [`summarize`]: FormatterRegistry::summarize
    #[must_use]
    pub fn summarize_value(&self, value: &dyn InspectedValue) -> Option<String>
    {
        let kind = ContainerKind::classify(&value.type_name()?)?;
        self.summarize(kind, value)
    }

    /// Attach a synthetic-children provider to a value of the given kind.
    ///
    /// Returns `None` when the kind is unregistered or has no children
    /// support (e.g. [`ContainerKind::StaticString`]).
    #[must_use]
    pub fn attach_children(&self, kind: ContainerKind, value: Box<dyn InspectedValue>) -> Option<Box<dyn SyntheticChildren>>
    {
        let constructor = self.entries.get(&kind)?.synthetic?;
        Some(constructor(value))
    }
}
