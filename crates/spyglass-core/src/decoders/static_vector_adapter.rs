//! # Static-Vector-Adapter Decoder
//!
//! Decodes the pointer-backed `static_vector_adapter`: unlike the inline
//! vector, the adapter stores a direct pointer to its elements plus two
//! scalar count fields, so there is no array-backing indirection to resolve.
//!
//! The count fields are read through the layered coercer because on some
//! builds they surface as references rather than plain integers. The
//! element pointer is always read as a raw unsigned value.

use crate::decoders::{clamp_count, SummaryProvider, SyntheticChildren};
use crate::host::{InspectedValue, TypeHandle};
use crate::preview::render_element_preview;
use crate::resolve::{coerce_unsigned, find_field_direct};
use crate::types::Address;

/// Logical element count field.
const FIELD_COUNT: &str = "elements_count_";
/// Declared maximum element count field.
const FIELD_MAX_COUNT: &str = "max_elements_count_";
/// Element pointer field.
const FIELD_ELEMENTS: &str = "elements_";

/// Layout facts for one decode cycle.
#[derive(Debug, Clone, Copy)]
struct AdapterLayout
{
    base: Address,
    stride: u64,
    len: u64,
    capacity: u64,
}

fn derive_layout(value: &dyn InspectedValue, stride: u64) -> AdapterLayout
{
    let raw_count = coerce_unsigned(find_field_direct(value, FIELD_COUNT).as_deref(), 0);
    let capacity = coerce_unsigned(find_field_direct(value, FIELD_MAX_COUNT).as_deref(), 0);
    let base = find_field_direct(value, FIELD_ELEMENTS)
        .map_or(Address::ZERO, |pointer| Address::new(pointer.unsigned_value(0)));

    AdapterLayout {
        base,
        stride,
        len: clamp_count(raw_count, capacity),
        capacity,
    }
}

/// Summary provider for `static_vector_adapter`.
pub struct StaticVectorAdapterSummary;

impl SummaryProvider for StaticVectorAdapterSummary
{
    fn summary(&self, value: &dyn InspectedValue) -> String
    {
        let element = value.element_type();
        let stride = element.as_ref().map_or(0, |ty| ty.byte_size());
        let layout = derive_layout(value, stride);

        let mut out = format!("static_vector_adapter(size={}, cap={})", layout.len, layout.capacity);
        if let Some(element) = element {
            out.push_str(&render_element_preview(
                value,
                layout.base,
                layout.stride,
                layout.len,
                element.as_ref(),
            ));
        }
        out
    }
}

/// Synthetic-children provider for `static_vector_adapter`.
///
/// Same contract shape as the inline vector's provider, but the element
/// base address comes straight from the pointer field.
pub struct StaticVectorAdapterChildren
{
    value: Box<dyn InspectedValue>,
    element: Option<Box<dyn TypeHandle>>,
    stride: u64,
    layout: Option<AdapterLayout>,
}

impl StaticVectorAdapterChildren
{
    /// Bind a provider to a value handle.
    #[must_use]
    pub fn new(value: Box<dyn InspectedValue>) -> Self
    {
        let element = value.element_type();
        let stride = element.as_ref().map_or(0, |ty| ty.byte_size());
        Self {
            value,
            element,
            stride,
            layout: None,
        }
    }

    fn layout(&mut self) -> AdapterLayout
    {
        if let Some(layout) = self.layout {
            return layout;
        }
        let layout = derive_layout(self.value.as_ref(), self.stride);
        self.layout = Some(layout);
        layout
    }
}

impl SyntheticChildren for StaticVectorAdapterChildren
{
    fn update(&mut self)
    {
        self.element = self.value.element_type();
        self.stride = self.element.as_ref().map_or(0, |ty| ty.byte_size());
        self.layout = None;
    }

    fn num_children(&mut self) -> usize
    {
        usize::try_from(self.layout().len).unwrap_or(usize::MAX)
    }

    fn child_at(&mut self, index: i64) -> Option<Box<dyn InspectedValue>>
    {
        let layout = self.layout();
        let index = u64::try_from(index).ok()?;
        if index >= layout.len || layout.stride == 0 || layout.base.is_null() {
            return None;
        }
        let element = self.element.as_ref()?;
        let offset = index.checked_mul(layout.stride)?;
        let address = layout.base.checked_add(offset)?;
        self.value.view_at(&format!("[{index}]"), address, element.as_ref())
    }

    fn has_children(&mut self) -> bool
    {
        self.layout().len > 0
    }
}

/// Construct a boxed children provider (registry constructor).
#[must_use]
pub fn attach_children(value: Box<dyn InspectedValue>) -> Box<dyn SyntheticChildren>
{
    Box::new(StaticVectorAdapterChildren::new(value))
}
