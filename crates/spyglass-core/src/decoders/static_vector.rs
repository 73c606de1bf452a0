//! # Static-Vector Decoder
//!
//! Decodes the byte-array-backed `static_vector`: elements live in an
//! inline `std::array<std::byte, N>` field, the logical size in a separate
//! count field, and the capacity is whatever number of whole elements fits
//! in the backing bytes.
//!
//! Field lookup is direct-only here (no base-class search): the vector
//! layout is known not to use inheritance, and some host builds cannot
//! classify base-class children at all.

use crate::backing::locate_backing;
use crate::decoders::{clamp_count, SummaryProvider, SyntheticChildren, LENGTH_SANITY_CAP};
use crate::host::{InspectedValue, TypeHandle};
use crate::preview::render_element_preview;
use crate::resolve::find_field_direct;
use crate::types::Address;

/// Logical element count field.
const FIELD_COUNT: &str = "elementsCount";
/// Backing byte-array field.
const FIELD_ARRAY: &str = "arr";

/// Layout facts for one decode cycle.
#[derive(Debug, Clone, Copy)]
struct VectorLayout
{
    base: Address,
    stride: u64,
    len: u64,
    capacity: u64,
    backing_found: bool,
}

fn read_count(value: &dyn InspectedValue) -> u64
{
    find_field_direct(value, FIELD_COUNT).map_or(0, |field| field.unsigned_value(0))
}

fn derive_layout(value: &dyn InspectedValue, stride: u64) -> VectorLayout
{
    let raw_count = read_count(value);
    let (base, byte_len, backing_found) = match find_field_direct(value, FIELD_ARRAY) {
        Some(array) => {
            let backing = locate_backing(array.as_ref());
            (backing.base, backing.byte_len, true)
        }
        None => (Address::ZERO, 0, false),
    };
    let capacity = if stride > 0 { byte_len / stride } else { 0 };

    VectorLayout {
        base,
        stride,
        len: clamp_count(raw_count, capacity),
        capacity,
        backing_found,
    }
}

/// Summary provider for `static_vector`.
pub struct StaticVectorSummary;

impl SummaryProvider for StaticVectorSummary
{
    fn summary(&self, value: &dyn InspectedValue) -> String
    {
        let element = value.element_type();
        let stride = element.as_ref().map_or(0, |ty| ty.byte_size());
        let layout = derive_layout(value, stride);

        // Without the backing array there is no capacity to report.
        if !layout.backing_found {
            return format!("static_vector(size={})", read_count(value).min(LENGTH_SANITY_CAP));
        }

        let mut out = format!("static_vector(size={}, cap={})", layout.len, layout.capacity);
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

/// Synthetic-children provider for `static_vector`.
///
/// Owns its value handle for one browsing session. The element type and
/// stride are captured up front; base address, size, and capacity are
/// derived lazily and cached until [`SyntheticChildren::update`].
pub struct StaticVectorChildren
{
    value: Box<dyn InspectedValue>,
    element: Option<Box<dyn TypeHandle>>,
    stride: u64,
    layout: Option<VectorLayout>,
}

impl StaticVectorChildren
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

    fn layout(&mut self) -> VectorLayout
    {
        if let Some(layout) = self.layout {
            return layout;
        }
        let layout = derive_layout(self.value.as_ref(), self.stride);
        self.layout = Some(layout);
        layout
    }
}

impl SyntheticChildren for StaticVectorChildren
{
    fn update(&mut self)
    {
        // The type itself may have changed (e.g. the expression was
        // re-evaluated), so the element type is re-fetched too.
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
    Box::new(StaticVectorChildren::new(value))
}
