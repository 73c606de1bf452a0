//! # Preview Rendering
//!
//! Size-bounded display helpers shared by the decoders.
//!
//! A preview is a rendering of a *subset* of an entity's content. The caps
//! here are deliberate and independent of the entity's real size: they keep
//! the host UI responsive and stop a corrupt count or capacity field from
//! turning into an unbounded walk over target memory. Display truncation
//! never affects the `len=`/`size=` facts reported next to it.

use smallvec::SmallVec;

use crate::host::{InspectedValue, TypeHandle};
use crate::types::Address;

/// Maximum number of elements rendered in a vector preview.
pub const PREVIEW_ELEMENT_CAP: usize = 4;

/// Maximum number of characters of string content shown in a summary.
pub const DISPLAY_CHAR_CAP: usize = 200;

/// Marker appended when a preview or display string was cut short.
pub const ELLIPSIS: char = '…';

/// Escape control characters and backslashes for one-line display.
///
/// Backslash is escaped first so the control-character escapes cannot be
/// double-escaped.
#[must_use]
pub fn escape_for_display(text: &str) -> String
{
    text.replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Truncate display text to [`DISPLAY_CHAR_CAP`] characters plus an ellipsis.
///
/// Counts characters, not bytes, so multi-byte content is never split.
#[must_use]
pub fn truncate_for_display(text: &str) -> String
{
    if text.chars().count() <= DISPLAY_CHAR_CAP {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(DISPLAY_CHAR_CAP).collect();
    truncated.push(ELLIPSIS);
    truncated
}

/// Render a bounded element preview for a vector-like container.
///
/// At most [`PREVIEW_ELEMENT_CAP`] elements are materialized as typed views
/// and rendered through the element's own value text, falling back to the
/// host summary, then the element type's name, then `?`. Returns a string
/// of the form ` [a, b, c]` (leading space included, ellipsis inside the
/// brackets when `len` exceeds the cap), or an empty string when there is
/// nothing safe to render.
#[must_use]
pub fn render_element_preview(
    value: &dyn InspectedValue,
    base: Address,
    stride: u64,
    len: u64,
    element: &dyn TypeHandle,
) -> String
{
    if len == 0 || stride == 0 || base.is_null() {
        return String::new();
    }

    let count = len.min(PREVIEW_ELEMENT_CAP as u64);
    let mut parts: SmallVec<[String; PREVIEW_ELEMENT_CAP]> = SmallVec::new();
    for index in 0..count {
        // A stride large enough to overflow the address space is garbage
        // type info; render no preview rather than a bogus one.
        let Some(address) = index.checked_mul(stride).and_then(|offset| base.checked_add(offset)) else {
            return String::new();
        };
        let rendered = value
            .view_at("tmp", address, element)
            .and_then(|view| view.value_text().or_else(|| view.summary_text()))
            .or_else(|| element.name())
            .unwrap_or_else(|| "?".to_string());
        parts.push(rendered);
    }

    if len > count {
        format!(" [{}, {ELLIPSIS}]", parts.join(", "))
    } else {
        format!(" [{}]", parts.join(", "))
    }
}
