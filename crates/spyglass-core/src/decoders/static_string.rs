//! # Static-String Decoder
//!
//! Summarizes a fixed-capacity string stored as a head/tail address pair
//! plus a declared maximum length.
//!
//! The string type may be reached through an inherited interface, so all
//! three fields are resolved with the recursive resolver. Everything read
//! out of the target is treated as untrusted: the logical length is derived
//! from the pointer pair, clamped against the declared capacity and an
//! absolute sanity bound, and only then used to size a bounded memory read.

use crate::decoders::{SummaryProvider, LENGTH_SANITY_CAP};
use crate::host::InspectedValue;
use crate::preview::{escape_for_display, truncate_for_display};
use crate::resolve::find_field;
use crate::types::Address;

/// Head pointer field (first byte of content).
const FIELD_HEAD: &str = "head_";
/// Tail pointer field (one past the last content byte).
const FIELD_TAIL: &str = "tail_";
/// Declared capacity field.
const FIELD_MAX_LENGTH: &str = "max_length_";

/// Maximum bytes fetched from the target for a string preview.
pub const STRING_PREVIEW_BYTE_CAP: usize = 1024;

/// Summary provider for `static_string`.
///
/// Stateless: every call re-resolves layout and re-reads memory, so the
/// output is always consistent with the target's current state.
pub struct StaticStringSummary;

impl SummaryProvider for StaticStringSummary
{
    fn summary(&self, value: &dyn InspectedValue) -> String
    {
        summarize(value)
    }
}

fn summarize(value: &dyn InspectedValue) -> String
{
    let (Some(head), Some(tail), Some(max_length)) = (
        find_field(value, FIELD_HEAD),
        find_field(value, FIELD_TAIL),
        find_field(value, FIELD_MAX_LENGTH),
    ) else {
        return "<static_string: layout not found>".to_string();
    };

    let head_addr = head.unsigned_value(0);
    let tail_addr = tail.unsigned_value(0);
    let cap = max_length.unsigned_value(0);

    // A zero pointer or a tail below head is the uninitialized/erroneous
    // encoding of "empty", not a negative length.
    if head_addr == 0 || tail_addr == 0 || tail_addr < head_addr {
        if tail_addr != 0 && tail_addr < head_addr {
            tracing::debug!(head_addr, tail_addr, "tail below head, treating as empty");
        }
        return format!("\"\" len=0 cap={cap}");
    }

    let mut length = tail_addr - head_addr;
    if cap > 0 {
        length = length.min(cap);
    }
    length = length.min(LENGTH_SANITY_CAP);

    let preview_len = usize::try_from(length.min(STRING_PREVIEW_BYTE_CAP as u64)).unwrap_or(STRING_PREVIEW_BYTE_CAP);
    let bytes = match value.read_memory(Address::new(head_addr), preview_len) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::debug!(%err, "string preview read failed");
            return format!("<static_string: unreadable memory> len={length} cap={cap}");
        }
    };

    // Content beyond the logical length may be over-allocated garbage, and
    // the buffer is not guaranteed to be NUL-terminated; stop at the first
    // NUL if one is present.
    let content = match bytes.iter().position(|&byte| byte == 0) {
        Some(nul) => &bytes[..nul],
        None => &bytes[..],
    };

    let text = String::from_utf8_lossy(content);
    let display = truncate_for_display(&escape_for_display(&text));
    format!("\"{display}\" len={length} cap={cap}")
}
