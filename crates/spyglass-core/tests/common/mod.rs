//! Mock debugger host for integration tests.
//!
//! Implements the host capability traits over plain in-memory data so the
//! decoders can be exercised end-to-end without a live process. Values are
//! built fluently; child lists and the byte map are shared behind `Rc` so a
//! test can mutate "target state" after a provider has captured its handle
//! (which is exactly what happens to a real provider when the debugger
//! steps).

// Not every integration-test binary uses every helper.
#![allow(dead_code)]

use std::any::Any;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use spyglass_core::error::{SpyglassError, SpyglassResult};
use spyglass_core::host::{InspectedValue, TypeHandle};
use spyglass_core::types::Address;

/// Byte map standing in for target memory.
#[derive(Default)]
pub struct MockMemory
{
    regions: BTreeMap<u64, Vec<u8>>,
}

impl MockMemory
{
    pub fn new() -> Rc<RefCell<Self>>
    {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Map `bytes` at `address`. Overlapping regions are not merged.
    pub fn map(&mut self, address: u64, bytes: &[u8])
    {
        self.regions.insert(address, bytes.to_vec());
    }

    fn read(&self, address: Address, length: usize) -> SpyglassResult<Vec<u8>>
    {
        let start = address.value();
        for (&base, bytes) in self.regions.range(..=start).rev() {
            let offset = (start - base) as usize;
            if offset + length <= bytes.len() {
                return Ok(bytes[offset..offset + length].to_vec());
            }
            break;
        }
        Err(SpyglassError::MemoryRead {
            address,
            length,
            reason: "unmapped".to_string(),
        })
    }
}

/// Mock type handle.
#[derive(Debug, Clone)]
pub struct MockType
{
    pub name: Option<String>,
    pub byte_size: u64,
    pub array_len: Option<u64>,
}

impl MockType
{
    pub fn named(name: &str, byte_size: u64) -> Self
    {
        Self {
            name: Some(name.to_string()),
            byte_size,
            array_len: None,
        }
    }

    pub fn byte_array(len: u64) -> Self
    {
        Self {
            name: Some(format!("std::array<std::byte, {len}>")),
            byte_size: len,
            array_len: Some(len),
        }
    }
}

impl TypeHandle for MockType
{
    fn name(&self) -> Option<String>
    {
        self.name.clone()
    }

    fn byte_size(&self) -> u64
    {
        self.byte_size
    }

    fn fixed_array_len(&self) -> Option<u64>
    {
        self.array_len
    }

    fn as_any(&self) -> &dyn Any
    {
        self
    }
}

/// Mock inspected value.
///
/// Children are shared across clones, so handing a clone to a provider and
/// then mutating a child through the original models target state changing
/// under a live handle.
#[derive(Clone, Default)]
pub struct MockValue
{
    type_name: Option<String>,
    children: Rc<RefCell<Vec<(String, MockValue)>>>,
    is_base: bool,
    unsigned: Option<u64>,
    text: Option<String>,
    summary: Option<String>,
    deref: Option<Rc<MockValue>>,
    load_address: Option<Address>,
    address_of: Option<Address>,
    value_type: Option<MockType>,
    element_type: Option<MockType>,
    memory: Option<Rc<RefCell<MockMemory>>>,
}

impl MockValue
{
    pub fn typed(type_name: &str) -> Self
    {
        Self {
            type_name: Some(type_name.to_string()),
            ..Self::default()
        }
    }

    pub fn scalar(value: u64) -> Self
    {
        Self {
            unsigned: Some(value),
            text: Some(value.to_string()),
            ..Self::default()
        }
    }

    pub fn with_child(self, name: &str, child: MockValue) -> Self
    {
        self.children.borrow_mut().push((name.to_string(), child));
        self
    }

    /// Add a base-class sub-object (participates in recursive field lookup).
    pub fn with_base(self, base: MockValue) -> Self
    {
        let mut base = base;
        base.is_base = true;
        let label = base.type_name.clone().unwrap_or_default();
        self.children.borrow_mut().push((label, base));
        self
    }

    pub fn with_unsigned(mut self, value: u64) -> Self
    {
        self.unsigned = Some(value);
        self
    }

    pub fn with_text(mut self, text: &str) -> Self
    {
        self.text = Some(text.to_string());
        self
    }

    pub fn with_summary(mut self, summary: &str) -> Self
    {
        self.summary = Some(summary.to_string());
        self
    }

    pub fn with_deref(mut self, referent: MockValue) -> Self
    {
        self.deref = Some(Rc::new(referent));
        self
    }

    pub fn with_load_address(mut self, address: u64) -> Self
    {
        self.load_address = Some(Address::new(address));
        self
    }

    pub fn with_address_of(mut self, address: u64) -> Self
    {
        self.address_of = Some(Address::new(address));
        self
    }

    pub fn with_value_type(mut self, ty: MockType) -> Self
    {
        self.value_type = Some(ty);
        self
    }

    pub fn with_element_type(mut self, ty: MockType) -> Self
    {
        self.element_type = Some(ty);
        self
    }

    pub fn with_memory(mut self, memory: Rc<RefCell<MockMemory>>) -> Self
    {
        self.memory = Some(memory);
        self
    }

    /// Replace the unsigned value of a direct child in place.
    ///
    /// Clones taken earlier observe the change on their next lookup because
    /// the child list is shared.
    pub fn set_child_unsigned(&self, name: &str, value: u64)
    {
        let mut children = self.children.borrow_mut();
        let entry = children
            .iter_mut()
            .find(|(child_name, _)| child_name == name)
            .unwrap_or_else(|| panic!("no child named {name}"));
        entry.1.unsigned = Some(value);
        entry.1.text = Some(value.to_string());
    }

    pub fn boxed(&self) -> Box<dyn InspectedValue>
    {
        Box::new(self.clone())
    }
}

/// Build a mock `std::array` elements field: `count` byte-sized children
/// laid out from `base`.
pub fn byte_elements(base: u64, count: usize) -> MockValue
{
    let elems = MockValue::default();
    for index in 0..count {
        let byte = MockValue::default().with_load_address(base + index as u64);
        elems.children.borrow_mut().push((format!("[{index}]"), byte));
    }
    elems
}

impl InspectedValue for MockValue
{
    fn type_name(&self) -> Option<String>
    {
        self.type_name.clone()
    }

    fn child_by_name(&self, name: &str) -> Option<Box<dyn InspectedValue>>
    {
        self.children
            .borrow()
            .iter()
            .find(|(child_name, _)| child_name == name)
            .map(|(_, child)| child.boxed())
    }

    fn num_children(&self) -> usize
    {
        self.children.borrow().len()
    }

    fn child_at(&self, index: usize) -> Option<Box<dyn InspectedValue>>
    {
        self.children.borrow().get(index).map(|(_, child)| child.boxed())
    }

    fn is_base_class(&self) -> bool
    {
        self.is_base
    }

    fn dereference(&self) -> Option<Box<dyn InspectedValue>>
    {
        self.deref.as_ref().map(|referent| referent.as_ref().boxed())
    }

    fn unsigned_value(&self, default: u64) -> u64
    {
        self.unsigned.unwrap_or(default)
    }

    fn value_text(&self) -> Option<String>
    {
        self.text.clone()
    }

    fn summary_text(&self) -> Option<String>
    {
        self.summary.clone()
    }

    fn load_address(&self) -> Option<Address>
    {
        self.load_address
    }

    fn address_of(&self) -> Option<Address>
    {
        self.address_of
    }

    fn value_type(&self) -> Option<Box<dyn TypeHandle>>
    {
        self.value_type.clone().map(|ty| Box::new(ty) as Box<dyn TypeHandle>)
    }

    fn element_type(&self) -> Option<Box<dyn TypeHandle>>
    {
        self.element_type.clone().map(|ty| Box::new(ty) as Box<dyn TypeHandle>)
    }

    fn view_at(&self, _label: &str, address: Address, ty: &dyn TypeHandle) -> Option<Box<dyn InspectedValue>>
    {
        let ty = ty.as_any().downcast_ref::<MockType>()?;
        let mut view = MockValue {
            type_name: ty.name.clone(),
            load_address: Some(address),
            memory: self.memory.clone(),
            ..MockValue::default()
        };

        // Render the view's value text from mapped memory when possible,
        // like a real host would for a scalar element type.
        let width = usize::try_from(ty.byte_size.min(8)).ok()?;
        if width > 0 {
            if let Some(memory) = &self.memory {
                if let Ok(bytes) = memory.borrow().read(address, width) {
                    let mut raw = [0u8; 8];
                    raw[..width].copy_from_slice(&bytes);
                    let decoded = u64::from_le_bytes(raw);
                    view.unsigned = Some(decoded);
                    view.text = Some(decoded.to_string());
                }
            }
        }
        Some(Box::new(view))
    }

    fn read_memory(&self, address: Address, length: usize) -> SpyglassResult<Vec<u8>>
    {
        match &self.memory {
            Some(memory) => memory.borrow().read(address, length),
            None => Err(SpyglassError::MemoryRead {
                address,
                length,
                reason: "no memory attached to mock".to_string(),
            }),
        }
    }
}
