//! The decoded tag tree.

use std::hash::BuildHasherDefault;
use std::mem;

use crate::string::{Fnv, NbtString};
use crate::Tag;

/// The map type backing a Compound.
///
/// Keys are hashed with the crate's own [`Fnv`] hasher. Iteration order of
/// the default map is unspecified; enable the `preserve-order` feature to
/// iterate in insertion order, which also makes pretty-printed output
/// deterministic.
#[cfg(not(feature = "preserve-order"))]
pub type CompoundMap = std::collections::HashMap<NbtString, Value, BuildHasherDefault<Fnv>>;

/// The map type backing a Compound, in insertion order.
#[cfg(feature = "preserve-order")]
pub type CompoundMap = indexmap::IndexMap<NbtString, Value, BuildHasherDefault<Fnv>>;

/// A complete NBT value. It owns its data, and the whole tree is immutable
/// and fully formed by the time a decode returns it.
///
/// Lists keep their declared element [`Tag`] alongside the elements, so an
/// empty list still knows its element type. Every element of a list matches
/// the declared tag; the decoder enforces this.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<u8>),
    String(NbtString),
    List(Tag, Vec<Value>),
    Compound(CompoundMap),
    IntArray(Vec<i32>),
}

impl Value {
    /// The tag id for this value's kind.
    pub fn tag(&self) -> Tag {
        match self {
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::String(_) => Tag::String,
            Value::List(_, _) => Tag::List,
            Value::Compound(_) => Tag::Compound,
            Value::IntArray(_) => Tag::IntArray,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Byte(v) => Some(v as i64),
            Value::Short(v) => Some(v as i64),
            Value::Int(v) => Some(v as i64),
            Value::Long(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Float(v) => Some(v as f64),
            Value::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::String(v) => Some(v.as_bytes()),
            _ => None,
        }
    }

    /// Look up an entry of a Compound by name. Returns `None` for other
    /// kinds as well as for missing keys.
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Compound(map) => map.get(&NbtString::from(name)),
            _ => None,
        }
    }
}

// The decoder accepts containers of any depth, so the default recursive
// drop glue would overflow the call stack on the same inputs the decoder
// was built to survive. Children are instead drained onto a flat worklist;
// by the time any individual value is dropped it has no children left.
impl Drop for Value {
    fn drop(&mut self) {
        let mut work: Vec<Value> = Vec::new();
        match self {
            Value::List(_, elements) => work.append(elements),
            Value::Compound(entries) => {
                work.extend(mem::take(entries).into_iter().map(|(_, v)| v))
            }
            _ => return,
        }

        while let Some(mut value) = work.pop() {
            match &mut value {
                Value::List(_, elements) => work.append(elements),
                Value::Compound(entries) => {
                    work.extend(mem::take(entries).into_iter().map(|(_, v)| v))
                }
                _ => {}
            }
        }
    }
}

/// The single named top-level value of an NBT document.
///
/// The root name is often the empty string in real files.
#[derive(Debug, Clone, PartialEq)]
pub struct Root {
    pub name: NbtString,
    pub value: Value,
}
