//! Decoding of NBT data into a [`Root`] tree.
//!
//! Nesting depth of Compounds and Lists is decided by the input, so the
//! decoder must not recurse natively. Instead it keeps an explicit stack of
//! parse states, one per in-progress container, driven by a flat loop. Each
//! state does one bounded unit of work per [`Frame::advance`] call and
//! receives finished children through [`Frame::deliver`]. Scalar and array
//! payloads never nest, so they are read inline without growing the stack.

use std::convert::TryFrom;
use std::io::Read;
use std::mem;

use crate::error::{Error, Result};
use crate::input::{Input, Reader, Slice};
use crate::string::NbtString;
use crate::value::{CompoundMap, Root, Value};
use crate::Tag;

/// Decode one NBT document from a byte slice.
///
/// The input must be uncompressed; see the crate docs for decompression.
pub fn from_bytes(data: &[u8]) -> Result<Root> {
    from_input(&mut Slice::new(data))
}

/// Decode one NBT document from any [`std::io::Read`].
pub fn from_reader<R: Read>(reader: R) -> Result<Root> {
    from_input(&mut Reader::new(reader))
}

/// Decode one NBT document from any byte source.
///
/// Reads forward-only, consuming exactly the bytes of one document, and
/// keeps no reference to the source afterwards. Lengths and counts declared
/// by the wire are trusted and allocated for without a ceiling.
pub fn from_input<I: Input + ?Sized>(input: &mut I) -> Result<Root> {
    let tag = read_tag(input)?;
    if tag == Tag::End {
        return Err(Error::root_end());
    }
    let name = read_string(input)?;

    // Containers run the stack engine. A scalar root can't nest, so it is
    // decoded directly and the engine never starts.
    let value = if tag.is_container() {
        let first = frame_for(input, tag)?;
        run_stack(input, first)?
    } else {
        read_scalar_payload(input, tag)?
    };

    Ok(Root { name, value })
}

/// Read `width` bytes and assemble them most-significant-first into an
/// unsigned integer. `width` must be 1..=8.
pub(crate) fn read_be_uint<I: Input + ?Sized>(input: &mut I, width: usize) -> Result<u64> {
    let mut buf = [0u8; 8];
    input.read_exact(&mut buf[..width])?;

    let mut n = 0u64;
    for b in &buf[..width] {
        n = (n << 8) | *b as u64;
    }
    Ok(n)
}

/// Reinterpret a `width`-byte unsigned bit pattern as its signed
/// two's-complement value, without shoving bits through a signed cast the
/// language gets to define. Exact at every width, including the minimum
/// representable value.
pub(crate) fn twos_complement(value: u64, width: usize) -> i64 {
    let sign_bit = 1u64 << (width * 8 - 1);
    if value & sign_bit != 0 {
        let magnitude = (!value).wrapping_add(1) & width_mask(width);
        -((magnitude - 1) as i64) - 1
    } else {
        value as i64
    }
}

fn width_mask(width: usize) -> u64 {
    if width == 8 {
        u64::MAX
    } else {
        (1u64 << (width * 8)) - 1
    }
}

fn read_tag<I: Input + ?Sized>(input: &mut I) -> Result<Tag> {
    let id = read_be_uint(input, 1)? as u8;
    Tag::try_from(id).map_err(|_| Error::invalid_tag(id))
}

fn read_string<I: Input + ?Sized>(input: &mut I) -> Result<NbtString> {
    let len = read_be_uint(input, 2)? as usize;
    let mut data = vec![0u8; len];
    input.read_exact(&mut data)?;
    Ok(NbtString::new(data))
}

fn read_i32<I: Input + ?Sized>(input: &mut I) -> Result<i32> {
    Ok(twos_complement(read_be_uint(input, 4)?, 4) as i32)
}

/// Decode the payload of any non-container tag.
///
/// Float and Double are taken as raw bit patterns; like the rest of the
/// ecosystem we assume the platform's floats are IEEE-754 rather than
/// emulating the decode generically.
fn read_scalar_payload<I: Input + ?Sized>(input: &mut I, tag: Tag) -> Result<Value> {
    Ok(match tag {
        Tag::Byte => Value::Byte(twos_complement(read_be_uint(input, 1)?, 1) as i8),
        Tag::Short => Value::Short(twos_complement(read_be_uint(input, 2)?, 2) as i16),
        Tag::Int => Value::Int(read_i32(input)?),
        Tag::Long => Value::Long(twos_complement(read_be_uint(input, 8)?, 8)),
        Tag::Float => Value::Float(f32::from_bits(read_be_uint(input, 4)? as u32)),
        Tag::Double => Value::Double(f64::from_bits(read_be_uint(input, 8)?)),
        Tag::String => Value::String(read_string(input)?),
        Tag::ByteArray => {
            let len = read_be_uint(input, 4)? as usize;
            let mut data = vec![0u8; len];
            input.read_exact(&mut data)?;
            Value::ByteArray(data)
        }
        Tag::IntArray => {
            let len = read_be_uint(input, 4)? as u32;
            let mut values = Vec::new();
            for _ in 0..len {
                values.push(read_i32(input)?);
            }
            Value::IntArray(values)
        }
        Tag::End | Tag::List | Tag::Compound => {
            return Err(Error::internal(format!(
                "scalar payload requested for {}",
                tag.name()
            )))
        }
    })
}

/// One in-progress container on the decode stack, carrying its own
/// progress fields.
enum Frame {
    /// The sentinel under everything else. Owns the destination slot for the
    /// document's value and has no work left once it receives its one child.
    Root { slot: Option<Value> },
    Compound {
        entries: CompoundMap,
        /// Name of the container child currently being decoded above us.
        pending_key: Option<NbtString>,
    },
    List {
        element: Tag,
        remaining: u32,
        elements: Vec<Value>,
    },
}

/// What the driving loop should do after a state advanced.
enum Step {
    /// Did a unit of work, call again.
    Continue,
    /// A child container started; push it.
    Push(Frame),
    /// This container is complete; pop it and deliver the value to the
    /// state below.
    Done(Value),
    /// The sentinel is alone and holds the finished document value.
    Stop(Value),
}

impl Frame {
    /// Perform one bounded unit of work: read one compound entry, start one
    /// container element, or read a whole run of scalar elements.
    fn advance<I: Input + ?Sized>(&mut self, input: &mut I) -> Result<Step> {
        match self {
            Frame::Root { slot } => {
                let value = slot
                    .take()
                    .ok_or_else(|| Error::internal("root state advanced before its value arrived"))?;
                Ok(Step::Stop(value))
            }
            Frame::Compound {
                entries,
                pending_key,
            } => {
                let tag = read_tag(input)?;
                if tag == Tag::End {
                    return Ok(Step::Done(Value::Compound(mem::take(entries))));
                }

                let name = read_string(input)?;
                if tag.is_container() {
                    // The key waits here until the child finishes and comes
                    // back through deliver.
                    *pending_key = Some(name);
                    Ok(Step::Push(frame_for(input, tag)?))
                } else {
                    let value = read_scalar_payload(input, tag)?;
                    entries.insert(name, value);
                    Ok(Step::Continue)
                }
            }
            Frame::List {
                element,
                remaining,
                elements,
            } => {
                if element.is_container() {
                    if *remaining == 0 {
                        Ok(Step::Done(Value::List(*element, mem::take(elements))))
                    } else {
                        *remaining -= 1;
                        Ok(Step::Push(frame_for(input, *element)?))
                    }
                } else {
                    // Scalar elements can't nest, so read them all in one
                    // pass.
                    for _ in 0..*remaining {
                        elements.push(read_scalar_payload(input, *element)?);
                    }
                    *remaining = 0;
                    Ok(Step::Done(Value::List(*element, mem::take(elements))))
                }
            }
        }
    }

    /// Receive a completed child from the state that was above us.
    fn deliver(&mut self, child: Value) -> Result<()> {
        match self {
            Frame::Root { slot } => {
                *slot = Some(child);
                Ok(())
            }
            Frame::Compound {
                entries,
                pending_key,
            } => {
                let key = pending_key
                    .take()
                    .ok_or_else(|| Error::internal("compound received a child with no pending key"))?;
                // Duplicate wire keys collapse here, last write wins.
                entries.insert(key, child);
                Ok(())
            }
            Frame::List {
                element, elements, ..
            } => {
                // Unreachable by construction: every pushed child state was
                // created for our declared element type.
                if child.tag() != *element {
                    return Err(Error::internal(format!(
                        "list of {} received a {} element",
                        element.name(),
                        child.tag().name()
                    )));
                }
                elements.push(child);
                Ok(())
            }
        }
    }
}

/// Build the parse state for a container tag, reading the list header
/// (element type and count) from the wire where needed.
fn frame_for<I: Input + ?Sized>(input: &mut I, tag: Tag) -> Result<Frame> {
    match tag {
        Tag::Compound => Ok(Frame::Compound {
            entries: CompoundMap::default(),
            pending_key: None,
        }),
        Tag::List => {
            let element = read_tag(input)?;
            if element == Tag::End {
                return Err(Error::list_of_end());
            }
            let remaining = read_be_uint(input, 4)? as u32;
            Ok(Frame::List {
                element,
                remaining,
                elements: Vec::new(),
            })
        }
        _ => Err(Error::internal(format!(
            "container state requested for {}",
            tag.name()
        ))),
    }
}

/// The driving loop: advance whatever is on top until the stack drains.
/// Depth is bounded by the `Vec`, never by the call stack.
fn run_stack<I: Input + ?Sized>(input: &mut I, first: Frame) -> Result<Value> {
    let mut stack = vec![Frame::Root { slot: None }, first];

    while let Some(top) = stack.last_mut() {
        match top.advance(input)? {
            Step::Continue => {}
            Step::Push(child) => stack.push(child),
            Step::Done(value) => {
                stack.pop();
                match stack.last_mut() {
                    Some(parent) => parent.deliver(value)?,
                    None => {
                        return Err(Error::internal("finished state had no parent on the stack"))
                    }
                }
            }
            Step::Stop(value) => return Ok(value),
        }
    }

    Err(Error::internal("decode stack drained without a value"))
}
