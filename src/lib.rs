//! deepnbt decodes NBT data into a fully materialized tag tree and renders
//! that tree as human-readable text. NBT ("Named Binary Tag") is the compact
//! binary tree format *Minecraft: Java Edition* uses for world data, player
//! inventories and similar.
//!
//! * For decoding, see [`from_bytes`] and [`from_reader`].
//! * For the decoded tree, see [`Value`] and [`Root`].
//! * For rendering, see [`pretty_print`].
//!
//! Compound and List nesting depth in NBT is controlled by the input data.
//! The decoder therefore runs on an explicit work stack rather than native
//! recursion, so arbitrarily deep documents are bounded by memory, not by
//! the call stack. The printer walks the tree the same way.
//!
//! Declared lengths and element counts from the wire are trusted and drive
//! allocation directly, with no ceiling. Callers decoding untrusted data
//! should bound the outer stream themselves.
//!
//! This crate does not decompress. NBT files are usually GZip compressed, so
//! you typically want something like:
//!
//! ```no_run
//! use flate2::read::GzDecoder;
//! use std::fs::File;
//!
//! # fn main() -> deepnbt::error::Result<()> {
//! let file = File::open("level.dat").unwrap();
//! let root = deepnbt::from_reader(GzDecoder::new(file))?;
//!
//! let mut out = String::new();
//! deepnbt::pretty_print(&mut out, &root).unwrap();
//! print!("{}", out);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod input;

mod de;
mod pretty;
mod string;
mod value;

pub use de::{from_bytes, from_input, from_reader};
pub use pretty::{pretty_print, pretty_print_indent};
pub use string::NbtString;
pub use value::{CompoundMap, Root, Value};

#[cfg(test)]
mod test;

use std::convert::TryFrom;

/// An NBT tag id. This does not carry the value or the name of the data.
///
/// This format has no LongArray: ids run from `End = 0` to `IntArray = 11`,
/// and anything above is rejected as malformed.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[repr(u8)]
pub enum Tag {
    /// Represents the end of a Compound object.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64.
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents an array of raw bytes.
    ByteArray = 7,
    /// Represents a string of raw bytes, conventionally CESU-8 text.
    String = 8,
    /// Represents a list of values that all share one declared element type.
    List = 9,
    /// Represents a map-like structure with string keys.
    Compound = 10,
    /// Represents an array of Int (i32).
    IntArray = 11,
}

// Crates exist to generate this code for us, but would add to our compile
// times, so we instead write it out manually, the tags will very rarely
// change so isn't a massive burden, but saves a significant amount of
// compile time.
impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12..=u8::MAX => return Err(()),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::End => 0,
            Tag::Byte => 1,
            Tag::Short => 2,
            Tag::Int => 3,
            Tag::Long => 4,
            Tag::Float => 5,
            Tag::Double => 6,
            Tag::ByteArray => 7,
            Tag::String => 8,
            Tag::List => 9,
            Tag::Compound => 10,
            Tag::IntArray => 11,
        }
    }
}

impl Tag {
    /// The human-readable label for this tag kind, as used by the pretty
    /// printer, e.g. `"TAG_Compound"`.
    pub fn name(self) -> &'static str {
        match self {
            Tag::End => "TAG_End",
            Tag::Byte => "TAG_Byte",
            Tag::Short => "TAG_Short",
            Tag::Int => "TAG_Int",
            Tag::Long => "TAG_Long",
            Tag::Float => "TAG_Float",
            Tag::Double => "TAG_Double",
            Tag::ByteArray => "TAG_Byte_Array",
            Tag::String => "TAG_String",
            Tag::List => "TAG_List",
            Tag::Compound => "TAG_Compound",
            Tag::IntArray => "TAG_Int_Array",
        }
    }

    /// True for the kinds that get their own parse state on the decode
    /// stack, rather than being read inline.
    pub(crate) fn is_container(self) -> bool {
        matches!(self, Tag::List | Tag::Compound)
    }
}
