//! Human-readable rendering of a decoded tree.
//!
//! One line per tag: indentation, the kind's label, the name in quotes when
//! the tag is named, then a kind-specific summary. Containers are followed
//! by a brace-delimited, further-indented block of their children. List
//! elements are never individually named; Compound entries carry their key.
//!
//! The decoder accepts documents of any depth, so the printer must too: it
//! walks the tree with the same explicit work-stack technique rather than
//! recursing per level.

use std::fmt::Write;

use crate::string::NbtString;
use crate::value::{Root, Value};

/// Render a tree with the default four-space indent unit.
///
/// Output is for human inspection, not for machine consumption. Compound
/// entries appear in map iteration order, which is unspecified unless the
/// `preserve-order` feature is enabled.
pub fn pretty_print<W: Write>(out: &mut W, root: &Root) -> std::fmt::Result {
    pretty_print_indent(out, root, "    ")
}

/// Render a tree with a caller-chosen indent unit.
pub fn pretty_print_indent<W: Write>(out: &mut W, root: &Root, indent: &str) -> std::fmt::Result {
    // The root is named, but an empty root name (the common case in real
    // files) prints no name part.
    let name = if root.name.is_empty() {
        None
    } else {
        Some(&root.name)
    };

    let mut printer = Printer {
        out,
        indent,
        depth: 0,
    };
    printer.print(&root.value, name)
}

enum Job<'a> {
    Node {
        value: &'a Value,
        name: Option<&'a NbtString>,
    },
    Close,
}

struct Printer<'w, W: Write> {
    out: &'w mut W,
    indent: &'w str,
    depth: usize,
}

impl<'w, W: Write> Printer<'w, W> {
    fn print(&mut self, value: &Value, name: Option<&NbtString>) -> std::fmt::Result {
        let mut jobs = vec![Job::Node { value, name }];

        while let Some(job) = jobs.pop() {
            match job {
                Job::Close => {
                    self.depth -= 1;
                    self.print_indent()?;
                    writeln!(self.out, "}}")?;
                }
                Job::Node { value, name } => self.print_node(value, name, &mut jobs)?,
            }
        }
        Ok(())
    }

    fn print_node<'a>(
        &mut self,
        value: &'a Value,
        name: Option<&'a NbtString>,
        jobs: &mut Vec<Job<'a>>,
    ) -> std::fmt::Result {
        self.print_preamble(value, name)?;

        match value {
            Value::Byte(v) => writeln!(self.out, " {}", v)?,
            Value::Short(v) => writeln!(self.out, " {}", v)?,
            Value::Int(v) => writeln!(self.out, " {}", v)?,
            Value::Long(v) => writeln!(self.out, " {}", v)?,
            Value::Float(v) => writeln!(self.out, " {}", v)?,
            Value::Double(v) => writeln!(self.out, " {}", v)?,
            Value::ByteArray(v) => writeln!(self.out, " [{} bytes]", v.len())?,
            Value::String(v) => writeln!(self.out, " {}", v.to_text())?,
            Value::List(element, elements) => {
                writeln!(
                    self.out,
                    "{} entries of type {}",
                    elements.len(),
                    element.name()
                )?;
                self.open_block(jobs)?;
                for entry in elements.iter().rev() {
                    jobs.push(Job::Node {
                        value: entry,
                        name: None,
                    });
                }
            }
            Value::Compound(entries) => {
                writeln!(self.out, " {} entries", entries.len())?;
                self.open_block(jobs)?;
                // Reversed so the stack yields entries in iteration order.
                let pending: Vec<_> = entries.iter().collect();
                for (key, entry) in pending.into_iter().rev() {
                    jobs.push(Job::Node {
                        value: entry,
                        name: Some(key),
                    });
                }
            }
            Value::IntArray(v) => writeln!(self.out, " [{} ints]", v.len())?,
        }
        Ok(())
    }

    fn print_preamble(&mut self, value: &Value, name: Option<&NbtString>) -> std::fmt::Result {
        self.print_indent()?;
        write!(self.out, "{}", value.tag().name())?;
        if let Some(name) = name {
            write!(self.out, "(\"{}\")", name.to_text())?;
        }
        write!(self.out, ":")
    }

    fn open_block(&mut self, jobs: &mut Vec<Job<'_>>) -> std::fmt::Result {
        self.print_indent()?;
        writeln!(self.out, "{{")?;
        self.depth += 1;
        jobs.push(Job::Close);
        Ok(())
    }

    fn print_indent(&mut self) -> std::fmt::Result {
        for _ in 0..self.depth {
            self.out.write_str(self.indent)?;
        }
        Ok(())
    }
}
