/*! Concrete visitors. Each one implements the same family of algorithms for all components.
 *
 * [Visitor1] and [Visitor2] emit a trace line per component that combines the value of the
 * component's exclusive accessor with the visitor's name. [Tally] accumulates state over a
 * traversal instead.
 */

use std::io::{self, Write};

use crate::{errors::Result, utils::short_type_name, ComponentA, ComponentB, Operation};

/// Writes `"<value> + <visitor name>"` as one line
fn trace<V, W: Write>(writer: &mut W, value: &str) -> Result<()> {
    writeln!(writer, "{value} + {}", short_type_name::<V>())?;
    Ok(())
}

/// First tracing visitor, writes to stdout unless created [with a writer](Visitor1::with_writer).
#[derive(Debug)]
pub struct Visitor1<W = io::Stdout> {
    writer: W,
}

impl Visitor1 {
    pub fn new() -> Self {
        Visitor1 { writer: io::stdout() }
    }
}

impl Default for Visitor1 {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Visitor1<W> {
    pub fn with_writer(writer: W) -> Self {
        Visitor1 { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Operation for Visitor1<W> {
    type Output = ();

    fn handle_a(&mut self, element: &ComponentA) -> Result<()> {
        trace::<Self, _>(&mut self.writer, element.exclusive_method_of_concrete_component_a())
    }

    fn handle_b(&mut self, element: &ComponentB) -> Result<()> {
        trace::<Self, _>(&mut self.writer, element.special_method_of_concrete_component_b())
    }
}

/// Second tracing visitor. Same algorithm family as [Visitor1], different identity.
#[derive(Debug)]
pub struct Visitor2<W = io::Stdout> {
    writer: W,
}

impl Visitor2 {
    pub fn new() -> Self {
        Visitor2 { writer: io::stdout() }
    }
}

impl Default for Visitor2 {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Visitor2<W> {
    pub fn with_writer(writer: W) -> Self {
        Visitor2 { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Operation for Visitor2<W> {
    type Output = ();

    fn handle_a(&mut self, element: &ComponentA) -> Result<()> {
        trace::<Self, _>(&mut self.writer, element.exclusive_method_of_concrete_component_a())
    }

    fn handle_b(&mut self, element: &ComponentB) -> Result<()> {
        trace::<Self, _>(&mut self.writer, element.special_method_of_concrete_component_b())
    }
}

/// Stateful visitor counting the visited components per variant.
///
/// Reusable: counts keep accumulating over several traversals. Each handler returns the
/// running total.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tally {
    a: usize,
    b: usize,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn a(&self) -> usize {
        self.a
    }

    pub fn b(&self) -> usize {
        self.b
    }

    pub fn total(&self) -> usize {
        self.a + self.b
    }
}

impl Operation for Tally {
    type Output = usize;

    fn handle_a(&mut self, _element: &ComponentA) -> Result<usize> {
        self.a += 1;
        Ok(self.total())
    }

    fn handle_b(&mut self, _element: &ComponentB) -> Result<usize> {
        self.b += 1;
        Ok(self.total())
    }
}
