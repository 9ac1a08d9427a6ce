/*! The closed set of components a [Visitor](crate::Operation) can be applied to.
 *
 * Each concrete component knows the one handler of [Operation] that corresponds to its own type
 * and hands itself over to it. This is the first half of the double dispatch; the second half is
 * the handler reading the variant-exclusive accessors that only exist on the concrete type.
 */

use crate::{errors::Result, DispatchError, Operation};
use tracing::warn;

/// Capability of a component to accept an [Operation] (the `accept` of the classic visitor pattern).
pub trait Dispatch {
    /// Forward control to the handler of `operation` that matches the concrete type of `self`.
    ///
    /// The provided body is the abstract base: it fails with
    /// [DispatchError::UnimplementedOperation] naming the implementing type and `dispatch`.
    /// Every component must override it.
    fn dispatch<O: Operation>(&self, _operation: &mut O) -> Result<O::Output> {
        let error = DispatchError::unimplemented::<Self>("dispatch");
        warn!("{error}");
        Err(error)
    }
}

/// First concrete component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComponentA;

impl ComponentA {
    /// Only available on [ComponentA]
    pub fn exclusive_method_of_concrete_component_a(&self) -> &'static str {
        "A"
    }
}

impl Dispatch for ComponentA {
    fn dispatch<O: Operation>(&self, operation: &mut O) -> Result<O::Output> {
        operation.handle_a(self)
    }
}

/// Second concrete component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComponentB;

impl ComponentB {
    /// Only available on [ComponentB]
    pub fn special_method_of_concrete_component_b(&self) -> &'static str {
        "B"
    }
}

impl Dispatch for ComponentB {
    fn dispatch<O: Operation>(&self, operation: &mut O) -> Result<O::Output> {
        operation.handle_b(self)
    }
}

/// Sum type over all concrete components. Heterogeneous sequences hold this.
///
/// Adding a variant here makes the `match` in [Dispatch::dispatch] non-exhaustive, and adding
/// the matching handler to [Operation] makes every visitor without it fail to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    A(ComponentA),
    B(ComponentB),
}

impl Dispatch for Component {
    fn dispatch<O: Operation>(&self, operation: &mut O) -> Result<O::Output> {
        match self {
            Component::A(component) => component.dispatch(operation),
            Component::B(component) => component.dispatch(operation),
        }
    }
}

impl From<ComponentA> for Component {
    fn from(value: ComponentA) -> Self {
        Component::A(value)
    }
}

impl From<ComponentB> for Component {
    fn from(value: ComponentB) -> Self {
        Component::B(value)
    }
}
