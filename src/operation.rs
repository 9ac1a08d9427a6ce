//! Operations (visitors) that can be applied to every [Component](crate::Component).
//!
//! [Operation] is the exhaustive contract: it has no default bodies, so a visitor that forgets
//! a variant does not compile. [PartialOperation] is the explicit opt-in for visitors that only
//! cover some variants; unhandled variants fail at call time instead.

use crate::{errors::Result, ComponentA, ComponentB, DispatchError};
use tracing::warn;

/// An algorithm defined for all components. One handler per concrete component.
///
/// Handlers take `&mut self` so that a visitor may accumulate state while being applied to
/// a sequence of components. The same instance is reused for all components of a traversal.
pub trait Operation {
    /// Value produced per visited component, e.g. `()` for visitors with side effects only
    type Output;

    fn handle_a(&mut self, element: &ComponentA) -> Result<Self::Output>;
    fn handle_b(&mut self, element: &ComponentB) -> Result<Self::Output>;
}

/// Like [Operation] but each handler fails with [DispatchError::UnimplementedOperation]
/// unless overridden. Use it through the [Partial] adapter.
pub trait PartialOperation {
    type Output;

    fn handle_a(&mut self, _element: &ComponentA) -> Result<Self::Output> {
        Err(unimplemented::<Self>("handle_a"))
    }

    fn handle_b(&mut self, _element: &ComponentB) -> Result<Self::Output> {
        Err(unimplemented::<Self>("handle_b"))
    }
}

fn unimplemented<T: ?Sized>(method: &'static str) -> DispatchError {
    let error = DispatchError::unimplemented::<T>(method);
    warn!("{error}");
    error
}

/// Adapter that turns a [PartialOperation] into an [Operation]
#[derive(Debug, Default)]
pub struct Partial<P>(P);

impl<P: PartialOperation> Partial<P> {
    pub fn new(operation: P) -> Self {
        Partial(operation)
    }

    pub fn inner(&self) -> &P {
        &self.0
    }

    pub fn into_inner(self) -> P {
        self.0
    }
}

impl<P: PartialOperation> Operation for Partial<P> {
    type Output = P::Output;

    fn handle_a(&mut self, element: &ComponentA) -> Result<Self::Output> {
        self.0.handle_a(element)
    }

    fn handle_b(&mut self, element: &ComponentB) -> Result<Self::Output> {
        self.0.handle_b(element)
    }
}
