//! ## About
//!
//! This crate demonstrates *double dispatch*: a closed set of data variants (components) is
//! processed by an open set of operations (visitors) without touching the variants' definitions.
//! The component resolves the first dispatch by calling the handler of the operation that
//! belongs to its own type; the operation resolves the second one by implementing that handler.
//! Inside a handler the concrete component type is known, so its exclusive accessors are
//! available.
//!
//! See [client_code] to get started.
//!
//! ```
//! use double_dispatch::{client_code, Component, ComponentA, ComponentB, Visitor1};
//!
//! let components: Vec<Component> = vec![ComponentA.into(), ComponentB.into()];
//! let mut visitor = Visitor1::with_writer(Vec::new());
//! client_code(&components, &mut visitor).unwrap();
//! assert_eq!(visitor.into_inner(), b"A + Visitor1\nB + Visitor1\n");
//! ```
//!
//! ## Extending
//!
//! * New operation – implement [Operation]. All handlers are required, the compiler rejects
//!   incomplete visitors. Visitors that deliberately cover only some components implement
//!   [PartialOperation] and are wrapped in [Partial].
//! * New component – add a handler to [Operation], a variant to [Component] and implement
//!   [Dispatch]. Every existing visitor must be updated (closed components, open operations).
//!
//! ## Naming conventions
//! * Traits – capabilities ([Dispatch], [Operation])
//! * Structs – substantives that indicate entities implementing a behavior
//! * Handlers – `handle_` prefix followed by the variant

pub mod client;
pub mod component;
pub mod errors;
pub mod operation;
pub mod utils;
pub mod visitors;

pub use client::client_code;
pub use component::{Component, ComponentA, ComponentB, Dispatch};
pub use errors::DispatchError;
pub use operation::{Operation, Partial, PartialOperation};
pub use visitors::{Tally, Visitor1, Visitor2};
