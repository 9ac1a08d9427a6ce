/*! Client code that applies an operation to a sequence of components without knowing their
 * concrete types.
 */

use crate::{errors::Result, utils::short_type_name, Dispatch, Operation};
use tracing::trace;
use tracing_attributes::instrument;

/// Dispatch every component in `components` to the same `operation`, in order.
///
/// Returns the handler results in sequence order. The first error aborts the traversal and is
/// returned unchanged; remaining components are not visited.
#[instrument(level = "debug", skip_all, fields(len = components.len(), operation = short_type_name::<O>()))]
pub fn client_code<E, O>(components: &[E], operation: &mut O) -> Result<Vec<O::Output>>
where
    E: Dispatch,
    O: Operation,
{
    components
        .iter()
        .enumerate()
        .map(|(index, component)| {
            trace!(index, "dispatch");
            component.dispatch(operation)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Component, ComponentA, ComponentB, DispatchError, Partial, PartialOperation, Tally, Visitor1, Visitor2};
    use itertools::Itertools;
    use test_log;

    fn components() -> Vec<Component> {
        vec![ComponentA.into(), ComponentB.into()]
    }

    fn lines(bytes: Vec<u8>) -> Vec<String> {
        String::from_utf8(bytes).unwrap().lines().map(str::to_string).collect_vec()
    }

    /// Returns the order in which it has been called
    #[derive(Default)]
    struct Counter {
        calls: usize,
    }
    impl Operation for Counter {
        type Output = (usize, &'static str);

        fn handle_a(&mut self, element: &ComponentA) -> Result<Self::Output> {
            self.calls += 1;
            Ok((self.calls, element.exclusive_method_of_concrete_component_a()))
        }

        fn handle_b(&mut self, element: &ComponentB) -> Result<Self::Output> {
            self.calls += 1;
            Ok((self.calls, element.special_method_of_concrete_component_b()))
        }
    }

    #[test_log::test]
    fn test_visitor1_scenario() {
        let mut visitor = Visitor1::with_writer(Vec::new());
        client_code(&components(), &mut visitor).unwrap();
        assert_eq!(lines(visitor.into_inner()), &["A + Visitor1", "B + Visitor1"]);
    }

    #[test_log::test]
    fn test_visitor2_scenario() {
        let mut visitor = Visitor2::with_writer(Vec::new());
        client_code(&components(), &mut visitor).unwrap();
        assert_eq!(lines(visitor.into_inner()), &["A + Visitor2", "B + Visitor2"]);
    }

    #[test_log::test]
    fn test_dispatches_once_per_component_in_order() {
        let sequence: Vec<Component> = vec![
            ComponentB.into(),
            ComponentA.into(),
            ComponentA.into(),
            ComponentB.into(),
            ComponentA.into(),
        ];
        let mut counter = Counter::default();
        let result = client_code(&sequence, &mut counter).unwrap();

        assert_eq!(counter.calls, sequence.len());
        assert_eq!(result, &[(1, "B"), (2, "A"), (3, "A"), (4, "B"), (5, "A")]);
    }

    #[test_log::test]
    fn test_homogeneous_sequence() {
        let mut tally = Tally::new();
        let result = client_code(&[ComponentB, ComponentB], &mut tally).unwrap();
        assert_eq!(result, &[1, 2]);
        assert_eq!(tally.b(), 2);
    }

    #[test_log::test]
    fn test_empty_sequence() {
        let mut tally = Tally::new();
        let result = client_code::<Component, _>(&[], &mut tally).unwrap();
        assert!(result.is_empty());
        assert_eq!(tally, Tally::new());
    }

    #[test_log::test]
    fn test_repeated_traversal_is_idempotent() {
        let mut first = Visitor1::with_writer(Vec::new());
        client_code(&components(), &mut first).unwrap();
        let mut second = Visitor1::with_writer(Vec::new());
        client_code(&components(), &mut second).unwrap();
        assert_eq!(first.into_inner(), second.into_inner());

        // Same instance reused: the second run appends the same lines again
        let mut visitor = Visitor2::with_writer(Vec::new());
        client_code(&components(), &mut visitor).unwrap();
        client_code(&components(), &mut visitor).unwrap();
        let lines = lines(visitor.into_inner());
        assert_eq!(lines[..2], lines[2..]);
    }

    #[test_log::test]
    fn test_state_carries_over_traversals() {
        let mut tally = Tally::new();
        client_code(&components(), &mut tally).unwrap();
        let result = client_code(&components(), &mut tally).unwrap();
        assert_eq!(result, &[3, 4]);
        assert_eq!((tally.a(), tally.b()), (2, 2));
    }

    #[test_log::test]
    fn test_first_error_aborts_traversal() {
        /// Handles `ComponentB` only and counts its calls
        #[derive(Default)]
        struct OnlyB {
            calls: usize,
        }
        impl PartialOperation for OnlyB {
            type Output = ();

            fn handle_b(&mut self, _element: &ComponentB) -> Result<()> {
                self.calls += 1;
                Ok(())
            }
        }

        let sequence: Vec<Component> = vec![ComponentB.into(), ComponentA.into(), ComponentB.into()];
        let mut operation = Partial::new(OnlyB::default());
        let error = client_code(&sequence, &mut operation).unwrap_err();

        assert!(matches!(
            error,
            DispatchError::UnimplementedOperation { ref type_name, method: "handle_a" } if type_name == "OnlyB"
        ));
        // the trailing `ComponentB` has not been visited
        assert_eq!(operation.inner().calls, 1);
    }
}
