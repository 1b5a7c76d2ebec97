//! Property-based tests for the pagination machine.
//!
//! These tests use proptest to drive the machine with arbitrary event
//! sequences and check that the transition table's guarantees hold.

use pageflow::core::State;
use pageflow::machine::{EventKind, PageEvent, PageState, PaginationMachine, TransitionTable};
use pageflow::source::{MockSource, PageSource};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_items()(items in prop::collection::vec("[a-z0-9]{1,3}", 0..5)) -> Vec<String> {
        items
    }
}

fn arbitrary_event() -> impl Strategy<Value = PageEvent> {
    prop_oneof![
        Just(PageEvent::Fetch),
        arbitrary_items().prop_map(|new_data| PageEvent::More { new_data }),
        arbitrary_items().prop_map(|new_data| PageEvent::Done { new_data }),
        Just(PageEvent::fail("injected")),
        Just(PageEvent::Reset),
    ]
}

/// Host step: either a raw event or "let the in-flight fetch resolve".
#[derive(Clone, Debug)]
enum Step {
    Fetch,
    Reset,
    Resolve,
}

fn arbitrary_step() -> impl Strategy<Value = Step> {
    prop_oneof![Just(Step::Fetch), Just(Step::Reset), Just(Step::Resolve)]
}

proptest! {
    #[test]
    fn unmatched_events_change_nothing(events in prop::collection::vec(arbitrary_event(), 0..30)) {
        let table = TransitionTable::pagination();
        let mut machine = PaginationMachine::new();

        for event in events {
            let state = machine.state();
            let data = machine.context().data().to_vec();
            let history_len = machine.history().len();
            let accepted = table.lookup(state, event.kind()).is_some();

            let outcome = machine.send(event);

            prop_assert_eq!(outcome.is_transition(), accepted);
            if !accepted {
                prop_assert_eq!(machine.state(), state);
                prop_assert_eq!(machine.context().data(), data.as_slice());
                prop_assert_eq!(machine.history().len(), history_len);
            }
        }
    }

    #[test]
    fn terminal_states_absorb_everything(
        reach_fail in any::<bool>(),
        events in prop::collection::vec(arbitrary_event(), 1..20)
    ) {
        let mut machine = PaginationMachine::new();
        machine.send(PageEvent::Fetch);
        machine.send(PageEvent::more(["1"]));
        machine.send(PageEvent::Fetch);
        if reach_fail {
            machine.send(PageEvent::fail("boom"));
        } else {
            machine.send(PageEvent::done(["2"]));
        }
        prop_assert!(machine.is_final());

        let state = machine.state();
        let data = machine.context().data().to_vec();
        for event in events {
            prop_assert!(!machine.send(event).is_transition());
        }
        prop_assert_eq!(machine.state(), state);
        prop_assert_eq!(machine.context().data(), data.as_slice());
    }

    #[test]
    fn fetch_driven_data_is_an_ordered_source_prefix(
        source_len in 0usize..60,
        page_size in 1usize..15,
        steps in prop::collection::vec(arbitrary_step(), 0..40)
    ) {
        let source = MockSource::new(source_len);
        let mut machine = PaginationMachine::new();

        for step in steps {
            match step {
                Step::Fetch => {
                    machine.send(PageEvent::Fetch);
                }
                Step::Reset => {
                    machine.send(PageEvent::Reset);
                }
                Step::Resolve => {
                    if machine.state() == PageState::Fetching {
                        let page = source.page(machine.context().len(), page_size);
                        machine.send(page.into_event());
                    }
                }
            }

            let data = machine.context().data();
            prop_assert!(data.len() <= source_len);
            prop_assert_eq!(data, &source.items()[..data.len()]);
        }
    }

    #[test]
    fn history_path_matches_accepted_events(events in prop::collection::vec(arbitrary_event(), 1..25)) {
        let mut machine = PaginationMachine::new();
        let mut expected = vec![PageState::Idle];

        for event in events {
            if let Some(to) = machine.send(event).entered() {
                expected.push(to);
            }
        }

        let path: Vec<PageState> = machine.history().get_path().into_iter().copied().collect();
        if machine.history().is_empty() {
            prop_assert!(path.is_empty());
        } else {
            prop_assert_eq!(path, expected);
        }
    }

    #[test]
    fn state_name_is_stable(index in 0usize..5) {
        let state = PageState::ALL[index];
        prop_assert_eq!(state.name(), state.name());
        prop_assert_eq!(state.to_string(), state.name());
    }

    #[test]
    fn every_event_kind_serialises_as_its_tag(index in 0usize..5) {
        let kind = EventKind::ALL[index];
        let json = serde_json::to_string(&kind).unwrap();
        prop_assert_eq!(json, format!("\"{}\"", kind.as_str()));
    }
}
