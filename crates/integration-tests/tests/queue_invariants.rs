// Queue Invariant Tests
// Property-based checks: the queue tracks a plain reference model under
// arbitrary operation sequences

use std::collections::VecDeque;
use std::sync::Arc;

use proptest::prelude::*;

use flowpos_alert_core::domain::AlertDraft;
use flowpos_alert_core::port::id_provider::mocks::SequentialIdProvider;
use flowpos_alert_core::port::time_provider::mocks::SteppingClock;
use flowpos_alert_core::AlertQueue;

fn queue() -> AlertQueue {
    AlertQueue::new(
        Arc::new(SequentialIdProvider::default()),
        Arc::new(SteppingClock::new(1000, 1000)),
    )
}

fn draft(title: &str) -> AlertDraft {
    AlertDraft {
        title: Some(title.to_string()),
        ..Default::default()
    }
}

#[derive(Debug, Clone)]
enum Op {
    Enqueue(String),
    EnqueueNothing,
    Dequeue,
    ClearQueue,
    ClearAll,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => "[a-z]{1,8}".prop_map(Op::Enqueue),
        1 => Just(Op::EnqueueNothing),
        3 => Just(Op::Dequeue),
        1 => Just(Op::ClearQueue),
        1 => Just(Op::ClearAll),
    ]
}

/// Reference model: current + waiting over bare titles
#[derive(Default)]
struct Model {
    current: Option<String>,
    waiting: VecDeque<String>,
}

impl Model {
    fn apply(&mut self, op: &Op) {
        match op {
            Op::Enqueue(title) => {
                self.waiting.push_back(title.clone());
                if self.current.is_none() {
                    self.current = self.waiting.pop_front();
                }
            }
            Op::EnqueueNothing => {}
            Op::Dequeue => {
                if self.current.take().is_some() {
                    self.current = self.waiting.pop_front();
                }
            }
            Op::ClearQueue => self.waiting.clear(),
            Op::ClearAll => {
                self.current = None;
                self.waiting.clear();
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_queue_matches_reference_model(
        ops in proptest::collection::vec(op_strategy(), 0..40)
    ) {
        let q = queue();
        let mut model = Model::default();

        for op in &ops {
            match op {
                Op::Enqueue(title) => q.enqueue(Some(draft(title))),
                Op::EnqueueNothing => q.enqueue(None),
                Op::Dequeue => q.dequeue(),
                Op::ClearQueue => q.clear_queue(),
                Op::ClearAll => q.clear_all(),
            }
            model.apply(op);

            // At most one current, and the counters agree with the model
            prop_assert_eq!(q.current_alert().map(|a| a.title), model.current.clone());
            prop_assert_eq!(q.queue_len(), model.waiting.len());
            prop_assert_eq!(q.has_pending(), !model.waiting.is_empty());
            prop_assert_eq!(
                q.total_alerts(),
                usize::from(model.current.is_some()) + model.waiting.len()
            );
        }
    }

    #[test]
    fn prop_drain_preserves_enqueue_order(
        titles in proptest::collection::vec("[a-z]{1,8}", 1..20)
    ) {
        let q = queue();
        for title in &titles {
            q.enqueue(Some(draft(title)));
        }

        let mut seen = Vec::new();
        while let Some(alert) = q.current_alert() {
            seen.push(alert.title);
            q.dequeue();
        }
        prop_assert_eq!(seen, titles);
    }

    #[test]
    fn prop_clear_queue_never_touches_current(
        titles in proptest::collection::vec("[a-z]{1,8}", 1..10)
    ) {
        let q = queue();
        for title in &titles {
            q.enqueue(Some(draft(title)));
        }
        let before = q.current_alert().map(|a| a.id);

        q.clear_queue();

        prop_assert_eq!(q.current_alert().map(|a| a.id), before);
        prop_assert_eq!(q.queue_len(), 0);
    }
}
