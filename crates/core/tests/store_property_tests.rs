//! Property-based tests for the todo store

use std::collections::HashSet;

use proptest::prelude::*;
use todo_core::todo::{SaveOutcome, Todo, TodoFilter, TodoStore};

#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Delete(u64),
    Toggle(u64),
}

fn description_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 ]{1,28}[a-zA-Z0-9]{2}"
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => description_strategy().prop_map(Op::Add),
        1 => (1u64..20).prop_map(Op::Delete),
        2 => (1u64..20).prop_map(Op::Toggle),
    ]
}

fn apply(store: &mut TodoStore, op: &Op) {
    match op {
        Op::Add(description) => {
            store.set_draft_description(description.clone());
            store.save();
        }
        Op::Delete(id) => {
            store.delete_todo(*id);
        }
        Op::Toggle(id) => {
            store.toggle_by_id(*id);
        }
    }
}

/// Property: active and completed views partition the list.
#[test]
fn prop_filters_partition_collection() {
    proptest!(|(ops in prop::collection::vec(op_strategy(), 0..60))| {
        let mut store = TodoStore::new();
        for op in &ops {
            apply(&mut store, op);
        }

        let active: HashSet<u64> = store
            .filtered_todos(TodoFilter::Active)
            .iter()
            .map(|t| t.id)
            .collect();
        let completed: HashSet<u64> = store
            .filtered_todos(TodoFilter::Completed)
            .iter()
            .map(|t| t.id)
            .collect();
        let all: HashSet<u64> = store.todos().iter().map(|t| t.id).collect();

        prop_assert_eq!(active.len() + completed.len(), store.len());
        prop_assert!(active.is_disjoint(&completed));
        prop_assert_eq!(active.union(&completed).copied().collect::<HashSet<_>>(), all);
        prop_assert_eq!(store.filter_count(TodoFilter::All), store.len());
    });
}

/// Property: stored ids stay unique and never use the draft id.
#[test]
fn prop_ids_unique_and_positive() {
    proptest!(|(ops in prop::collection::vec(op_strategy(), 0..60))| {
        let mut store = TodoStore::new();
        for op in &ops {
            apply(&mut store, op);
        }

        let ids: HashSet<u64> = store.todos().iter().map(|t| t.id).collect();
        prop_assert_eq!(ids.len(), store.len());
        prop_assert!(ids.iter().all(|&id| id > 0));
    });
}

/// Property: a valid new draft is appended under max id + 1 and the draft resets.
#[test]
fn prop_save_assigns_next_id() {
    proptest!(|(
        ops in prop::collection::vec(op_strategy(), 0..40),
        description in description_strategy(),
    )| {
        let mut store = TodoStore::new();
        for op in &ops {
            apply(&mut store, op);
        }

        let before = store.len();
        let expected_id = store.todos().iter().map(|t| t.id).max().unwrap_or(0) + 1;

        store.set_draft_description(description);
        let outcome = store.save();

        prop_assert!(matches!(outcome, SaveOutcome::Created(ref todo) if todo.id == expected_id));
        prop_assert_eq!(store.len(), before + 1);
        prop_assert_eq!(store.draft(), &Todo::draft());
    });
}

/// Property: an invalid draft changes neither the list nor the draft.
#[test]
fn prop_rejected_save_is_inert() {
    proptest!(|(
        ops in prop::collection::vec(op_strategy(), 0..40),
        blank in "[ \t]{0,5}",
    )| {
        let mut store = TodoStore::new();
        for op in &ops {
            apply(&mut store, op);
        }

        let todos = store.todos().to_vec();
        store.set_draft_description(blank.clone());

        prop_assert!(matches!(store.save(), SaveOutcome::Rejected(_)));
        prop_assert_eq!(store.todos(), todos.as_slice());
        prop_assert_eq!(&store.draft().description, &blank);
    });
}
