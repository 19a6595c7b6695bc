//! In-memory todo store
//!
//! Owns the ordered todo list and the form draft. Descriptions are accepted
//! only after passing validation; lookups by unknown id are silent no-ops.

use tracing::{debug, info};

use super::model::{Todo, TodoFilter, TodoStats};
use crate::validation::{self, ValidationResult, ValidationRules, ValidationState};

/// Items seeded by [`TodoStore::with_samples`]
const SAMPLE_TODOS: [(u64, &str, bool); 3] = [
    (1, "Learn Angular Signals", false),
    (2, "Implement dark mode", true),
    (3, "Create professional UI", false),
];

/// What a call to [`TodoStore::save`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A new item was appended to the list
    Created(Todo),
    /// An existing item was overwritten from the draft
    Updated(Todo),
    /// The draft referred to an id not in the list; the draft was cleared
    Missing { id: u64 },
    /// The draft failed validation; nothing changed
    Rejected(ValidationResult),
}

/// Todo list state behind the form and list views
#[derive(Debug, Clone)]
pub struct TodoStore {
    todos: Vec<Todo>,
    draft: Todo,
    filter: TodoFilter,
    rules: ValidationRules,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    /// Create an empty store using the default validation rules
    pub fn new() -> Self {
        Self::with_rules(ValidationRules::default())
    }

    /// Create an empty store validating drafts against `rules`
    pub fn with_rules(rules: ValidationRules) -> Self {
        Self {
            todos: Vec::new(),
            draft: Todo::draft(),
            filter: TodoFilter::default(),
            rules,
        }
    }

    /// Replace the list with the sample items
    pub fn with_samples(mut self) -> Self {
        self.todos = SAMPLE_TODOS
            .iter()
            .map(|&(id, description, completed)| {
                Todo::new(id, description).with_completed(completed)
            })
            .collect();
        self
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// All items in insertion order
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: u64) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    // ------------------------------------------------------------------
    // Draft
    // ------------------------------------------------------------------

    /// The record bound to the create/edit form
    pub fn draft(&self) -> &Todo {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Todo {
        &mut self.draft
    }

    pub fn set_draft_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    /// Load a copy of `todo` into the draft for editing
    pub fn edit_description(&mut self, todo: &Todo) {
        self.draft = todo.clone();
    }

    /// Reset the draft to an empty new item
    pub fn cancel(&mut self) {
        self.draft = Todo::draft();
    }

    /// Commit the draft.
    ///
    /// A draft with the new-item id is appended under the next free id; any
    /// other id overwrites the matching item. The draft is cleared afterwards
    /// unless validation failed.
    pub fn save(&mut self) -> SaveOutcome {
        let result = validation::validate(&self.draft.description, &self.rules);
        if !result.is_valid {
            debug!("Draft rejected: {:?}", result.errors);
            return SaveOutcome::Rejected(result);
        }

        let description = self.draft.description.trim().to_string();

        if self.draft.is_new() {
            let todo = Todo::new(self.next_id(), description);
            info!("Created todo {}", todo.id);
            self.todos.push(todo.clone());
            self.cancel();
            return SaveOutcome::Created(todo);
        }

        let id = self.draft.id;
        let completed = self.draft.completed;
        let outcome = match self.todos.iter_mut().find(|t| t.id == id) {
            Some(existing) => {
                existing.description = description;
                existing.completed = completed;
                info!("Updated todo {}", id);
                SaveOutcome::Updated(existing.clone())
            }
            None => {
                debug!("Draft refers to missing todo {}", id);
                SaveOutcome::Missing { id }
            }
        };
        self.cancel();
        outcome
    }

    /// One past the largest live id, or 1 for an empty list
    fn next_id(&self) -> u64 {
        self.todos.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Remove the item with `id`. Returns whether anything was removed.
    pub fn delete_todo(&mut self, id: u64) -> bool {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        let removed = self.todos.len() != before;
        if removed {
            info!("Deleted todo {}", id);
        } else {
            debug!("Delete skipped, no todo {}", id);
        }
        removed
    }

    /// Overwrite the stored item sharing `todo`'s id. Returns whether it was found.
    pub fn update_todo(&mut self, todo: &Todo) -> bool {
        match self.todos.iter_mut().find(|t| t.id == todo.id) {
            Some(existing) => {
                *existing = todo.clone();
                info!("Replaced todo {}", todo.id);
                true
            }
            None => {
                debug!("Update skipped, no todo {}", todo.id);
                false
            }
        }
    }

    /// Flip `todo.completed` and store the result
    pub fn toggle_complete(&mut self, todo: &mut Todo) -> bool {
        todo.completed = !todo.completed;
        self.update_todo(todo)
    }

    /// Flip the completed flag of the stored item with `id`.
    ///
    /// Returns the new flag, or `None` when no such item exists.
    pub fn toggle_by_id(&mut self, id: u64) -> Option<bool> {
        let mut todo = self.get(id)?.clone();
        self.toggle_complete(&mut todo);
        Some(todo.completed)
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    pub fn filter(&self) -> TodoFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: TodoFilter) {
        self.filter = filter;
    }

    /// Items selected by `filter`, in list order
    pub fn filtered_todos(&self, filter: TodoFilter) -> Vec<&Todo> {
        self.todos.iter().filter(|t| filter.matches(t)).collect()
    }

    /// Items selected by the current filter
    pub fn visible_todos(&self) -> Vec<&Todo> {
        self.filtered_todos(self.filter)
    }

    pub fn active_count(&self) -> usize {
        self.todos.iter().filter(|t| !t.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }

    pub fn total_count(&self) -> usize {
        self.todos.len()
    }

    pub fn filter_count(&self, filter: TodoFilter) -> usize {
        match filter {
            TodoFilter::All => self.total_count(),
            TodoFilter::Active => self.active_count(),
            TodoFilter::Completed => self.completed_count(),
        }
    }

    /// Count for a filter given by name; unknown names count every item
    pub fn filter_count_by_name(&self, name: &str) -> usize {
        name.parse::<TodoFilter>()
            .map_or_else(|_| self.total_count(), |filter| self.filter_count(filter))
    }

    pub fn stats(&self) -> TodoStats {
        let completed = self.completed_count();
        TodoStats {
            total: self.total_count(),
            active: self.total_count() - completed,
            completed,
        }
    }

    pub fn completion_percentage(&self) -> f64 {
        self.stats().completion_percentage()
    }

    /// Completion formatted for display, e.g. `33.33%`
    pub fn progress_label(&self) -> String {
        format!("{:.2}%", self.completion_percentage())
    }

    // ------------------------------------------------------------------
    // Validation feedback
    // ------------------------------------------------------------------

    pub fn validation_result(&self, description: &str) -> ValidationResult {
        validation::validate(description, &self.rules)
    }

    pub fn validation_state(&self, description: &str) -> ValidationState {
        validation::validation_state(description, &self.rules)
    }

    pub fn draft_validation_result(&self) -> ValidationResult {
        self.validation_result(&self.draft.description)
    }

    pub fn draft_validation_state(&self) -> ValidationState {
        self.validation_state(&self.draft.description)
    }

    /// Whether the draft would currently be accepted by [`save`](Self::save)
    pub fn is_form_valid(&self) -> bool {
        self.draft_validation_result().is_valid
    }
}
