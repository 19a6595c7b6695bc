//! Command dispatch against the todo store

use std::io::Write;

use anyhow::Result;
use todo_core::todo::{SaveOutcome, Todo, TodoFilter, TodoStore};

use crate::command::{Command, HELP};

/// Whether the read loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Shell {
    store: TodoStore,
}

impl Shell {
    pub fn new(store: TodoStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> Result<Flow> {
        match command {
            Command::Add(text) => {
                self.store.cancel();
                self.store.set_draft_description(text);
                self.save(out)?;
            }
            Command::Draft(text) => {
                self.store.set_draft_description(text);
                let state = self.store.draft_validation_state();
                writeln!(
                    out,
                    "draft: {}/{} characters, {}",
                    state.character_count,
                    state.character_limit,
                    if self.store.is_form_valid() { "ready" } else { "not ready" }
                )?;
            }
            Command::Edit(id) => match self.store.get(id).cloned() {
                Some(todo) => {
                    self.store.edit_description(&todo);
                    writeln!(out, "editing #{}: {}", todo.id, todo.description)?;
                }
                None => writeln!(out, "no todo #{}", id)?,
            },
            Command::Save => self.save(out)?,
            Command::Cancel => {
                self.store.cancel();
                writeln!(out, "draft cleared")?;
            }
            Command::Delete(id) => {
                if self.store.delete_todo(id) {
                    writeln!(out, "deleted #{}", id)?;
                } else {
                    writeln!(out, "no todo #{}", id)?;
                }
            }
            Command::Toggle(id) => match self.store.toggle_by_id(id) {
                Some(completed) => writeln!(
                    out,
                    "#{} is now {}",
                    id,
                    if completed { "completed" } else { "active" }
                )?,
                None => writeln!(out, "no todo #{}", id)?,
            },
            Command::Filter(filter) => {
                self.store.set_filter(filter);
                self.list(out)?;
            }
            Command::List => self.list(out)?,
            Command::Check(text) => {
                let state = self.store.validation_state(&text);
                writeln!(out, "{}", serde_json::to_string_pretty(&state)?)?;
                for error in self.store.validation_result(&text).errors {
                    writeln!(out, "  - {}", error)?;
                }
            }
            Command::Stats => {
                for filter in TodoFilter::ALL {
                    writeln!(out, "{}: {}", filter.label(), self.store.filter_count(filter))?;
                }
                writeln!(out, "Progress: {}", self.store.progress_label())?;
            }
            Command::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(self.store.todos())?)?;
            }
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn save(&mut self, out: &mut impl Write) -> Result<()> {
        match self.store.save() {
            SaveOutcome::Created(todo) => writeln!(out, "added {}", line(&todo))?,
            SaveOutcome::Updated(todo) => writeln!(out, "updated {}", line(&todo))?,
            SaveOutcome::Missing { id } => writeln!(out, "no todo #{}, draft cleared", id)?,
            SaveOutcome::Rejected(result) => {
                writeln!(out, "not saved:")?;
                for error in result.errors {
                    writeln!(out, "  - {}", error)?;
                }
            }
        }
        Ok(())
    }

    fn list(&self, out: &mut impl Write) -> Result<()> {
        let filter = self.store.filter();
        writeln!(
            out,
            "[{}] {} of {}",
            filter.label(),
            self.store.filter_count(filter),
            self.store.total_count()
        )?;
        for todo in self.store.visible_todos() {
            writeln!(out, "  {}", line(todo))?;
        }
        Ok(())
    }
}

fn line(todo: &Todo) -> String {
    format!(
        "[{}] #{} {}",
        if todo.completed { "x" } else { " " },
        todo.id,
        todo.description
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::parse;

    fn run(shell: &mut Shell, input: &str) -> String {
        let mut out = Vec::new();
        for line in input.lines() {
            if let Some(command) = parse(line).unwrap() {
                shell.execute(command, &mut out).unwrap();
            }
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_add_and_list() {
        let mut shell = Shell::new(TodoStore::new());
        let output = run(&mut shell, "add Water the plants\nlist");

        assert!(output.contains("added [ ] #1 Water the plants"));
        assert!(output.contains("[All] 1 of 1"));
        assert_eq!(shell.store().len(), 1);
    }

    #[test]
    fn test_rejected_add_reports_errors() {
        let mut shell = Shell::new(TodoStore::new());
        let output = run(&mut shell, "add spam");

        assert!(output.contains("not saved:"));
        assert!(output.contains("prohibited words: spam"));
        assert!(shell.store().is_empty());
    }

    #[test]
    fn test_edit_flow() {
        let mut shell = Shell::new(TodoStore::new().with_samples());
        let output = run(&mut shell, "edit 2\ndraft Implement light mode\nsave");

        assert!(output.contains("editing #2: Implement dark mode"));
        assert!(output.contains("updated [x] #2 Implement light mode"));
    }

    #[test]
    fn test_filter_and_stats() {
        let mut shell = Shell::new(TodoStore::new().with_samples());
        let output = run(&mut shell, "toggle 1\nfilter completed\nstats");

        assert!(output.contains("#1 is now completed"));
        assert!(output.contains("[Completed] 2 of 3"));
        assert!(output.contains("Progress: 66.67%"));
    }

    #[test]
    fn test_quit() {
        let mut shell = Shell::new(TodoStore::new());
        let mut out = Vec::new();
        assert_eq!(shell.execute(Command::Quit, &mut out).unwrap(), Flow::Exit);
    }
}
