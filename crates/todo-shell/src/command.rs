//! Shell command parsing

use todo_core::todo::TodoFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Draft(String),
    Edit(u64),
    Save,
    Cancel,
    Delete(u64),
    Toggle(u64),
    Filter(TodoFilter),
    List,
    Check(String),
    Stats,
    Json,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  add <text>       stage and save a new todo
  draft <text>     set the draft description
  edit <id>        load a todo into the draft
  save             commit the draft
  cancel           discard the draft
  delete <id>      remove a todo
  toggle <id>      flip a todo's completed flag
  filter <name>    show all | active | completed
  list             print the current view
  check <text>     show validation feedback for text
  stats            print counts and progress
  json             dump the list as JSON
  help             show this message
  quit             exit";

/// Parse one input line. Blank lines parse to `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    let command = match name {
        "add" => Command::Add(rest.to_string()),
        "draft" => Command::Draft(rest.to_string()),
        "edit" => Command::Edit(id(rest)?),
        "save" => Command::Save,
        "cancel" => Command::Cancel,
        "delete" | "rm" => Command::Delete(id(rest)?),
        "toggle" => Command::Toggle(id(rest)?),
        "filter" => Command::Filter(rest.parse::<TodoFilter>().map_err(|e| format!("{}", e))?),
        "list" | "ls" => Command::List,
        "check" => Command::Check(rest.to_string()),
        "stats" => Command::Stats,
        "json" => Command::Json,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("Unknown command: {}", other)),
    };

    Ok(Some(command))
}

fn id(raw: &str) -> Result<u64, String> {
    raw.parse::<u64>()
        .map_err(|_| format!("Expected a numeric id, got '{}'", raw))
}
