//! Line-oriented front-end for the TodoPro store
//!
//! Reads commands from stdin and prints results to stdout. Logs go to stderr.

mod command;
mod config;
mod shell;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ShellConfig;
use crate::shell::{Flow, Shell};
use todo_core::todo::TodoStore;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_shell=info,todo_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = ShellConfig::from_env();
    let rules = config.validation_rules()?;
    tracing::info!(
        "Validation rules: length {}..={}, {} prohibited word(s)",
        rules.min_length(),
        rules.max_length(),
        rules.prohibited_words().len()
    );

    let mut store = TodoStore::with_rules(rules);
    if config.seed_samples {
        store = store.with_samples();
        tracing::info!("Seeded {} sample todos", store.len());
    }

    let mut shell = Shell::new(store);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "Type 'help' for commands.")?;
    for line in stdin.lock().lines() {
        let line = line?;
        match command::parse(&line) {
            Ok(Some(command)) => {
                if shell.execute(command, &mut stdout)? == Flow::Exit {
                    break;
                }
            }
            Ok(None) => {}
            Err(message) => writeln!(stdout, "{}", message)?,
        }
        stdout.flush()?;
    }

    tracing::info!("Exiting with {} todos", shell.store().len());
    Ok(())
}
