//! Interactive session loop.
//!
//! Reads one line per iteration, dispatches keywords (`exit`, `show`,
//! `reset`) case-insensitively, and treats everything else as a candidate
//! value. Generic over its streams so tests can drive it with buffers.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::classify::{classify, Classification};
use crate::normalize::normalize;
use crate::store::{Store, StoreError, TIMESTAMP_FORMAT};

/// A parsed line of user input. Keywords win over data.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Exit,
    Show,
    Reset,
    Value(String),
}

impl Command {
    fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_lowercase().as_str() {
            "exit" => Command::Exit,
            "show" => Command::Show,
            "reset" => Command::Reset,
            _ => Command::Value(trimmed.to_string()),
        }
    }
}

/// Run the session until `exit` or end of input.
pub fn run<R: BufRead, W: Write>(store: &Store, mut input: R, output: &mut W) -> Result<()> {
    writeln!(output, "📌 Duplicate-rejecting value store")?;
    writeln!(
        output,
        "Type a value to insert, or commands: 'show', 'reset', 'exit'"
    )?;

    let mut line = String::new();
    loop {
        write!(output, "Enter data: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // EOF behaves like exit
            break;
        }

        match Command::parse(&line) {
            Command::Exit => break,
            Command::Show => print_table(store, output)?,
            Command::Reset => {
                store.initialize(true)?;
                writeln!(output, "🔄 Table dropped and recreated.")?;
                print_table(store, output)?;
            }
            Command::Value(value) => {
                handle_value(store, &value, output)?;
                print_table(store, output)?;
            }
        }
    }

    Ok(())
}

fn handle_value<W: Write>(store: &Store, raw: &str, output: &mut W) -> Result<()> {
    match classify(store, Some(raw))? {
        Classification::Invalid => {
            writeln!(output, "⚠️ Ignored invalid input (empty/blank)")?;
        }
        Classification::Duplicate => {
            writeln!(output, "❌ Duplicate ignored: {raw}")?;
        }
        Classification::Novel => {
            let value = raw.trim();
            match store.insert(value, &normalize(value)) {
                Ok(entry) => writeln!(output, "✅ Inserted: {}", entry.value)?,
                // Lost the race against another writer between the
                // existence check and the insert; same outcome as a
                // pre-insert duplicate.
                Err(StoreError::Conflict) => {
                    writeln!(output, "❌ Duplicate ignored: {raw}")?;
                }
                Err(StoreError::Sqlite(e)) => return Err(e.into()),
            }
        }
    }

    Ok(())
}

fn print_table<W: Write>(store: &Store, output: &mut W) -> Result<()> {
    let entries = store.list_all()?;

    if entries.is_empty() {
        writeln!(output, "\n📂 Store is empty.")?;
        return Ok(());
    }

    writeln!(output, "\n📂 Stored entries:")?;
    for entry in &entries {
        writeln!(
            output,
            "({}, '{}', {})",
            entry.id,
            entry.value,
            entry.created_at.format(TIMESTAMP_FORMAT)
        )?;
    }

    Ok(())
}
