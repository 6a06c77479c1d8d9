//! Subcommand implementations

use std::path::PathBuf;

use serde::Serialize;

use rollcall_engine::EventGuestDirectory;
use rollcall_store::SqliteDirectory;

pub mod demo;
pub mod event;
pub mod guest;
pub mod init;
pub mod member;
pub mod query;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Options shared by every subcommand
#[derive(Debug)]
pub struct Context {
    pub db: PathBuf,
    pub json: bool,
}

impl Context {
    /// Open (creating and migrating if needed) the configured database
    pub fn open(&self) -> Result<EventGuestDirectory<SqliteDirectory>, Box<dyn std::error::Error>> {
        Ok(EventGuestDirectory::open_sqlite(&self.db)?)
    }

    /// Print `value` as JSON under `--json`, otherwise the text rendering
    pub fn emit<T, F>(&self, value: &T, text: F) -> CommandResult
    where
        T: Serialize,
        F: FnOnce(&T) -> String,
    {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            let rendered = text(value);
            if !rendered.is_empty() {
                println!("{}", rendered);
            }
        }
        Ok(())
    }
}

/// One `id<TAB>name` line per guest
pub fn guest_lines(guests: &[rollcall_core::Guest]) -> String {
    guests
        .iter()
        .map(|g| format!("{}\t{}", g.id, g.name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One `id<TAB>name` line per event
pub fn event_lines(events: &[rollcall_core::Event]) -> String {
    events
        .iter()
        .map(|e| format!("{}\t{}", e.id, e.name))
        .collect::<Vec<_>>()
        .join("\n")
}
