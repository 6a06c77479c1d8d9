//! Event commands
//!
//! Usage: rollcall event add <NAME> | list | rm <ID>

use clap::{Args, Subcommand};
use serde_json::json;

use rollcall_core::EventId;

use super::{event_lines, CommandResult, Context};

#[derive(Debug, Args)]
pub struct EventArgs {
    #[command(subcommand)]
    pub command: EventCommand,
}

#[derive(Debug, Subcommand)]
pub enum EventCommand {
    /// Create an event
    Add { name: String },
    /// List every event
    List,
    /// Delete an event and its memberships
    Rm { id: i64 },
}

pub fn execute(ctx: &Context, args: EventArgs) -> CommandResult {
    let mut dir = ctx.open()?;
    match args.command {
        EventCommand::Add { name } => {
            let event = dir.create_event(&name)?;
            ctx.emit(&event, |e| format!("✓ Created event {} ({})", e.id, e.name))
        }
        EventCommand::List => {
            let events = dir.list_events()?;
            ctx.emit(&events, |e| event_lines(e))
        }
        EventCommand::Rm { id } => {
            let deleted = dir.delete_event(EventId(id))?;
            ctx.emit(&json!({ "deleted": deleted }), |_| {
                if deleted {
                    format!("✓ Deleted event {}", id)
                } else {
                    format!("No event {}", id)
                }
            })
        }
    }
}
