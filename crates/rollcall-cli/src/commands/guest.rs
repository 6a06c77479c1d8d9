//! Guest commands
//!
//! Usage: rollcall guest add <NAME> | list | rm <ID>

use clap::{Args, Subcommand};
use serde_json::json;

use rollcall_core::GuestId;

use super::{guest_lines, CommandResult, Context};

#[derive(Debug, Args)]
pub struct GuestArgs {
    #[command(subcommand)]
    pub command: GuestCommand,
}

#[derive(Debug, Subcommand)]
pub enum GuestCommand {
    /// Create a guest
    Add { name: String },
    /// List every guest
    List,
    /// Delete a guest and its memberships
    Rm { id: i64 },
}

pub fn execute(ctx: &Context, args: GuestArgs) -> CommandResult {
    let mut dir = ctx.open()?;
    match args.command {
        GuestCommand::Add { name } => {
            let guest = dir.create_guest(&name)?;
            ctx.emit(&guest, |g| format!("✓ Created guest {} ({})", g.id, g.name))
        }
        GuestCommand::List => {
            let guests = dir.list_guests()?;
            ctx.emit(&guests, |g| guest_lines(g))
        }
        GuestCommand::Rm { id } => {
            let deleted = dir.delete_guest(GuestId(id))?;
            ctx.emit(&json!({ "deleted": deleted }), |_| {
                if deleted {
                    format!("✓ Deleted guest {}", id)
                } else {
                    format!("No guest {}", id)
                }
            })
        }
    }
}
