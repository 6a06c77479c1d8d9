//! Membership commands
//!
//! Usage: rollcall member add <GUEST> <EVENT> <ROLE> | role <GUEST> <EVENT> <ROLE>
//!        | rm <GUEST> <EVENT> | list

use clap::{Args, Subcommand};
use serde_json::json;

use rollcall_core::{EventId, GuestId};

use super::{CommandResult, Context};

#[derive(Debug, Args)]
pub struct MemberArgs {
    #[command(subcommand)]
    pub command: MemberCommand,
}

#[derive(Debug, Subcommand)]
pub enum MemberCommand {
    /// Add a guest to an event with a role
    Add {
        guest: i64,
        event: i64,
        role: String,
    },
    /// Change the role of an existing membership
    Role {
        guest: i64,
        event: i64,
        role: String,
    },
    /// Remove a guest from an event
    Rm { guest: i64, event: i64 },
    /// List every membership
    List,
}

pub fn execute(ctx: &Context, args: MemberArgs) -> CommandResult {
    let mut dir = ctx.open()?;
    match args.command {
        MemberCommand::Add { guest, event, role } => {
            dir.add_membership(GuestId(guest), EventId(event), &role)?;
            let added = json!({ "guest_id": guest, "event_id": event, "role": &role });
            ctx.emit(&added, |_| {
                format!("✓ Guest {} joined event {} as {:?}", guest, event, role)
            })
        }
        MemberCommand::Role { guest, event, role } => {
            let changed = dir.change_membership_role(GuestId(guest), EventId(event), &role)?;
            ctx.emit(&json!({ "changed": changed }), |_| {
                if changed {
                    format!("✓ Guest {} is now {:?} at event {}", guest, role, event)
                } else {
                    format!("Guest {} is not a member of event {}", guest, event)
                }
            })
        }
        MemberCommand::Rm { guest, event } => {
            let removed = dir.remove_membership(GuestId(guest), EventId(event))?;
            ctx.emit(&json!({ "removed": removed }), |_| {
                if removed {
                    format!("✓ Guest {} left event {}", guest, event)
                } else {
                    format!("Guest {} is not a member of event {}", guest, event)
                }
            })
        }
        MemberCommand::List => {
            let memberships = dir.list_memberships()?;
            ctx.emit(&memberships, |ms| {
                ms.iter()
                    .map(|m| format!("{}\t{}\t{}", m.guest_id, m.event_id, m.role))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }
    }
}
