//! Directory queries
//!
//! Usage: rollcall query guests <EVENT> | events <GUEST> | role <ROLE> | top <N>

use clap::{Args, Subcommand};

use rollcall_core::{EventId, GuestId, GuestRanking};

use super::{event_lines, guest_lines, CommandResult, Context};

#[derive(Debug, Args)]
pub struct QueryArgs {
    #[command(subcommand)]
    pub command: QueryCommand,
}

#[derive(Debug, Subcommand)]
pub enum QueryCommand {
    /// Guests attending an event
    Guests { event: i64 },
    /// Events a guest belongs to
    Events { guest: i64 },
    /// Events reached through memberships with this exact role
    Role { role: String },
    /// Guests with the most memberships
    Top { n: usize },
}

pub fn execute(ctx: &Context, args: QueryArgs) -> CommandResult {
    let dir = ctx.open()?;
    match args.command {
        QueryCommand::Guests { event } => {
            let guests = dir.list_guests_for_event(EventId(event))?;
            ctx.emit(&guests, |g| guest_lines(g))
        }
        QueryCommand::Events { guest } => {
            let events = dir.list_events_for_guest(GuestId(guest))?;
            ctx.emit(&events, |e| event_lines(e))
        }
        QueryCommand::Role { role } => {
            let events = dir.list_events_for_role(&role)?;
            ctx.emit(&events, |e| event_lines(e))
        }
        QueryCommand::Top { n } => {
            let rankings = dir.top_guests(n)?;
            ctx.emit(&rankings, |r| ranking_lines(r))
        }
    }
}

/// `name: count (event, event, ...)` per ranked guest
pub fn ranking_lines(rankings: &[GuestRanking]) -> String {
    rankings
        .iter()
        .map(|r| {
            let events: Vec<_> = r.events.iter().map(|e| e.name.as_str()).collect();
            format!(
                "{}\t{}\t{}\t{}",
                r.guest.id,
                r.guest.name,
                r.event_count,
                events.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
