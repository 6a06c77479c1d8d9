//! Demo command
//!
//! Usage: rollcall demo
//!
//! Wipes the configured database before seeding.

use rollcall_engine::{run_demo_fresh, DemoReport};

use super::query::ranking_lines;
use super::{event_lines, guest_lines, CommandResult, Context};

pub fn execute(ctx: &Context) -> CommandResult {
    let mut dir = ctx.open()?;
    let report = run_demo_fresh(&mut dir)?;
    ctx.emit(&report, render)
}

fn render(report: &DemoReport) -> String {
    let mut out = Vec::new();
    out.push(format!("Guests on {}:", report.seed.meeting.name));
    out.push(guest_lines(&report.guests_on_event));
    out.push(format!("Events for {}:", report.seed.jeff.name));
    out.push(event_lines(&report.events_for_guest));
    out.push(format!(
        "Role change to Moderator: {}",
        if report.role_changed { "applied" } else { "skipped" }
    ));
    out.push("Events with a Speaker:".to_string());
    if report.speaker_events.is_empty() {
        out.push("(none)".to_string());
    } else {
        out.push(event_lines(&report.speaker_events));
    }
    out.push("Top guests:".to_string());
    out.push(ranking_lines(&report.top_guests));
    out.join("\n")
}
