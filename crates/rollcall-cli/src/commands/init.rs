//! Database initialization
//!
//! Usage: rollcall init

use serde_json::json;

use super::{CommandResult, Context};

pub fn execute(ctx: &Context) -> CommandResult {
    let dir = ctx.open()?;
    let guests = dir.list_guests()?.len();
    let events = dir.list_events()?.len();

    let summary = json!({
        "db": ctx.db.display().to_string(),
        "guests": guests,
        "events": events,
    });
    ctx.emit(&summary, |_| {
        format!(
            "✓ Initialized {} ({} guests, {} events)",
            ctx.db.display(),
            guests,
            events
        )
    })
}
