use comfy_table::{ContentArrangement, Table};
use trpg_initiative::{InitiativeResult, Tracker, TurnChange};
use trpg_session::SessionResult;

use super::{Context, report};

/// Load the running encounter, apply `op`, and save it back.
///
/// Nothing is written or printed when `op` fails. Once the tracker is
/// saved, `done` is printed along with any turn change, and the change's
/// round and expiry lines go to the session log.
fn with_tracker<F>(ctx: &Context, done: Option<String>, op: F) -> SessionResult<()>
where
    F: FnOnce(&mut Tracker) -> InitiativeResult<Option<TurnChange>>,
{
    ctx.store.open_session()?;
    let mut tracker = ctx.store.load_tracker()?;
    let change = op(&mut tracker)?;
    ctx.store.save_tracker(&tracker)?;

    if let Some(done) = done {
        println!("  {done}");
    }
    if let Some(change) = change {
        ctx.record(report(&change, tracker.phase()))?;
    }
    Ok(())
}

pub fn add(ctx: &Context, name: &str, value: i32) -> SessionResult<()> {
    with_tracker(ctx, Some(format!("Added: {name} ({value})")), |tracker| {
        tracker.add(name, value)?;
        Ok(None)
    })
}

pub fn remove(ctx: &Context, name: &str) -> SessionResult<()> {
    with_tracker(ctx, Some(format!("Removed: {name}")), |tracker| {
        tracker.remove(name)?;
        Ok(None)
    })
}

pub fn update(ctx: &Context, name: &str, value: i32) -> SessionResult<()> {
    with_tracker(ctx, Some(format!("Updated: {name} ({value})")), |tracker| {
        tracker.update(name, value)?;
        Ok(None)
    })
}

pub fn start(ctx: &Context) -> SessionResult<()> {
    with_tracker(ctx, None, |tracker| Ok(Some(tracker.start())))
}

pub fn next(ctx: &Context) -> SessionResult<()> {
    with_tracker(ctx, None, |tracker| Ok(Some(tracker.next())))
}

pub fn prev(ctx: &Context) -> SessionResult<()> {
    with_tracker(ctx, None, |tracker| Ok(Some(tracker.prev())))
}

pub fn delay(ctx: &Context, name: &str) -> SessionResult<()> {
    with_tracker(ctx, Some(format!("Delayed: {name}")), |tracker| {
        tracker.delay(name).map(Some)
    })
}

pub fn resume(ctx: &Context, name: &str) -> SessionResult<()> {
    with_tracker(ctx, Some(format!("Resumed: {name}")), |tracker| {
        tracker.resume(name).map(Some)
    })
}

pub fn reset(ctx: &Context) -> SessionResult<()> {
    with_tracker(ctx, Some("Initiative cleared".to_string()), |tracker| {
        tracker.reset();
        Ok(None)
    })
}

pub fn add_effect(ctx: &Context, name: &str, effect: &str, rounds: u32) -> SessionResult<()> {
    let done = format!("{effect} on {name} for {rounds} round(s)");
    with_tracker(ctx, Some(done), |tracker| {
        tracker.add_effect(name, effect, rounds)?;
        Ok(None)
    })
}

pub fn remove_effect(ctx: &Context, name: &str, effect: &str) -> SessionResult<()> {
    with_tracker(ctx, Some(format!("{effect} removed from {name}")), |tracker| {
        tracker.remove_effect(name, effect)?;
        Ok(None)
    })
}

pub fn list(ctx: &Context) -> SessionResult<()> {
    let tracker = ctx.store.load_tracker()?;

    if tracker.is_empty() {
        println!("  No participants.");
        return Ok(());
    }

    let current = tracker.current().map(|entry| entry.id);

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["", "Name", "Init", "Status", "Effects"]);

    for entry in tracker.entries() {
        let marker = if Some(entry.id) == current { ">" } else { "" };
        let status = if entry.delayed { "delayed" } else { "" };
        let effects = entry
            .effects
            .iter()
            .map(|e| format!("{} ({})", e.name, e.remaining_rounds))
            .collect::<Vec<_>>()
            .join(", ");

        table.add_row(vec![
            marker.to_string(),
            entry.name.clone(),
            entry.value.to_string(),
            status.to_string(),
            effects,
        ]);
    }

    println!("{table}");
    println!();
    if tracker.round() == 0 {
        println!("  Not started");
    } else {
        println!("  Round {}", tracker.round());
    }

    Ok(())
}

pub fn show(ctx: &Context) -> SessionResult<()> {
    let tracker = ctx.store.load_tracker()?;
    println!("{}", serde_json::to_string_pretty(&tracker.state())?);
    Ok(())
}
