use trpg_session::SessionResult;

use super::Context;

pub fn start(ctx: &Context) -> SessionResult<()> {
    ctx.store.open_session()?;
    ctx.store.save_tracker(&ctx.new_tracker())?;
    ctx.record(["Encounter started".to_string()])?;

    println!("  Encounter started. Add participants with: trpg init add <name> <value>");
    Ok(())
}

pub fn end(ctx: &Context) -> SessionResult<()> {
    if ctx.store.clear_tracker()? {
        ctx.record(["Encounter ended".to_string()])?;
        println!("  Encounter ended");
    } else {
        println!("  No encounter to end");
    }
    Ok(())
}
