use trpg_session::{SessionMeta, SessionResult};

use super::Context;

pub fn new(ctx: &Context, title: &str) -> SessionResult<()> {
    let session = SessionMeta::new(title);
    ctx.store.save_session(&session)?;
    ctx.store.save_log(&ctx.empty_log())?;
    ctx.store.clear_tracker()?;

    println!("  Created session: {}", session.title);
    Ok(())
}

pub fn close(ctx: &Context) -> SessionResult<()> {
    let mut session = ctx.store.load_session()?;
    session.close();
    ctx.store.save_session(&session)?;

    println!("  Session closed");
    Ok(())
}
