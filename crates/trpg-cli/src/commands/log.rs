use trpg_session::SessionResult;

use super::Context;

pub fn add(ctx: &Context, text: &str, scene: Option<String>) -> SessionResult<()> {
    ctx.store.open_session()?;
    let mut log = ctx.log()?;
    if log.narrative(text, scene) {
        ctx.store.save_log(&log)?;
        println!("  Narrative logged");
    } else {
        println!("  Already logged");
    }
    Ok(())
}
