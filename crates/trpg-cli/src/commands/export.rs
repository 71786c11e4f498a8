use std::path::Path;

use trpg_session::{ExportFormat, SessionResult};

use super::Context;

pub fn run(ctx: &Context, format: &str, output: Option<&Path>) -> SessionResult<()> {
    let format: ExportFormat = format.parse()?;
    let path = ctx.store.export(format)?;
    println!("  Exported -> {}", path.display());

    if let Some(output) = output {
        std::fs::copy(&path, output)?;
        println!("  Copied to {}", output.display());
    }

    Ok(())
}
