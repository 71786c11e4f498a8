use trpg_session::{DiceFormula, SessionResult};

use super::Context;

pub fn run(ctx: &Context, formula: &str, actor: Option<&str>) -> SessionResult<()> {
    ctx.store.open_session()?;
    let formula: DiceFormula = formula.parse()?;
    let roll = formula.roll(&mut rand::rng());

    let line = match actor {
        Some(actor) => format!("{actor} rolls {roll}"),
        None => format!("Roll {roll}"),
    };
    println!("  {line}");
    ctx.record([line])
}
