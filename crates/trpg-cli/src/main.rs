//! CLI frontend for the tabletop RPG initiative tracker and session log.

mod commands;
mod logging;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use commands::Context;
use trpg_session::SessionResult;

#[derive(Parser)]
#[command(
    name = "trpg",
    about = "Initiative tracking and session logging for tabletop RPGs",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start or close a play session
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Start or end an encounter
    Enc {
        #[command(subcommand)]
        action: EncAction,
    },

    /// Manage the initiative order of the running encounter
    Init {
        #[command(subcommand)]
        action: InitAction,
    },

    /// Roll a dice formula such as 1d20+5 and log the result
    Roll {
        /// Dice formula: NdM, NdM+X, NdM-X or dM
        formula: String,

        /// Who is rolling
        #[arg(long = "as", value_name = "ACTOR")]
        actor: Option<String>,
    },

    /// Write to the session log
    Log {
        #[command(subcommand)]
        action: LogAction,
    },

    /// Export the session log to exports/ in the session home
    Export {
        /// Output format: md, json
        format: String,

        /// Also copy the export to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum SessionAction {
    /// Begin a new session, discarding the previous log and encounter
    New {
        /// Session title (default: Untitled)
        title: Vec<String>,
    },

    /// Close the current session
    Close,
}

#[derive(Subcommand)]
enum EncAction {
    /// Start an empty encounter
    Start,

    /// Discard the running encounter
    End,
}

#[derive(Subcommand)]
enum InitAction {
    /// Add a participant
    Add {
        /// Participant name
        name: String,

        /// Initiative score (higher acts first)
        #[arg(allow_negative_numbers = true)]
        value: i32,
    },

    /// Remove a participant
    Remove {
        /// Participant name
        name: String,
    },

    /// Change a participant's initiative score
    Update {
        /// Participant name
        name: String,

        /// New initiative score
        #[arg(allow_negative_numbers = true)]
        value: i32,
    },

    /// Begin round 1
    Start,

    /// Advance to the next turn
    Next,

    /// Step back to the previous turn
    Prev,

    /// Step a participant out of the rotation
    Delay {
        /// Participant name
        name: String,
    },

    /// Bring a delayed participant back in right after the current turn
    #[command(alias = "return")]
    Resume {
        /// Participant name
        name: String,
    },

    /// Clear the encounter's participants and round counter
    Reset,

    /// Attach or detach timed effects
    Effect {
        #[command(subcommand)]
        action: EffectAction,
    },

    /// Show the initiative order
    List,

    /// Print the tracker state as JSON
    Show,
}

#[derive(Subcommand)]
enum EffectAction {
    /// Attach an effect lasting a number of rounds
    Add {
        /// Participant name
        name: String,

        /// Effect name
        effect: String,

        /// Rounds until the effect expires
        rounds: u32,
    },

    /// Detach an effect early
    Remove {
        /// Participant name
        name: String,

        /// Effect name
        effect: String,
    },
}

#[derive(Subcommand)]
enum LogAction {
    /// Record a narrative line
    Add {
        /// Text to record
        #[arg(required = true)]
        text: Vec<String>,

        /// Scene label
        #[arg(long)]
        scene: Option<String>,
    },
}

fn dispatch(ctx: &Context, command: Commands) -> SessionResult<()> {
    match command {
        Commands::Session { action } => match action {
            SessionAction::New { title } => commands::session::new(ctx, &title.join(" ")),
            SessionAction::Close => commands::session::close(ctx),
        },
        Commands::Enc { action } => match action {
            EncAction::Start => commands::encounter::start(ctx),
            EncAction::End => commands::encounter::end(ctx),
        },
        Commands::Init { action } => match action {
            InitAction::Add { name, value } => commands::initiative::add(ctx, &name, value),
            InitAction::Remove { name } => commands::initiative::remove(ctx, &name),
            InitAction::Update { name, value } => commands::initiative::update(ctx, &name, value),
            InitAction::Start => commands::initiative::start(ctx),
            InitAction::Next => commands::initiative::next(ctx),
            InitAction::Prev => commands::initiative::prev(ctx),
            InitAction::Delay { name } => commands::initiative::delay(ctx, &name),
            InitAction::Resume { name } => commands::initiative::resume(ctx, &name),
            InitAction::Reset => commands::initiative::reset(ctx),
            InitAction::Effect { action } => match action {
                EffectAction::Add {
                    name,
                    effect,
                    rounds,
                } => commands::initiative::add_effect(ctx, &name, &effect, rounds),
                EffectAction::Remove { name, effect } => {
                    commands::initiative::remove_effect(ctx, &name, &effect)
                }
            },
            InitAction::List => commands::initiative::list(ctx),
            InitAction::Show => commands::initiative::show(ctx),
        },
        Commands::Roll { formula, actor } => commands::roll::run(ctx, &formula, actor.as_deref()),
        Commands::Log { action } => match action {
            LogAction::Add { text, scene } => commands::log::add(ctx, &text.join(" "), scene),
        },
        Commands::Export { format, output } => {
            commands::export::run(ctx, &format, output.as_deref())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init();

    let result = Context::load().and_then(|ctx| dispatch(&ctx, cli.command));

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
