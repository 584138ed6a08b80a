use anyhow::Result;
use clap::{Parser, Subcommand};
use keyscope::keybindings::{group_by_scope, normalize_event, KeyPress, Scope, ShortcutBinding};
use keyscope::{config, tui};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "keyscope")]
#[command(about = "Scoped keyboard shortcut registry with a terminal playground")]
#[command(version)]
struct Args {
    /// Write a default config file and exit
    #[arg(long)]
    init: bool,

    /// Path to config file
    #[arg(long, short)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the canonical form of a key press
    Normalize {
        /// Key name, e.g. "K" or "Enter"
        key: String,
        #[arg(long)]
        ctrl: bool,
        #[arg(long)]
        meta: bool,
        /// Accepted for completeness; shift never changes the canonical key
        #[arg(long)]
        shift: bool,
    },
    /// List the playground's bindings grouped by scope
    List {
        /// Only bindings active under this scope
        #[arg(long)]
        scope: Option<Scope>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct BindingSummary<'a> {
    id: &'a str,
    key: &'a str,
    scope: Scope,
    description: &'a str,
    raw: bool,
}

impl<'a> From<&'a ShortcutBinding> for BindingSummary<'a> {
    fn from(b: &'a ShortcutBinding) -> Self {
        Self {
            id: &b.id,
            key: &b.key,
            scope: b.scope,
            description: &b.description,
            raw: b.use_raw_key,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.init {
        let path = config::init(args.config.as_deref())?;
        println!("Config saved to {}", path.display());
        return Ok(());
    }

    let config = config::load(args.config.as_deref())?;

    // Initialize logging (stderr keeps the alternate screen clean)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("keyscope={}", config.logging.level).parse()?),
        )
        .init();

    match args.command {
        Some(Command::Normalize {
            key,
            ctrl,
            meta,
            shift,
        }) => {
            let mut press = KeyPress::new(key);
            press.ctrl = ctrl;
            press.meta = meta;
            press.shift = shift;
            println!("{}", normalize_event(&press));
            Ok(())
        }
        Some(Command::List { scope, json }) => list(&config, scope, json),
        None => tui::run(config).await,
    }
}

fn list(config: &config::Config, scope: Option<Scope>, json: bool) -> Result<()> {
    let app = tui::App::new(config);
    let bindings = match scope {
        Some(scope) => {
            app.shortcuts.set_scope(scope);
            app.shortcuts.scoped_bindings()
        }
        None => app.shortcuts.bindings(),
    };

    if json {
        let summaries: Vec<BindingSummary> = bindings.iter().map(BindingSummary::from).collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    for (scope, group) in group_by_scope(&bindings) {
        println!("{}", scope);
        for b in group {
            let raw = if b.use_raw_key { " (raw)" } else { "" };
            println!("  {:<14}{:<24}{}{}", b.key, b.id, b.description, raw);
        }
    }
    Ok(())
}
