use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::{Level as TraceLevel, info};
use tracing_subscriber::FmtSubscriber;

use reticle_overlay::compositor::compose;
use reticle_overlay::config::FileStore;
use reticle_overlay::gui::{PreviewSurface, run_gui};
use reticle_overlay::presets::Preset;
use reticle_overlay::sync::{ApplyOutcome, SettingsSyncEngine};

#[derive(Parser, Debug)]
#[command(name = "reticle-overlay", version)]
#[command(about = "Layered crosshair reticle with live-applied settings")]
struct Args {
    /// Settings file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level regardless of LOG_LEVEL
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the settings window with live preview (default)
    Gui,
    /// Print every stored setting as key=value
    Show,
    /// Print the composed draw list
    Compose {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Apply one or more KEY=VALUE pairs as a single batch
    Set {
        #[arg(required = true, value_parser = parse_assignment)]
        fields: Vec<(String, String)>,
    },
    /// Switch layer toggles to a preset (cross, dot, layered)
    Preset { name: Preset },
    /// Restore every setting to its default
    Reset,
}

type Engine = SettingsSyncEngine<FileStore, PreviewSurface>;

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.trim().to_string(), value.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))
}

fn init_logging(verbose: bool) -> Result<()> {
    // Parse log level from environment variable
    let log_level = if verbose {
        TraceLevel::DEBUG
    } else {
        match std::env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string())
            .to_lowercase()
            .as_str()
        {
            "trace" => TraceLevel::TRACE,
            "debug" => TraceLevel::DEBUG,
            "warn" => TraceLevel::WARN,
            "error" => TraceLevel::ERROR,
            _ => TraceLevel::INFO,
        }
    };

    // stdout is reserved for command output
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("Failed to install log subscriber")
}

/// Turn an apply outcome into a CLI result
fn report(outcome: ApplyOutcome, engine: &Engine) -> Result<()> {
    match outcome {
        ApplyOutcome::Applied { persisted: true } => Ok(()),
        ApplyOutcome::Applied { persisted: false } => bail!(
            "settings applied but could not be written to {}",
            engine.store().path().display()
        ),
        ApplyOutcome::Rejected(err) => bail!("rejected, nothing was changed: {err}"),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let store = match args.config {
        Some(path) => FileStore::new(path),
        None => FileStore::default(),
    };
    info!(path = %store.path().display(), "Using settings file");

    let mut engine: Engine = SettingsSyncEngine::new(store, PreviewSurface::new());

    match args.command.unwrap_or(Command::Gui) {
        Command::Gui => run_gui(engine),
        Command::Show => {
            for (key, value) in engine.config().to_map() {
                println!("{key}={value}");
            }
            Ok(())
        }
        Command::Compose { json } => {
            let frame = compose(engine.config());
            if json {
                let output = serde_json::json!({
                    "opacity": engine.config().opacity.as_f64(),
                    "primitives": frame,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("opacity={}", engine.config().opacity.to_stored_string());
                for item in &frame {
                    println!("{:?}\t{:?}", item.layer, item.primitive);
                }
            }
            Ok(())
        }
        Command::Set { fields } => {
            let outcome = engine.apply_batch(fields.iter().map(|(key, value)| (key, value)));
            report(outcome, &engine)
        }
        Command::Preset { name } => {
            let outcome = name.apply(&mut engine);
            report(outcome, &engine)
        }
        Command::Reset => {
            let outcome = engine.reset_to_defaults();
            report(outcome, &engine)
        }
    }
}
