//! Showcase CLI
//!
//! Render pages, inspect the environment and drive sessions of the Components Showcase.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use showcase_app::session::{execute, is_blank};
use showcase_app::{router, run_script, AppConfig, Command, EnvConfig, ShowcaseApp, ROUTES};
use showcase_theme::ColorScheme;
use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;

#[derive(Parser)]
#[command(name = "showcase")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Components Showcase CLI", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Application config file (defaults to ./showcase.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the route table
    Routes,

    /// Render one page to HTML on stdout
    Render {
        /// Path to render
        #[arg(default_value = "/")]
        path: String,

        /// Color scheme (light or dark)
        #[arg(short, long)]
        theme: Option<ColorScheme>,
    },

    /// Print the resolved environment configuration
    Env {
        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: EnvFormat,
    },

    /// Run a session script on virtual time
    Replay {
        /// Script file, one command per line
        script: PathBuf,
    },

    /// Interactive session; timers advance in real time
    Repl {
        /// Clock tick in milliseconds
        #[arg(long, default_value = "50")]
        tick_ms: u64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum EnvFormat {
    Json,
    Toml,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let env = EnvConfig::from_env();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_new(&env.log_level).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let app_config = config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Routes => cmd_routes(),
        Commands::Render { path, theme } => cmd_render(app_config, env, &path, theme),
        Commands::Env { format } => cmd_env(&env, format),
        Commands::Replay { script } => cmd_replay(app_config, env, &script),
        Commands::Repl { tick_ms } => cmd_repl(app_config, env, tick_ms),
    }
}

fn cmd_routes() -> Result<()> {
    for entry in ROUTES {
        println!("{:<14} {}", entry.path, entry.route.title());
    }
    for (from, to) in router::REDIRECTS {
        println!("{:<14} -> {}", from, to);
    }
    println!("{:<14} {}", "*", router::Route::NotFound.title());
    Ok(())
}

fn cmd_render(
    mut app_config: AppConfig,
    env: EnvConfig,
    path: &str,
    theme: Option<ColorScheme>,
) -> Result<()> {
    if let Some(scheme) = theme {
        app_config.theme.initial = scheme;
    }
    let mut app = ShowcaseApp::new(app_config, env);
    let route = app.navigate(path);
    info!("Rendering {} ({})", app.location(), route);
    println!("{}", app.render_html());
    Ok(())
}

fn cmd_env(env: &EnvConfig, format: EnvFormat) -> Result<()> {
    let text = match format {
        EnvFormat::Json => {
            serde_json::to_string_pretty(env).context("Failed to serialize environment")?
        }
        EnvFormat::Toml => env.to_toml().context("Failed to serialize environment")?,
    };
    println!("{text}");
    Ok(())
}

fn cmd_replay(app_config: AppConfig, env: EnvConfig, script: &Path) -> Result<()> {
    let content = fs::read_to_string(script)
        .with_context(|| format!("Failed to read {}", script.display()))?;

    let mut app = ShowcaseApp::new(app_config, env);
    let count = run_script(&mut app, &content, |text| println!("{text}"))
        .with_context(|| format!("Replay of {} failed", script.display()))?;

    info!("Replayed {} commands from {}", count, script.display());
    Ok(())
}

fn cmd_repl(app_config: AppConfig, env: EnvConfig, tick_ms: u64) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<String>();

    // stdin is blocking; read it on its own thread
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    let mut app = ShowcaseApp::new(app_config, env);
    info!("Session started on {}. Type commands, Ctrl-D to quit.", app.location());

    runtime.block_on(async move {
        let mut ticker = tokio::time::interval(Duration::from_millis(tick_ms.max(1)));
        let started = Instant::now();
        let mut advanced_ms: u64 = 0;

        loop {
            ticker.tick().await;

            let now_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
            app.advance(now_ms.saturating_sub(advanced_ms));
            advanced_ms = now_ms;

            loop {
                match rx.try_recv() {
                    Ok(line) => run_line(&mut app, &line),
                    Err(tokio::sync::mpsc::error::TryRecvError::Empty) => break,
                    Err(tokio::sync::mpsc::error::TryRecvError::Disconnected) => {
                        info!("Session ended");
                        return;
                    }
                }
            }
        }
    });

    Ok(())
}

fn run_line(app: &mut ShowcaseApp, line: &str) {
    if is_blank(line) {
        return;
    }
    let result = line
        .parse::<Command>()
        .and_then(|command| execute(app, command));
    match result {
        Ok(Some(text)) => println!("{text}"),
        Ok(None) => {}
        Err(err) => warn!("{}", err),
    }
}
