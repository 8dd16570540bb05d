//! Route resolver CLI.
//!
//! Loads a route file and exercises the resolver against it.
//!
//! ```text
//! route-resolver --config routes.toml check
//! route-resolver resolve /@alice
//! route-resolver resolve --location "/app/#/login"
//! route-resolver reverse profile user=bob
//! route-resolver navigate --start / push:/login replace:/logout
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;

use route_resolver::app::{AppContext, Application, Renderer};
use route_resolver::config::{load_config, AppConfig};
use route_resolver::observability::logging;
use route_resolver::routing::{MemoryHistory, NavigationRequest, Params, ResolvedNavigation};

#[derive(Parser)]
#[command(name = "route-resolver")]
#[command(about = "Resolve and build client-side routes from a route file", long_about = None)]
struct Cli {
    /// Route configuration file (TOML).
    #[arg(short, long, default_value = "routes.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the route file
    Check,
    /// Resolve a path to its view and parameters
    Resolve {
        path: String,
        /// Treat the input as a browser location (base and hash mode applied)
        #[arg(long)]
        location: bool,
    },
    /// Build the path of a named route
    Reverse {
        name: String,
        /// Parameters as key=value
        #[arg(value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// Replay navigations against an in-memory history
    Navigate {
        /// Starting location
        #[arg(long, default_value = "/")]
        start: String,
        /// Steps as push:/path, replace:/path or a bare path (push)
        #[arg(value_parser = parse_step)]
        steps: Vec<NavigationRequest>,
    },
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{}'", s))
}

fn parse_step(s: &str) -> Result<NavigationRequest, String> {
    match s.split_once(':') {
        Some(("push", path)) => Ok(NavigationRequest::push(path)),
        Some(("replace", path)) => Ok(NavigationRequest::replace(path)),
        Some((mode, _)) if !s.starts_with('/') => Err(format!("unknown navigation mode '{}'", mode)),
        _ => Ok(NavigationRequest::push(s)),
    }
}

/// Prints each render as a JSON line.
struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&mut self, target: &ResolvedNavigation, ctx: &AppContext) {
        println!("{}", json!({ "render": target, "mount": ctx.mount, "locale": ctx.locale() }));
    }

    fn render_not_found(&mut self, path: &str, ctx: &AppContext) {
        println!("{}", json!({ "not_found": path, "mount": ctx.mount }));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config: AppConfig = load_config(&cli.config)?;
    logging::init(&config.observability.log_level);

    let mut app = Application::from_config(&config)?;
    tracing::info!(
        config = %cli.config.display(),
        routes = app.router().table().len(),
        mode = ?config.router.mode,
        "Route table ready"
    );

    match cli.command {
        Commands::Check => {
            let routes: Vec<_> = app
                .router()
                .table()
                .routes()
                .iter()
                .map(|r| {
                    json!({
                        "pattern": r.pattern.as_str(),
                        "view": r.view,
                        "name": r.name,
                        "aliases": r.aliases.iter().map(|a| a.as_str()).collect::<Vec<_>>(),
                        "captures": r.pattern.capture_names().collect::<Vec<_>>(),
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "config": cli.config.display().to_string(),
                    "mode": config.router.mode,
                    "base": config.router.base,
                    "routes": routes,
                }))?
            );
        }
        Commands::Resolve { path, location } => {
            let path = if location {
                app.router().location_path(&path)
            } else {
                path
            };
            let nav = app.router().resolve(&path)?;
            println!("{}", serde_json::to_string_pretty(&nav)?);
        }
        Commands::Reverse { name, params } => {
            let params: Params = params.into_iter().collect();
            let path = app.router().reverse(&name, &params)?;
            println!("{}", json!({ "path": path, "href": app.router().href(&path) }));
        }
        Commands::Navigate { start, steps } => {
            let mut history = MemoryHistory::new(start);
            let mut renderer = JsonRenderer;
            app.start(&mut history, &mut renderer)?;
            for step in &steps {
                app.navigate(step, &mut history, &mut renderer)?;
            }
            println!("{}", json!({ "history": history.entries(), "index": history.index() }));
        }
    }

    Ok(())
}
