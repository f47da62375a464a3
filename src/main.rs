//! Agora - terminal lobby for picking AI agents to chat with

use agora::agent::{AgentIcon, DraftField};
use agora::api::{AgentService, ApiClient};
use agora::app::Worker;
use agora::config::Config;
use agora::dialog::AgentDialogController;
use agora::launch::{SessionRoute, launch};
use agora::selection::{ChatMode, SelectionController};
use agora::{App, paths};
use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use std::sync::Arc;

/// Terminal lobby for picking AI agents to chat with
#[derive(Parser)]
#[command(name = "agora")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Backend base URL (overrides config and `AGORA_API_URL`)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and print the agent catalog
    List,
    /// Print the chat route for the given agents
    Route {
        /// Build a group chat route instead of a single chat
        #[arg(long)]
        group: bool,
        /// Agent names, in selection order
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Create a custom agent and print its chat route
    Create {
        /// Agent name
        #[arg(long)]
        name: String,
        /// What the agent does
        #[arg(long)]
        description: String,
        /// What you want from the agent
        #[arg(long, default_value = "")]
        goal: String,
    },
}

fn main() -> Result<()> {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }

    match cli.command {
        Some(Commands::List) => cmd_list(&config),
        Some(Commands::Route { group, names }) => {
            let route = route_for(group, &names)?;
            print_route(&config, &route);
            Ok(())
        }
        Some(Commands::Create {
            name,
            description,
            goal,
        }) => cmd_create(&config, name, description, goal),
        None => {
            let client = ApiClient::from_config(&config);
            let (worker, messages) = Worker::new(Arc::new(client));
            let app = App::new(config.clone());

            if let Some(route) = agora::tui::run(app, &worker, messages)? {
                print_route(&config, &route);
            }
            Ok(())
        }
    }
}

/// Log to `<tmp>/agora.log`; set DEBUG=0-3 to control verbosity
/// (0=off, 1=warn, 2=info, 3=debug)
fn init_logging() {
    let log_path = paths::log_path();
    if let Err(e) = std::fs::write(&log_path, "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0 {
        let level = match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        let dir = log_path
            .parent()
            .map_or_else(std::env::temp_dir, std::path::Path::to_path_buf);
        let file_appender = tracing_appender::rolling::never(dir, "agora.log");
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }
}

fn print_route(config: &Config, route: &SessionRoute) {
    match &config.web_url {
        Some(base) => println!("{}", route.to_url(base)),
        None => println!("{route}"),
    }
}

fn cmd_list(config: &Config) -> Result<()> {
    let client = ApiClient::from_config(config);
    let agents = client
        .fetch_agents()
        .with_context(|| format!("Failed to fetch agents from {}", client.base_url()))?;

    if agents.is_empty() {
        println!("No agents available.");
        return Ok(());
    }

    for agent in &agents {
        let icon = AgentIcon::for_name(&agent.name).map_or(" ", AgentIcon::glyph);
        let tag = agent.origin.tag();
        if tag.is_empty() {
            println!("{icon} {} - {}", agent.name, agent.description);
        } else {
            println!("{icon} {} ({tag}) - {}", agent.name, agent.description);
        }
    }
    Ok(())
}

/// Build a route the same way the TUI does: single mode takes one name, group
/// mode goes through the selection cap. Repeated names are selected once.
fn route_for(group: bool, names: &[String]) -> Result<SessionRoute> {
    if !group {
        let [name] = names else {
            anyhow::bail!("A single chat takes exactly one agent name (use --group for more)");
        };
        return Ok(launch(ChatMode::Single, &[], Some(name.as_str()))?);
    }

    let mut selection = SelectionController::new();
    selection.set_mode(ChatMode::Group);
    for name in names {
        if !selection.is_selected(name) {
            selection.toggle_agent(name)?;
        }
    }
    Ok(launch(ChatMode::Group, selection.selected(), None)?)
}

fn cmd_create(config: &Config, name: String, description: String, goal: String) -> Result<()> {
    let mut dialog = AgentDialogController::new();
    dialog.open_for_create();
    dialog.update_field(DraftField::Name, name)?;
    dialog.update_field(DraftField::Description, description)?;
    dialog.update_field(DraftField::Goal, goal)?;
    let draft = dialog.submit_create()?;

    let client = ApiClient::from_config(config);
    let message = client
        .create_agent(&draft, config.user.as_ref())
        .with_context(|| format!("Failed to create agent '{}'", draft.name))?;
    eprintln!("{message}");

    let route = launch(ChatMode::Single, &[], Some(draft.name.as_str()))?;
    print_route(config, &route);
    Ok(())
}
