use clap::{ArgAction, Parser, Subcommand};
use gitree::cli;
use gitree::config::{ColorChoice, Config};
use gitree::errors::Result;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "gitree")]
#[command(about = "Show the status of every git repository under a directory as a tree", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory to search for repositories (overrides config and GITREE_ROOT)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all repositories under the root with their status (default)
    List {
        /// Maximum directory depth to search
        #[arg(long)]
        max_depth: Option<usize>,
        /// Also find repositories nested inside other repositories
        #[arg(long)]
        nested: bool,
        /// Search hidden directories
        #[arg(long)]
        hidden: bool,
    },
    /// Show the status of a single repository
    Status {
        /// Path to the repository
        path: PathBuf,
        /// Print the status as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or initialize the configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration (default)
    Show,
    /// Write a template config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Decide whether to color output and apply it to the `colored` crate
fn use_color(choice: ColorChoice, no_color: bool) -> bool {
    let enabled = match (no_color, choice) {
        (true, _) | (false, ColorChoice::Never) => false,
        (false, ColorChoice::Always) => true,
        (false, ColorChoice::Auto) => std::io::stdout().is_terminal(),
    };
    colored::control::set_override(enabled);
    enabled
}

fn run(cli: Cli) -> Result<()> {
    // Writing a fresh config must work even when the current one is broken
    if let Some(Commands::Config {
        action: Some(ConfigAction::Init { force }),
    }) = cli.command
    {
        use_color(ColorChoice::Auto, cli.no_color);
        return cli::config_cmd::init(force);
    }

    let mut config = Config::load()?;
    if let Some(root) = cli.root {
        config.root = root;
    }
    let color = use_color(config.color, cli.no_color);

    match cli.command {
        None => cli::list::run(&config, color)?,
        Some(Commands::List {
            max_depth,
            nested,
            hidden,
        }) => {
            if max_depth.is_some() {
                config.max_depth = max_depth;
            }
            config.nested |= nested;
            config.include_hidden |= hidden;
            cli::list::run(&config, color)?
        }
        Some(Commands::Status { path, json }) => cli::status::run(&path, json)?,
        Some(Commands::Config { action }) => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => cli::config_cmd::show(&config)?,
            ConfigAction::Init { force } => cli::config_cmd::init(force)?,
        },
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
