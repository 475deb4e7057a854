use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use minigit::areas::repository::Repository;
use minigit::artifacts::core::{PagerWriter, configure_colors, should_page};
use minigit::commands::porcelain::log::LogOptions;
use minus::Pager;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the diagnostics filter
const LOG_ENV: &str = "MINIGIT_LOG";

#[derive(Parser)]
#[command(
    name = "minigit",
    version = "0.1.0",
    about = "A minimal local version-control tool",
    long_about = "Tracks a set of files, snapshots them into content-identified commits, \
    lists commit history and restores earlier snapshots into the working directory.",
    arg_required_else_help = true,
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "add",
        about = "Start tracking a file",
        long_about = "This command adds an existing file to the set of files captured by every future commit."
    )]
    Add {
        #[arg(index = 1, help = "The file to track")]
        path: String,
    },
    #[command(
        name = "commit",
        about = "Snapshot all tracked files",
        long_about = "This command copies every tracked file into a new commit. \
        All remaining arguments are joined into the commit message."
    )]
    Commit {
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, help = "The commit message")]
        message: Vec<String>,
    },
    #[command(
        name = "log",
        about = "Show commit history",
        long_about = "This command lists every commit, oldest first."
    )]
    Log {
        #[arg(long, help = "Show each commit as '<id> <message>'")]
        oneline: bool,
    },
    #[command(
        name = "checkout",
        about = "Restore tracked files from a commit",
        long_about = "This command overwrites every currently tracked file with its copy from the given commit."
    )]
    Checkout {
        #[arg(index = 1, help = "The commit ID to restore")]
        id: String,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Parse the command line; only a missing command is a process failure
fn parse_cli() -> Result<Cli> {
    match Cli::try_parse() {
        Ok(cli) => Ok(cli),
        Err(error) => {
            let code = match error.kind() {
                ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                | ErrorKind::MissingSubcommand => 1,
                _ => 0,
            };

            error.print()?;
            std::process::exit(code);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = parse_cli()?;

    init_tracing();
    configure_colors();

    let pwd = std::env::current_dir()?;

    match &cli.command {
        Commands::Init { path } => {
            let path = path.as_ref().map(PathBuf::from).unwrap_or(pwd);
            let mut repository = Repository::new(&path, Box::new(std::io::stdout()))?;

            repository.init().await?
        }
        Commands::Add { path } => {
            let mut repository = Repository::new(&pwd, Box::new(std::io::stdout()))?;

            repository.add(path).await?
        }
        Commands::Commit { message } => {
            let mut repository = Repository::new(&pwd, Box::new(std::io::stdout()))?;

            repository.commit(&message.join(" ")).await?
        }
        Commands::Log { oneline } => {
            let opts = LogOptions { oneline: *oneline };

            if should_page() {
                let pager = Pager::new();
                let mut repository =
                    Repository::new(&pwd, Box::new(PagerWriter::new(pager.clone())))?;

                repository.log(&opts).await?;
                minus::page_all(pager)?;
            } else {
                let mut repository = Repository::new(&pwd, Box::new(std::io::stdout()))?;

                repository.log(&opts).await?
            }
        }
        Commands::Checkout { id } => {
            let mut repository = Repository::new(&pwd, Box::new(std::io::stdout()))?;

            repository.checkout(id).await?
        }
    }

    Ok(())
}
