use clap::ArgMatches;
use stratus::commands::{self, PARAMETER_VERBOSE};
use stratus::error::CliError;
use stratus::session::Session;
use stratus::terminal::{Console, Terminal};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::execute_command;

/// Main entry point for the program
#[tokio::main]
async fn main() {
    let matches = commands::create_cli_commands();

    // Initialize the logging subsystem
    let filter = if matches.get_flag(PARAMETER_VERBOSE) {
        EnvFilter::new("stratus=debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut terminal = Console::new();
    match run(&matches, &mut terminal).await {
        Ok(()) => (),
        Err(e) => {
            terminal.failed(&e.to_string());
            ::std::process::exit(e.exit_code().code());
        }
    }
}

async fn run(matches: &ArgMatches, terminal: &mut Console) -> Result<(), CliError> {
    let mut session = Session::load_or_create_default()?;
    execute_command(matches, &mut session, terminal).await?;
    // only a command that ran to completion may rewrite the session file
    session.save_to_default()?;
    Ok(())
}
