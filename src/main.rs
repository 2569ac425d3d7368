use clap::{
    Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use sptrackcli::{cli, config, error, management::TokenManager};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name = env!("CARGO_PKG_NAME"),
  bin_name = env!("CARGO_PKG_NAME"),
  about = env!("CARGO_PKG_DESCRIPTION"),
  styles = styles(),
)]
struct Cli {
    /// Command to run; omit to list the available commands
    #[clap(value_name = "COMMAND")]
    command: Option<String>,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    let Some(name) = cli.command else {
        eprintln!("Available commands:\n{}", cli::available_commands());
        std::process::exit(1);
    };

    let Some(handler) = cli::find_command(&name) else {
        eprintln!("{}", error::Error::CommandNotFound(name));
        eprintln!("Available commands:\n{}", cli::available_commands());
        std::process::exit(1);
    };

    let token = match TokenManager::get_valid_token().await {
        Ok(token) => token,
        Err(e) => error!("{}", e),
    };

    if let Err(e) = handler(token).await {
        error!("{}", e);
    }
}
