//! homewatt - command-line client for the household energy service.

mod app;

use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use app::App;

const USAGE: &str = "Usage: homewatt <command>

Commands:
  login [username]   Sign in and remember the session
  logout             Forget the session
  status             Show the current session
  devices            List your devices
  open <path>        Navigate to a route (e.g. /devices)";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Login(Option<String>),
    Logout,
    Status,
    Devices,
    Open(String),
    Help,
}

impl Command {
    fn parse(args: &[String]) -> Result<Self> {
        let mut args = args.iter().map(String::as_str);
        let command = match args.next() {
            None | Some("help") | Some("--help") | Some("-h") => Command::Help,
            Some("login") => Command::Login(args.next().map(str::to_string)),
            Some("logout") => Command::Logout,
            Some("status") => Command::Status,
            Some("devices") => Command::Devices,
            Some("open") => match args.next() {
                Some(path) => Command::Open(path.to_string()),
                None => return Err(anyhow::anyhow!("open requires a path")),
            },
            Some(other) => return Err(anyhow::anyhow!("Unknown command: {}", other)),
        };
        Ok(command)
    }
}

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = Command::parse(&args)?;
    info!(?command, "homewatt starting");
    let mut app = App::new()?;

    match command {
        Command::Login(username) => app.login(username).await?,
        Command::Logout => app.logout()?,
        Command::Status => app.status(),
        Command::Devices => app.devices().await?,
        Command::Open(path) => app.open(&path)?,
        Command::Help => println!("{}", USAGE),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse(&args(&[])).unwrap(), Command::Help);
        assert_eq!(Command::parse(&args(&["login"])).unwrap(), Command::Login(None));
        assert_eq!(
            Command::parse(&args(&["login", "alice"])).unwrap(),
            Command::Login(Some("alice".to_string()))
        );
        assert_eq!(Command::parse(&args(&["logout"])).unwrap(), Command::Logout);
        assert_eq!(Command::parse(&args(&["devices"])).unwrap(), Command::Devices);
        assert_eq!(
            Command::parse(&args(&["open", "/devices"])).unwrap(),
            Command::Open("/devices".to_string())
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(Command::parse(&args(&["open"])).is_err());
        assert!(Command::parse(&args(&["frobnicate"])).is_err());
    }
}
