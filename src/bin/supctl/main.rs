use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use supctl::client::PanelClient;
use supctl::panel::{self, Command, ConsoleSurface};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_URL: &str = "http://127.0.0.1:8000";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the supervisor backend
    #[arg(long, default_value = DEFAULT_URL)]
    url: String,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Fetch and print the status of every service
    List,
    /// Start a service by name
    Start { name: String },
    /// Stop a service by name
    Stop { name: String },
    /// Interactive panel reading refresh/start/stop commands from stdin
    Panel,
}

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.verbosity.tracing_level_filter().to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = PanelClient::new(args.url);
    let mut surface = ConsoleSurface;

    let command = match args.command {
        Commands::List => Command::Refresh,
        Commands::Start { name } => Command::Start(name),
        Commands::Stop { name } => Command::Stop(name),
        Commands::Panel => {
            interactive(&client, &mut surface).await;
            return;
        }
    };

    let effect = panel::dispatch(&client, command).await;
    panel::apply(&effect, &mut surface);
}

/// Feeds stdin lines through the dispatcher loop until EOF or `quit`.
async fn interactive(client: &PanelClient, surface: &mut ConsoleSurface) {
    let (tx, rx) = mpsc::channel(16);

    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if line.trim().is_empty() {
                continue;
            }
            match parse_line(&line) {
                Some(LineInput::Command(command)) => {
                    if tx.send(command).await.is_err() {
                        break;
                    }
                }
                Some(LineInput::Quit) => break,
                None => eprintln!("commands: refresh | start <name> | stop <name> | quit"),
            }
        }
    });

    panel::run(client, rx, surface).await;
}

enum LineInput {
    Command(Command),
    Quit,
}

fn parse_line(line: &str) -> Option<LineInput> {
    let mut words = line.split_whitespace();
    match (words.next()?, words.next(), words.next()) {
        ("refresh" | "list", None, None) => Some(LineInput::Command(Command::Refresh)),
        ("start", Some(name), None) => Some(LineInput::Command(Command::Start(name.to_string()))),
        ("stop", Some(name), None) => Some(LineInput::Command(Command::Stop(name.to_string()))),
        ("quit" | "exit", None, None) => Some(LineInput::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_panel_lines() {
        assert!(matches!(
            parse_line("refresh"),
            Some(LineInput::Command(Command::Refresh))
        ));
        assert!(matches!(
            parse_line("start web"),
            Some(LineInput::Command(Command::Start(name))) if name == "web"
        ));
        assert!(matches!(
            parse_line("  stop  db  "),
            Some(LineInput::Command(Command::Stop(name))) if name == "db"
        ));
        assert!(matches!(parse_line("quit"), Some(LineInput::Quit)));
    }

    #[test]
    fn rejects_unknown_lines() {
        assert!(parse_line("restart web").is_none());
        assert!(parse_line("start").is_none());
        assert!(parse_line("start two names").is_none());
    }
}
