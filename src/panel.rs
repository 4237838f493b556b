use crate::client::PanelClient;
use crate::models::status_rows;
use colored::*;
use comfy_table::{modifiers, presets, Table};

/// A user gesture, decoupled from whatever surface produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Refresh,
    Start(String),
    Stop(String),
}

/// What a processed command does to the user-facing surface.
/// Exactly one effect per command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Replace the status table with these `(service, status)` rows.
    Table(Vec<(String, String)>),
    /// Replace the status table with a single error row.
    TableError(String),
    /// Show a notification message.
    Notice(String),
}

/// Output seam for effects, so the panel can be driven without a terminal.
pub trait Surface {
    fn render_table(&mut self, rows: &[(String, String)]);
    fn render_table_error(&mut self, text: &str);
    fn notify(&mut self, text: &str);
}

/// Runs one command against the supervisor and folds the outcome into an
/// effect. Failures never escape: a refresh failure lands in the table, a
/// start/stop failure goes through the same notification path as success.
pub async fn dispatch(client: &PanelClient, command: Command) -> Effect {
    match command {
        Command::Refresh => match client.list().await {
            Ok(map) => Effect::Table(status_rows(&map)),
            Err(e) => Effect::TableError(format!("Error: {e}")),
        },
        Command::Start(name) => match client.start(name).await {
            Ok(message) => Effect::Notice(message),
            Err(e) => Effect::Notice(format!("Error: {e}")),
        },
        Command::Stop(name) => match client.stop(name).await {
            Ok(message) => Effect::Notice(message),
            Err(e) => Effect::Notice(format!("Error: {e}")),
        },
    }
}

/// Applies an effect to a surface. Table effects overwrite whatever the
/// surface showed before; whichever applies last wins.
pub fn apply(effect: &Effect, surface: &mut dyn Surface) {
    match effect {
        Effect::Table(rows) => surface.render_table(rows),
        Effect::TableError(text) => surface.render_table_error(text),
        Effect::Notice(text) => surface.notify(text),
    }
}

/// Dispatcher loop: takes commands one at a time in arrival order and
/// applies each effect before picking up the next command.
pub async fn run(
    client: &PanelClient,
    mut commands: tokio::sync::mpsc::Receiver<Command>,
    surface: &mut dyn Surface,
) {
    while let Some(command) = commands.recv().await {
        tracing::debug!(?command, "dispatching");
        let effect = dispatch(client, command).await;
        apply(&effect, surface);
    }
}

/// Terminal implementation of [`Surface`].
#[derive(Debug, Default)]
pub struct ConsoleSurface;

impl Surface for ConsoleSurface {
    fn render_table(&mut self, rows: &[(String, String)]) {
        if rows.is_empty() {
            println!(
                "{} {}",
                "ℹ".bright_blue().bold(),
                "No services reported by the supervisor".bright_black()
            );
            return;
        }

        let mut table = Table::new();
        table
            .set_header(vec!["Service", "Status"])
            .load_preset(presets::UTF8_FULL_CONDENSED)
            .apply_modifier(modifiers::UTF8_ROUND_CORNERS);
        for (service, status) in rows {
            table.add_row(vec![service.clone(), status.clone()]);
        }
        println!("{table}");
    }

    fn render_table_error(&mut self, text: &str) {
        println!("{} {}", "✖".red().bold(), text.red());
    }

    fn notify(&mut self, text: &str) {
        println!("{} {}", "ℹ".bright_blue().bold(), text);
    }
}
