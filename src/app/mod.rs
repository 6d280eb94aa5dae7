// SPDX-License-Identifier: MPL-2.0
//! Application root: wires configuration, theme, toasts and diagnostics
//! together and runs one admin command.
//!
//! Toasts are printed to the terminal as they reach the display surface,
//! and the process stays alive until every toast has expired.

pub mod paths;
pub mod persisted_state;

use crate::admin::{ActionOutcome, AdminActions, AdminClient, Confirm, CsrfToken};
use crate::config::{self, Config};
use crate::diagnostics::{BufferCapacity, DiagnosticsCollector, UserAction, WarningType};
use crate::error::{Error, Result};
use crate::export;
use crate::timing::driver::run_until_idle_with;
use crate::timing::{Clock, SystemClock};
use crate::ui::notifications::{Manager, ToastId, ToastRequest};
use crate::ui::state::LoadingButton;
use crate::ui::theming::ThemeController;
use std::collections::HashSet;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Command-line flags.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    pub command: Command,
    /// Answer yes to every confirmation prompt.
    pub assume_yes: bool,
    /// CSRF token sent with mutating requests.
    pub csrf: Option<String>,
    /// Print the collected diagnostics as JSON on exit.
    pub dump_diagnostics: bool,
    /// Data directory override (persisted store, exports).
    pub data_dir: Option<String>,
    /// Config directory override (`settings.toml`).
    pub config_dir: Option<String>,
}

/// The operation to run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Command {
    /// Print the current theme, or switch it.
    Theme { toggle: bool },
    /// Export the books table of a saved page to CSV.
    Export {
        html: PathBuf,
        out_dir: Option<PathBuf>,
    },
    DeleteBook { id: u64, title: String },
    DeleteCategory { id: u64, name: String },
    ToggleUser { id: u64 },
    MarkAllRead,
    #[default]
    Help,
}

/// Reads confirmations from standard input, or accepts them all.
#[derive(Debug, Clone, Copy)]
pub struct TerminalPrompt {
    assume_yes: bool,
}

impl Confirm for TerminalPrompt {
    fn confirm(&mut self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        print!("{prompt}\n[y/N] ");
        let _ = io::stdout().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

/// Prints each toast once, when it first appears on the surface.
#[derive(Debug, Default)]
struct ToastPrinter {
    printed: HashSet<ToastId>,
}

impl ToastPrinter {
    fn print_new<C: Clock>(&mut self, toasts: &Manager<C>) {
        for toast in toasts.visible() {
            if self.printed.insert(toast.id()) {
                println!(
                    "{} {}: {}",
                    toast.severity().glyph(),
                    toast.title(),
                    toast.message()
                );
            }
        }
    }
}

/// Root state of a command run.
#[derive(Debug)]
pub struct App<C: Clock = SystemClock> {
    config: Config,
    toasts: Manager<C>,
    diagnostics: DiagnosticsCollector,
    state_dir: Option<PathBuf>,
}

impl App<SystemClock> {
    /// Loads configuration and prepares the toast manager.
    ///
    /// A configuration that could not be read is reported as a warning toast.
    #[must_use]
    pub fn new(flags: &Flags) -> Self {
        paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
        let (config, warning) = config::load();
        let mut app = Self::with_parts(config, paths::get_app_data_dir(), SystemClock);
        if let Some(key) = warning {
            app.warn(WarningType::Config, &key);
        }
        app
    }
}

impl<C: Clock> App<C> {
    pub fn with_parts(config: Config, state_dir: Option<PathBuf>, clock: C) -> Self {
        let diagnostics = DiagnosticsCollector::new(BufferCapacity::default());
        let mut toasts =
            Manager::with_clock(clock).with_exit_animation(config.notifications.exit_animation());
        toasts.set_diagnostics(diagnostics.handle());

        Self {
            config,
            toasts,
            diagnostics,
            state_dir,
        }
    }

    #[must_use]
    pub fn toasts(&self) -> &Manager<C> {
        &self.toasts
    }

    pub fn diagnostics(&mut self) -> &DiagnosticsCollector {
        self.diagnostics.process_pending();
        &self.diagnostics
    }

    /// Runs `command`. Toasts it raises stay on the manager.
    pub async fn execute<P: Confirm>(
        &mut self,
        command: &Command,
        prompt: P,
        csrf: CsrfToken,
    ) -> Result<()> {
        match command {
            Command::Help => {
                println!("{HELP}");
                Ok(())
            }
            Command::Theme { toggle } => {
                self.theme(*toggle);
                Ok(())
            }
            Command::Export { html, out_dir } => self.export(html, out_dir.clone()),
            Command::MarkAllRead
            | Command::DeleteBook { .. }
            | Command::DeleteCategory { .. }
            | Command::ToggleUser { .. } => {
                let mut client = AdminClient::new(&self.config.api.base_url, csrf)?;
                client.set_diagnostics(self.diagnostics.handle());
                let mut actions = AdminActions::new(client, prompt);
                actions.set_diagnostics(self.diagnostics.handle());

                let outcome = match command {
                    Command::DeleteBook { id, title } => {
                        let mut button = LoadingButton::new("Delete");
                        actions
                            .delete_book(*id, title, &mut button, &mut self.toasts)
                            .await
                    }
                    Command::DeleteCategory { id, name } => {
                        actions.delete_category(*id, name, &mut self.toasts).await
                    }
                    Command::ToggleUser { id } => {
                        actions.toggle_user_status(*id, &mut self.toasts).await
                    }
                    _ => actions.mark_all_read().await,
                };
                report(&outcome);
                Ok(())
            }
        }
    }

    fn theme(&mut self, toggle: bool) {
        let (mut theme, warning) =
            ThemeController::load(self.config.general.theme_mode, self.state_dir.clone());
        if let Some(key) = warning {
            self.warn(WarningType::State, &key);
        }

        if toggle {
            if let Some(key) = theme.toggle() {
                self.warn(WarningType::State, &key);
            }
            self.diagnostics.handle().log_action(UserAction::ToggleTheme {
                theme: theme.mode().data_theme().to_string(),
            });
        }
        println!("theme: {} ({})", theme.mode().data_theme(), theme.mode().icon());
    }

    fn export(&mut self, html: &Path, out_dir: Option<PathBuf>) -> Result<()> {
        let page = std::fs::read_to_string(html)?;
        let out_dir = out_dir
            .or_else(|| self.state_dir.as_ref().map(|dir| dir.join("exports")))
            .unwrap_or_else(|| PathBuf::from("."));

        let handle = self.diagnostics.handle();
        match export::export_books(&page, &out_dir, &mut self.toasts, Some(&handle))? {
            Some(path) => {
                println!("wrote {}", path.display());
                Ok(())
            }
            None => Err(Error::Export(format!(
                "no table with class \"{}\" in {}",
                export::TABLE_CLASS,
                html.display()
            ))),
        }
    }

    /// Shows a warning toast. The manager logs it to diagnostics.
    fn warn(&mut self, warning_type: WarningType, key: &str) {
        self.toasts
            .notify(ToastRequest::warning(warning_text(key)).with_warning_type(warning_type));
    }
}

/// User-facing text for a warning key.
fn warning_text(key: &str) -> &str {
    match key {
        "notification-config-load-error" => "Settings could not be loaded, defaults are used",
        "notification-state-parse-error" => "Saved preferences were unreadable and were reset",
        "notification-state-read-error" => "Saved preferences could not be read",
        k if k.starts_with("notification-state-") => "Preferences could not be saved",
        other => other,
    }
}

fn report(outcome: &ActionOutcome) {
    match outcome {
        ActionOutcome::Declined => println!("cancelled"),
        ActionOutcome::Succeeded(Some(reload)) => {
            println!("done; reload in {} ms", reload.delay.as_millis());
        }
        ActionOutcome::Succeeded(None) => println!("done"),
        ActionOutcome::Failed(err) => eprintln!("{err}"),
    }
}

pub const HELP: &str = "\
library-admin: library admin panel from the terminal

USAGE:
    library-admin [OPTIONS] <COMMAND>

COMMANDS:
    theme [toggle]                 Show or switch the light/dark theme
    export <page.html> [--out DIR] Export the books table to CSV
    delete-book <id> <title>       Delete a book
    delete-category <id> <name>    Delete a category
    toggle-user <id>               Activate or deactivate a user
    mark-all-read                  Mark all notifications as read

OPTIONS:
    -y, --yes                      Do not ask for confirmation
    --csrf <TOKEN>                 CSRF token for mutating requests
    --diagnostics                  Print collected diagnostics as JSON on exit
    --config-dir <DIR>             Directory holding settings.toml
    --data-dir <DIR>               Directory for persisted state and exports
    -h, --help                     Print this help";

/// Entry point used by `main.rs`: runs the command, then keeps printing
/// toasts until none is left.
pub fn run(flags: Flags) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let mut app = App::new(&flags);
    let prompt = TerminalPrompt {
        assume_yes: flags.assume_yes,
    };
    let csrf = flags.csrf.clone().map(CsrfToken::new).unwrap_or_default();

    runtime.block_on(async {
        let mut printer = ToastPrinter::default();
        let result = app.execute(&flags.command, prompt, csrf).await;

        printer.print_new(&app.toasts);
        run_until_idle_with(&mut app.toasts, |toasts| printer.print_new(toasts)).await;

        if flags.dump_diagnostics {
            match app.diagnostics().export_json() {
                Ok(json) => eprintln!("{json}"),
                Err(err) => eprintln!("diagnostics: {err}"),
            }
        }
        result
    })
}
