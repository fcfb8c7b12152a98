use crate::cli::commands;
use crate::cli::core::{CliError, CliMode, CommandError, LoopControl};
use crate::cli::output::{self, OutputPreferences};
use crate::cli::registry::CommandRegistry;
use crate::cli::shell::parse_command_line;
use crate::config::{Config, ConfigManager};
use crate::core::services::ServiceError;
use crate::core::tracker::ExpenseTracker;
use crate::storage::JsonStorage;

/// State shared by every command of one shell session.
pub struct ShellContext {
    pub running: bool,
    pub tracker: ExpenseTracker,
    pub config: Config,
    config_manager: Option<ConfigManager>,
    registry: CommandRegistry,
}

impl ShellContext {
    /// Opens the configuration and data store under the application directory.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        output::set_preferences(OutputPreferences {
            plain: mode == CliMode::Script,
            quiet: false,
        });

        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?;
        let storage = JsonStorage::new_default()?;
        let tracker = ExpenseTracker::load(Box::new(storage), &config)?;
        Ok(Self::with_parts(tracker, config, Some(config_manager)))
    }

    /// Assembles a context from prepared parts. Without a manager, `config set`
    /// only changes the in-memory configuration.
    pub fn with_parts(
        tracker: ExpenseTracker,
        config: Config,
        config_manager: Option<ConfigManager>,
    ) -> Self {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        Self {
            running: true,
            tracker,
            config,
            config_manager,
            registry,
        }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn prompt(&self) -> String {
        format!("expenses [{}]> ", self.config.format_amount(self.tracker.balance()))
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    /// Tokenizes and runs one input line.
    pub fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                output::warning(err);
                return Ok(LoopControl::Continue);
            }
        };

        let Some(raw) = tokens.first() else {
            return Ok(LoopControl::Continue);
        };
        let command = raw.to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

        match self.dispatch(&command, raw, &args)? {
            LoopControl::Exit => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            LoopControl::Continue => Ok(LoopControl::Continue),
        }
    }

    fn suggest_command(&self, input: &str) {
        match self.registry.suggest(input) {
            Some(name) => output::warning(format!(
                "Unknown command `{input}`. Did you mean `{name}`?"
            )),
            None => output::warning(format!(
                "Unknown command `{input}`. Type `help` to see available commands."
            )),
        }
    }

    /// Prints a failed command. Insufficient funds is an alert; invalid input
    /// and unknown records are warnings.
    pub fn report_error(&self, err: CommandError) {
        match err {
            CommandError::Service(ServiceError::InsufficientFunds { .. }) => {
                output::error("Cannot add expense, insufficient balance.")
            }
            CommandError::Service(ServiceError::Validation(message))
            | CommandError::InvalidArguments(message) => output::warning(message),
            CommandError::Service(ServiceError::NotFound(id)) => {
                output::warning(format!("Transaction not found: {id}"))
            }
            other => {
                tracing::error!(error = %other, "command failed");
                output::error(other);
            }
        }
    }

    /// Persists the configuration when a manager is attached.
    pub fn save_config(&self) -> Result<(), CommandError> {
        if let Some(manager) = &self.config_manager {
            manager.save(&self.config)?;
        }
        Ok(())
    }

    pub fn config_path(&self) -> Option<String> {
        self.config_manager
            .as_ref()
            .map(|manager| manager.path().display().to_string())
    }
}
