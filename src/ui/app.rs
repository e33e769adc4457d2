use crate::api::{ApiOutcome, UiCommand, UiCommandSender};
use crate::config::ConfigStore;
use crate::ui::dashboard::{DashboardIntent, DashboardReducer, DashboardState};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    config: ConfigStore,
    /// Dashboard state (MVI pattern).
    dashboard: DashboardState,
    command_sender: Option<UiCommandSender>,
    /// Number of commands sent whose outcome has not arrived yet.
    in_flight: usize,
}

impl App {
    pub fn new(config: ConfigStore) -> Self {
        Self {
            should_quit: false,
            config,
            dashboard: DashboardState::default(),
            command_sender: None,
            in_flight: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    pub fn dashboard(&self) -> &DashboardState {
        &self.dashboard
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    /// Dispatch an intent to the dashboard reducer.
    pub fn dispatch(&mut self, intent: DashboardIntent) {
        dispatch_mvi!(self, dashboard, DashboardReducer, intent);
    }

    /// Fetch the full list. Called once at startup and on manual reload.
    pub fn load(&mut self) -> bool {
        self.send_command(UiCommand::LoadFoods)
    }

    /// Submit whichever dialog is open. Ignored while an earlier submit
    /// from the same dialog is still in flight.
    pub fn submit_dialog(&mut self) -> bool {
        match self.dashboard.submit_command() {
            None => false,
            Some(Ok(command)) => {
                let sent = self.send_command(command);
                if sent {
                    self.dispatch(DashboardIntent::SubmitStarted);
                }
                sent
            }
            Some(Err(err)) => {
                self.dispatch(DashboardIntent::FormInvalid {
                    message: err.to_string(),
                });
                false
            }
        }
    }

    pub fn begin_edit_selected(&mut self) {
        if let Some(food) = self.dashboard.selected_food().cloned() {
            self.dispatch(DashboardIntent::BeginEdit { food });
        }
    }

    pub fn delete_selected(&mut self) -> bool {
        match self.dashboard.delete_selected_command() {
            Some(command) => self.send_command(command),
            None => false,
        }
    }

    pub fn toggle_selected_availability(&mut self) -> bool {
        match self.dashboard.toggle_availability_command() {
            Some(command) => self.send_command(command),
            None => false,
        }
    }

    /// Apply a settled backend result to the latest state.
    pub fn on_api_outcome(&mut self, outcome: ApiOutcome) {
        self.in_flight = self.in_flight.saturating_sub(1);
        let intent = match outcome {
            ApiOutcome::Loaded(foods) => DashboardIntent::Loaded { foods },
            ApiOutcome::Created(food) => DashboardIntent::Created { food },
            ApiOutcome::Updated { operation, food } => {
                DashboardIntent::Updated { operation, food }
            }
            ApiOutcome::Deleted(id) => DashboardIntent::Deleted { id },
            ApiOutcome::Failed { operation, message } => {
                DashboardIntent::RequestFailed { operation, message }
            }
        };
        self.dispatch(intent);
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let operation = command.operation();
        let Some(sender) = &self.command_sender else {
            tracing::warn!(operation = operation.label(), "no api worker attached");
            self.dispatch(DashboardIntent::RequestFailed {
                operation,
                message: "backend worker is not running".to_string(),
            });
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.in_flight += 1;
                tracing::debug!(operation = operation.label(), "command queued");
                true
            }
            Err(err) => {
                tracing::warn!(operation = operation.label(), "command send failed: {}", err);
                self.dispatch(DashboardIntent::RequestFailed {
                    operation,
                    message: format!("command send failed: {}", err),
                });
                false
            }
        }
    }
}
