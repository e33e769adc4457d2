//! Background task executing backend commands one at a time.
//!
//! The UI thread sends [`UiCommand`]s; every command produces exactly one
//! [`ApiOutcome`], success or failure, which is delivered back to the UI
//! loop and applied there against the latest state.

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::api::client::FoodApi;
use crate::food::{Food, FoodId, NewFood};

const COMMAND_QUEUE: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    LoadFoods,
    CreateFood { food: NewFood },
    UpdateFood { id: FoodId, food: Food },
    SetAvailability { id: FoodId, food: Food },
    DeleteFood { id: FoodId },
}

impl UiCommand {
    pub fn operation(&self) -> Operation {
        match self {
            UiCommand::LoadFoods => Operation::Load,
            UiCommand::CreateFood { .. } => Operation::Create,
            UiCommand::UpdateFood { .. } => Operation::Update,
            UiCommand::SetAvailability { .. } => Operation::ToggleAvailability,
            UiCommand::DeleteFood { .. } => Operation::Delete,
        }
    }
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Create,
    Update,
    ToggleAvailability,
    Delete,
}

impl Operation {
    pub fn label(self) -> &'static str {
        match self {
            Operation::Load => "load foods",
            Operation::Create => "add food",
            Operation::Update => "update food",
            Operation::ToggleAvailability => "change availability",
            Operation::Delete => "delete food",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOutcome {
    Loaded(Vec<Food>),
    Created(Food),
    /// Result of a PUT; `operation` tells an edit apart from an availability toggle.
    Updated { operation: Operation, food: Food },
    Deleted(FoodId),
    Failed { operation: Operation, message: String },
}

/// Run a single command against the backend.
pub async fn execute(api: &FoodApi, command: UiCommand) -> ApiOutcome {
    let operation = command.operation();
    let result = match command {
        UiCommand::LoadFoods => api.list().await.map(ApiOutcome::Loaded),
        UiCommand::CreateFood { food } => api.create(&food).await.map(ApiOutcome::Created),
        UiCommand::UpdateFood { id, food } | UiCommand::SetAvailability { id, food } => {
            api.update(id, &food)
                .await
                .map(|food| ApiOutcome::Updated { operation, food })
        }
        UiCommand::DeleteFood { id } => api.delete(id).await.map(|()| ApiOutcome::Deleted(id)),
    };

    match result {
        Ok(outcome) => outcome,
        Err(err) => {
            tracing::warn!(
                operation = operation.label(),
                kind = err.kind(),
                "backend request failed: {}",
                err
            );
            ApiOutcome::Failed {
                operation,
                message: err.to_string(),
            }
        }
    }
}

/// Spawn the worker on `handle` and return the command sender.
///
/// Commands are processed sequentially in arrival order. The task ends
/// when every sender has been dropped.
pub fn spawn_worker<F>(handle: &Handle, api: FoodApi, deliver: F) -> UiCommandSender
where
    F: Fn(ApiOutcome) + Send + 'static,
{
    let (sender, mut receiver) = mpsc::channel::<UiCommand>(COMMAND_QUEUE);
    handle.spawn(async move {
        tracing::info!(base_url = api.base_url(), "api worker started");
        while let Some(command) = receiver.recv().await {
            let outcome = execute(&api, command).await;
            deliver(outcome);
        }
        tracing::debug!("api worker stopped (all senders dropped)");
    });
    sender
}
