//! State of the food dashboard.

use crate::api::UiCommand;
use crate::food::{Food, FoodForm, FoodPatch, FormError};
use crate::ui::mvi::UiState;

/// Which dialog is open. At most one dialog is visible at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Adding {
        form: FoodForm,
        /// Validation message shown inside the dialog.
        error: Option<String>,
    },
    Editing {
        /// Snapshot of the item when editing began.
        food: Food,
        form: FoodForm,
        error: Option<String>,
    },
}

impl ModalState {
    pub fn is_adding(&self) -> bool {
        matches!(self, Self::Adding { .. })
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn editing_food(&self) -> Option<&Food> {
        match self {
            Self::Editing { food, .. } => Some(food),
            _ => None,
        }
    }

    pub fn form(&self) -> Option<&FoodForm> {
        match self {
            Self::Adding { form, .. } | Self::Editing { form, .. } => Some(form),
            Self::Closed => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Adding { error, .. } | Self::Editing { error, .. } => error.as_deref(),
            Self::Closed => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub message: String,
}

impl StatusLine {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardState {
    /// Items in server order; at most one entry per id.
    pub foods: Vec<Food>,
    pub modal: ModalState,
    /// Last item passed to begin-edit; lets the edit toggle reopen it.
    pub last_edited: Option<Food>,
    /// Highlighted row.
    pub selected: usize,
    pub status: Option<StatusLine>,
    /// The open dialog has a create or update in flight.
    pub submitting: bool,
    /// Set once the first load has settled, successfully or not.
    pub loaded: bool,
}

impl UiState for DashboardState {}

impl DashboardState {
    pub fn with_foods(foods: Vec<Food>) -> Self {
        Self {
            foods,
            loaded: true,
            ..Self::default()
        }
    }

    pub fn selected_food(&self) -> Option<&Food> {
        self.foods.get(self.selected)
    }

    /// Command for the open dialog's submit action.
    ///
    /// Returns `None` when no dialog is open or a submit is already in
    /// flight, and the form error when required fields are empty.
    pub fn submit_command(&self) -> Option<Result<UiCommand, FormError>> {
        if self.submitting {
            return None;
        }
        match &self.modal {
            ModalState::Closed => None,
            ModalState::Adding { form, .. } => {
                Some(form.to_new_food().map(|food| UiCommand::CreateFood { food }))
            }
            ModalState::Editing { food, form, .. } => Some(form.to_patch().map(|patch| {
                UiCommand::UpdateFood {
                    id: food.id,
                    food: patch.apply(food),
                }
            })),
        }
    }

    pub fn delete_selected_command(&self) -> Option<UiCommand> {
        self.selected_food()
            .map(|food| UiCommand::DeleteFood { id: food.id })
    }

    pub fn toggle_availability_command(&self) -> Option<UiCommand> {
        self.selected_food().map(|food| UiCommand::SetAvailability {
            id: food.id,
            food: FoodPatch::availability(!food.available).apply(food),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food::FoodId;

    fn food(id: FoodId, name: &str) -> Food {
        Food {
            id,
            name: name.to_string(),
            price: "1.00".to_string(),
            image: String::new(),
            description: None,
            available: true,
        }
    }

    #[test]
    fn closed_is_default() {
        assert_eq!(ModalState::default(), ModalState::Closed);
        assert!(!DashboardState::default().modal.is_open());
    }

    #[test]
    fn submit_without_dialog_is_none() {
        assert!(DashboardState::with_foods(vec![food(1, "Cake")])
            .submit_command()
            .is_none());
    }

    #[test]
    fn submit_edit_targets_editing_id() {
        let cake = food(1, "Cake");
        let mut form = FoodForm::from_food(&cake);
        form.price = "12.00".to_string();
        let state = DashboardState {
            foods: vec![cake.clone()],
            modal: ModalState::Editing {
                food: cake,
                form,
                error: None,
            },
            ..DashboardState::default()
        };

        match state.submit_command() {
            Some(Ok(UiCommand::UpdateFood { id, food })) => {
                assert_eq!(id, 1);
                assert_eq!(food.price, "12.00");
                assert_eq!(food.name, "Cake");
            }
            other => panic!("expected UpdateFood, got {:?}", other),
        }
    }

    #[test]
    fn toggle_availability_negates_selected() {
        let state = DashboardState::with_foods(vec![food(4, "Soup")]);
        match state.toggle_availability_command() {
            Some(UiCommand::SetAvailability { id, food }) => {
                assert_eq!(id, 4);
                assert!(!food.available);
                assert_eq!(food.name, "Soup");
            }
            other => panic!("expected SetAvailability, got {:?}", other),
        }
    }

    #[test]
    fn commands_need_a_selection() {
        let state = DashboardState::default();
        assert!(state.delete_selected_command().is_none());
        assert!(state.toggle_availability_command().is_none());
    }
}
