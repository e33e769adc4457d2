use crate::api::Operation;
use crate::food::{Food, FoodId};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardIntent {
    /// Full list arrived; replaces whatever was shown.
    Loaded { foods: Vec<Food> },
    Created { food: Food },
    Updated { operation: Operation, food: Food },
    Deleted { id: FoodId },
    /// Any backend call failed. State is left untouched apart from the
    /// status line.
    RequestFailed { operation: Operation, message: String },

    ToggleAdd,
    ToggleEdit,
    BeginEdit { food: Food },
    CloseModal,
    /// The open dialog's command was queued.
    SubmitStarted,

    FormInput { ch: char },
    FormBackspace,
    FormNextField,
    FormPrevField,
    FormInvalid { message: String },

    SelectNext,
    SelectPrev,
    Notify { message: String },
}

impl Intent for DashboardIntent {}
