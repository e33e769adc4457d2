//! Reducer for the food dashboard.

use crate::api::Operation;
use crate::food::{Food, FoodForm};
use crate::ui::mvi::Reducer;

use super::intent::DashboardIntent;
use super::state::{DashboardState, ModalState, StatusLine};

pub struct DashboardReducer;

impl Reducer for DashboardReducer {
    type State = DashboardState;
    type Intent = DashboardIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DashboardIntent::Loaded { foods } => {
                let count = foods.len();
                state.foods = foods;
                state.loaded = true;
                state.status = Some(StatusLine::info(format!("Loaded {} foods", count)));
                clamp_selection(state)
            }

            DashboardIntent::Created { food } => {
                let message = format!("Added {}", food.name);
                match state.foods.iter_mut().find(|f| f.id == food.id) {
                    Some(existing) => *existing = food,
                    None => state.foods.push(food),
                }
                state.status = Some(StatusLine::info(message));
                if state.modal.is_adding() {
                    return replace_modal(state, ModalState::Closed);
                }
                state
            }

            DashboardIntent::Updated { operation, food } => {
                let id = food.id;
                if state.last_edited.as_ref().is_some_and(|f| f.id == id) {
                    state.last_edited = Some(food.clone());
                }
                if let Some(existing) = state.foods.iter_mut().find(|f| f.id == id) {
                    *existing = food.clone();
                }

                let editing_this = state.modal.editing_food().is_some_and(|f| f.id == id);
                if operation != Operation::Update {
                    // Keep the user's typing; only the snapshot learns the new flag.
                    if let ModalState::Editing { food: snapshot, .. } = &mut state.modal {
                        if snapshot.id == id {
                            snapshot.available = food.available;
                        }
                    }
                    let availability = if food.available { "available" } else { "unavailable" };
                    state.status = Some(StatusLine::info(format!(
                        "{} is now {}",
                        food.name, availability
                    )));
                    return state;
                }

                state.status = Some(StatusLine::info(format!("Saved {}", food.name)));
                if editing_this {
                    return replace_modal(state, ModalState::Closed);
                }
                state
            }

            DashboardIntent::Deleted { id } => {
                let before = state.foods.len();
                state.foods.retain(|f| f.id != id);
                if state.last_edited.as_ref().is_some_and(|f| f.id == id) {
                    state.last_edited = None;
                }
                if state.foods.len() != before {
                    state.status = Some(StatusLine::info("Food deleted"));
                }
                if state.modal.editing_food().is_some_and(|f| f.id == id) {
                    state = replace_modal(state, ModalState::Closed);
                }
                clamp_selection(state)
            }

            DashboardIntent::RequestFailed { operation, message } => {
                match operation {
                    Operation::Load => state.loaded = true,
                    Operation::Create | Operation::Update => state.submitting = false,
                    Operation::ToggleAvailability | Operation::Delete => {}
                }
                state.status = Some(StatusLine::error(format!(
                    "Failed to {}: {}",
                    operation.label(),
                    message
                )));
                state
            }

            DashboardIntent::ToggleAdd => match state.modal {
                ModalState::Closed => replace_modal(
                    state,
                    ModalState::Adding {
                        form: FoodForm::default(),
                        error: None,
                    },
                ),
                ModalState::Adding { .. } => replace_modal(state, ModalState::Closed),
                ModalState::Editing { .. } => state,
            },

            DashboardIntent::ToggleEdit => match state.modal {
                ModalState::Editing { .. } => replace_modal(state, ModalState::Closed),
                ModalState::Closed => {
                    // Reopen with the current copy of the last edited item.
                    let current = state
                        .last_edited
                        .as_ref()
                        .and_then(|last| state.foods.iter().find(|f| f.id == last.id))
                        .cloned();
                    match current {
                        Some(food) => replace_modal(state, editing(food)),
                        None => state,
                    }
                }
                ModalState::Adding { .. } => state,
            },

            DashboardIntent::BeginEdit { food } => {
                state.last_edited = Some(food.clone());
                replace_modal(state, editing(food))
            }

            DashboardIntent::CloseModal => replace_modal(state, ModalState::Closed),

            DashboardIntent::SubmitStarted => {
                state.submitting = state.modal.is_open();
                state
            }

            DashboardIntent::FormInput { ch } => edit_form(state, |form| form.push_char(ch)),
            DashboardIntent::FormBackspace => edit_form(state, FoodForm::pop_char),
            DashboardIntent::FormNextField => edit_form(state, FoodForm::focus_next),
            DashboardIntent::FormPrevField => edit_form(state, FoodForm::focus_prev),

            DashboardIntent::FormInvalid { message } => {
                match &mut state.modal {
                    ModalState::Adding { error, .. } | ModalState::Editing { error, .. } => {
                        *error = Some(message);
                    }
                    ModalState::Closed => {}
                }
                state
            }

            DashboardIntent::SelectNext => {
                let len = state.foods.len();
                state.selected = if len == 0 || state.selected + 1 >= len {
                    0
                } else {
                    state.selected + 1
                };
                state
            }

            DashboardIntent::SelectPrev => {
                let len = state.foods.len();
                state.selected = if len == 0 {
                    0
                } else if state.selected == 0 {
                    len - 1
                } else {
                    state.selected - 1
                };
                state
            }

            DashboardIntent::Notify { message } => {
                state.status = Some(StatusLine::info(message));
                state
            }
        }
    }
}

fn editing(food: Food) -> ModalState {
    ModalState::Editing {
        form: FoodForm::from_food(&food),
        food,
        error: None,
    }
}

/// Swap the dialog. A pending submit belongs to the old dialog.
fn replace_modal(mut state: DashboardState, modal: ModalState) -> DashboardState {
    state.modal = modal;
    state.submitting = false;
    state
}

fn edit_form<F: FnOnce(&mut FoodForm)>(mut state: DashboardState, f: F) -> DashboardState {
    match &mut state.modal {
        ModalState::Adding { form, error } | ModalState::Editing { form, error, .. } => {
            f(form);
            *error = None;
        }
        ModalState::Closed => {}
    }
    state
}

fn clamp_selection(mut state: DashboardState) -> DashboardState {
    state.selected = state.selected.min(state.foods.len().saturating_sub(1));
    state
}
