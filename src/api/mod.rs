//! REST client for the food backend and the worker that runs it.

mod client;
mod error;
mod worker;

pub use client::FoodApi;
pub use error::ApiError;
pub use worker::{execute, spawn_worker, ApiOutcome, Operation, UiCommand, UiCommandSender};
