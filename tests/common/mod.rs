//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use foodboard::api::{FoodApi, UiCommand};
use foodboard::config::{ApiConfig, Config, ConfigStore};
use foodboard::food::Food;
use foodboard::ui::app::App;
use tokio::sync::mpsc;

pub fn food(id: u64, name: &str, price: &str) -> Food {
    Food {
        id,
        name: name.to_string(),
        price: price.to_string(),
        image: format!("https://img.example/{}.png", name.to_lowercase()),
        description: None,
        available: true,
    }
}

pub fn cake() -> Food {
    food(1, "Cake", "10.00")
}

pub fn api_for(base_url: &str) -> FoodApi {
    FoodApi::new(&ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 2,
        connect_timeout_seconds: 1,
    })
    .expect("Failed to build api client")
}

/// App wired to a command channel instead of a live worker.
pub fn make_app() -> (App, mpsc::Receiver<UiCommand>) {
    let config = ConfigStore::new(Config::default());
    let mut app = App::new(config);
    let (tx, rx) = mpsc::channel(16);
    app.set_command_sender(tx);
    (app, rx)
}
