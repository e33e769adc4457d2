use crate::api::{spawn_worker, FoodApi};
use crate::config::ConfigStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

pub fn run(config: ConfigStore) -> io::Result<()> {
    let settings = config.get();
    let tick_rate = Duration::from_millis(settings.ui.tick_rate_ms);
    let api = FoodApi::new(&settings.api).map_err(io::Error::other)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    let outcome_tx = events.sender();
    let commands = spawn_worker(runtime.handle(), api, move |outcome| {
        let _ = outcome_tx.send(AppEvent::Api(outcome));
    });

    let mut app = App::new(config);
    app.set_command_sender(commands);
    app.load();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Api(outcome)) => app.on_api_outcome(outcome),
            // Next draw picks up the new size.
            Ok(AppEvent::Resize) | Ok(AppEvent::Tick) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!("shutting down");
    // Dropping the app drops the command sender, which ends the worker.
    drop(app);
    runtime.shutdown_timeout(Duration::from_secs(1));
    drop(guard);
    Ok(())
}
