use crate::catalog::CatalogClient;
use crate::config::{CatalogConfig, Config};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::shutdown::ShutdownSignal;
use crate::ui::terminal_guard::setup_terminal;
use std::sync::mpsc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Spawns the one-shot catalog fetch. Its result arrives on `tx` as
/// [`AppEvent::CatalogLoaded`]; aborting the handle cancels it.
pub fn spawn_catalog_fetch(
    handle: &Handle,
    config: CatalogConfig,
    tx: mpsc::Sender<AppEvent>,
) -> JoinHandle<()> {
    handle.spawn(async move {
        let result = match CatalogClient::new(&config) {
            Ok(client) => client.fetch_catalog().await,
            Err(err) => Err(err),
        };
        if tx.send(AppEvent::CatalogLoaded(result)).is_err() {
            tracing::trace!("Catalog result dropped (UI gone)");
        }
    })
}

/// Routes one loop event to the app.
pub fn apply_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Tick => app.on_tick(),
        // ratatui resizes its buffers on the next draw.
        AppEvent::Resize(_, _) => {}
        AppEvent::CatalogLoaded(result) => app.on_catalog_loaded(result),
        AppEvent::InputClosed => {
            tracing::warn!("Terminal input closed, quitting");
            app.request_quit();
        }
    }
}

pub fn run(config: Config) -> anyhow::Result<()> {
    let shutdown = ShutdownSignal::new();
    shutdown.register()?;

    let runtime = tokio::runtime::Runtime::new()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    let fetch = spawn_catalog_fetch(runtime.handle(), config.catalog.clone(), events.sender());

    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(&config.table);

    loop {
        if shutdown.is_requested() {
            app.request_quit();
        }
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => apply_event(&mut app, event),
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    fetch.abort();
    drop(guard);
    runtime.shutdown_background();
    Ok(())
}
