use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use karalink::attract::{AttractRunner, AttractScheduler, LogView, PlaybackController, VideoSources};
use karalink::common::{self, types::AnyResult};
use karalink::configs::Config;
use karalink::media::MpvSurface;
use karalink::selection::SelectionStore;
use karalink::server::{self, AppState};

#[tokio::main]
async fn main() -> AnyResult<()> {
    let config = Config::load()?;
    common::logger::init(&config);

    info!("karalink {} starting", env!("CARGO_PKG_VERSION"));

    let store = Arc::new(SelectionStore::new());

    if config.server.enabled {
        let state = Arc::new(AppState {
            store: store.clone(),
            config: config.clone(),
        });
        match server::start(state).await {
            Ok(()) => info!("Selection API available at {}", config.server.public_url()),
            // A taken port must not take the kiosk down; it keeps
            // running with the attract screen only.
            Err(e) => warn!(
                "Selection API failed to start: {} (continuing without network interface)",
                e
            ),
        }
    } else {
        info!("Selection API disabled by configuration");
    }

    let sources = VideoSources::from_config(&config.attract);
    if sources.is_empty() {
        warn!("no attract videos configured, the screen will stay idle");
    }

    let (event_tx, event_rx) = flume::unbounded();
    let surface = MpvSurface::new(
        event_tx,
        config.attract.volume_level(),
        config.display.clone(),
    );
    let controller = PlaybackController::new(
        Box::new(surface),
        Duration::from_millis(config.attract.pre_roll_ms),
        Duration::from_millis(config.attract.post_roll_ms),
    );
    let runner = AttractRunner::new(
        AttractScheduler::new(sources),
        controller,
        store,
        Box::new(LogView::new()),
        event_rx,
        Duration::from_millis(config.attract.poll_interval_ms),
        Duration::from_millis(config.attract.flash_interval_ms),
    );
    tokio::spawn(runner.run());

    tokio::signal::ctrl_c().await?;
    info!("shutting down");

    Ok(())
}
