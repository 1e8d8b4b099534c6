//! # StarBar Demo Host
//!
//! Drives a star bar from a single-threaded tokio loop with a scripted
//! gesture and logs every rating event.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p starbar_ui --features demo --bin starbar_demo
//!
//! # Alternative ranges {red=1, yellow=2-3, green=4-10}
//! cargo run -p starbar_ui --features demo --bin starbar_demo -- --alt-ranges
//!
//! # Load ranges and timing from a file
//! cargo run -p starbar_ui --features demo --bin starbar_demo -- --config data/starbar.toml
//! ```

use std::process::ExitCode;
use std::time::Duration;

use starbar_ui::{
    PointerEvent, RatingListener, SpriteKey, SpriteMetrics, StarBar, StarBarConfig,
    StarBarResult, StarResources, Widget,
};
use tokio::time::{sleep_until, Instant};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Frame interval while the bar animates.
const FRAME_MS: u64 = 16;

/// Width the demo lays the bar out at.
const BAR_WIDTH: f32 = 1000.0;

/// Fixed sprite sizes standing in for real image assets.
struct DemoResources;

impl StarResources for DemoResources {
    fn sprite(&self, key: SpriteKey) -> SpriteMetrics {
        let size = match key {
            SpriteKey::Neutral | SpriteKey::Small(_) => 48.0,
            SpriteKey::Large(_) => 130.0,
        };
        SpriteMetrics {
            texture_id: u32::try_from(key.index()).unwrap_or_default(),
            width: size,
            height: size,
        }
    }

    fn label_font_size(&self) -> f32 {
        14.0
    }
}

/// Logs what the sample host would show on screen.
struct LoggingListener;

impl RatingListener for LoggingListener {
    fn on_start_rating(&mut self) -> bool {
        info!("started rating");
        true
    }

    fn on_pending_rating(&mut self, rating: u8) {
        info!(rating, "pending rating");
    }

    fn on_final_rating(&mut self, rating: u8, swipe: bool) {
        info!(rating, swipe, "final rating");
    }

    fn on_cancel_rating(&mut self) {
        info!("rating cancelled");
    }
}

/// Press at the left edge, drag to the top star, release, then an overdrag cancel.
fn script() -> Vec<(u64, PointerEvent)> {
    let mut events = vec![(0, PointerEvent::down(0.0, 30.0, 0))];
    for step in 1..=19_u16 {
        let t = u64::from(step) * 15;
        events.push((t, PointerEvent::moved(f32::from(step) * 50.0, 30.0, t)));
    }
    events.push((300, PointerEvent::up(950.0, 0.0, 300)));

    events.push((2500, PointerEvent::down(400.0, 30.0, 2500)));
    events.push((2700, PointerEvent::moved(420.0, -200.0, 2700)));
    events.push((2900, PointerEvent::up(420.0, -200.0, 2900)));
    events
}

struct Options {
    alt_ranges: bool,
    config: Option<String>,
}

fn parse_args() -> Options {
    let mut options = Options {
        alt_ranges: false,
        config: None,
    };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--alt-ranges" => options.alt_ranges = true,
            "--config" => options.config = args.next(),
            other => error!(arg = other, "ignoring unknown argument"),
        }
    }
    options
}

fn build_bar(options: &Options) -> StarBarResult<StarBar> {
    let config = match &options.config {
        Some(path) => StarBarConfig::from_toml_file(path)?,
        None => StarBarConfig::default(),
    };

    let mut bar = StarBar::with_config(config, &DemoResources);
    if options.alt_ranges {
        bar.set_ranges(2, 4)?;
    }
    let (width, height) = bar.measure(BAR_WIDTH);
    bar.resize(width, height);
    bar.set_listener(LoggingListener);
    Ok(bar)
}

async fn run(mut bar: StarBar) {
    let start = Instant::now();
    let at = |ms: u64| start + Duration::from_millis(ms);
    let mut pending = script().into_iter().peekable();
    let mut commands = Vec::with_capacity(32);

    loop {
        let now_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        while let Some((_, event)) = pending.next_if(|(due, _)| *due <= now_ms) {
            bar.handle_pointer(&PointerEvent { time_ms: now_ms, ..event });
        }
        bar.advance(now_ms);

        if bar.take_redraw_request() {
            commands.clear();
            bar.render(&mut commands);
            debug!(now_ms, commands = commands.len(), sizes = ?bar.current_sizes(), "frame");
        }

        let next_script = pending.peek().map(|(due, _)| *due);
        let next_wake = match (next_script, bar.next_wakeup()) {
            (None, None) => break,
            (Some(a), Some(b)) => a.min(b),
            (Some(a), None) | (None, Some(a)) => a,
        };
        // An animation tick is always due "now"; pace it at the frame rate.
        let wake_ms = if next_wake <= now_ms { now_ms + FRAME_MS } else { next_wake };
        sleep_until(at(wake_ms)).await;
    }

    info!(phase = ?bar.phase(), "bar at rest");
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let options = parse_args();
    let bar = match build_bar(&options) {
        Ok(bar) => bar,
        Err(err) => {
            error!(%err, "failed to set up star bar");
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_time().build() {
        Ok(runtime) => runtime,
        Err(err) => {
            error!(%err, "failed to start runtime");
            return ExitCode::FAILURE;
        }
    };
    runtime.block_on(run(bar));
    ExitCode::SUCCESS
}
