//! Shared helpers for integration tests

use botdeck::App;
use botdeck::config::Config;

/// Build an app with the given simulated reply delay
#[must_use]
pub fn app_with_delay(delay_ms: u64) -> App {
    let config = Config {
        reply_delay_ms: delay_ms,
        ..Config::default()
    };
    App::new(config)
}

/// Build an app with the default config
#[must_use]
pub fn default_app() -> App {
    App::new(Config::default())
}
