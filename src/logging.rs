// Diagnostics for the demo. Events go to stderr so stdout only carries the
// demonstration text.

use tracing::Level;

/// Installs the global fmt subscriber. A second call is a no-op.
pub fn init(level: Level) {
    let installed = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(%level, "logging initialized");
    }
}
