use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Install a global fmt subscriber at INFO level. The library itself only
/// emits `tracing` events; embedders and tests opt into output with this.
pub fn init() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok(); // Ignore err if already set
}
