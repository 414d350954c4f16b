/// Install the fmt subscriber. `level` takes `EnvFilter` syntax
/// (e.g. `info`, `life_engine=trace`); an unparsable filter falls back to
/// `info`. Safe to call more than once.
pub fn init(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter).with(fmt::layer());
    let _ = registry.try_init();
}
