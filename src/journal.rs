//! Journal (natif) : `tracing` vers stderr.
//!
//! Filtre, du plus fort au plus faible : `RUST_LOG`, `--journal`, clé `journal` de la config.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installe l’abonné global. Appels suivants : sans effet.
pub fn init_journal(filtre: &str) {
    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filtre));

    let _ = tracing_subscriber::registry()
        .with(filtre)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
