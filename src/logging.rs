//! Inicialização de logs (tracing)
//!
//! `RUST_LOG` tem prioridade; sem ele, `--verbose` liga debug para os
//! crates do projeto. Logs vão para stderr, a saída da CLI fica no stdout.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "bimtrack=debug,bimtrack_common=debug"
    } else {
        "bimtrack=warn"
    }
}

pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose).into());

    // segunda inicialização (testes) é ignorada
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
