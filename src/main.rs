use std::{path::PathBuf, time::Duration};

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use newswire::{
    aggregator::{default_sources, Aggregator, AggregatorConfig, Credentials, FailurePolicy},
    api::{router, router_with_assets, AppState},
    store::ArticleStore,
};

#[derive(Parser)]
#[command(name = "newswire")]
#[command(about = "News CRUD API with cached aggregation of external news sources")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    #[arg(short, long, env = "PORT", default_value = "3000")]
    port: u16,

    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Seconds an aggregated result is served from cache
    #[arg(long, default_value = "600")]
    cache_ttl_secs: u64,

    /// Per-request timeout for upstream sources, unbounded when unset
    #[arg(long)]
    upstream_timeout_secs: Option<u64>,

    /// Keep successful sources when one upstream fails
    #[arg(long)]
    isolate_failures: bool,

    /// Directory of static assets served outside /api
    #[arg(long, default_value = "public")]
    public_dir: PathBuf,

    #[arg(long)]
    debug: bool,
}

impl Args {
    fn aggregator_config(&self, credentials: &Credentials) -> AggregatorConfig {
        let policy = if self.isolate_failures {
            FailurePolicy::Isolated
        } else {
            FailurePolicy::AllOrNothing
        };

        AggregatorConfig::new(default_sources(credentials))
            .with_cache_ttl(Duration::from_secs(self.cache_ttl_secs))
            .with_upstream_timeout(self.upstream_timeout_secs.map(Duration::from_secs))
            .with_failure_policy(policy)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let filter_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("newswire={filter_level},tower_http=info").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let credentials = Credentials::from_env();
    let aggregator = Aggregator::new(args.aggregator_config(&credentials))
        .context("failed to build upstream client")?;
    let state = AppState::new(ArticleStore::seeded(), aggregator);

    let app = if args.public_dir.is_dir() {
        info!("Serving static assets from {}", args.public_dir.display());
        router_with_assets(state, &args.public_dir)
    } else {
        warn!(
            "Static asset directory {} not found, serving API only",
            args.public_dir.display()
        );
        router(state)
    };

    let bind_addr = format!("{}:{}", args.host, args.port);
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind to {bind_addr}"))?;

    info!("News server running on {}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received terminate signal");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::try_parse_from([
            "newswire",
            "--port",
            "9000",
            "--cache-ttl-secs",
            "30",
            "--isolate-failures",
            "--debug",
        ])
        .unwrap();

        assert_eq!(args.port, 9000);
        assert_eq!(args.cache_ttl_secs, 30);
        assert!(args.isolate_failures);
        assert!(args.debug);
        assert!(args.upstream_timeout_secs.is_none());

        let config = args.aggregator_config(&Credentials::default());
        assert_eq!(config.failure_policy, FailurePolicy::Isolated);
        assert_eq!(config.cache_ttl, Duration::from_secs(30));
        assert_eq!(config.sources.len(), 3);
    }
}
