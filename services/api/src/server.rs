use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use talent_track::config::AppConfig;
use talent_track::error::AppError;
use talent_track::store::MemoryStore;
use talent_track::telemetry;
use tracing::{info, warn};

use crate::cli::ServeArgs;
use crate::infra::{build_services, AppState};
use crate::routes::api_router;
use crate::seed::seed_demo_data;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = Arc::new(MemoryStore::new());
    if args.seed {
        // Demo data is a convenience; a failure must not block startup.
        if let Err(err) = seed_demo_data(store.as_ref()) {
            warn!(error = %err, "demo data seeding failed");
        }
    }

    let services = build_services(store);
    let app = api_router(services)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "talent track service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
