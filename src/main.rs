//! Try-On Server
//!
//! Usage: `tryon-server [path/to/tryon.xml]`

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tryon_server::api::{run_server, AppState};
use tryon_server::booking::{BookingService, MailCredentials, Mailer, SmtpMailer};
use tryon_server::brand::BrandSettingsStore;
use tryon_server::catalog::CatalogStore;
use tryon_server::mannequin::{DeformRules, MannequinRenderer};
use tryon_server::settings::ServerSettings;
use tryon_server::telemetry::{init_logging, LogConfig};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn build_mailer(settings: &ServerSettings) -> Option<Arc<dyn Mailer>> {
    let credentials = MailCredentials::from_env()?;
    match SmtpMailer::new(&settings.smtp_host, settings.smtp_port, credentials) {
        Ok(mailer) => Some(Arc::new(mailer)),
        Err(e) => {
            tracing::warn!(error = %e, host = %settings.smtp_host, "SMTP relay unavailable, booking emails disabled");
            None
        }
    }
}

fn build_renderer(settings: &ServerSettings) -> MannequinRenderer {
    let rules = match &settings.deform_rules_path {
        Some(path) => DeformRules::load(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Falling back to built-in deform rules");
            settings.deform_rule_set.rules()
        }),
        None => settings.deform_rule_set.rules(),
    };
    MannequinRenderer::new(rules)
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let settings = ServerSettings::resolve(config_path.as_deref())?;

    let log_config = LogConfig {
        file_dir: settings.log_dir.clone(),
        ..LogConfig::default()
    };
    // Keep the guard alive for the program duration
    let _log_guard = init_logging(&log_config)?;

    tracing::info!(
        port = settings.api_port,
        assets = %settings.asset_dir.display(),
        rule_set = ?settings.deform_rule_set,
        "Try-On Server v{}",
        env!("CARGO_PKG_VERSION")
    );

    let mailer = build_mailer(&settings);
    if mailer.is_none() {
        tracing::info!("Email credentials not configured; bookings will be accepted without notification");
    }

    let brand_path = settings.brand_settings_file();
    let state = AppState::new(
        CatalogStore::new(),
        BrandSettingsStore::load(&brand_path),
        BookingService::new(mailer, settings.owner_email.clone()),
        build_renderer(&settings),
        settings.asset_dir.clone(),
    )
    .into_handle();

    // Catalog loads in the background; requests before it lands see an empty list
    let catalog_state = state.clone();
    let delay = settings.catalog_delay();
    tokio::spawn(async move {
        let items = CatalogStore::fetch_demo(delay).await;
        catalog_state.catalog_mut().replace(items);
    });

    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown requested");
            let _ = shutdown_tx.send(true);
        }
    });

    let ip = settings.bind_address.parse()?;
    let addr = SocketAddr::new(ip, settings.api_port);
    run_server(addr, settings.cors_enabled, state, shutdown_rx).await?;

    Ok(())
}
