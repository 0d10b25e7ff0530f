use std::env;

use chrono::Local;
use pnr_core::error::{MonitorError, MonitorResult};
use pnr_core::helpers::config::MonitorConfig;
use pnr_core::mailer::Mailer;
use pnr_core::pnr::handler::PnrClient;
use pnr_core::report::handler::build_outcome;
use pnr_core::schedule;
use pnr_core::status::storage::StatusStore;

#[tokio::main]
async fn main() -> MonitorResult<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    // Presence only, never the values.
    log::info!("RAPIDAPI_KEY set: {}", env::var("RAPIDAPI_KEY").is_ok());
    log::info!(
        "PNR_GMAIL_ADDRESS set: {}",
        env::var("PNR_GMAIL_ADDRESS").is_ok()
    );
    log::info!(
        "PNR_GMAIL_APP_PASSWORD set: {}",
        env::var("PNR_GMAIL_APP_PASSWORD").is_ok()
    );

    let config = MonitorConfig::from_env()?;

    if schedule::quiet_hours_now() {
        log::info!("Quiet hours. Skipping check.");
        return Ok(());
    }

    match run_check(&config).await {
        Err(MonitorError::ApiFailure) => {
            log::warn!("PNR API reported an unsuccessful lookup; no email sent, state unchanged");
            Ok(())
        }
        result => result,
    }
}

/// One monitoring pass: fetch, compare, notify, persist, optionally finalize.
async fn run_check(config: &MonitorConfig) -> MonitorResult<()> {
    let client = PnrClient::new(config)?;
    let report = client.fetch_status(&config.pnr_number).await?;

    let store = StatusStore::new(config.state_file.clone());
    let last = store.load()?;

    let outcome = build_outcome(&config.pnr_number, &report, &last, Local::now());

    let mailer = Mailer::new(config)?;
    mailer
        .send(outcome.update.subject, &outcome.update.body)
        .await?;
    log::info!(
        "Status update sent: {} -> {}",
        last.current_status,
        outcome.snapshot.current_status
    );

    store.save(&outcome.snapshot)?;

    if let Some(final_notice) = &outcome.final_notice {
        mailer.send(final_notice.subject, &final_notice.body).await?;
        log::info!("Chart prepared; final notice sent, monitoring complete");
    }

    Ok(())
}
