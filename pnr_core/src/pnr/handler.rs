use std::time::Duration;

use reqwest::Client;

use crate::error::{MonitorError, MonitorResult};
use crate::helpers::config::MonitorConfig;
use crate::pnr::dto::{PnrApiResponse, PnrReport};

/// Fixed RapidAPI host header value for the PNR endpoint.
pub const RAPIDAPI_HOST: &str = "irctc-indian-railway-pnr-status.p.rapidapi.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Client for the third-party PNR status API.
#[derive(Clone)]
pub struct PnrClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl PnrClient {
    pub fn new(config: &MonitorConfig) -> MonitorResult<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_key: config.rapidapi_key.clone(),
        })
    }

    /// Issue the single status GET for one booking.
    ///
    /// Transport failures, timeouts, and non-2xx statuses surface as `Http`;
    /// a well-formed body with `success: false` is `ApiFailure`, which the
    /// orchestrator treats as a clean end of the run.
    pub async fn fetch_status(&self, pnr: &str) -> MonitorResult<PnrReport> {
        let url = format!("{}/getPNRStatus/{}", self.base_url, pnr);
        log::debug!("Requesting PNR status: {}", url);

        let response = self
            .client
            .get(&url)
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", RAPIDAPI_HOST)
            .send()
            .await?
            .error_for_status()?;

        let body = response.json::<PnrApiResponse>().await?;

        if !body.success {
            return Err(MonitorError::ApiFailure);
        }

        Ok(PnrReport::from(body.data))
    }
}
