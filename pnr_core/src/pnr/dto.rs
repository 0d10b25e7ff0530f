use serde::Deserialize;

/// Placeholder for passenger fields the API did not return.
pub const NOT_AVAILABLE: &str = "N/A";

/// Chart status the API reports once berth assignments are final.
const CHART_PREPARED: &str = "chart prepared";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PnrApiResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: PnrData,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PnrData {
    pub chart_status: Option<String>,
    #[serde(default)]
    pub passenger_list: Vec<Passenger>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Passenger {
    pub booking_status_details: Option<String>,
    pub current_status_details: Option<String>,
}

/// The fields one run actually consumes, extracted from the first passenger.
/// Missing values degrade to placeholders instead of failing the run.
#[derive(Debug, Clone)]
pub struct PnrReport {
    pub booking_status: String,
    pub current_status: String,
    pub chart_status: String,
}

impl PnrReport {
    /// Case-insensitive check for the terminal "chart prepared" milestone.
    pub fn chart_prepared(&self) -> bool {
        self.chart_status.eq_ignore_ascii_case(CHART_PREPARED)
    }
}

impl From<PnrData> for PnrReport {
    fn from(data: PnrData) -> Self {
        let passenger = data.passenger_list.into_iter().next().unwrap_or_default();

        Self {
            booking_status: passenger
                .booking_status_details
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            current_status: passenger
                .current_status_details
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            chart_status: data.chart_status.unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}
