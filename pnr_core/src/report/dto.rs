use crate::status::dto::StatusSnapshot;

pub const UPDATE_SUBJECT: &str = "🚆 IRCTC PNR Hourly Update";
pub const FINAL_SUBJECT: &str = "✅ Chart Prepared – Final Update";

/// One email ready to hand to the mailer.
#[derive(Debug, Clone)]
pub struct OutgoingEmail {
    pub subject: &'static str,
    pub body: String,
}

/// Everything a run produces once the fetch has succeeded: the update email,
/// the final notice when the chart is prepared, and the snapshot to persist.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub update: OutgoingEmail,
    pub final_notice: Option<OutgoingEmail>,
    pub snapshot: StatusSnapshot,
}
