use chrono::{DateTime, Local};

use crate::pnr::dto::PnrReport;
use crate::report::dto::{CheckOutcome, OutgoingEmail, FINAL_SUBJECT, UPDATE_SUBJECT};
use crate::status::dto::StatusSnapshot;

/// Assemble everything one successful check produces.
///
/// Pure: no I/O, so the whole run shape is testable without an SMTP server.
/// The final notice is present exactly when the chart is prepared.
pub fn build_outcome(
    pnr: &str,
    report: &PnrReport,
    last: &StatusSnapshot,
    checked_at: DateTime<Local>,
) -> CheckOutcome {
    let chart_prepared = report.chart_prepared();

    let update = OutgoingEmail {
        subject: UPDATE_SUBJECT,
        body: update_body(pnr, report, &last.current_status, checked_at),
    };

    let final_notice = chart_prepared.then(|| OutgoingEmail {
        subject: FINAL_SUBJECT,
        body: final_body(pnr, &report.current_status),
    });

    CheckOutcome {
        update,
        final_notice,
        snapshot: StatusSnapshot::new(report.current_status.clone(), chart_prepared),
    }
}

fn update_body(
    pnr: &str,
    report: &PnrReport,
    last_status: &str,
    checked_at: DateTime<Local>,
) -> String {
    format!(
        "\nPNR : {}\n\nBooking Status :\n{}\n\nLast Hour Status :\n{}\n\nCurrent Status :\n{}\n\nChart Status :\n{}\n\nChecked at :\n{}\n",
        pnr,
        report.booking_status,
        last_status,
        report.current_status,
        report.chart_status,
        checked_at.format("%d %b %Y %I:%M %p"),
    )
}

fn final_body(pnr: &str, current_status: &str) -> String {
    format!(
        "\nPNR : {}\n\nFINAL STATUS :\n{}\n\nChart has been prepared.\nMonitoring stopped.\n",
        pnr, current_status,
    )
}
