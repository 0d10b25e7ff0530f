pub mod handler;

pub use handler::{is_quiet_hours, quiet_hours_now};
