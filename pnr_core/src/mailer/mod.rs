pub mod handler;

pub use handler::Mailer;
