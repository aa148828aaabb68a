//! Breadcrumb Trail demo
//!
//! Caller-side code built on `breadcrumb-trail`:
//! - `render`: HTML paragraph, last crumb unlinked, the rest linked
//! - `usage`: push / pop / peek / count / contains walkthrough

mod config;
mod error;
mod render;
mod usage;

pub use config::{RenderConfig, TitleSource};
pub use error::DemoError;
pub use render::{escape_html, render_html};
pub use usage::{run_usage, UsageReport};

pub type Result<T> = std::result::Result<T, DemoError>;

/// Initialize logging
///
/// Logs go to stderr so rendered output on stdout stays clean.
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
