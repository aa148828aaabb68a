//! Usage walkthrough
//!
//! Exercises every fallible trail operation, propagating errors with `?`.

use breadcrumb_trail::{Item, Trail};
use serde::Serialize;

use crate::Result;

/// What the walkthrough observed, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageReport {
    pub started_empty: bool,
    pub popped_url: String,
    pub top_url: String,
    pub count: usize,
    pub contains_mdn: bool,
}

pub fn run_usage() -> Result<UsageReport> {
    let mut trail = Trail::new();
    let started_empty = trail.is_empty();

    trail.push(Item::with_titles(
        "https://developer.mozilla.org/en-US/",
        "Mozilla Developer Network",
        "",
    ));
    trail.push(Item::with_titles(
        "https://developer.mozilla.org/en-US/docs/MDN",
        "The MDN project",
        "",
    ));

    // Pop and push back
    let item = trail.pop()?;
    let popped_url = item.url().to_string();
    trail.push(item);

    let top_url = trail.peek_last()?.url().to_string();
    let count = trail.count();

    // Untyped probe, as a template layer would hand it over
    let probe = serde_json::json!({ "url": "https://developer.mozilla.org/en-US/docs/MDN" });
    let contains_mdn = trail.contains_value(&probe)?;

    tracing::info!(count, top = %top_url, contains_mdn, "Usage walkthrough finished");

    Ok(UsageReport {
        started_empty,
        popped_url,
        top_url,
        count,
        contains_mdn,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_walkthrough() {
        let report = run_usage().unwrap();

        assert!(report.started_empty);
        assert_eq!(report.popped_url, "https://developer.mozilla.org/en-US/docs/MDN");
        assert_eq!(report.top_url, report.popped_url);
        assert_eq!(report.count, 2);
        assert!(report.contains_mdn);
    }
}
