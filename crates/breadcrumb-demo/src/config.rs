//! Render configuration

use std::path::Path;

use breadcrumb_trail::{Item, Trail};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Which item field is used as link text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleSource {
    #[default]
    Short,
    Long,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Markup emitted after every linked crumb, written as-is
    pub separator: String,
    /// Element wrapping the whole trail
    pub wrapper_tag: String,
    pub title: TitleSource,
    /// Crumbs to render, root first
    pub items: Vec<Item>,
}

impl RenderConfig {
    /// Load from a JSON file; fields missing from the file keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;

        tracing::info!(
            path = %path.display(),
            items = config.items.len(),
            "Loaded render config"
        );

        Ok(config)
    }

    /// Trail built from the configured items, in order.
    pub fn trail(&self) -> Trail {
        self.items.iter().cloned().collect()
    }

    /// Link text for an item, falling back to the URL when empty.
    pub fn title_of<'a>(&self, item: &'a Item) -> &'a str {
        let title = match self.title {
            TitleSource::Short => item.short_title(),
            TitleSource::Long => item.long_title(),
        };

        if title.is_empty() {
            item.url()
        } else {
            title
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            separator: " &rarr;".to_string(),
            wrapper_tag: "p".to_string(),
            title: TitleSource::Short,
            items: vec![
                Item::with_titles(
                    "https://developer.mozilla.org/en-US/",
                    "Mozilla Developer Network",
                    "",
                ),
                Item::with_titles(
                    "https://developer.mozilla.org/en-US/docs/MDN",
                    "The MDN project",
                    "",
                ),
                Item::with_titles(
                    "https://developer.mozilla.org/en-US/docs/MDN/Getting_started",
                    "Getting started on MDN",
                    "",
                ),
            ],
        }
    }
}
