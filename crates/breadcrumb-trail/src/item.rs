//! Breadcrumb item
//!
//! A single navigation entry. Two items are the same crumb when their URLs
//! match; titles and description are display data only.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TrailError;
use crate::Result;

/// Deserializes through [`Item::from_value`], so serialized input follows
/// the same coercion rules as untyped values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct Item {
    /// Target of the crumb, not validated
    url: String,
    /// Text shown in the trail
    short_title: String,
    /// Longer text, e.g. for a tooltip
    long_title: String,
    description: String,
}

impl Item {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_titles(
        url: impl Into<String>,
        short_title: impl Into<String>,
        long_title: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            short_title: short_title.into(),
            long_title: long_title.into(),
            description: String::new(),
        }
    }

    pub fn with_short_title(mut self, short_title: impl Into<String>) -> Self {
        self.short_title = short_title.into();
        self
    }

    pub fn with_long_title(mut self, long_title: impl Into<String>) -> Self {
        self.long_title = long_title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Decode an item from an untyped JSON value.
    ///
    /// Accepts an object with a scalar `url` and optional scalar
    /// `short_title`, `long_title` and `description`. Scalars are coerced to
    /// their text form and `null` becomes the empty string. Anything else is
    /// rejected with [`TrailError::InvalidItem`].
    pub fn from_value(value: &Value) -> Result<Self> {
        let Some(object) = value.as_object() else {
            tracing::debug!(value = %value, "Rejected non-object breadcrumb item");
            return Err(TrailError::InvalidItem);
        };

        let url = match object.get("url") {
            Some(Value::Null) | None => None,
            Some(v) => coerce_scalar(v),
        };
        let Some(url) = url else {
            tracing::debug!(value = %value, "Rejected breadcrumb item without a scalar url");
            return Err(TrailError::InvalidItem);
        };

        let field = |name: &str| -> Result<String> {
            match object.get(name) {
                None => Ok(String::new()),
                Some(v) => coerce_scalar(v).ok_or_else(|| {
                    tracing::debug!(field = name, value = %v, "Rejected non-scalar breadcrumb field");
                    TrailError::InvalidItem
                }),
            }
        };

        Ok(Self {
            url,
            short_title: field("short_title")?,
            long_title: field("long_title")?,
            description: field("description")?,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    pub fn short_title(&self) -> &str {
        &self.short_title
    }

    pub fn set_short_title(&mut self, short_title: impl Into<String>) {
        self.short_title = short_title.into();
    }

    pub fn long_title(&self) -> &str {
        &self.long_title
    }

    pub fn set_long_title(&mut self, long_title: impl Into<String>) {
        self.long_title = long_title.into();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// URL equality; titles and description are ignored.
    pub fn equals(&self, other: &Item) -> bool {
        self.url == other.url
    }

    /// Like [`Item::equals`], for an untyped value that may not be an item.
    pub fn equals_value(&self, other: &Value) -> Result<bool> {
        let other = Item::from_value(other)?;
        Ok(self.equals(&other))
    }

    /// Get display title (with fallback to URL)
    pub fn display_title(&self) -> &str {
        if self.short_title.is_empty() {
            &self.url
        } else {
            &self.short_title
        }
    }
}

fn coerce_scalar(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Item {}

impl Hash for Item {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.url.hash(state);
    }
}

impl TryFrom<&Value> for Item {
    type Error = TrailError;

    fn try_from(value: &Value) -> Result<Self> {
        Item::from_value(value)
    }
}

impl TryFrom<Value> for Item {
    type Error = TrailError;

    fn try_from(value: Value) -> Result<Self> {
        Item::from_value(&value)
    }
}
