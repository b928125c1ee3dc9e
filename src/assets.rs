//! Image and icon references embedded in slide data
//!
//! Assets are never fetched here. A reference is a URL plus the prompt or
//! search query that produced it; the rendering host resolves the URL.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const IMAGE_URL_KEY: &str = "__image_url__";
pub const IMAGE_PROMPT_KEY: &str = "__image_prompt__";
pub const ICON_URL_KEY: &str = "__icon_url__";
pub const ICON_QUERY_KEY: &str = "__icon_query__";

/// A resolved illustrative image and the prompt describing it
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImageRef {
    #[serde(rename = "__image_url__")]
    pub url: String,
    #[serde(rename = "__image_prompt__", default)]
    pub prompt: String,
}

impl ImageRef {
    pub fn new(url: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            prompt: prompt.into(),
        }
    }

    /// Read an image reference out of a JSON value, if it has the right shape
    pub fn from_value(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }

    pub fn to_value(&self) -> Value {
        serde_json::json!({
            IMAGE_URL_KEY: self.url,
            IMAGE_PROMPT_KEY: self.prompt,
        })
    }
}

/// A resolved icon and the search query used to find it
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IconRef {
    #[serde(rename = "__icon_url__")]
    pub url: String,
    #[serde(rename = "__icon_query__", default)]
    pub query: String,
}

impl IconRef {
    pub fn new(url: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            query: query.into(),
        }
    }

    pub fn from_value(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }

    pub fn to_value(&self) -> Value {
        serde_json::json!({
            ICON_URL_KEY: self.url,
            ICON_QUERY_KEY: self.query,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_image_wire_keys() {
        let value = json!({
            "__image_url__": "https://example.com/a.jpg",
            "__image_prompt__": "a skyline",
        });
        let image = ImageRef::from_value(&value).expect("should parse");
        assert_eq!(image.url, "https://example.com/a.jpg");
        assert_eq!(image.prompt, "a skyline");
        assert_eq!(image.to_value(), value);
    }

    #[test]
    fn test_image_prompt_optional() {
        let image = ImageRef::from_value(&json!({ "__image_url__": "x.png" })).unwrap();
        assert_eq!(image.prompt, "");
    }

    #[test]
    fn test_icon_rejects_wrong_shape() {
        assert!(IconRef::from_value(&json!("not an icon")).is_none());
        assert!(IconRef::from_value(&json!({ "url": "x.svg" })).is_none());
    }
}
