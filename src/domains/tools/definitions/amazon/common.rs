//! Common parameter types and helpers shared across the Amazon tools.
//!
//! This module provides the location/language parameter block every
//! endpoint shares, the size limits the upstream API enforces, and the
//! helpers that turn validated parameters into an MCP result.

use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::core::DataForSeoClient;

/// Maximum number of keywords or ASINs in a bulk array.
pub const MAX_BULK_ITEMS: usize = 1000;

/// Maximum number of ASINs in a keyword intersections request.
pub const MAX_INTERSECTION_ASINS: usize = 20;

/// Maximum number of entries in a `filters` array.
pub const MAX_FILTERS: usize = 8;

/// Maximum number of `order_by` sorting rules.
pub const MAX_ORDER_BY: usize = 3;

/// Maximum value of the `limit` parameter.
pub const MAX_LIMIT: u32 = 1000;

/// Maximum value of the related keywords `depth` parameter.
pub const MAX_DEPTH: u8 = 4;

/// Location and language selectors shared by every Amazon endpoint.
///
/// The upstream API requires at least one of name/code per pair; the
/// fields are flattened into each tool's parameter struct so the wire
/// contract stays identical to the upstream one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct LocaleParams {
    /// Full name of the location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(
        description = "Full name of the location, e.g. \"United States\". Required if location_code is not specified."
    )]
    pub location_name: Option<String>,

    /// Numeric location code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(
        description = "Location code, e.g. 2840. Required if location_name is not specified."
    )]
    pub location_code: Option<u32>,

    /// Full name of the language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(
        description = "Full name of the language, e.g. \"English\". Required if language_code is not specified."
    )]
    pub language_name: Option<String>,

    /// Language code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(
        description = "Language code, e.g. \"en\". Required if language_name is not specified."
    )]
    pub language_code: Option<String>,
}

impl LocaleParams {
    /// Check that each name/code pair has at least one side set.
    pub fn ensure_complete(&self) -> Result<(), String> {
        if self.location_name.is_none() && self.location_code.is_none() {
            return Err("either location_name or location_code must be specified".to_string());
        }
        if self.language_name.is_none() && self.language_code.is_none() {
            return Err("either language_name or language_code must be specified".to_string());
        }
        Ok(())
    }
}

/// Validate an optional `filters` array against the upstream cap.
pub fn check_filters(filters: Option<&Vec<Value>>) -> Result<(), String> {
    match filters {
        Some(f) if f.len() > MAX_FILTERS => Err(format!(
            "filters accepts at most {} conditions, got {}",
            MAX_FILTERS,
            f.len()
        )),
        _ => Ok(()),
    }
}

/// Validate an optional `order_by` array against the upstream cap.
pub fn check_order_by(order_by: Option<&Vec<String>>) -> Result<(), String> {
    match order_by {
        Some(o) if o.len() > MAX_ORDER_BY => Err(format!(
            "order_by accepts at most {} sorting rules, got {}",
            MAX_ORDER_BY,
            o.len()
        )),
        _ => Ok(()),
    }
}

/// Validate an optional `limit` parameter (1..=1000).
pub fn check_limit(limit: Option<u32>) -> Result<(), String> {
    match limit {
        Some(0) => Err("limit must be at least 1".to_string()),
        Some(l) if l > MAX_LIMIT => Err(format!("limit must not exceed {}, got {}", MAX_LIMIT, l)),
        _ => Ok(()),
    }
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result containing the pretty-printed response body.
pub fn response_result(response: &Value) -> CallToolResult {
    let text = serde_json::to_string_pretty(response).unwrap_or_else(|_| response.to_string());
    CallToolResult::success(vec![Content::text(text)])
}

/// Serialize validated parameters into a task object, POST it to the
/// endpoint, and relay the response.
///
/// Unset optional fields are omitted from the task object entirely
/// rather than sent as null.
pub async fn run_task<T: Serialize>(
    client: &DataForSeoClient,
    endpoint: &str,
    params: &T,
) -> CallToolResult {
    let task = match serde_json::to_value(params) {
        Ok(task) => task,
        Err(e) => return error_result(&format!("Failed to serialize request: {}", e)),
    };

    match client.post_task(endpoint, task).await {
        Ok(response) => response_result(&response),
        Err(e) => error_result(&format!("DataForSEO request failed: {}", e)),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::LocaleParams;

    /// A minimal valid locale block for parameter tests.
    pub(crate) fn locale_code_only() -> LocaleParams {
        LocaleParams {
            location_code: Some(2840),
            language_code: Some("en".to_string()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::locale_code_only;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_locale_requires_location() {
        let locale = LocaleParams {
            language_code: Some("en".to_string()),
            ..Default::default()
        };
        let err = locale.ensure_complete().unwrap_err();
        assert!(err.contains("location_name or location_code"));
    }

    #[test]
    fn test_locale_requires_language() {
        let locale = LocaleParams {
            location_name: Some("United States".to_string()),
            ..Default::default()
        };
        let err = locale.ensure_complete().unwrap_err();
        assert!(err.contains("language_name or language_code"));
    }

    #[test]
    fn test_locale_accepts_name_or_code() {
        assert!(locale_code_only().ensure_complete().is_ok());

        let names = LocaleParams {
            location_name: Some("United States".to_string()),
            language_name: Some("English".to_string()),
            ..Default::default()
        };
        assert!(names.ensure_complete().is_ok());
    }

    #[test]
    fn test_locale_unset_fields_omitted() {
        let value = serde_json::to_value(locale_code_only()).unwrap();
        assert_eq!(value, json!({"location_code": 2840, "language_code": "en"}));
    }

    #[test]
    fn test_check_filters_cap() {
        assert!(check_filters(None).is_ok());
        let eight = vec![json!("and"); 8];
        assert!(check_filters(Some(&eight)).is_ok());
        let nine = vec![json!("and"); 9];
        assert!(check_filters(Some(&nine)).is_err());
    }

    #[test]
    fn test_check_order_by_cap() {
        assert!(check_order_by(None).is_ok());
        let three = vec!["avg_position,asc".to_string(); 3];
        assert!(check_order_by(Some(&three)).is_ok());
        let four = vec!["avg_position,asc".to_string(); 4];
        assert!(check_order_by(Some(&four)).is_err());
    }

    #[test]
    fn test_check_limit_range() {
        assert!(check_limit(None).is_ok());
        assert!(check_limit(Some(1)).is_ok());
        assert!(check_limit(Some(1000)).is_ok());
        assert!(check_limit(Some(0)).is_err());
        assert!(check_limit(Some(1001)).is_err());
    }

    #[test]
    fn test_error_result_sets_flag() {
        let result = error_result("bad input");
        assert_eq!(result.is_error, Some(true));
    }

    #[test]
    fn test_response_result_is_success() {
        let result = response_result(&json!({"status_code": 20000}));
        assert!(!result.is_error.unwrap_or(false));
    }
}
