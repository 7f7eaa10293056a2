//! Amazon Product Keyword Intersections tool.
//!
//! Provides the list of keywords for which the target products intersect
//! in Amazon SERPs.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

use crate::core::DataForSeoClient;

use super::common::{
    LocaleParams, MAX_INTERSECTION_ASINS, check_filters, check_limit, check_order_by,
    error_result, run_task,
};

/// Mode for finding ASIN intersections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum IntersectionMode {
    /// Keywords any of the target products rank for.
    Union,
    /// Keywords all of the target products rank for.
    Intersect,
}

/// Parameters for the product keyword intersections endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AmazonProductKeywordIntersectionsParams {
    /// Target product identifiers, keyed by position number.
    #[schemars(
        description = "ASINs of target products as an object with numbered keys, at most 20 entries. Example: {\"1\": \"019005476X\", \"2\": \"0190074442\"}."
    )]
    pub asins: BTreeMap<String, String>,

    /// Location and language selectors.
    #[serde(flatten)]
    pub locale: LocaleParams,

    /// Mode for finding ASIN intersections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(
        description = "Mode for finding ASIN intersections: \"union\" or \"intersect\" (default intersect)."
    )]
    pub intersection_mode: Option<IntersectionMode>,

    /// Maximum number of returned keywords.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Maximum number of returned keywords, 1 to 1000 (default 100).")]
    pub limit: Option<u32>,

    /// Results filtering parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(
        description = "Results filtering conditions, at most 8, joined with \"and\"/\"or\" logical operators. Example: [\"avg_position\",\"<\",10]."
    )]
    pub filters: Option<Vec<Value>>,

    /// Results sorting rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(
        description = "Results sorting rules, at most 3, each \"field,asc\" or \"field,desc\". Default: [\"intersections,desc\"]."
    )]
    pub order_by: Option<Vec<String>>,

    /// Offset in the results array.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Offset in the results array of returned keywords (default 0).")]
    pub offset: Option<u32>,
}

impl AmazonProductKeywordIntersectionsParams {
    /// Validate against the upstream contract before building a request.
    fn validate(&self) -> Result<(), String> {
        if self.asins.is_empty() {
            return Err("asins must contain at least one ASIN".to_string());
        }
        if self.asins.len() > MAX_INTERSECTION_ASINS {
            return Err(format!(
                "asins accepts at most {} entries, got {}",
                MAX_INTERSECTION_ASINS,
                self.asins.len()
            ));
        }
        check_limit(self.limit)?;
        check_filters(self.filters.as_ref())?;
        check_order_by(self.order_by.as_ref())?;
        self.locale.ensure_complete()
    }
}

/// Amazon Product Keyword Intersections tool implementation.
#[derive(Debug, Clone)]
pub struct AmazonProductKeywordIntersectionsTool;

impl AmazonProductKeywordIntersectionsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "dataforseo_labs_amazon_product_keyword_intersections";

    /// Upstream endpoint path.
    pub const ENDPOINT: &'static str =
        "/v3/dataforseo_labs/amazon/product_keyword_intersections/live";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Provides the list of keywords for which the target products intersect in Amazon SERPs. The returned results are specific to the ASINs specified in the request.";

    /// Validate the parameters and relay the request upstream.
    pub async fn execute(
        client: &DataForSeoClient,
        params: &AmazonProductKeywordIntersectionsParams,
    ) -> CallToolResult {
        info!(
            "Keyword intersections request for {} ASIN(s)",
            params.asins.len()
        );

        if let Err(msg) = params.validate() {
            return error_result(&msg);
        }

        run_task(client, Self::ENDPOINT, params).await
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        client: Arc<DataForSeoClient>,
    ) -> Result<serde_json::Value, String> {
        let params: AmazonProductKeywordIntersectionsParams = serde_json::from_value(arguments)
            .map_err(|e| format!("Invalid arguments: {}", e))?;

        let result = Self::execute(&client, &params).await;

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<AmazonProductKeywordIntersectionsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>(client: Arc<DataForSeoClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let client = client.clone();
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: AmazonProductKeywordIntersectionsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&client, &params).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::common::test_support::locale_code_only;
    use super::*;
    use serde_json::json;

    fn valid_params() -> AmazonProductKeywordIntersectionsParams {
        let mut asins = BTreeMap::new();
        asins.insert("1".to_string(), "019005476X".to_string());
        asins.insert("2".to_string(), "0190074442".to_string());

        AmazonProductKeywordIntersectionsParams {
            asins,
            locale: locale_code_only(),
            intersection_mode: None,
            limit: None,
            filters: None,
            order_by: None,
            offset: None,
        }
    }

    #[test]
    fn test_validate_accepts_valid_params() {
        assert!(valid_params().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_asins() {
        let mut params = valid_params();
        params.asins.clear();
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_over_20_asins() {
        let mut params = valid_params();
        params.asins = (1..=21)
            .map(|i| (i.to_string(), "019005476X".to_string()))
            .collect();
        let err = params.validate().unwrap_err();
        assert!(err.contains("20"));
    }

    #[test]
    fn test_intersection_mode_enum_rejects_unknown_value() {
        let result = serde_json::from_value::<AmazonProductKeywordIntersectionsParams>(json!({
            "asins": {"1": "019005476X"},
            "location_code": 2840,
            "language_code": "en",
            "intersection_mode": "merge"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_intersection_mode_serializes_lowercase() {
        let mut params = valid_params();
        params.intersection_mode = Some(IntersectionMode::Union);
        let body = serde_json::to_value(params).unwrap();
        assert_eq!(body["intersection_mode"], "union");
    }

    #[test]
    fn test_task_body_keeps_numbered_keys() {
        let body = serde_json::to_value(valid_params()).unwrap();
        assert_eq!(
            body["asins"],
            json!({"1": "019005476X", "2": "0190074442"})
        );
    }

    #[test]
    fn test_tool_metadata() {
        let tool = AmazonProductKeywordIntersectionsTool::to_tool();
        assert_eq!(tool.name, AmazonProductKeywordIntersectionsTool::NAME);
        assert!(tool.description.is_some());
    }
}
