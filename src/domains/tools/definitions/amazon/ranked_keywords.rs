//! Amazon Ranked Keywords tool.
//!
//! Provides the list of keywords a target product (ASIN) ranks for on
//! Amazon.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use crate::core::DataForSeoClient;

use super::common::{
    LocaleParams, check_filters, check_limit, check_order_by, error_result, run_task,
};

/// Parameters for the ranked keywords endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AmazonRankedKeywordsParams {
    /// Target product identifier.
    #[schemars(
        description = "Unique product identifier (ASIN) on Amazon, e.g. \"B00R92CL5E\"."
    )]
    pub asin: String,

    /// Location and language selectors.
    #[serde(flatten)]
    pub locale: LocaleParams,

    /// Maximum number of returned keywords.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Maximum number of returned keywords, 1 to 1000 (default 100).")]
    pub limit: Option<u32>,

    /// Ignore highly similar keywords.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(
        description = "If true, only core keywords are returned and highly similar keywords are excluded (default false)."
    )]
    pub ignore_synonyms: Option<bool>,

    /// Results filtering parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(
        description = "Results filtering conditions, at most 8, joined with \"and\"/\"or\" logical operators. Example: [\"keyword_data.keyword_info.search_volume\",\"in\",[100,1000]]."
    )]
    pub filters: Option<Vec<Value>>,

    /// Results sorting rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(
        description = "Results sorting rules, at most 3, each \"field,asc\" or \"field,desc\". Default: [\"ranked_serp_element.serp_item.rank_group,asc\"]."
    )]
    pub order_by: Option<Vec<String>>,

    /// Offset in the results array.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Offset in the results array of returned keywords (default 0).")]
    pub offset: Option<u32>,
}

impl AmazonRankedKeywordsParams {
    /// Validate against the upstream contract before building a request.
    fn validate(&self) -> Result<(), String> {
        if self.asin.trim().is_empty() {
            return Err("asin must not be empty".to_string());
        }
        check_limit(self.limit)?;
        check_filters(self.filters.as_ref())?;
        check_order_by(self.order_by.as_ref())?;
        self.locale.ensure_complete()
    }
}

/// Amazon Ranked Keywords tool implementation.
#[derive(Debug, Clone)]
pub struct AmazonRankedKeywordsTool;

impl AmazonRankedKeywordsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "dataforseo_labs_amazon_ranked_keywords";

    /// Upstream endpoint path.
    pub const ENDPOINT: &'static str = "/v3/dataforseo_labs/amazon/ranked_keywords/live";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Provides the list of keywords the target product ranks for on Amazon. The returned results are specific to the ASIN specified in the request.";

    /// Validate the parameters and relay the request upstream.
    pub async fn execute(
        client: &DataForSeoClient,
        params: &AmazonRankedKeywordsParams,
    ) -> CallToolResult {
        info!("Ranked keywords request for ASIN: {}", params.asin);

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
        let params: AmazonRankedKeywordsParams = serde_json::from_value(arguments)
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
            input_schema: cached_schema_for_type::<AmazonRankedKeywordsParams>(),
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
                let params: AmazonRankedKeywordsParams =
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

    fn valid_params() -> AmazonRankedKeywordsParams {
        AmazonRankedKeywordsParams {
            asin: "B00R92CL5E".to_string(),
            locale: locale_code_only(),
            limit: None,
            ignore_synonyms: None,
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
    fn test_validate_rejects_empty_asin() {
        let mut params = valid_params();
        params.asin = String::new();
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_too_many_filters() {
        let mut params = valid_params();
        params.filters = Some(vec![json!("and"); 9]);
        let err = params.validate().unwrap_err();
        assert!(err.contains("filters"));
    }

    #[test]
    fn test_validate_rejects_too_many_order_by() {
        let mut params = valid_params();
        params.order_by = Some(vec!["rank_group,asc".to_string(); 4]);
        let err = params.validate().unwrap_err();
        assert!(err.contains("order_by"));
    }

    #[test]
    fn test_task_body_omits_unset_fields() {
        let body = serde_json::to_value(valid_params()).unwrap();
        assert_eq!(
            body,
            json!({
                "asin": "B00R92CL5E",
                "location_code": 2840,
                "language_code": "en"
            })
        );
    }

    #[test]
    fn test_task_body_preserves_filter_shape() {
        let mut params = valid_params();
        params.filters = Some(vec![json!([
            "keyword_data.keyword_info.search_volume",
            "in",
            [100, 1000]
        ])]);
        let body = serde_json::to_value(params).unwrap();
        assert_eq!(
            body["filters"][0],
            json!(["keyword_data.keyword_info.search_volume", "in", [100, 1000]])
        );
    }

    #[test]
    fn test_tool_metadata() {
        let tool = AmazonRankedKeywordsTool::to_tool();
        assert_eq!(tool.name, AmazonRankedKeywordsTool::NAME);
        assert!(tool.description.is_some());
    }
}
