//! Amazon Related Keywords tool.
//!
//! Provides keywords appearing in the "Related Searches" section on Amazon
//! for a seed keyword. The search is depth-first: depth 0 returns only the
//! seed keyword, depth 4 up to 1554 keyword ideas.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::core::DataForSeoClient;

use super::common::{LocaleParams, MAX_DEPTH, check_limit, error_result, run_task};

/// Parameters for the related keywords endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AmazonRelatedKeywordsParams {
    /// Seed keyword.
    #[schemars(
        description = "Seed keyword (UTF-8, lowercase), e.g. \"computer mouse\"."
    )]
    pub keyword: String,

    /// Location and language selectors.
    #[serde(flatten)]
    pub locale: LocaleParams,

    /// Keyword search depth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(
        description = "Keyword search depth, 0 to 4 (default 1). Estimated maximum keywords per level: 0 = seed only, 1 = 6, 2 = 42, 3 = 258, 4 = 1554."
    )]
    pub depth: Option<u8>,

    /// Include data for the seed keyword itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(
        description = "If true, data for the seed keyword is provided in the seed_keyword_data array (default false)."
    )]
    pub include_seed_keyword: Option<bool>,

    /// Ignore highly similar keywords.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(
        description = "If true, only core keywords are returned and highly similar keywords are excluded (default false)."
    )]
    pub ignore_synonyms: Option<bool>,

    /// Maximum number of returned keywords.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Maximum number of returned keywords, 1 to 1000 (default 100).")]
    pub limit: Option<u32>,

    /// Offset in the results array.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Offset in the results array of returned keywords (default 0).")]
    pub offset: Option<u32>,
}

impl AmazonRelatedKeywordsParams {
    /// Validate against the upstream contract before building a request.
    fn validate(&self) -> Result<(), String> {
        if self.keyword.trim().is_empty() {
            return Err("keyword must not be empty".to_string());
        }
        if let Some(depth) = self.depth {
            if depth > MAX_DEPTH {
                return Err(format!("depth must be between 0 and {}, got {}", MAX_DEPTH, depth));
            }
        }
        check_limit(self.limit)?;
        self.locale.ensure_complete()
    }
}

/// Amazon Related Keywords tool implementation.
#[derive(Debug, Clone)]
pub struct AmazonRelatedKeywordsTool;

impl AmazonRelatedKeywordsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "dataforseo_labs_amazon_related_keywords";

    /// Upstream endpoint path.
    pub const ENDPOINT: &'static str = "/v3/dataforseo_labs/amazon/related_keywords/live";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Provides keywords appearing in the \"Related Searches\" section on Amazon. Up to 1554 keyword ideas can be returned by specifying the search depth. Each related keyword comes with search volume information. The search algorithm is a depth-first search for queries appearing in the \"Related Searches\" section for the seed keyword.";

    /// Validate the parameters and relay the request upstream.
    pub async fn execute(
        client: &DataForSeoClient,
        params: &AmazonRelatedKeywordsParams,
    ) -> CallToolResult {
        info!("Related keywords request for seed: {}", params.keyword);

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
        let params: AmazonRelatedKeywordsParams = serde_json::from_value(arguments)
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
            input_schema: cached_schema_for_type::<AmazonRelatedKeywordsParams>(),
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
                let params: AmazonRelatedKeywordsParams =
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

    fn valid_params() -> AmazonRelatedKeywordsParams {
        AmazonRelatedKeywordsParams {
            keyword: "computer mouse".to_string(),
            locale: locale_code_only(),
            depth: None,
            include_seed_keyword: None,
            ignore_synonyms: None,
            limit: None,
            offset: None,
        }
    }

    #[test]
    fn test_validate_accepts_valid_params() {
        assert!(valid_params().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_keyword() {
        let mut params = valid_params();
        params.keyword = "  ".to_string();
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_depth_range() {
        let mut params = valid_params();
        params.depth = Some(4);
        assert!(params.validate().is_ok());
        params.depth = Some(5);
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_limit_range() {
        let mut params = valid_params();
        params.limit = Some(1000);
        assert!(params.validate().is_ok());
        params.limit = Some(1001);
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_task_body_omits_unset_fields() {
        let body = serde_json::to_value(valid_params()).unwrap();
        assert_eq!(
            body,
            json!({
                "keyword": "computer mouse",
                "location_code": 2840,
                "language_code": "en"
            })
        );
    }

    #[test]
    fn test_task_body_keeps_set_fields() {
        let mut params = valid_params();
        params.depth = Some(2);
        params.include_seed_keyword = Some(true);
        let body = serde_json::to_value(params).unwrap();
        assert_eq!(body["depth"], 2);
        assert_eq!(body["include_seed_keyword"], true);
    }

    #[test]
    fn test_tool_metadata() {
        let tool = AmazonRelatedKeywordsTool::to_tool();
        assert_eq!(tool.name, AmazonRelatedKeywordsTool::NAME);
        assert!(tool.description.is_some());
    }
}
