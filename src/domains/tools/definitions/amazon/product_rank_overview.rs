//! Amazon Product Rank Overview tool.
//!
//! Provides ranking data from organic and paid Amazon SERPs for up to 1000
//! target products (ASINs). Data is updated weekly upstream.

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

use super::common::{LocaleParams, MAX_BULK_ITEMS, error_result, run_task};

/// Parameters for the product rank overview endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AmazonProductRankOverviewParams {
    /// Target product identifiers.
    #[schemars(
        description = "Product identifiers (ASINs) to receive ranking data for, at most 1000. All letters must be uppercase, e.g. [\"B01LW2SL7R\", \"B001TJ3HUG\"]."
    )]
    pub asins: Vec<String>,

    /// Location and language selectors.
    #[serde(flatten)]
    pub locale: LocaleParams,
}

impl AmazonProductRankOverviewParams {
    /// Validate against the upstream contract before building a request.
    fn validate(&self) -> Result<(), String> {
        if self.asins.is_empty() {
            return Err("asins must contain at least one ASIN".to_string());
        }
        if self.asins.len() > MAX_BULK_ITEMS {
            return Err(format!(
                "asins accepts at most {} entries, got {}",
                MAX_BULK_ITEMS,
                self.asins.len()
            ));
        }
        self.locale.ensure_complete()
    }
}

/// Amazon Product Rank Overview tool implementation.
#[derive(Debug, Clone)]
pub struct AmazonProductRankOverviewTool;

impl AmazonProductRankOverviewTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "dataforseo_labs_amazon_product_rank_overview";

    /// Upstream endpoint path.
    pub const ENDPOINT: &'static str = "/v3/dataforseo_labs/amazon/product_rank_overview/live";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Provides ranking data from organic and paid Amazon SERPs for the target products. The returned results are specific to the ASINs specified in the request. Data is updated weekly.";

    /// Validate the parameters and relay the request upstream.
    pub async fn execute(
        client: &DataForSeoClient,
        params: &AmazonProductRankOverviewParams,
    ) -> CallToolResult {
        info!(
            "Product rank overview request for {} ASIN(s)",
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
        let params: AmazonProductRankOverviewParams = serde_json::from_value(arguments)
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
            input_schema: cached_schema_for_type::<AmazonProductRankOverviewParams>(),
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
                let params: AmazonProductRankOverviewParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&client, &params).await)
            }
            .boxed()
        })
    }
}
