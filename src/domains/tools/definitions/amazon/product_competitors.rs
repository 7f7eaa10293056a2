//! Amazon Product Competitors tool.
//!
//! Provides the list of products that intersect with a target ASIN in
//! Amazon SERPs, useful for identifying product competitors for a listing.
//! Data is updated weekly upstream.

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

/// Parameters for the product competitors endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AmazonProductCompetitorsParams {
    /// Target product identifier.
    #[schemars(
        description = "Unique product identifier (ASIN) on Amazon, e.g. \"019005476X\"."
    )]
    pub asin: String,

    /// Location and language selectors.
    #[serde(flatten)]
    pub locale: LocaleParams,

    /// Maximum number of returned products.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(
        description = "Maximum number of products in the results array, 1 to 1000 (default 100)."
    )]
    pub limit: Option<u32>,

    /// Results filtering parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(
        description = "Results filtering conditions, at most 8, joined with \"and\"/\"or\" logical operators. Example: [\"full_metrics.amazon_serp.pos_1\",\">\",20]."
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
    #[schemars(
        description = "Offset in the results array of returned product competitors (default 0)."
    )]
    pub offset: Option<u32>,
}

impl AmazonProductCompetitorsParams {
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

/// Amazon Product Competitors tool implementation.
#[derive(Debug, Clone)]
pub struct AmazonProductCompetitorsTool;

impl AmazonProductCompetitorsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "dataforseo_labs_amazon_product_competitors";

    /// Upstream endpoint path.
    pub const ENDPOINT: &'static str = "/v3/dataforseo_labs/amazon/product_competitors/live";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Provides the list of products that intersect with a target ASIN in Amazon SERPs. The data can help identify product competitors for any listing published on Amazon. Results are specific to the ASIN, location, and language specified in the request. Data is updated weekly.";

    /// Validate the parameters and relay the request upstream.
    pub async fn execute(
        client: &DataForSeoClient,
        params: &AmazonProductCompetitorsParams,
    ) -> CallToolResult {
        info!("Product competitors request for ASIN: {}", params.asin);

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
        let params: AmazonProductCompetitorsParams = serde_json::from_value(arguments)
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
            input_schema: cached_schema_for_type::<AmazonProductCompetitorsParams>(),
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
                let params: AmazonProductCompetitorsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&client, &params).await)
            }
            .boxed()
        })
    }
}
