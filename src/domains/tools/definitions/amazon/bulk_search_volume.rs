//! Amazon Bulk Search Volume tool.
//!
//! Provides search volume values for up to 1000 keywords in one request,
//! where search volume is the approximate number of monthly searches for a
//! keyword on Amazon.

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

/// Parameters for the bulk search volume endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AmazonBulkSearchVolumeParams {
    /// Target keywords.
    #[schemars(
        description = "Target keywords (UTF-8); at most 1000 per request. Keywords are converted to lowercase by the API."
    )]
    pub keywords: Vec<String>,

    /// Location and language selectors.
    #[serde(flatten)]
    pub locale: LocaleParams,
}

impl AmazonBulkSearchVolumeParams {
    /// Validate against the upstream contract before building a request.
    fn validate(&self) -> Result<(), String> {
        if self.keywords.is_empty() {
            return Err("keywords must contain at least one keyword".to_string());
        }
        if self.keywords.len() > MAX_BULK_ITEMS {
            return Err(format!(
                "keywords accepts at most {} entries, got {}",
                MAX_BULK_ITEMS,
                self.keywords.len()
            ));
        }
        self.locale.ensure_complete()
    }
}

/// Amazon Bulk Search Volume tool implementation.
#[derive(Debug, Clone)]
pub struct AmazonBulkSearchVolumeTool;

impl AmazonBulkSearchVolumeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "dataforseo_labs_amazon_bulk_search_volume";

    /// Upstream endpoint path.
    pub const ENDPOINT: &'static str = "/v3/dataforseo_labs/amazon/bulk_search_volume/live";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Provides search volume values for a maximum of 1,000 keywords in one request. Search volume represents the approximate number of monthly searches for a keyword on Amazon. Results are specific to the keywords, location, and language specified in the request.";

    /// Validate the parameters and relay the request upstream.
    pub async fn execute(
        client: &DataForSeoClient,
        params: &AmazonBulkSearchVolumeParams,
    ) -> CallToolResult {
        info!(
            "Bulk search volume request for {} keyword(s)",
            params.keywords.len()
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
        let params: AmazonBulkSearchVolumeParams = serde_json::from_value(arguments)
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
            input_schema: cached_schema_for_type::<AmazonBulkSearchVolumeParams>(),
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
                let params: AmazonBulkSearchVolumeParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&client, &params).await)
            }
            .boxed()
        })
    }
}
