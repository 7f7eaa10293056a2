//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when the http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use crate::core::DataForSeoClient;

use super::definitions::{
    AmazonBulkSearchVolumeTool, AmazonProductCompetitorsTool,
    AmazonProductKeywordIntersectionsTool, AmazonProductRankOverviewTool,
    AmazonRankedKeywordsTool, AmazonRelatedKeywordsTool,
};

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching HTTP tool calls (when the http feature is enabled)
pub struct ToolRegistry {
    client: Arc<DataForSeoClient>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(client: Arc<DataForSeoClient>) -> Self {
        Self { client }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            AmazonBulkSearchVolumeTool::NAME,
            AmazonRelatedKeywordsTool::NAME,
            AmazonRankedKeywordsTool::NAME,
            AmazonProductRankOverviewTool::NAME,
            AmazonProductCompetitorsTool::NAME,
            AmazonProductKeywordIntersectionsTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Both HTTP and STDIO transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            AmazonBulkSearchVolumeTool::to_tool(),
            AmazonRelatedKeywordsTool::to_tool(),
            AmazonRankedKeywordsTool::to_tool(),
            AmazonProductRankOverviewTool::to_tool(),
            AmazonProductCompetitorsTool::to_tool(),
            AmazonProductKeywordIntersectionsTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    ///
    /// This is used by the HTTP transport to call tools.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        match name {
            AmazonBulkSearchVolumeTool::NAME => {
                AmazonBulkSearchVolumeTool::http_handler(arguments, self.client.clone()).await
            }
            AmazonRelatedKeywordsTool::NAME => {
                AmazonRelatedKeywordsTool::http_handler(arguments, self.client.clone()).await
            }
            AmazonRankedKeywordsTool::NAME => {
                AmazonRankedKeywordsTool::http_handler(arguments, self.client.clone()).await
            }
            AmazonProductRankOverviewTool::NAME => {
                AmazonProductRankOverviewTool::http_handler(arguments, self.client.clone()).await
            }
            AmazonProductCompetitorsTool::NAME => {
                AmazonProductCompetitorsTool::http_handler(arguments, self.client.clone()).await
            }
            AmazonProductKeywordIntersectionsTool::NAME => {
                AmazonProductKeywordIntersectionsTool::http_handler(arguments, self.client.clone())
                    .await
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(format!("Unknown tool: {}", name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{ApiConfig, CredentialsConfig};

    fn test_registry() -> ToolRegistry {
        let client =
            DataForSeoClient::new(&ApiConfig::default(), &CredentialsConfig::default()).unwrap();
        ToolRegistry::new(Arc::new(client))
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = test_registry();
        let names = registry.tool_names();
        assert_eq!(names.len(), 6);
        assert!(names.contains(&"dataforseo_labs_amazon_bulk_search_volume"));
        assert!(names.contains(&"dataforseo_labs_amazon_related_keywords"));
        assert!(names.contains(&"dataforseo_labs_amazon_ranked_keywords"));
        assert!(names.contains(&"dataforseo_labs_amazon_product_rank_overview"));
        assert!(names.contains(&"dataforseo_labs_amazon_product_competitors"));
        assert!(names.contains(&"dataforseo_labs_amazon_product_keyword_intersections"));
    }

    #[test]
    fn test_get_all_tools_matches_names() {
        let registry = test_registry();
        let tools = ToolRegistry::get_all_tools();
        assert_eq!(tools.len(), registry.tool_names().len());
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_unknown() {
        let registry = test_registry();
        let result = registry.call_tool("unknown", serde_json::json!({})).await;
        assert!(result.is_err());
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_rejects_bad_arguments() {
        let registry = test_registry();
        let result = registry
            .call_tool(
                AmazonBulkSearchVolumeTool::NAME,
                serde_json::json!({ "keywords": "not-an-array" }),
            )
            .await;
        assert!(result.is_err());
    }
}
