//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! This module builds the ToolRouter for the STDIO transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its
//! own route; all routes share one `DataForSeoClient`.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::DataForSeoClient;

use super::definitions::{
    AmazonBulkSearchVolumeTool, AmazonProductCompetitorsTool,
    AmazonProductKeywordIntersectionsTool, AmazonProductRankOverviewTool,
    AmazonRankedKeywordsTool, AmazonRelatedKeywordsTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<DataForSeoClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(AmazonBulkSearchVolumeTool::create_route(client.clone()))
        .with_route(AmazonRelatedKeywordsTool::create_route(client.clone()))
        .with_route(AmazonRankedKeywordsTool::create_route(client.clone()))
        .with_route(AmazonProductRankOverviewTool::create_route(client.clone()))
        .with_route(AmazonProductCompetitorsTool::create_route(client.clone()))
        .with_route(AmazonProductKeywordIntersectionsTool::create_route(client))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::core::config::{ApiConfig, CredentialsConfig};

    struct TestServer {}

    fn test_client() -> Arc<DataForSeoClient> {
        Arc::new(
            DataForSeoClient::new(&ApiConfig::default(), &CredentialsConfig::default()).unwrap(),
        )
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        let tools = router.list_all();
        assert_eq!(tools.len(), 6);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"dataforseo_labs_amazon_bulk_search_volume"));
        assert!(names.contains(&"dataforseo_labs_amazon_related_keywords"));
        assert!(names.contains(&"dataforseo_labs_amazon_ranked_keywords"));
        assert!(names.contains(&"dataforseo_labs_amazon_product_rank_overview"));
        assert!(names.contains(&"dataforseo_labs_amazon_product_competitors"));
        assert!(names.contains(&"dataforseo_labs_amazon_product_keyword_intersections"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router expose the same tools
        let client = test_client();
        let registry = ToolRegistry::new(client.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(client);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }

    #[test]
    fn test_every_tool_has_a_schema() {
        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        for tool in router.list_all() {
            assert!(
                tool.input_schema.contains_key("properties"),
                "tool {} has no input schema properties",
                tool.name
            );
        }
    }
}
