//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod amazon;

pub use amazon::{
    AmazonBulkSearchVolumeParams, AmazonBulkSearchVolumeTool, AmazonProductCompetitorsParams,
    AmazonProductCompetitorsTool, AmazonProductKeywordIntersectionsParams,
    AmazonProductKeywordIntersectionsTool, AmazonProductRankOverviewParams,
    AmazonProductRankOverviewTool, AmazonRankedKeywordsParams, AmazonRankedKeywordsTool,
    AmazonRelatedKeywordsParams, AmazonRelatedKeywordsTool,
};
