//! DataForSEO Labs Amazon tools module.
//!
//! One tool per upstream endpoint:
//! - `bulk_search_volume`: search volume for up to 1000 keywords
//! - `related_keywords`: "Related Searches" keyword ideas for a seed keyword
//! - `ranked_keywords`: keywords a target ASIN ranks for
//! - `product_rank_overview`: organic and paid ranking data for ASINs
//! - `product_competitors`: products intersecting with a target ASIN in SERPs
//! - `product_keyword_intersections`: keywords shared between target ASINs
//!
//! The shared locale parameters, size limits, and result helpers live in
//! `common`.

pub mod bulk_search_volume;
pub mod common;
pub mod product_competitors;
pub mod product_keyword_intersections;
pub mod product_rank_overview;
pub mod ranked_keywords;
pub mod related_keywords;

pub use bulk_search_volume::{AmazonBulkSearchVolumeParams, AmazonBulkSearchVolumeTool};
pub use product_competitors::{AmazonProductCompetitorsParams, AmazonProductCompetitorsTool};
pub use product_keyword_intersections::{
    AmazonProductKeywordIntersectionsParams, AmazonProductKeywordIntersectionsTool,
};
pub use product_rank_overview::{AmazonProductRankOverviewParams, AmazonProductRankOverviewTool};
pub use ranked_keywords::{AmazonRankedKeywordsParams, AmazonRankedKeywordsTool};
pub use related_keywords::{AmazonRelatedKeywordsParams, AmazonRelatedKeywordsTool};
