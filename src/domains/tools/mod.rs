//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Each tool is a thin adapter over one DataForSEO Labs Amazon endpoint:
//! it validates its parameters, builds a single task object, and relays the
//! upstream response.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - Dynamic ToolRouter builder for STDIO transport
//! - `registry.rs` - Central tool registry and HTTP dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/amazon/` (e.g., `my_tool.rs`)
//! 2. Define params, validate(), and execute()
//! 3. Export in `definitions/amazon/mod.rs`
//! 4. Add route in `router.rs` using `with_route()`
//! 5. Register in `registry.rs` for HTTP support

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
