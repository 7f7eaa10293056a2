//! Domain modules organized by bounded context.
//!
//! Each domain encapsulates related functionality:
//! - **tools**: Executable functions exposed to MCP clients, one per
//!   DataForSEO Labs Amazon endpoint

pub mod tools;
