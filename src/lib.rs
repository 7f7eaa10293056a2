//! DataForSEO Amazon MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that exposes
//! the DataForSEO Labs Amazon endpoints as callable tools. Each tool
//! validates its input parameters and forwards them as a single JSON POST
//! request through a shared HTTP client, relaying the upstream response.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the shared DataForSEO client, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: MCP tools that can be executed by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use dataforseo_amazon_mcp::core::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, DataForSeoClient, Error, McpServer, Result};
