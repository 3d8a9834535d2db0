//! SOQL query types.

// Re-export QueryResult from volprobe_sf_client to ensure type compatibility
pub use volprobe_sf_client::QueryResult;
