pub mod client;
pub mod config;
pub mod error;
pub mod query;
pub mod url;

pub use client::HttpClient;
pub use config::ClientConfig;
pub use error::{HttpUtilsError, Result};
pub use query::{parse_query_string, parse_query_string_decoded};
pub use url::{append_query, build_url};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
