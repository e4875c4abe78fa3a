pub mod helpers;

pub use helpers::{append_query, build_url};
