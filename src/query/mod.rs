pub mod parser;

pub use parser::{parse_query_string, parse_query_string_decoded};
