pub mod implementation;

pub use implementation::HttpClient;
