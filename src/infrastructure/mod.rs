mod clients;
mod parsers;
mod storage;

pub(crate) use clients::http::build_client;
pub use clients::http::HttpFetcher;
pub use parsers::{build_parser, DrawParser, Layout, PreTableParser, ResultsPageParser};
pub use storage::fs_store::JsonFileStore;
