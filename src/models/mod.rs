pub mod url;

pub use url::{LinkState, ShortLinkRecord, ShortenRequest, ShortenResponse, StatsResponse};
