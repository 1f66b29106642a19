//! Clients for upstream read APIs.

mod http_post_source;

pub use http_post_source::HttpPostSource;
