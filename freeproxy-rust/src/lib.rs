pub use client::{FreeproxyClient, PROXIES_URL};
pub use freeproxy_err::FreeproxyErr;
pub use freeproxy_options::{FreeproxyOptions, FreeproxyOptionsBuilder};
pub use proxy::Proxy;
pub use query_params::{QueryParams, QueryParamsBuilder};

pub mod output_logger;

mod client;
mod freeproxy_err;
mod freeproxy_options;
mod proxy;
mod query_params;
