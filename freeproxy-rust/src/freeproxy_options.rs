use crate::output_logger::LogLevel;

#[derive(Clone, Default)]
pub struct FreeproxyOptions {
    pub http_client: Option<reqwest::Client>, // Caller-owned transport, carries timeouts/proxies/TLS config
    pub output_log_level: Option<LogLevel>,
    pub proxies_url: Option<String>, // Override of the production listing endpoint
}

impl FreeproxyOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn builder() -> FreeproxyOptionsBuilder {
        FreeproxyOptionsBuilder::default()
    }
}

#[derive(Default)]
pub struct FreeproxyOptionsBuilder {
    inner: FreeproxyOptions,
}

impl FreeproxyOptionsBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn http_client(mut self, http_client: Option<reqwest::Client>) -> Self {
        self.inner.http_client = http_client;
        self
    }

    #[must_use]
    pub fn output_log_level(mut self, output_log_level: Option<LogLevel>) -> Self {
        self.inner.output_log_level = output_log_level;
        self
    }

    #[must_use]
    pub fn proxies_url(mut self, proxies_url: Option<String>) -> Self {
        self.inner.proxies_url = proxies_url;
        self
    }

    #[must_use]
    pub fn build(self) -> FreeproxyOptions {
        self.inner
    }
}
