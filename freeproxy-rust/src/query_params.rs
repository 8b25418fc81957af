/// Filters for a proxy listing request. Unset fields are omitted from the
/// request entirely.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct QueryParams {
    pub country: Option<String>,
    pub protocol: Option<String>,
    pub page: Option<u32>,
}

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn builder() -> QueryParamsBuilder {
        QueryParamsBuilder::default()
    }
}

#[derive(Default)]
pub struct QueryParamsBuilder {
    inner: QueryParams,
}

impl QueryParamsBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn country(mut self, country: Option<String>) -> Self {
        self.inner.country = country;
        self
    }

    #[must_use]
    pub fn protocol(mut self, protocol: Option<String>) -> Self {
        self.inner.protocol = protocol;
        self
    }

    #[must_use]
    pub fn page(mut self, page: Option<u32>) -> Self {
        self.inner.page = page;
        self
    }

    #[must_use]
    pub fn build(self) -> QueryParams {
        self.inner
    }
}
