use gloo::net::http::{Request, RequestBuilder};
use jeopardy_core::{ProviderError, TriviaProvider};
use jeopardy_protocol::*;
use serde::de::DeserializeOwned;

/// Provider backed by the jService HTTP API (or anything serving the same shape).
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct HttpProvider {
    base_url: String,
}

impl HttpProvider {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl Default for HttpProvider {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl TriviaProvider for HttpProvider {
    async fn categories(
        &self,
        query: CategoriesQuery,
    ) -> Result<Vec<CategorySummary>, ProviderError> {
        let request = Request::get(&self.endpoint(CATEGORIES_PATH)).query([
            (CategoriesQuery::COUNT, query.count.to_string()),
            (CategoriesQuery::OFFSET, query.offset.to_string()),
        ]);
        fetch_json(request).await
    }

    async fn clues(&self, query: CluesQuery) -> Result<Vec<ClueRecord>, ProviderError> {
        let request = Request::get(&self.endpoint(CLUES_PATH))
            .query([(CluesQuery::CATEGORY, query.category.to_string())]);
        fetch_json(request).await
    }
}

async fn fetch_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ProviderError> {
    let response = request
        .send()
        .await
        .map_err(|err| ProviderError::Request(err.to_string()))?;
    if !response.ok() {
        log::warn!("{} responded with {}", response.url(), response.status());
        return Err(ProviderError::Status(response.status()));
    }
    response
        .json()
        .await
        .map_err(|err| ProviderError::Decode(err.to_string()))
}
