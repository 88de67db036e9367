use std::fmt;

use async_trait::async_trait;
use marquee_model::{MovieId, RawCreditsRecord, RawMovieRecord};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use super::RemoteMetadataClient;
use crate::config::TmdbConfig;
use crate::error::FetchError;

/// Error body TMDB returns alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct TmdbStatus {
    status_message: Option<String>,
}

/// [`RemoteMetadataClient`] backed by the TMDB v3 REST API.
#[derive(Clone)]
pub struct TmdbClient {
    http: Client,
    config: TmdbConfig,
}

impl fmt::Debug for TmdbClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl TmdbClient {
    pub fn new(config: TmdbConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        debug!(base = %config.api_base_url, "created TMDB client");
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &TmdbConfig {
        &self.config
    }

    /// `{base}/movie/{id}` plus any trailing segments, with the key and
    /// language query parameters applied.
    pub fn movie_url(&self, id: MovieId, tail: &[&str]) -> Result<Url, FetchError> {
        let mut url = self.config.api_base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                FetchError::NetworkFailure(format!(
                    "base URL {} cannot carry a path",
                    self.config.api_base_url
                ))
            })?;
            segments
                .pop_if_empty()
                .push("movie")
                .push(&id.to_string())
                .extend(tail);
        }

        {
            let mut query = url.query_pairs_mut();
            if self.config.access_token.is_none()
                && let Some(key) = &self.config.api_key
            {
                query.append_pair("api_key", key);
            }
            if let Some(language) = &self.config.language {
                query.append_pair("language", language);
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }

        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        let mut request = self.http.get(url);
        if let Some(token) = &self.config.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_status(status, &body));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|err| FetchError::MappingFailure(err.to_string()))
    }
}

/// Map a non-success response to a [`FetchError`]. `404` is the only status
/// that means the movie does not exist; anything else is a server error
/// carrying TMDB's `status_message` when the body has one.
pub fn classify_status(status: StatusCode, body: &str) -> FetchError {
    if status == StatusCode::NOT_FOUND {
        return FetchError::NotFound;
    }

    let message = serde_json::from_str::<TmdbStatus>(body)
        .ok()
        .and_then(|parsed| parsed.status_message)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        });

    FetchError::ServerError {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl RemoteMetadataClient for TmdbClient {
    #[instrument(skip_all, fields(id = %id))]
    async fn fetch_detail(&self, id: MovieId) -> Result<RawMovieRecord, FetchError> {
        let url = self.movie_url(id, &[])?;
        debug!(path = url.path(), "fetching movie detail");
        self.get(url).await
    }

    #[instrument(skip_all, fields(id = %id))]
    async fn fetch_credits(&self, id: MovieId) -> Result<RawCreditsRecord, FetchError> {
        let url = self.movie_url(id, &["credits"])?;
        debug!(path = url.path(), "fetching movie credits");
        self.get(url).await
    }
}
