//! Request builder, response parser and the networked client for The One API.
//!
//! # Design
//! `Client` holds read-only configuration and a `Transport`. Each operation
//! is split into a `build_*` method that produces an `HttpRequest` and
//! `parse_page`, which consumes an `HttpResponse`; `list`, `get` and the
//! per-resource wrappers run both halves through the transport. A single
//! generic fetch routine serves every resource kind, parameterised by the
//! record type.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::options::{build_url, QueryOptions};
use crate::transport::{Transport, UreqTransport};
use crate::types::{Book, Chapter, Character, Movie, Page, Quote, Resource};

/// Synchronous client for The One API.
///
/// Safe to share between threads when the transport is; no state changes
/// after construction.
#[derive(Debug, Clone)]
pub struct Client<T = UreqTransport> {
    config: ClientConfig,
    transport: T,
}

impl Client {
    /// Client for the public API authenticated with `token`.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_config(ClientConfig::new(token))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        let transport = UreqTransport::new(&config);
        Self { config, transport }
    }

    pub fn from_env() -> Result<Self, ApiError> {
        Ok(Self::with_config(ClientConfig::from_env()?))
    }
}

impl<T> Client<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET `{base_url}{path}?{query}` with the bearer token attached.
    pub fn build_request(&self, path: &str, options: Option<&QueryOptions>) -> HttpRequest {
        HttpRequest {
            url: build_url(&self.config.base_url, path, options),
            headers: vec![(
                "Authorization".to_string(),
                format!("Bearer {}", self.config.token),
            )],
        }
    }

    pub fn build_list<R: Resource>(&self, options: Option<&QueryOptions>) -> HttpRequest {
        self.build_request(&format!("/{}", R::PATH), options)
    }

    /// Single-item lookups ignore pagination, so no options are taken.
    pub fn build_get<R: Resource>(&self, id: &str) -> HttpRequest {
        self.build_request(&format!("/{}/{}", R::PATH, segment(id)), None)
    }

    pub fn build_chapters_of_book(
        &self,
        book_id: &str,
        options: Option<&QueryOptions>,
    ) -> HttpRequest {
        self.build_nested::<Book, Chapter>(book_id, options)
    }

    pub fn build_quotes_of_movie(
        &self,
        movie_id: &str,
        options: Option<&QueryOptions>,
    ) -> HttpRequest {
        self.build_nested::<Movie, Quote>(movie_id, options)
    }

    pub fn build_quotes_of_character(
        &self,
        character_id: &str,
        options: Option<&QueryOptions>,
    ) -> HttpRequest {
        self.build_nested::<Character, Quote>(character_id, options)
    }

    /// `/<parent>/<id>/<child>`.
    fn build_nested<P: Resource, C: Resource>(
        &self,
        parent_id: &str,
        options: Option<&QueryOptions>,
    ) -> HttpRequest {
        let path = format!("/{}/{}/{}", P::PATH, segment(parent_id), C::PATH);
        self.build_request(&path, options)
    }

    /// Check the status and decode the body into a `Page<R>`.
    pub fn parse_page<R: DeserializeOwned>(
        &self,
        response: HttpResponse,
    ) -> Result<Page<R>, ApiError> {
        check_status(&response)?;
        Ok(serde_json::from_str(&response.body)?)
    }
}

impl<T: Transport> Client<T> {
    fn fetch<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<Page<R>, ApiError> {
        debug!(url = %request.url, "GET");
        let response = self.transport.execute(&request)?;
        self.parse_page(response)
    }

    pub fn list<R: Resource>(&self, options: Option<&QueryOptions>) -> Result<Page<R>, ApiError> {
        self.fetch(self.build_list::<R>(options))
    }

    /// The API answers a lookup with an envelope; a valid id yields exactly
    /// one item, but that is not enforced here.
    pub fn get<R: Resource>(&self, id: &str) -> Result<Page<R>, ApiError> {
        self.fetch(self.build_get::<R>(id))
    }

    pub fn books(&self, options: Option<&QueryOptions>) -> Result<Page<Book>, ApiError> {
        self.list(options)
    }

    pub fn book(&self, id: &str) -> Result<Page<Book>, ApiError> {
        self.get(id)
    }

    pub fn chapters_of_book(
        &self,
        book_id: &str,
        options: Option<&QueryOptions>,
    ) -> Result<Page<Chapter>, ApiError> {
        self.fetch(self.build_chapters_of_book(book_id, options))
    }

    pub fn chapters(&self, options: Option<&QueryOptions>) -> Result<Page<Chapter>, ApiError> {
        self.list(options)
    }

    pub fn chapter(&self, id: &str) -> Result<Page<Chapter>, ApiError> {
        self.get(id)
    }

    pub fn movies(&self, options: Option<&QueryOptions>) -> Result<Page<Movie>, ApiError> {
        self.list(options)
    }

    pub fn movie(&self, id: &str) -> Result<Page<Movie>, ApiError> {
        self.get(id)
    }

    pub fn quotes_of_movie(
        &self,
        movie_id: &str,
        options: Option<&QueryOptions>,
    ) -> Result<Page<Quote>, ApiError> {
        self.fetch(self.build_quotes_of_movie(movie_id, options))
    }

    pub fn characters(&self, options: Option<&QueryOptions>) -> Result<Page<Character>, ApiError> {
        self.list(options)
    }

    pub fn character(&self, id: &str) -> Result<Page<Character>, ApiError> {
        self.get(id)
    }

    pub fn quotes_of_character(
        &self,
        character_id: &str,
        options: Option<&QueryOptions>,
    ) -> Result<Page<Quote>, ApiError> {
        self.fetch(self.build_quotes_of_character(character_id, options))
    }

    pub fn quotes(&self, options: Option<&QueryOptions>) -> Result<Page<Quote>, ApiError> {
        self.list(options)
    }

    pub fn quote(&self, id: &str) -> Result<Page<Quote>, ApiError> {
        self.get(id)
    }
}

fn segment(id: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(id)
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    warn!(status = response.status, "request failed");
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}
