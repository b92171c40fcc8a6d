//! Synchronous client for The One API (`https://the-one-api.dev/v2`).
//!
//! # Overview
//! Lists and looks up books, chapters, movies, characters and quotes. Every
//! call is a single authenticated GET whose JSON envelope is decoded into a
//! typed `Page<T>`.
//!
//! ```no_run
//! use theone_core::{Client, QueryOptions, Sort};
//!
//! # fn main() -> Result<(), theone_core::ApiError> {
//! let client = Client::new("your-access-token");
//! let options = QueryOptions::new().with_limit(2).with_sort(Sort::asc("name"));
//! for character in client.characters(Some(&options))? {
//!     println!("{} ({})", character.name, character.race);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Design
//! - `Client` splits each operation into `build_*` (produces an
//!   `HttpRequest`) and `parse_page` (consumes an `HttpResponse`); a
//!   `Transport` executes the round trip in between.
//! - One generic fetch routine serves every `Resource`.
//! - Non-2xx statuses and undecodable bodies are distinct `ApiError`
//!   variants; nothing panics or exits on bad input.
//! - TLS verification is on unless explicitly disabled in `ClientConfig`.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod options;
pub mod transport;
pub mod types;

pub use client::Client;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse};
pub use options::{build_url, QueryOptions, Sort, SortOrder, DEFAULT_LIMIT};
pub use transport::{Transport, UreqTransport};
pub use types::{Book, Chapter, Character, Movie, Page, Quote, Resource};
