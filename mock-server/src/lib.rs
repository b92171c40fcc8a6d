//! In-process stand-in for The One API.
//!
//! Serves the fixture dataset under `/v2` with the live service's envelope,
//! bearer-token check, pagination (`limit`, `page`, `offset`) and
//! `<field>=asc|desc` sorting.

pub mod fixtures;

use std::{cmp::Ordering, sync::Arc};

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub use fixtures::Dataset;
use fixtures::{Book, Chapter, Character, Movie, Quote};

/// Page size when the request does not carry `limit`.
pub const SERVER_DEFAULT_LIMIT: i64 = 1000;

/// The paginated body every list and lookup endpoint returns.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Envelope {
    pub docs: Vec<Value>,
    pub total: usize,
    pub limit: i64,
    pub offset: i64,
    pub page: i64,
    pub pages: i64,
}

#[derive(Clone)]
struct AppState {
    token: Arc<str>,
    data: Arc<Dataset>,
}

/// Error body in the live service's `{"success": false, "message": ...}` shape.
#[derive(Debug)]
pub struct Failure {
    status: StatusCode,
    message: String,
}

impl Failure {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        let body = json!({ "success": false, "message": self.message });
        (self.status, Json(body)).into_response()
    }
}

trait Record: Serialize + Send + Sync + 'static {
    fn all(data: &Dataset) -> &[Self]
    where
        Self: Sized;

    fn id(&self) -> &str;
}

macro_rules! record {
    ($ty:ty, $field:ident) => {
        impl Record for $ty {
            fn all(data: &Dataset) -> &[Self] {
                &data.$field
            }

            fn id(&self) -> &str {
                &self.id
            }
        }
    };
}

record!(Book, books);
record!(Chapter, chapters);
record!(Movie, movies);
record!(Character, characters);
record!(Quote, quotes);

pub fn app(token: &str) -> Router {
    app_with(token, Dataset::fixtures())
}

pub fn app_with(token: &str, data: Dataset) -> Router {
    let state = AppState {
        token: Arc::from(token),
        data: Arc::new(data),
    };

    let api = Router::new()
        .route("/book", get(list::<Book>))
        .route("/book/{id}", get(lookup::<Book>))
        .route("/book/{id}/chapter", get(chapters_of_book))
        .route("/chapter", get(list::<Chapter>))
        .route("/chapter/{id}", get(lookup::<Chapter>))
        .route("/movie", get(list::<Movie>))
        .route("/movie/{id}", get(lookup::<Movie>))
        .route("/movie/{id}/quote", get(quotes_of_movie))
        .route("/character", get(list::<Character>))
        .route("/character/{id}", get(lookup::<Character>))
        .route("/character/{id}/quote", get(quotes_of_character))
        .route("/quote", get(list::<Quote>))
        .route("/quote/{id}", get(lookup::<Quote>))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_token))
        .with_state(state);

    Router::new().nest("/v2", api)
}

pub async fn run(listener: TcpListener, token: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(token)).await
}

async fn require_token(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| token == &*state.token);

    if !authorized {
        tracing::debug!(uri = %request.uri(), "rejected request without valid token");
        return Failure::new(StatusCode::UNAUTHORIZED, "Unauthorized.").into_response();
    }
    next.run(request).await
}

/// Raw query pairs in request order.
type Params = Query<Vec<(String, String)>>;

async fn list<R: Record>(
    State(state): State<AppState>,
    Query(params): Params,
) -> Result<Json<Envelope>, Failure> {
    paginate(R::all(&state.data), &params)
}

async fn lookup<R: Record>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Params,
) -> Result<Json<Envelope>, Failure> {
    let found = find::<R>(&state.data, &id)?;
    paginate([found], &params)
}

async fn chapters_of_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Params,
) -> Result<Json<Envelope>, Failure> {
    find::<Book>(&state.data, &id)?;
    paginate(state.data.chapters.iter().filter(|c| c.book == id), &params)
}

async fn quotes_of_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Params,
) -> Result<Json<Envelope>, Failure> {
    find::<Movie>(&state.data, &id)?;
    paginate(state.data.quotes.iter().filter(|q| q.movie == id), &params)
}

async fn quotes_of_character(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Params,
) -> Result<Json<Envelope>, Failure> {
    find::<Character>(&state.data, &id)?;
    paginate(state.data.quotes.iter().filter(|q| q.character == id), &params)
}

fn find<'a, R: Record>(data: &'a Dataset, id: &str) -> Result<&'a R, Failure> {
    R::all(data)
        .iter()
        .find(|r| r.id() == id)
        .ok_or_else(|| Failure::new(StatusCode::NOT_FOUND, "Not found."))
}

/// Parsed pagination and sort parameters.
#[derive(Debug, PartialEq)]
struct Paging {
    limit: i64,
    offset: i64,
    page: i64,
    /// `(field, descending)` pairs, primary key first.
    sort: Vec<(String, bool)>,
}

fn int_param(params: &[(String, String)], key: &str) -> Result<Option<i64>, Failure> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, raw)| {
            raw.parse::<i64>()
                .map_err(|_| Failure::new(StatusCode::BAD_REQUEST, format!("Invalid {key}.")))
        })
        .transpose()
}

impl Paging {
    fn from_params(params: &[(String, String)]) -> Result<Self, Failure> {
        let limit = match int_param(params, "limit")? {
            Some(limit) if limit > 0 => limit,
            _ => SERVER_DEFAULT_LIMIT,
        };
        // An explicit offset wins over page.
        let (offset, page) = match int_param(params, "offset")? {
            Some(offset) => {
                let offset = offset.max(0);
                (offset, (offset / limit).saturating_add(1))
            }
            None => {
                let page = int_param(params, "page")?.unwrap_or(1).max(1);
                ((page - 1).saturating_mul(limit), page)
            }
        };

        // Sort keys rank in the order they appear in the query string.
        let sort = params
            .iter()
            .filter_map(|(key, value)| match value.as_str() {
                "asc" => Some((key.clone(), false)),
                "desc" => Some((key.clone(), true)),
                _ => None,
            })
            .collect();

        Ok(Self {
            limit,
            offset,
            page,
            sort,
        })
    }
}

fn paginate<'a, R, I>(records: I, params: &[(String, String)]) -> Result<Json<Envelope>, Failure>
where
    R: Serialize + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let paging = Paging::from_params(params)?;
    let mut docs = records
        .into_iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| Failure::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    // Stable sorts applied from the least significant key backwards.
    for (field, descending) in paging.sort.iter().rev() {
        docs.sort_by(|a, b| {
            let ordering = compare(field_of(a, field), field_of(b, field));
            if *descending {
                ordering.reverse()
            } else {
                ordering
            }
        });
    }

    let total = docs.len();
    // Both operands are positive, so the casts are lossless.
    let pages = (total as u64).div_ceil(paging.limit as u64) as i64;
    let docs = docs
        .into_iter()
        .skip(usize::try_from(paging.offset).unwrap_or(usize::MAX))
        .take(usize::try_from(paging.limit).unwrap_or(usize::MAX))
        .collect();

    Ok(Json(Envelope {
        docs,
        total,
        limit: paging.limit,
        offset: paging.offset,
        page: paging.page,
        pages,
    }))
}

fn field_of<'a>(doc: &'a Value, field: &str) -> &'a Value {
    doc.get(field).unwrap_or(&Value::Null)
}

/// Nulls first, then numbers and strings in natural order.
fn compare(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Less,
        (_, Value::Null) => Ordering::Greater,
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => Ordering::Equal,
    }
}
