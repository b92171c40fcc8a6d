//! End-to-end tests against the mock server over real HTTP.
//!
//! # Design
//! Starts the mock server on a random port in a background thread, then
//! exercises every client operation through the default ureq transport.

use std::net::SocketAddr;
use std::sync::OnceLock;
use std::time::Duration;

use mock_server::fixtures;
use theone_core::{ApiError, Client, ClientConfig, QueryOptions, Sort};

const TOKEN: &str = "integration-token";

/// One server per test binary; every test talks to the same instance.
fn server() -> SocketAddr {
    static ADDR: OnceLock<SocketAddr> = OnceLock::new();
    *ADDR.get_or_init(|| {
        let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = std_listener.local_addr().unwrap();
        std_listener.set_nonblocking(true).unwrap();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async {
                let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
                mock_server::run(listener, TOKEN).await
            })
            .unwrap();
        });
        addr
    })
}

fn client_with_token(token: &str) -> Client {
    let config = ClientConfig::new(token)
        .with_base_url(&format!("http://{}/v2", server()))
        .with_timeout(Duration::from_secs(5));
    Client::with_config(config)
}

fn client() -> Client {
    client_with_token(TOKEN)
}

#[test]
fn books_then_book_then_chapters() {
    let client = client();

    let books = client.books(None).unwrap();
    assert_eq!(books.len(), 3);
    assert_eq!(books.limit, 10);

    let first = books.first().unwrap();
    let single = client.book(&first.id).unwrap();
    assert_eq!(single.len(), 1, "expected exactly one book");
    assert_eq!(single.items[0].id, first.id);

    let chapters = client.chapters_of_book(&first.id, None).unwrap();
    assert!(!chapters.is_empty());
    assert!(chapters.into_iter().all(|c| !c.chapter_name.is_empty()));
}

#[test]
fn movies_and_lookup() {
    let client = client();

    let movies = client.movies(None).unwrap();
    assert_eq!(movies.total, 3);

    let movie = client.movie(fixtures::RETURN_MOVIE).unwrap();
    assert_eq!(movie.len(), 1);
    assert_eq!(movie.items[0].name, "The Return of the King");
    assert_eq!(movie.items[0].runtime_in_minutes, 201);
    assert_eq!(movie.items[0].academy_award_wins, 11);
}

#[test]
fn characters_and_lookup() {
    let client = client();

    let characters = client.characters(None).unwrap();
    assert!(!characters.is_empty());

    let sam = client.character(fixtures::SAM).unwrap();
    assert_eq!(sam.len(), 1);
    assert_eq!(sam.items[0].name, "Samwise Gamgee");
    assert_eq!(sam.items[0].spouse.as_deref(), Some("Rosie Cotton"));

    let frodo = client.character(fixtures::FRODO).unwrap();
    assert_eq!(frodo.items[0].spouse, None);
}

#[test]
fn limit_is_respected() {
    let client = client();
    let options = QueryOptions::new().with_limit(2);

    let characters = client.characters(Some(&options)).unwrap();
    assert_eq!(characters.len(), 2);
    assert_eq!(characters.limit, 2);
    assert!(characters.has_next());
}

#[test]
fn paging_walks_the_collection() {
    let client = client();

    let mut seen = Vec::new();
    let mut page = 1;
    loop {
        let options = QueryOptions::new().with_limit(2).with_page(page);
        let result = client.characters(Some(&options)).unwrap();
        seen.extend(result.items.iter().map(|c| c.id.clone()));
        if !result.has_next() {
            break;
        }
        page += 1;
    }
    assert_eq!(seen.len(), 5);
    assert_eq!(page, 3);
}

#[test]
fn offset_is_respected() {
    let client = client();
    let options = QueryOptions::new().with_limit(1).with_offset(1);
    let books = client.books(Some(&options)).unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books.items[0].id, fixtures::TWO_TOWERS_BOOK);
}

#[test]
fn sort_order_changes_results() {
    let client = client();

    let asc = QueryOptions::new().with_limit(1).with_sort(Sort::asc("name"));
    let desc = QueryOptions::new().with_limit(1).with_sort(Sort::desc("name"));

    let first_asc = client.characters(Some(&asc)).unwrap();
    let first_desc = client.characters(Some(&desc)).unwrap();
    assert_eq!(first_asc.len(), 1);
    assert_eq!(first_desc.len(), 1);
    assert_ne!(first_asc.items[0], first_desc.items[0]);
}

#[test]
fn chapters_and_quotes() {
    let client = client();

    let chapters = client.chapters(None).unwrap();
    assert_eq!(chapters.total, 6);
    let chapter = client.chapter(&chapters.items[0].id).unwrap();
    assert_eq!(chapter.items[0].chapter_name, "A Long-expected Party");

    let quotes = client.quotes(None).unwrap();
    assert_eq!(quotes.total, 5);
    let quote = client.quote(&quotes.items[1].id).unwrap();
    assert_eq!(quote.items[0].dialog, "You shall not pass!");
    assert_eq!(quote.items[0].character, fixtures::GANDALF);

    let by_movie = client.quotes_of_movie(fixtures::FELLOWSHIP_MOVIE, None).unwrap();
    assert!(by_movie.items.iter().all(|q| q.movie == fixtures::FELLOWSHIP_MOVIE));
    assert_eq!(by_movie.len(), 2);

    let by_character = client
        .quotes_of_character(fixtures::SAM, Some(&QueryOptions::new().with_limit(1)))
        .unwrap();
    assert_eq!(by_character.len(), 1);
    assert_eq!(by_character.total, 2);
}

#[test]
fn unknown_id_is_not_found() {
    let err = client().movie("000000000000000000000000").unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
}

#[test]
fn bad_token_is_status_error() {
    let err = client_with_token("wrong").books(None).unwrap_err();
    match err {
        ApiError::Status { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("Unauthorized."));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[test]
fn unreachable_host_is_transport_error() {
    // Bind and drop to get a port nothing listens on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let config = ClientConfig::new(TOKEN)
        .with_base_url(&format!("http://{addr}/v2"))
        .with_timeout(Duration::from_secs(2));

    let err = Client::with_config(config).books(None).unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[test]
fn client_is_shareable_across_threads() {
    let client = client();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| client.books(None).map(|p| p.len())))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), 3);
        }
    });
}
