//! Domain DTOs for The One API.
//!
//! # Design
//! Every endpoint answers with the same paginated envelope, so there is one
//! generic `Page<T>` rather than a wrapper per resource. Records are flat
//! values: a chapter does not point at its book, the association lives only
//! in the request path. Scalar fields the server leaves out decode to their
//! defaults because the live dataset is sparse (many characters lack a
//! birth date or realm); the `_id` is always required.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A record type served from its own top-level collection.
pub trait Resource: DeserializeOwned {
    /// Collection path segment, e.g. `"book"` for `/book`.
    const PATH: &'static str;

    fn id(&self) -> &str;
}

/// Pagination metadata plus the decoded `docs` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(rename = "docs")]
    pub items: Vec<T>,
    pub total: u64,
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub pages: u64,
}

impl<T> Page<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Whether the server reports pages after this one.
    pub fn has_next(&self) -> bool {
        self.page < self.pages
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub chapter_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub runtime_in_minutes: u32,
    #[serde(default)]
    pub budget_in_millions: f64,
    #[serde(default)]
    pub box_office_revenue_in_millions: f64,
    #[serde(default)]
    pub academy_award_nominations: u32,
    #[serde(default)]
    pub academy_award_wins: u32,
    #[serde(default)]
    pub rotten_tomatoes_score: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub race: String,
    #[serde(default)]
    pub gender: String,
    /// `null` or absent for unmarried characters.
    #[serde(default)]
    pub spouse: Option<String>,
    #[serde(default)]
    pub birth: String,
    #[serde(default)]
    pub death: String,
    #[serde(default)]
    pub realm: String,
    #[serde(default)]
    pub hair: String,
    #[serde(default)]
    pub wiki_url: String,
}

/// A line of dialog. `movie` and `character` are ids, not resolved records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub dialog: String,
    #[serde(default)]
    pub movie: String,
    #[serde(default)]
    pub character: String,
}

macro_rules! resource {
    ($ty:ty, $path:literal) => {
        impl Resource for $ty {
            const PATH: &'static str = $path;

            fn id(&self) -> &str {
                &self.id
            }
        }
    };
}

resource!(Book, "book");
resource!(Chapter, "chapter");
resource!(Movie, "movie");
resource!(Character, "character");
resource!(Quote, "quote");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_decodes_docs_into_items() {
        let body = r#"{
            "docs": [
                {"_id": "5cf5805fb53e011a64671582", "name": "The Fellowship Of The Ring"},
                {"_id": "5cf58077b53e011a64671583", "name": "The Two Towers"}
            ],
            "total": 3, "limit": 2, "offset": 0, "page": 1, "pages": 2
        }"#;
        let page: Page<Book> = serde_json::from_str(body).unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page.total, 3);
        assert_eq!(page.pages, 2);
        assert!(page.has_next());
        assert_eq!(page.first().unwrap().name, "The Fellowship Of The Ring");
    }

    #[test]
    fn page_tolerates_missing_page_fields() {
        let body = r#"{"docs": [], "total": 0, "limit": 10, "offset": 30}"#;
        let page: Page<Book> = serde_json::from_str(body).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.offset, 30);
        assert_eq!(page.page, 0);
        assert!(!page.has_next());
    }

    #[test]
    fn page_requires_docs() {
        let body = r#"{"total": 0, "limit": 10}"#;
        assert!(serde_json::from_str::<Page<Book>>(body).is_err());
    }

    #[test]
    fn character_spouse_may_be_null_or_absent() {
        let with_null = r#"{"_id":"5cd99d4bde30eff6ebccfbbe","name":"Adanel","spouse":null}"#;
        let absent = r#"{"_id":"5cd99d4bde30eff6ebccfbbf","name":"Adrahil I"}"#;
        let married = r#"{"_id":"5cd99d4bde30eff6ebccfe9e","name":"Gimli","spouse":"None"}"#;

        let c: Character = serde_json::from_str(with_null).unwrap();
        assert_eq!(c.spouse, None);
        let c: Character = serde_json::from_str(absent).unwrap();
        assert_eq!(c.spouse, None);
        assert!(c.realm.is_empty());
        let c: Character = serde_json::from_str(married).unwrap();
        assert_eq!(c.spouse.as_deref(), Some("None"));
    }

    #[test]
    fn movie_decodes_camel_case_statistics() {
        let body = r#"{
            "_id": "5cd95395de30eff6ebccde5d",
            "name": "The Return of the King",
            "runtimeInMinutes": 201,
            "budgetInMillions": 94,
            "boxOfficeRevenueInMillions": 1120,
            "academyAwardNominations": 11,
            "academyAwardWins": 11,
            "rottenTomatoesScore": 95
        }"#;
        let movie: Movie = serde_json::from_str(body).unwrap();
        assert_eq!(movie.runtime_in_minutes, 201);
        assert_eq!(movie.academy_award_wins, 11);
        assert_eq!(movie.box_office_revenue_in_millions, 1120.0);
    }

    #[test]
    fn record_without_id_is_rejected() {
        let body = r#"{"chapterName":"A Long-expected Party"}"#;
        assert!(serde_json::from_str::<Chapter>(body).is_err());
    }

    #[test]
    fn resource_paths() {
        assert_eq!(Book::PATH, "book");
        assert_eq!(Chapter::PATH, "chapter");
        assert_eq!(Movie::PATH, "movie");
        assert_eq!(Character::PATH, "character");
        assert_eq!(Quote::PATH, "quote");
    }
}
