//! In-memory dataset served by the mock API.
//!
//! Ids match the live service so the same values work against either.

use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct Book {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    #[serde(rename = "_id")]
    pub id: String,
    pub chapter_name: String,
    pub book: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub runtime_in_minutes: u32,
    pub budget_in_millions: f64,
    pub box_office_revenue_in_millions: f64,
    pub academy_award_nominations: u32,
    pub academy_award_wins: u32,
    pub rotten_tomatoes_score: f64,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub height: String,
    pub race: String,
    pub gender: String,
    pub spouse: Option<String>,
    pub birth: String,
    pub death: String,
    pub realm: String,
    pub hair: String,
    pub wiki_url: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct Quote {
    #[serde(rename = "_id")]
    pub id: String,
    pub dialog: String,
    pub movie: String,
    pub character: String,
}

#[derive(Clone, Debug, Default)]
pub struct Dataset {
    pub books: Vec<Book>,
    pub chapters: Vec<Chapter>,
    pub movies: Vec<Movie>,
    pub characters: Vec<Character>,
    pub quotes: Vec<Quote>,
}

pub const FELLOWSHIP_BOOK: &str = "5cf5805fb53e011a64671582";
pub const TWO_TOWERS_BOOK: &str = "5cf58077b53e011a64671583";
pub const RETURN_BOOK: &str = "5cf58080b53e011a64671584";

pub const FELLOWSHIP_MOVIE: &str = "5cd95395de30eff6ebccde5c";
pub const TWO_TOWERS_MOVIE: &str = "5cd95395de30eff6ebccde5b";
pub const RETURN_MOVIE: &str = "5cd95395de30eff6ebccde5d";

pub const FRODO: &str = "5cd99d4bde30eff6ebccfc15";
pub const SAM: &str = "5cd99d4bde30eff6ebccfd0d";
pub const GANDALF: &str = "5cd99d4bde30eff6ebccfea0";
pub const ARAGORN: &str = "5cd99d4bde30eff6ebccfbe6";
pub const GIMLI: &str = "5cd99d4bde30eff6ebccfd23";

fn book(id: &str, name: &str) -> Book {
    Book {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn chapter(id: &str, name: &str, book: &str) -> Chapter {
    Chapter {
        id: id.to_string(),
        chapter_name: name.to_string(),
        book: book.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn movie(
    id: &str,
    name: &str,
    runtime: u32,
    budget: f64,
    revenue: f64,
    nominations: u32,
    wins: u32,
    score: f64,
) -> Movie {
    Movie {
        id: id.to_string(),
        name: name.to_string(),
        runtime_in_minutes: runtime,
        budget_in_millions: budget,
        box_office_revenue_in_millions: revenue,
        academy_award_nominations: nominations,
        academy_award_wins: wins,
        rotten_tomatoes_score: score,
    }
}

fn character(id: &str, name: &str, race: &str, spouse: Option<&str>, realm: &str) -> Character {
    Character {
        id: id.to_string(),
        name: name.to_string(),
        height: String::new(),
        race: race.to_string(),
        gender: "Male".to_string(),
        spouse: spouse.map(str::to_string),
        birth: String::new(),
        death: String::new(),
        realm: realm.to_string(),
        hair: String::new(),
        wiki_url: format!("http://lotr.wikia.com//wiki/{}", name.replace(' ', "_")),
    }
}

fn quote(id: &str, dialog: &str, movie: &str, character: &str) -> Quote {
    Quote {
        id: id.to_string(),
        dialog: dialog.to_string(),
        movie: movie.to_string(),
        character: character.to_string(),
    }
}

impl Dataset {
    pub fn fixtures() -> Self {
        let books = vec![
            book(FELLOWSHIP_BOOK, "The Fellowship Of The Ring"),
            book(TWO_TOWERS_BOOK, "The Two Towers"),
            book(RETURN_BOOK, "The Return Of The King"),
        ];

        let chapters = vec![
            chapter("6091b6d6d58360f988133b8b", "A Long-expected Party", FELLOWSHIP_BOOK),
            chapter("6091b6d6d58360f988133b8c", "The Shadow of the Past", FELLOWSHIP_BOOK),
            chapter("6091b6d6d58360f988133b8d", "Three is Company", FELLOWSHIP_BOOK),
            chapter("6091b6d6d58360f988133ba1", "The Departure of Boromir", TWO_TOWERS_BOOK),
            chapter("6091b6d6d58360f988133ba2", "The Riders of Rohan", TWO_TOWERS_BOOK),
            chapter("6091b6d6d58360f988133bb8", "Minas Tirith", RETURN_BOOK),
        ];

        let movies = vec![
            movie(FELLOWSHIP_MOVIE, "The Fellowship of the Ring", 178, 93.0, 871.5, 13, 4, 91.0),
            movie(TWO_TOWERS_MOVIE, "The Two Towers", 179, 94.0, 926.0, 6, 2, 96.0),
            movie(RETURN_MOVIE, "The Return of the King", 201, 94.0, 1120.0, 11, 11, 95.0),
        ];

        let mut characters = vec![
            character(FRODO, "Frodo Baggins", "Hobbit", None, ""),
            character(SAM, "Samwise Gamgee", "Hobbit", Some("Rosie Cotton"), ""),
            character(GANDALF, "Gandalf", "Maiar", None, ""),
            character(
                ARAGORN,
                "Aragorn II Elessar",
                "Human",
                Some("Arwen"),
                "Reunited Kingdom,Arnor,Gondor",
            ),
            character(GIMLI, "Gimli", "Dwarf", None, ""),
        ];
        characters[0].birth = "22 September ,TA 2968".to_string();
        characters[0].hair = "Brown".to_string();
        characters[2].hair = "Grey, later white".to_string();

        let quotes = vec![
            quote("5cd96e05de30eff6ebcce7e9", "Deagol!", FELLOWSHIP_MOVIE, FRODO),
            quote("5cd96e05de30eff6ebcce7f0", "You shall not pass!", FELLOWSHIP_MOVIE, GANDALF),
            quote(
                "5cd96e05de30eff6ebcce84c",
                "Potatoes! Boil 'em, mash 'em, stick 'em in a stew.",
                TWO_TOWERS_MOVIE,
                SAM,
            ),
            quote(
                "5cd96e05de30eff6ebcce9a1",
                "Certainty of death. Small chance of success. What are we waiting for?",
                RETURN_MOVIE,
                GIMLI,
            ),
            quote(
                "5cd96e05de30eff6ebcce9b2",
                "I can't carry it for you, but I can carry you!",
                RETURN_MOVIE,
                SAM,
            ),
        ];

        Self {
            books,
            chapters,
            movies,
            characters,
            quotes,
        }
    }
}
