use std::fmt;
use std::fmt::{Display, Formatter};
use serde_json::{json, Value};

// Book is a catalog entry. Fields cannot change once the book is built, and
// only the library manager builds books from raw fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    title: String,
    author: String,
    year: i64,
}

impl Book {
    pub(crate) fn new(title: &str, author: &str, year: i64) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            year,
        }
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn author(&self) -> &str {
        self.author.as_str()
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn to_json(&self) -> Value {
        json!({"title": self.title, "author": self.author, "year": self.year})
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Title: {}, Author: {}, Year: {}", self.title, self.author, self.year)
    }
}
