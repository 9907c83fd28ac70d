use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::non_blank;

/// Literary genre of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
    Fiction,
    Nonfiction,
    Science,
    History,
    Biography,
    Fantasy,
    Mystery,
    Romance,
    Thriller,
    Horror,
}

/// Book transfer object.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Validate)]
pub struct BookDto {
    /// Generated id; zero when the book has not been persisted yet
    #[serde(default)]
    pub id: i32,
    #[validate(custom(function = "non_blank", message = "Title must be set"))]
    pub title: String,
    #[validate(custom(function = "non_blank", message = "Author must be set"))]
    pub author: String,
    #[validate(custom(function = "non_blank", message = "Publisher must be set"))]
    pub publisher: String,
    #[validate(range(min = 1, message = "Year published must be set"))]
    pub year_published: i32,
    pub genre: Genre,
}

impl BookDto {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        publisher: impl Into<String>,
        year_published: i32,
        genre: Genre,
    ) -> Self {
        Self {
            id: 0,
            title: title.into(),
            author: author.into(),
            publisher: publisher.into(),
            year_published,
            genre,
        }
    }
}
