use sea_orm::entity::prelude::*;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(12))")]
pub enum Genre {
    #[sea_orm(string_value = "FICTION")]
    Fiction,
    #[sea_orm(string_value = "NONFICTION")]
    Nonfiction,
    #[sea_orm(string_value = "SCIENCE")]
    Science,
    #[sea_orm(string_value = "HISTORY")]
    History,
    #[sea_orm(string_value = "BIOGRAPHY")]
    Biography,
    #[sea_orm(string_value = "FANTASY")]
    Fantasy,
    #[sea_orm(string_value = "MYSTERY")]
    Mystery,
    #[sea_orm(string_value = "ROMANCE")]
    Romance,
    #[sea_orm(string_value = "THRILLER")]
    Thriller,
    #[sea_orm(string_value = "HORROR")]
    Horror,
}

/// A book.
///
/// Two books are the same book when title and author match, whatever their ids.
/// The store itself does not enforce that pair to be unique.
#[derive(Clone, Debug, DeriveEntityModel)]
#[sea_orm(table_name = "book")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub year_published: i32,
    pub genre: Genre,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl PartialEq for Model {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.author == other.author
    }
}

impl Eq for Model {}

impl Hash for Model {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
        self.author.hash(state);
    }
}

impl From<common::Genre> for Genre {
    fn from(value: common::Genre) -> Self {
        match value {
            common::Genre::Fiction => Self::Fiction,
            common::Genre::Nonfiction => Self::Nonfiction,
            common::Genre::Science => Self::Science,
            common::Genre::History => Self::History,
            common::Genre::Biography => Self::Biography,
            common::Genre::Fantasy => Self::Fantasy,
            common::Genre::Mystery => Self::Mystery,
            common::Genre::Romance => Self::Romance,
            common::Genre::Thriller => Self::Thriller,
            common::Genre::Horror => Self::Horror,
        }
    }
}

impl From<Genre> for common::Genre {
    fn from(value: Genre) -> Self {
        match value {
            Genre::Fiction => Self::Fiction,
            Genre::Nonfiction => Self::Nonfiction,
            Genre::Science => Self::Science,
            Genre::History => Self::History,
            Genre::Biography => Self::Biography,
            Genre::Fantasy => Self::Fantasy,
            Genre::Mystery => Self::Mystery,
            Genre::Romance => Self::Romance,
            Genre::Thriller => Self::Thriller,
            Genre::Horror => Self::Horror,
        }
    }
}
