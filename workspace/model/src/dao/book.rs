use async_trait::async_trait;
use common::BookDto;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set,
    TransactionTrait,
};
use tracing::{debug, info, instrument, warn};

use super::Dao;
use crate::entities::book;
use crate::error::{DaoError, require};

#[derive(Clone, Debug)]
pub struct BookDao {
    db: DatabaseConnection,
}

impl BookDao {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn validate(data: &BookDto) -> Result<(), DaoError> {
    require(!data.title.trim().is_empty(), "Title must be set")?;
    require(!data.author.trim().is_empty(), "Author must be set")?;
    require(!data.publisher.trim().is_empty(), "Publisher must be set")?;
    require(data.year_published > 0, "Year published must be set")
}

#[async_trait]
impl Dao<BookDto, i32> for BookDao {
    #[instrument(skip(self, data), fields(title = %data.title))]
    async fn create(&self, data: BookDto) -> Result<BookDto, DaoError> {
        validate(&data)?;

        let mut active: book::ActiveModel = (&data).into();
        active.id = Default::default();

        let txn = self.db.begin().await?;
        let created = active.insert(&txn).await?;
        txn.commit().await?;

        info!("Book created with ID {}", created.id);
        Ok(created.into())
    }

    #[instrument(skip(self))]
    async fn read(&self, key: i32) -> Result<Option<BookDto>, DaoError> {
        let book = book::Entity::find_by_id(key).one(&self.db).await?;
        Ok(book.map(BookDto::from))
    }

    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<BookDto>, DaoError> {
        let books = book::Entity::find()
            .order_by_asc(book::Column::Id)
            .all(&self.db)
            .await?;
        debug!("Retrieved {} books", books.len());
        Ok(books.into_iter().map(BookDto::from).collect())
    }

    /// Overwrites every field except the id, title and author included.
    #[instrument(skip(self, data))]
    async fn update(&self, key: i32, data: BookDto) -> Result<BookDto, DaoError> {
        validate(&data)?;

        let txn = self.db.begin().await?;
        let Some(existing) = book::Entity::find_by_id(key).one(&txn).await? else {
            warn!("Book with ID {} not found for update", key);
            return Err(DaoError::not_found("Book", key));
        };

        let mut active: book::ActiveModel = existing.into();
        active.title = Set(data.title);
        active.author = Set(data.author);
        active.publisher = Set(data.publisher);
        active.year_published = Set(data.year_published);
        active.genre = Set(data.genre.into());
        let updated = active.update(&txn).await?;
        txn.commit().await?;

        info!("Book with ID {} updated", key);
        Ok(updated.into())
    }

    #[instrument(skip(self))]
    async fn delete(&self, key: i32) -> Result<(), DaoError> {
        let txn = self.db.begin().await?;
        let result = book::Entity::delete_by_id(key).exec(&txn).await?;
        if result.rows_affected == 0 {
            warn!("Book with ID {} not found for deletion", key);
            return Err(DaoError::not_found("Book", key));
        }
        txn.commit().await?;

        info!("Book with ID {} deleted", key);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn validate_key(&self, key: i32) -> Result<bool, DaoError> {
        Ok(book::Entity::find_by_id(key).count(&self.db).await? > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::testing::setup_db;
    use common::Genre;

    fn hobbit() -> BookDto {
        BookDto::new("The Hobbit", "J.R.R. Tolkien", "Allen & Unwin", 1937, Genre::Fantasy)
    }

    #[tokio::test]
    async fn test_book_lifecycle() {
        let dao = BookDao::new(setup_db().await);

        let created = dao.create(hobbit()).await.unwrap();
        assert!(created.id > 0);
        assert!(dao.validate_key(created.id).await.unwrap());
        assert_eq!(dao.read(created.id).await.unwrap(), Some(created.clone()));

        let mut changes = created.clone();
        changes.title = "The Hobbit, or There and Back Again".to_string();
        changes.publisher = "HarperCollins".to_string();
        changes.genre = Genre::Fiction;
        let updated = dao.update(created.id, changes).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "The Hobbit, or There and Back Again");
        assert_eq!(updated.genre, Genre::Fiction);

        dao.delete(created.id).await.unwrap();
        assert_eq!(dao.read(created.id).await.unwrap(), None);
        assert!(!dao.validate_key(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_create_ignores_incoming_id() {
        let dao = BookDao::new(setup_db().await);
        let mut book = hobbit();
        book.id = 500;

        let created = dao.create(book).await.unwrap();
        assert_ne!(created.id, 500);
    }

    #[tokio::test]
    async fn test_read_all_in_id_order() {
        let dao = BookDao::new(setup_db().await);
        let first = dao.create(hobbit()).await.unwrap();
        let second = dao
            .create(BookDto::new("Dune", "Frank Herbert", "Chilton", 1965, Genre::Science))
            .await
            .unwrap();

        let ids: Vec<i32> = dao.read_all().await.unwrap().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[tokio::test]
    async fn test_invalid_book_is_rejected_without_write() {
        let dao = BookDao::new(setup_db().await);
        let mut book = hobbit();
        book.author = String::new();

        assert!(matches!(dao.create(book).await, Err(DaoError::ConstraintViolation(_))));
        assert!(dao.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_book_is_not_found() {
        let dao = BookDao::new(setup_db().await);

        assert!(matches!(dao.update(77, hobbit()).await, Err(DaoError::NotFound { entity: "Book", .. })));
        assert!(matches!(dao.delete(77).await, Err(DaoError::NotFound { .. })));
    }
}
