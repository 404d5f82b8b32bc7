use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{FindOneOptions, FindOptions, IndexOptions},
    Collection, IndexModel,
};

use crate::{db::Database, errors::AppResult, models::domain::QuizRecord};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRecordRepository: Send + Sync {
    /// Most recent record generated for `url`.
    async fn find_latest_by_url(&self, url: &str) -> AppResult<Option<QuizRecord>>;
    async fn insert(&self, record: QuizRecord) -> AppResult<QuizRecord>;
    /// Newest first.
    async fn list_recent(&self, skip: u64, limit: i64) -> AppResult<Vec<QuizRecord>>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizRecord>>;
    async fn health_check(&self) -> AppResult<()>;
}

pub struct MongoQuizRecordRepository {
    db: Database,
    collection: Collection<QuizRecord>,
}

impl MongoQuizRecordRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self {
            db: db.clone(),
            collection,
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quiz records collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let url_index = IndexModel::builder()
            .keys(doc! { "url": 1, "generated_at": -1 })
            .options(IndexOptions::builder().name("url_recent".to_string()).build())
            .build();

        let generated_at_index = IndexModel::builder()
            .keys(doc! { "generated_at": -1 })
            .options(IndexOptions::builder().name("generated_at_desc".to_string()).build())
            .build();

        self.collection
            .create_indexes(vec![id_index, url_index, generated_at_index])
            .await?;

        log::info!("Successfully created indexes for quiz records collection");
        Ok(())
    }
}

#[async_trait]
impl QuizRecordRepository for MongoQuizRecordRepository {
    async fn find_latest_by_url(&self, url: &str) -> AppResult<Option<QuizRecord>> {
        let options = FindOneOptions::builder()
            .sort(doc! { "generated_at": -1 })
            .build();

        let record = self
            .collection
            .find_one(doc! { "url": url })
            .with_options(options)
            .await?;
        Ok(record)
    }

    async fn insert(&self, record: QuizRecord) -> AppResult<QuizRecord> {
        self.collection.insert_one(&record).await?;
        Ok(record)
    }

    async fn list_recent(&self, skip: u64, limit: i64) -> AppResult<Vec<QuizRecord>> {
        let find_options = FindOptions::builder()
            .sort(doc! { "generated_at": -1 })
            .skip(Some(skip))
            .limit(Some(limit))
            .build();

        let cursor = self.collection.find(doc! {}).with_options(find_options).await?;
        let records: Vec<QuizRecord> = cursor.try_collect().await?;

        Ok(records)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizRecord>> {
        let record = self.collection.find_one(doc! { "id": id }).await?;
        Ok(record)
    }

    async fn health_check(&self) -> AppResult<()> {
        self.db.health_check().await
    }
}
