use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Set,
    TransactionTrait,
};
use thiserror::Error;
use tracing::{info, instrument};

use super::{CatalogClient, CatalogEntry, CatalogError, CatalogResource};
use crate::database;
use crate::entity::{people, planet};
use crate::error::AppError;

#[derive(Debug, Error)]
pub enum PopulateError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The batch insert failed and was rolled back.
    #[error(transparent)]
    Persistence(DbErr),

    /// Reading the row count failed.
    #[error(transparent)]
    Query(DbErr),
}

impl From<PopulateError> for AppError {
    fn from(err: PopulateError) -> Self {
        match err {
            PopulateError::Catalog(e) => e.into(),
            PopulateError::Persistence(e) => AppError::persistence(e),
            PopulateError::Query(e) => e.into(),
        }
    }
}

/// Fill the `people` table from the catalog if it holds no rows.
///
/// Returns the number of rows inserted, 0 when the table was already populated.
#[instrument(skip_all)]
pub async fn ensure_people(
    db: &DatabaseConnection,
    catalog: &CatalogClient,
) -> Result<u64, PopulateError> {
    populate_if_empty::<people::Entity, _, _>(db, catalog, CatalogResource::People, |entry| {
        people::ActiveModel {
            name: Set(entry.name),
            description: Set(entry.description),
            ..Default::default()
        }
    })
    .await
}

/// Fill the `planet` table from the catalog if it holds no rows.
#[instrument(skip_all)]
pub async fn ensure_planets(
    db: &DatabaseConnection,
    catalog: &CatalogClient,
) -> Result<u64, PopulateError> {
    populate_if_empty::<planet::Entity, _, _>(db, catalog, CatalogResource::Planets, |entry| {
        planet::ActiveModel {
            name: Set(entry.name),
            description: Set(entry.description),
            ..Default::default()
        }
    })
    .await
}

/// Count the rows of `E`; when there are none, fetch one catalog page and insert
/// it as a single batch, all or nothing.
async fn populate_if_empty<E, A, F>(
    db: &DatabaseConnection,
    catalog: &CatalogClient,
    resource: CatalogResource,
    to_row: F,
) -> Result<u64, PopulateError>
where
    E: EntityTrait,
    E::Model: Sync,
    A: ActiveModelTrait<Entity = E> + Send,
    F: Fn(CatalogEntry) -> A + Send,
{
    let existing = E::find().count(db).await.map_err(PopulateError::Query)?;
    if existing > 0 {
        return Ok(0);
    }

    let entries = catalog.fetch_page(resource).await?;
    if entries.is_empty() {
        return Ok(0);
    }
    let rows: Vec<A> = entries.into_iter().map(to_row).collect();

    let txn = db.begin().await.map_err(PopulateError::Persistence)?;
    let inserted = match E::insert_many(rows).exec_without_returning(&txn).await {
        Ok(n) => n,
        Err(e) => return Err(PopulateError::Persistence(database::abort(txn, e).await)),
    };
    txn.commit().await.map_err(PopulateError::Persistence)?;

    info!(resource = resource.path(), inserted, "Populated from catalog");
    Ok(inserted)
}
