use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DatabaseTransaction, DbErr};

/// Connect to `db_url` and create any missing table from the entity definitions.
pub async fn init_db(db_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(db_url.to_owned());

    // Set connection pool options
    opt.max_connections(20)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(60))
        .sqlx_logging(true);

    let db = Database::connect(opt).await?;
    db.get_schema_registry("holocron_server::entity::*")
        .sync(&db)
        .await?;

    Ok(db)
}

/// Roll back `txn` after a failed write and hand back the write's error.
///
/// A failing rollback is logged; it never replaces `err`.
pub async fn abort(txn: DatabaseTransaction, err: DbErr) -> DbErr {
    keep_write_error(err, txn.rollback().await)
}

fn keep_write_error(err: DbErr, rollback: Result<(), DbErr>) -> DbErr {
    if let Err(rollback_err) = rollback {
        tracing::error!(error = %err, rollback_error = %rollback_err, "Rollback failed");
    }
    err
}
