use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

const CREATE_POSTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS posts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        category TEXT NOT NULL,
        cover_image TEXT,
        excerpt TEXT NOT NULL,
        content TEXT NOT NULL,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        delete_password TEXT NOT NULL
    )
"#;

const CREATE_COMMENTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS comments (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        post_id INTEGER NOT NULL,
        author TEXT NOT NULL,
        email TEXT,
        content TEXT NOT NULL,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        delete_password TEXT NOT NULL,
        FOREIGN KEY (post_id) REFERENCES posts(id) ON DELETE CASCADE
    )
"#;

/// Opens the pool. Foreign keys are enforced on every connection, comment
/// inserts and post deletes depend on it.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

pub async fn tables_exist(pool: &SqlitePool) -> Result<bool, sqlx::Error> {
    let table = sqlx::query_scalar::<_, String>(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'posts'",
    )
    .fetch_optional(pool)
    .await?;

    Ok(table.is_some())
}

/// Creates both tables if they are missing. Safe to run on every startup.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let existed = tables_exist(pool).await?;

    sqlx::query(CREATE_POSTS_TABLE).execute(pool).await?;
    sqlx::query(CREATE_COMMENTS_TABLE).execute(pool).await?;

    if existed {
        tracing::debug!("database schema already present");
    } else {
        tracing::info!("created posts and comments tables");
    }
    Ok(())
}
