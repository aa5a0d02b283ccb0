use std::sync::Arc;

use sqlx::sqlite::SqlitePool;

use crate::infra::assets::AssetStore;

/// Bindings every handler receives through an `Extension`.
#[derive(Clone)]
pub struct AppContext {
    pub pool: SqlitePool,
    pub assets: Arc<dyn AssetStore>,
}

impl AppContext {
    pub fn new(pool: SqlitePool, assets: Arc<dyn AssetStore>) -> Self {
        AppContext { pool, assets }
    }
}
