use std::{collections::HashMap, io::ErrorKind, path::PathBuf};

use axum::async_trait;

use crate::error::AppError;

/// Key-to-content lookup for the static HTML pages.
#[async_trait]
pub trait AssetStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<String, AppError>;
}

/// Pages stored as files under a directory. A store without a directory is
/// unbound and fails every lookup.
#[derive(Debug, Clone)]
pub struct DirAssetStore {
    root: Option<PathBuf>,
}

impl DirAssetStore {
    pub fn new(root: Option<PathBuf>) -> Self {
        DirAssetStore { root }
    }
}

#[async_trait]
impl AssetStore for DirAssetStore {
    async fn get(&self, key: &str) -> Result<String, AppError> {
        let root = self
            .root
            .as_ref()
            .ok_or_else(|| AppError::Config("asset store is not bound".to_string()))?;

        // keys are flat file names
        if key.is_empty() || key.contains(&['/', '\\'][..]) || key.starts_with('.') {
            return Err(missing(key));
        }

        let content = match tokio::fs::read_to_string(root.join(key)).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Err(missing(key)),
            Err(err) => return Err(err.into()),
        };

        if content.is_empty() {
            return Err(missing(key));
        }
        Ok(content)
    }
}

/// In-process store, handy for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetStore {
    pages: HashMap<String, String>,
}

impl MemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, key: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.insert(key.into(), html.into());
        self
    }
}

#[async_trait]
impl AssetStore for MemoryAssetStore {
    async fn get(&self, key: &str) -> Result<String, AppError> {
        match self.pages.get(key) {
            Some(html) if !html.is_empty() => Ok(html.clone()),
            _ => Err(missing(key)),
        }
    }
}

fn missing(key: &str) -> AppError {
    AppError::NotFound(format!("asset \"{key}\" does not exist"))
}
