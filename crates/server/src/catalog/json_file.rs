//! Whole-document JSON file catalog.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use souk_core::types::{Product, ProductDraft, ProductId, ProductPatch};

use super::{EventKind, ProductRepository, RepositoryError};

/// Cache TTL for listing and product reads.
const CACHE_TTL: Duration = Duration::from_secs(300);

/// On-disk document shape: `{ "products": [Product...] }`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    products: Vec<Product>,
}

/// Cache key for listing and product views.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
enum CacheKey {
    Listing,
    Product(ProductId),
}

/// Cached value types.
#[derive(Debug, Clone)]
enum CacheValue {
    Listing(Arc<Vec<Product>>),
    Product(Box<Product>),
}

/// Product catalog backed by a single JSON document.
///
/// Every write is a whole-document read-modify-write. Writes within one
/// process are serialized through a mutex, so concurrent admin edits cannot
/// clobber each other; a writer in a *different* process still races at
/// last-writer-wins granularity. The document is replaced via a sibling temp
/// file and rename so a crashed write never leaves a torn file behind.
///
/// Reads go through a short-lived cache that every successful write
/// invalidates, mirroring the page revalidation of the admin flow.
pub struct JsonCatalog {
    path: PathBuf,
    write_lock: Mutex<()>,
    cache: Cache<CacheKey, CacheValue>,
}

impl JsonCatalog {
    /// Create a catalog over the document at `path`.
    ///
    /// The file does not have to exist yet; an absent document reads as an
    /// empty collection and is created on the first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(CACHE_TTL)
            .build();

        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
            cache,
        }
    }

    /// Path of the underlying document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole document from disk.
    ///
    /// An absent file is an empty collection; a file that fails to parse is
    /// logged and also treated as empty, never as a fatal error.
    async fn load(&self) -> Result<Vec<Product>, RepositoryError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<CatalogDocument>(&raw) {
            Ok(document) => Ok(document.products),
            Err(e) => {
                tracing::warn!(error = %e, "catalog document failed to parse, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Write the whole document back to disk atomically.
    async fn save(&self, products: Vec<Product>) -> Result<(), RepositoryError> {
        let raw = serde_json::to_string_pretty(&CatalogDocument { products })?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, raw).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    /// Invalidate the listing view and the view of one product.
    async fn invalidate(&self, id: &ProductId) {
        self.cache.invalidate(&CacheKey::Listing).await;
        self.cache.invalidate(&CacheKey::Product(id.clone())).await;
    }

    /// Run a mutation under the write lock: load, mutate, persist, then
    /// drop the cached views of the touched product.
    async fn mutate<F>(&self, mutate: F) -> Result<Product, RepositoryError>
    where
        F: FnOnce(&mut Vec<Product>) -> Result<Product, RepositoryError> + Send,
    {
        let _guard = self.write_lock.lock().await;

        let mut products = self.load().await?;
        let product = mutate(&mut products)?;
        self.save(products).await?;
        self.invalidate(&product.id).await;

        Ok(product)
    }
}

#[async_trait]
impl ProductRepository for JsonCatalog {
    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        if let Some(CacheValue::Listing(products)) = self.cache.get(&CacheKey::Listing).await {
            return Ok(products.as_ref().clone());
        }

        let products = self.load().await?;
        self.cache
            .insert(
                CacheKey::Listing,
                CacheValue::Listing(Arc::new(products.clone())),
            )
            .await;
        Ok(products)
    }

    async fn get(&self, id: &ProductId) -> Result<Product, RepositoryError> {
        let key = CacheKey::Product(id.clone());
        if let Some(CacheValue::Product(product)) = self.cache.get(&key).await {
            return Ok(*product);
        }

        let products = self.load().await?;
        let product = products
            .into_iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| RepositoryError::NotFound(id.clone()))?;

        self.cache
            .insert(key, CacheValue::Product(Box::new(product.clone())))
            .await;
        Ok(product)
    }

    async fn create(&self, draft: ProductDraft) -> Result<Product, RepositoryError> {
        self.mutate(move |products| {
            let mut product = draft.into_product(Utc::now())?;

            // Short random suffixes make collisions unlikely, not impossible.
            while products.iter().any(|p| p.id == product.id) {
                product.id = ProductId::generate();
            }

            products.push(product.clone());
            Ok(product)
        })
        .await
    }

    async fn update(
        &self,
        id: &ProductId,
        patch: ProductPatch,
    ) -> Result<Product, RepositoryError> {
        self.mutate(move |products| {
            let product = products
                .iter_mut()
                .find(|p| &p.id == id)
                .ok_or_else(|| RepositoryError::NotFound(id.clone()))?;

            patch.apply(product, Utc::now())?;
            Ok(product.clone())
        })
        .await
    }

    async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError> {
        self.mutate(move |products| {
            let index = products
                .iter()
                .position(|p| &p.id == id)
                .ok_or_else(|| RepositoryError::NotFound(id.clone()))?;

            Ok(products.remove(index))
        })
        .await
        .map(|_| ())
    }

    async fn record_event(
        &self,
        id: &ProductId,
        kind: EventKind,
    ) -> Result<Product, RepositoryError> {
        self.mutate(move |products| {
            let product = products
                .iter_mut()
                .find(|p| &p.id == id)
                .ok_or_else(|| RepositoryError::NotFound(id.clone()))?;

            match kind {
                EventKind::Like => product.likes += 1,
                EventKind::Order => product.orders += 1,
            }
            Ok(product.clone())
        })
        .await
    }
}
