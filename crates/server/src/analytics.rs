//! Rankings derived from the catalog's like/order counters.

use std::sync::Arc;

use serde::Serialize;

use souk_core::types::{Product, ProductId};

use crate::catalog::{EventKind, ProductRepository, RepositoryError};

/// How many products each ranking in the summary carries.
const SUMMARY_LIMIT: usize = 5;

/// Which counter a ranking sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankBy {
    Likes,
    Orders,
}

/// Dashboard summary: top products by counter plus the collection size.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub most_loved: Vec<Product>,
    pub most_ordered: Vec<Product>,
    pub total_products: usize,
}

/// Analytics aggregator over the product repository.
///
/// Rankings are derived on demand from the repository's current snapshot;
/// recorded events persist through the repository's write path so counters
/// survive restarts.
#[derive(Clone)]
pub struct Analytics {
    repository: Arc<dyn ProductRepository>,
}

impl Analytics {
    #[must_use]
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// Top `limit` products, descending by the chosen counter.
    ///
    /// The sort is stable: ties keep the original collection order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the catalog cannot be read.
    pub async fn rank(&self, by: RankBy, limit: usize) -> Result<Vec<Product>, RepositoryError> {
        let mut products = self.repository.list().await?;

        match by {
            RankBy::Likes => products.sort_by(|a, b| b.likes.cmp(&a.likes)),
            RankBy::Orders => products.sort_by(|a, b| b.orders.cmp(&a.orders)),
        }

        products.truncate(limit);
        Ok(products)
    }

    /// Dashboard summary: top 5 by likes, top 5 by orders, total count.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the catalog cannot be read.
    pub async fn summary(&self) -> Result<AnalyticsSummary, RepositoryError> {
        let total_products = self.repository.list().await?.len();
        let most_loved = self.rank(RankBy::Likes, SUMMARY_LIMIT).await?;
        let most_ordered = self.rank(RankBy::Orders, SUMMARY_LIMIT).await?;

        Ok(AnalyticsSummary {
            most_loved,
            most_ordered,
            total_products,
        })
    }

    /// Increment the product's counter for `kind` by exactly one.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` for an unknown product.
    pub async fn record_event(
        &self,
        id: &ProductId,
        kind: EventKind,
    ) -> Result<Product, RepositoryError> {
        self.repository.record_event(id, kind).await
    }
}
