//! Error types for `prodcat-core`.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::{CategoryId, ProductId, UserId};

#[derive(Debug, Error)]
pub enum Error {
  #[error("unresolved reference: product {product_id} points at unknown category {category_id}")]
  UnresolvedCategory {
    product_id:  ProductId,
    category_id: CategoryId,
  },

  #[error("unresolved reference: category {category_id} points at unknown owner {owner_id}")]
  UnresolvedOwner {
    category_id: CategoryId,
    owner_id:    UserId,
  },

  #[error("category id {0} appears more than once")]
  DuplicateCategory(CategoryId),

  #[error("user id {0} appears more than once")]
  DuplicateUser(UserId),

  #[error("failed to read {}: {source}", path.display())]
  Io {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("malformed table: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
