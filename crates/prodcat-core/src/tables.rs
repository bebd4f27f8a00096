//! Loading the three base tables.
//!
//! Each table is a JSON array. On disk they live side by side as
//! `users.json`, `categories.json` and `products.json`.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{
  error::{Error, Result},
  model::{Category, Product, User},
};

const SAMPLE_USERS: &str = include_str!("../data/users.json");
const SAMPLE_CATEGORIES: &str = include_str!("../data/categories.json");
const SAMPLE_PRODUCTS: &str = include_str!("../data/products.json");

/// The raw, un-joined source data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tables {
  pub users:      Vec<User>,
  pub categories: Vec<Category>,
  pub products:   Vec<Product>,
}

impl Tables {
  /// Parse the three tables from JSON text.
  pub fn from_json(users: &str, categories: &str, products: &str) -> Result<Self> {
    Ok(Self {
      users:      serde_json::from_str(users)?,
      categories: serde_json::from_str(categories)?,
      products:   serde_json::from_str(products)?,
    })
  }

  /// Read `users.json`, `categories.json` and `products.json` from `dir`.
  pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
    let dir = dir.as_ref();
    let tables = Self {
      users:      read_table(&dir.join("users.json"))?,
      categories: read_table(&dir.join("categories.json"))?,
      products:   read_table(&dir.join("products.json"))?,
    };
    tracing::info!(
      dir = %dir.display(),
      users = tables.users.len(),
      categories = tables.categories.len(),
      products = tables.products.len(),
      "loaded tables"
    );
    Ok(tables)
  }

  /// The demonstration data set bundled with the crate.
  pub fn sample() -> Result<Self> {
    Self::from_json(SAMPLE_USERS, SAMPLE_CATEGORIES, SAMPLE_PRODUCTS)
  }
}

fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
  let raw = std::fs::read_to_string(path).map_err(|source| Error::Io {
    path: path.to_path_buf(),
    source,
  })?;
  Ok(serde_json::from_str(&raw)?)
}
