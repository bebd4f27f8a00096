//! The join builder: attaches each product's category and owner.
//!
//! Runs once per session. The result is the immutable base data every
//! filter pass starts from.

use std::collections::{HashMap, hash_map::Entry};

use serde::{Deserialize, Serialize};

use crate::{
  error::{Error, Result},
  model::{Category, Product, User},
};

/// A product with its resolved category and that category's owner, copied in
/// by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedProduct {
  #[serde(flatten)]
  pub product:  Product,
  pub category: Category,
  pub user:     User,
}

/// Join `products` against `categories` and `users`.
///
/// Output order matches `products`. Every `category_id` and `owner_id` must
/// resolve to exactly one row; a missing or duplicated key is an error and no
/// partial result is returned. The inputs are only borrowed.
pub fn enrich(
  products: &[Product],
  categories: &[Category],
  users: &[User],
) -> Result<Vec<EnrichedProduct>> {
  let categories_by_id = index(categories, |c| c.id, Error::DuplicateCategory)?;
  let users_by_id = index(users, |u| u.id, Error::DuplicateUser)?;

  let enriched = products
    .iter()
    .map(|product| -> Result<EnrichedProduct> {
      let category = categories_by_id.get(&product.category_id).copied().ok_or(
        Error::UnresolvedCategory {
          product_id:  product.id,
          category_id: product.category_id,
        },
      )?;
      let user = users_by_id
        .get(&category.owner_id)
        .copied()
        .ok_or(Error::UnresolvedOwner {
          category_id: category.id,
          owner_id:    category.owner_id,
        })?;

      Ok(EnrichedProduct {
        product:  product.clone(),
        category: category.clone(),
        user:     user.clone(),
      })
    })
    .collect::<Result<Vec<_>>>()?;

  tracing::debug!(
    products = products.len(),
    categories = categories.len(),
    users = users.len(),
    "joined product table"
  );
  Ok(enriched)
}

fn index<'a, T, K>(
  rows: &'a [T],
  key: impl Fn(&T) -> K,
  duplicate: impl Fn(K) -> Error,
) -> Result<HashMap<K, &'a T>>
where
  K: std::hash::Hash + Eq + Copy,
{
  let mut map = HashMap::with_capacity(rows.len());
  for row in rows {
    match map.entry(key(row)) {
      Entry::Occupied(e) => return Err(duplicate(*e.key())),
      Entry::Vacant(e) => {
        e.insert(row);
      }
    }
  }
  Ok(map)
}
