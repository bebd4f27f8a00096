//! The read-only catalog: base tables plus their joined view.

use crate::{
  error::Result,
  filter::{self, FilterState},
  join::{self, EnrichedProduct},
  model::{Category, User, UserId},
  tables::Tables,
};

/// Owns the base tables and the enriched rows derived from them.
///
/// Built once; nothing here is mutated afterwards. Filtering borrows the
/// enriched rows and returns a fresh vector.
#[derive(Debug, Clone)]
pub struct Catalog {
  tables:   Tables,
  enriched: Vec<EnrichedProduct>,
}

impl Catalog {
  /// Join `tables`, failing on the first unresolved or duplicated key.
  pub fn new(tables: Tables) -> Result<Self> {
    let enriched = join::enrich(&tables.products, &tables.categories, &tables.users)?;
    Ok(Self { tables, enriched })
  }

  pub fn users(&self) -> &[User] { &self.tables.users }

  pub fn categories(&self) -> &[Category] { &self.tables.categories }

  /// Every enriched row, in product order.
  pub fn products(&self) -> &[EnrichedProduct] { &self.enriched }

  pub fn user(&self, id: UserId) -> Option<&User> {
    self.tables.users.iter().find(|u| u.id == id)
  }

  /// Find a user by name, ignoring ASCII case.
  pub fn user_by_name(&self, name: &str) -> Option<&User> {
    self
      .tables
      .users
      .iter()
      .find(|u| u.name.eq_ignore_ascii_case(name))
  }

  /// Rows visible under `state`.
  pub fn visible(&self, state: &FilterState) -> Vec<EnrichedProduct> {
    filter::filter(&self.enriched, state)
  }

  /// Whether `state` hides every row ("no products matching").
  pub fn no_matches(&self, state: &FilterState) -> bool { self.visible(state).is_empty() }
}
