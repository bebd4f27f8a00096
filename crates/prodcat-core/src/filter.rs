//! Filter state and the filter pipeline.
//!
//! The pipeline is a pure function of the enriched rows and a
//! [`FilterState`]. It runs from scratch on every state change.

use std::collections::BTreeSet;

use strum::{Display, EnumIter};

use crate::{
  join::EnrichedProduct,
  model::{User, UserId},
};

// ─── Owner selection ─────────────────────────────────────────────────────────

/// Which owner's categories are visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OwnerFilter {
  /// No owner restriction.
  #[default]
  All,
  User(UserId),
}

impl OwnerFilter {
  pub fn is_all(&self) -> bool { matches!(self, Self::All) }

  /// Whether `user` is the selected owner.
  pub fn is_user(&self, user: &User) -> bool { *self == Self::User(user.id) }
}

// ─── Table columns ───────────────────────────────────────────────────────────

/// Table header columns. Each carries a sort affordance in the UI, but no
/// ordering is ever applied to the rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum SortColumn {
  #[strum(serialize = "ID")]
  Id,
  Product,
  Category,
  User,
}

// ─── State ───────────────────────────────────────────────────────────────────

/// User-controlled filter inputs.
///
/// `Default` is the reset state: all owners, empty query, nothing toggled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
  owner:   OwnerFilter,
  query:   String,
  /// Category titles the user has toggled on. Tracked for display only; the
  /// pipeline never reads it.
  toggled: BTreeSet<String>,
}

impl FilterState {
  pub fn new() -> Self { Self::default() }

  pub fn owner(&self) -> OwnerFilter { self.owner }

  pub fn query(&self) -> &str { &self.query }

  pub fn toggled_categories(&self) -> &BTreeSet<String> { &self.toggled }

  pub fn is_toggled(&self, title: &str) -> bool { self.toggled.contains(title) }

  pub fn select_owner(&mut self, user: &User) { self.owner = OwnerFilter::User(user.id); }

  pub fn select_all(&mut self) { self.owner = OwnerFilter::All; }

  pub fn set_query(&mut self, query: impl Into<String>) { self.query = query.into(); }

  pub fn clear_query(&mut self) { self.query.clear(); }

  /// Add `title` to the toggled set, or remove it if already present.
  pub fn toggle_category(&mut self, title: &str) {
    if !self.toggled.remove(title) {
      self.toggled.insert(title.to_owned());
    }
  }

  /// Restore owner, query and toggled categories to their initial values.
  pub fn reset(&mut self) {
    tracing::debug!("resetting all filters");
    *self = Self::default();
  }

  pub fn is_default(&self) -> bool { *self == Self::default() }
}

// ─── Pipeline ────────────────────────────────────────────────────────────────

/// Return the rows of `products` visible under `state`, in input order.
///
/// Text filter first (case-insensitive substring on the product name, skipped
/// for an empty query), then the owner filter (category owner must equal the
/// selected user). `products` itself is never modified.
pub fn filter(products: &[EnrichedProduct], state: &FilterState) -> Vec<EnrichedProduct> {
  let mut prepared = products.to_vec();

  if !state.query.is_empty() {
    let needle = state.query.to_lowercase();
    prepared.retain(|p| p.product.name.to_lowercase().contains(&needle));
  }

  if let OwnerFilter::User(owner_id) = state.owner {
    prepared.retain(|p| p.category.owner_id == owner_id);
  }

  prepared
}
