//! Base table rows: users, categories and products.
//!
//! Field names on the wire follow the camelCase shape of the data files
//! (`categoryId`, `ownerId`).

use std::fmt;

use serde::{Deserialize, Serialize};

// ─── Identifiers ─────────────────────────────────────────────────────────────

macro_rules! id_type {
  ($(#[$meta:meta])* $name:ident) => {
    $(#[$meta])*
    #[derive(
      Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    )]
    #[serde(transparent)]
    pub struct $name(pub u32);

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { fmt::Display::fmt(&self.0, f) }
    }
  };
}

id_type!(
  /// Primary key of a [`User`].
  UserId
);
id_type!(
  /// Primary key of a [`Category`].
  CategoryId
);
id_type!(
  /// Primary key of a [`Product`].
  ProductId
);

// ─── Rows ────────────────────────────────────────────────────────────────────

/// Written as `"m"` or `"f"` in the data files. Decides the colour of the
/// owner column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
  #[serde(rename = "m")]
  Male,
  #[serde(rename = "f")]
  Female,
}

/// A person who may own categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  pub id:    UserId,
  pub name:  String,
  pub sex:   Sex,
  /// Display colour as `#rrggbb`. Purely cosmetic.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
  pub id:       CategoryId,
  pub title:    String,
  #[serde(default)]
  pub icon:     String,
  pub owner_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id:          ProductId,
  pub name:        String,
  pub category_id: CategoryId,
}
