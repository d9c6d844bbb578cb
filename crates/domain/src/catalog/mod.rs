//! Service catalog — the fixed table of bookable services and its queries.
//!
//! The catalog is reference data compiled into the binary: initialised once
//! behind a [`LazyLock`], never mutated, never fetched. Every query here is
//! a pure function over that table and is safe to call from any thread
//! without coordination.
//!
//! Search is a deliberate naive linear scan: trim the query, split it into
//! lowercased whitespace-separated terms, and keep the entries whose
//! concatenated text contains every term as a literal substring. Results
//! come back in declaration order; there is no relevance ranking.

mod data;

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{SerbisyoError, ValidationError};

/// One bookable service in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceItem {
    /// Stable string slug, unique across the catalog.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Coarse grouping label, e.g. `"Electrical"`.
    pub category: String,
    /// Opaque navigation target consumed by the mobile clients.
    pub category_route: String,
    /// Extra terms improving search recall, in display order.
    pub keywords: Vec<String>,
}

impl ServiceItem {
    /// Create a builder for constructing a [`ServiceItem`].
    #[must_use]
    pub fn builder() -> ServiceItemBuilder {
        ServiceItemBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SerbisyoError::Validation`] when `id`, `title`, or
    /// `category` is empty.
    pub fn validate(&self) -> Result<(), SerbisyoError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyId.into());
        }
        if self.title.is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        if self.category.is_empty() {
            return Err(ValidationError::EmptyCategory.into());
        }
        Ok(())
    }

    /// The lowercased text a search query is matched against: title,
    /// description, category, and keywords joined with single spaces.
    fn search_text(&self) -> String {
        let mut parts = vec![
            self.title.as_str(),
            self.description.as_str(),
            self.category.as_str(),
        ];
        parts.extend(self.keywords.iter().map(String::as_str));
        parts.join(" ").to_lowercase()
    }

    /// Whether every (already lowercased) term occurs in this entry's text.
    fn matches(&self, terms: &[String]) -> bool {
        let text = self.search_text();
        terms.iter().all(|term| text.contains(term.as_str()))
    }
}

/// Step-by-step builder for [`ServiceItem`].
#[derive(Debug, Default)]
pub struct ServiceItemBuilder {
    id: Option<String>,
    title: Option<String>,
    description: Option<String>,
    category: Option<String>,
    category_route: Option<String>,
    keywords: Vec<String>,
}

impl ServiceItemBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn category_route(mut self, category_route: impl Into<String>) -> Self {
        self.category_route = Some(category_route.into());
        self
    }

    #[must_use]
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into());
        self
    }

    /// Consume the builder, validate, and return a [`ServiceItem`].
    ///
    /// # Errors
    ///
    /// Returns [`SerbisyoError::Validation`] if `id`, `title`, or
    /// `category` is missing or empty.
    pub fn build(self) -> Result<ServiceItem, SerbisyoError> {
        let item = ServiceItem {
            id: self.id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            category_route: self.category_route.unwrap_or_default(),
            keywords: self.keywords,
        };
        item.validate()?;
        Ok(item)
    }
}

static CATALOG: LazyLock<Vec<ServiceItem>> = LazyLock::new(data::entries);

/// The whole catalog in declaration order.
#[must_use]
pub fn all() -> &'static [ServiceItem] {
    &CATALOG
}

/// Free-text search over the catalog.
///
/// A blank or whitespace-only query returns nothing — there is no
/// browse-all fallback; use [`all`] for that. An entry matches when every
/// whitespace-separated term of the query occurs case-insensitively as a
/// literal substring of its title, description, category, or keywords.
#[must_use]
pub fn search(query: &str) -> Vec<&'static ServiceItem> {
    let terms: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
    if terms.is_empty() {
        return Vec::new();
    }
    all().iter().filter(|item| item.matches(&terms)).collect()
}

/// Entries whose category equals `category`, compared case-insensitively.
#[must_use]
pub fn find_by_category(category: &str) -> Vec<&'static ServiceItem> {
    all()
        .iter()
        .filter(|item| item.category.eq_ignore_ascii_case(category))
        .collect()
}

/// Distinct category labels in first-occurrence order.
#[must_use]
pub fn all_categories() -> Vec<&'static str> {
    let mut categories: Vec<&'static str> = Vec::new();
    for item in all() {
        if !categories.contains(&item.category.as_str()) {
            categories.push(item.category.as_str());
        }
    }
    categories
}

/// Look up a single entry by its id slug.
#[must_use]
pub fn find_by_id(id: &str) -> Option<&'static ServiceItem> {
    all().iter().find(|item| item.id == id)
}
