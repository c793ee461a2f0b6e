//! # Article Catalog
//!
//! Read-only list of standard carton sheet articles (name, sheet size,
//! substance, flute) with the search and column sorting used by the
//! listing screen.
//!
//! The built-in catalog is sample data embedded at compile time and parsed
//! once on first use. A catalog can also be loaded from a JSON file with the
//! same record layout:
//!
//! ```json
//! { "id": "ART-001", "nama_artikel": "Box Mie Instan 40",
//!   "panjang_sheet": 1210, "lebar_sheet": 805,
//!   "substance": "125K/110/125", "flute": "B" }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use board_core::articles::{ArticleCatalog, ArticleSort, ArticleSortKey};
//!
//! let catalog = ArticleCatalog::builtin().unwrap();
//! let double_wall = catalog.filter("bc");
//! assert!(!double_wall.is_empty());
//!
//! let sort = ArticleSort::default().toggle(ArticleSortKey::Length);
//! let by_length = catalog.sorted(sort);
//! assert!(by_length[0].length_mm <= by_length[1].length_mm);
//! ```

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::calculations::SheetSpec;
use crate::errors::{CalcError, CalcResult};
use crate::units::Gsm;

const BUILTIN_ARTICLES_JSON: &str = include_str!("../data/articles.json");

static BUILTIN: Lazy<CalcResult<ArticleCatalog>> = Lazy::new(|| ArticleCatalog::from_json(BUILTIN_ARTICLES_JSON));

/// A standard carton sheet article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,

    #[serde(rename = "nama_artikel")]
    pub name: String,

    /// Sheet length in millimeters
    #[serde(rename = "panjang_sheet")]
    pub length_mm: f64,

    /// Sheet width in millimeters
    #[serde(rename = "lebar_sheet")]
    pub width_mm: f64,

    pub substance: String,

    pub flute: String,
}

impl Article {
    /// Sheet spec for feeding the calculators
    pub fn sheet(&self) -> SheetSpec {
        SheetSpec::new(self.length_mm, self.width_mm, self.substance.clone(), self.flute.clone())
    }

    /// Board grammage of this article
    pub fn grammage(&self) -> Gsm {
        self.sheet().grammage()
    }

    /// Case-insensitive substring match against every field
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.field_texts()
            .iter()
            .any(|text| text.to_lowercase().contains(&needle))
    }

    fn field_texts(&self) -> [String; 6] {
        [
            self.id.clone(),
            self.name.clone(),
            self.length_mm.to_string(),
            self.width_mm.to_string(),
            self.substance.clone(),
            self.flute.clone(),
        ]
    }
}

/// Sortable listing columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArticleSortKey {
    Name,
    Flute,
    Substance,
    Length,
    Width,
}

impl ArticleSortKey {
    /// Columns in listing order
    pub const ALL: [ArticleSortKey; 5] = [
        ArticleSortKey::Name,
        ArticleSortKey::Flute,
        ArticleSortKey::Substance,
        ArticleSortKey::Length,
        ArticleSortKey::Width,
    ];

    /// Column header
    pub fn header(&self) -> &'static str {
        match self {
            ArticleSortKey::Name => "Article Name",
            ArticleSortKey::Flute => "Flute",
            ArticleSortKey::Substance => "Substance",
            ArticleSortKey::Length => "Length (mm)",
            ArticleSortKey::Width => "Width (mm)",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "name" | "namaartikel" | "article" => Ok(ArticleSortKey::Name),
            "flute" => Ok(ArticleSortKey::Flute),
            "substance" => Ok(ArticleSortKey::Substance),
            "length" | "panjang" | "panjangsheet" => Ok(ArticleSortKey::Length),
            "width" | "lebar" | "lebarsheet" => Ok(ArticleSortKey::Width),
            _ => Err(CalcError::invalid_input(
                "sort",
                s,
                "Expected one of name, flute, substance, length, width",
            )),
        }
    }

    fn compare(&self, a: &Article, b: &Article) -> Ordering {
        match self {
            ArticleSortKey::Name => compare_text(&a.name, &b.name),
            ArticleSortKey::Flute => compare_text(&a.flute, &b.flute),
            ArticleSortKey::Substance => compare_text(&a.substance, &b.substance),
            ArticleSortKey::Length => a.length_mm.total_cmp(&b.length_mm),
            ArticleSortKey::Width => a.width_mm.total_cmp(&b.width_mm),
        }
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Current sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSort {
    pub key: ArticleSortKey,
    pub direction: SortDirection,
}

impl Default for ArticleSort {
    /// Listing opens sorted by name, A→Z
    fn default() -> Self {
        ArticleSort {
            key: ArticleSortKey::Name,
            direction: SortDirection::Ascending,
        }
    }
}

impl ArticleSort {
    pub fn new(key: ArticleSortKey, direction: SortDirection) -> Self {
        ArticleSort { key, direction }
    }

    /// Clicking a column header: the same ascending column flips to
    /// descending, anything else sorts the clicked column ascending.
    pub fn toggle(self, key: ArticleSortKey) -> Self {
        let direction = if self.key == key && self.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        ArticleSort { key, direction }
    }

    fn compare(&self, a: &Article, b: &Article) -> Ordering {
        let ordering = self.key.compare(a, b);
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Collection of articles
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleCatalog {
    articles: Vec<Article>,
}

impl ArticleCatalog {
    pub fn new(articles: Vec<Article>) -> Self {
        ArticleCatalog { articles }
    }

    /// The embedded sample catalog
    pub fn builtin() -> CalcResult<&'static ArticleCatalog> {
        BUILTIN.as_ref().map_err(|e| e.clone())
    }

    /// Parse a JSON array of article records
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let articles: Vec<Article> = serde_json::from_str(json)?;
        Ok(ArticleCatalog { articles })
    }

    /// Load a JSON catalog file
    pub fn load(path: &Path) -> CalcResult<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
        let catalog = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), count = catalog.len(), "loaded article catalog");
        Ok(catalog)
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Look up an article by id (exact match)
    pub fn find(&self, id: &str) -> CalcResult<&Article> {
        self.articles
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| CalcError::article_not_found(id))
    }

    /// Articles matching `query` in any field; empty query matches all
    pub fn filter(&self, query: &str) -> Vec<&Article> {
        self.articles.iter().filter(|a| a.matches(query)).collect()
    }

    /// All articles in the given order
    pub fn sorted(&self, sort: ArticleSort) -> Vec<&Article> {
        self.query("", sort)
    }

    /// Filter, then sort
    pub fn query(&self, filter: &str, sort: ArticleSort) -> Vec<&Article> {
        let mut rows = self.filter(filter);
        rows.sort_by(|a, b| sort.compare(a, b));
        rows
    }
}
