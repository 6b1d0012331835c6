//! Product Query Data

use regex::{Regex, RegexBuilder};

use crate::domain::{categories::records::CategoryId, products::records::ProductRecord};

/// Page size used when a caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// A `[start, start + qty)` window over an ordered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: u32,
    pub qty: u32,
}

impl Window {
    #[must_use]
    pub const fn new(start: u32, qty: u32) -> Self {
        Self { start, qty }
    }

    /// Slice an already filtered and sorted sequence.
    pub fn apply<I>(self, items: I) -> impl Iterator<Item = I::Item>
    where
        I: IntoIterator,
    {
        items
            .into_iter()
            .skip(to_usize(self.start))
            .take(to_usize(self.qty))
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

fn to_usize(value: u32) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

/// Case-insensitive regular expression over product names.
///
/// Unanchored, so a plain word matches as a substring. The source text is
/// kept for stores that evaluate the pattern themselves.
#[derive(Debug, Clone)]
pub struct NamePattern {
    source: String,
    regex: Regex,
}

impl NamePattern {
    /// Compile a name pattern.
    ///
    /// # Errors
    ///
    /// Returns an error when `pattern` is not a valid regular expression.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

impl PartialEq for NamePattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for NamePattern {}

/// Match predicate applied before sorting, counting and windowing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductFilter {
    All,
    Category(CategoryId),
    NameMatches(NamePattern),
}

impl ProductFilter {
    pub fn matches(&self, product: &ProductRecord) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => product.category == *category,
            Self::NameMatches(pattern) => pattern.is_match(&product.name),
        }
    }

    pub(crate) fn category_param(&self) -> Option<String> {
        match self {
            Self::Category(category) => Some(category.to_hex()),
            Self::All | Self::NameMatches(_) => None,
        }
    }

    pub(crate) fn name_param(&self) -> Option<String> {
        match self {
            Self::NameMatches(pattern) => Some(pattern.as_str().to_string()),
            Self::All | Self::Category(_) => None,
        }
    }
}
