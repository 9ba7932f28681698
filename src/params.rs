//! Address-bar query codec for the listing keys
//!
//! Only three keys belong to this component: `search`, `categories` and
//! `page`. Parsing is forgiving (malformed values fall back to defaults,
//! unknown keys are ignored, nothing errors); serialization is
//! deterministic so the same state always produces the same query string.

use crate::filter::FilterState;
use crate::pager::PageCursor;

pub const PARAM_SEARCH: &str = "search";
pub const PARAM_CATEGORIES: &str = "categories";
pub const PARAM_PAGE: &str = "page";

/// The serialized form of filter + pagination state.
///
/// `page == 1` and an absent `page` param are equivalent; empty `search`
/// and `categories` are omitted entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressBarParams {
    pub search: String,
    pub categories: Vec<String>,
    pub page: usize,
}

impl Default for AddressBarParams {
    fn default() -> Self {
        Self {
            search: String::new(),
            categories: Vec::new(),
            page: 1,
        }
    }
}

impl AddressBarParams {
    /// Snapshot the current state into its wire form
    pub fn from_state(filter: &FilterState, pager: &PageCursor) -> Self {
        Self {
            search: filter.search_term.clone(),
            categories: filter.selected_categories.clone(),
            page: pager.current_page,
        }
    }

    /// Parse a query string (with or without a leading `?`).
    ///
    /// Keys may appear in any order; a repeated key keeps its last value.
    /// Category slugs are split on literal commas before percent-decoding
    /// so an encoded comma inside a slug cannot break the list apart.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = Self::default();

        for pair in query.split('&') {
            if pair.is_empty() {
                continue;
            }
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or("");
            let value = parts.next().unwrap_or("");

            match key {
                PARAM_SEARCH => {
                    params.search = decode(value);
                }
                PARAM_CATEGORIES => {
                    params.categories = value
                        .split(',')
                        .map(decode)
                        .filter(|slug| !slug.is_empty())
                        .collect();
                    dedupe_in_place(&mut params.categories);
                }
                PARAM_PAGE => {
                    // Malformed or zero page numbers read as page 1
                    params.page = value.parse::<usize>().ok().filter(|p| *p >= 1).unwrap_or(1);
                }
                _ => {}
            }
        }

        params
    }

    /// Serialize to a query string without the leading `?`.
    ///
    /// Returns an empty string when every key is at its default.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<String> = Vec::with_capacity(3);

        if !self.search.is_empty() {
            pairs.push(format!("{}={}", PARAM_SEARCH, urlencoding::encode(&self.search)));
        }
        if !self.categories.is_empty() {
            let joined = self
                .categories
                .iter()
                .map(|slug| urlencoding::encode(slug).into_owned())
                .collect::<Vec<_>>()
                .join(",");
            pairs.push(format!("{}={}", PARAM_CATEGORIES, joined));
        }
        if self.page > 1 {
            pairs.push(format!("{}={}", PARAM_PAGE, self.page));
        }

        pairs.join("&")
    }
}

fn decode(value: &str) -> String {
    match urlencoding::decode(value) {
        Ok(decoded) => decoded.into_owned(),
        // Invalid percent sequences are treated as absent
        Err(_) => String::new(),
    }
}

fn dedupe_in_place(slugs: &mut Vec<String>) {
    let mut seen = Vec::with_capacity(slugs.len());
    slugs.retain(|slug| {
        if seen.contains(slug) {
            false
        } else {
            seen.push(slug.clone());
            true
        }
    });
}
