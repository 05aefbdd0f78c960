//! Landing page state store

use crate::display_types::AdSummary;
use dioxus::prelude::*;

/// Popular feed page size
pub const POPULAR_PAGE_SIZE: u32 = 20;

/// State for the popular feed under the import form
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct PopularFeedState {
    /// Ads loaded so far, in ranking order
    pub items: Vec<AdSummary>,
    /// Offset of the next page, `None` once the feed is exhausted
    pub next_offset: Option<u32>,
    /// Whether a page is being fetched
    pub loading: bool,
    /// Whether the first page has arrived
    pub loaded: bool,
    pub error: Option<String>,
}

impl PopularFeedState {
    /// Append a fetched page.
    pub fn append_page(&mut self, items: Vec<AdSummary>, next_offset: Option<u32>) {
        self.items.extend(items);
        self.next_offset = next_offset;
        self.loading = false;
        self.loaded = true;
        self.error = None;
    }

    /// Offset to request next, if another page exists.
    pub fn pending_offset(&self) -> Option<u32> {
        if !self.loaded {
            return Some(0);
        }
        self.next_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ad(id: u64) -> AdSummary {
        AdSummary {
            id,
            ..Default::default()
        }
    }

    #[test]
    fn test_first_page_starts_at_zero() {
        let state = PopularFeedState::default();
        assert_eq!(state.pending_offset(), Some(0));
    }

    #[test]
    fn test_pages_append_until_exhausted() {
        let mut state = PopularFeedState::default();
        state.append_page(vec![ad(1), ad(2)], Some(20));
        assert_eq!(state.pending_offset(), Some(20));

        state.append_page(vec![ad(3)], None);
        assert_eq!(state.pending_offset(), None);
        assert_eq!(
            state.items.iter().map(|a| a.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }
}
