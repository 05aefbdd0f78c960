//! Profile page state store

use crate::display_types::{AdSummary, HistoryEntry, Member};
use dioxus::prelude::*;

/// Profile page tabs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProfileTab {
    #[default]
    Profile,
    MyAds,
    Favorites,
    History,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 4] = [
        ProfileTab::Profile,
        ProfileTab::MyAds,
        ProfileTab::Favorites,
        ProfileTab::History,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileTab::Profile => "Profile",
            ProfileTab::MyAds => "My ads",
            ProfileTab::Favorites => "Favorites",
            ProfileTab::History => "History",
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            ProfileTab::Profile => "profile",
            ProfileTab::MyAds => "my_ads",
            ProfileTab::Favorites => "favorites",
            ProfileTab::History => "history",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.value() == value)
    }
}

/// A list that loads the first time its tab opens
#[derive(Clone, Debug, PartialEq)]
pub enum LazyList<T> {
    NotLoaded,
    Loading,
    Loaded(Vec<T>),
    Failed(String),
}

impl<T> Default for LazyList<T> {
    fn default() -> Self {
        LazyList::NotLoaded
    }
}

impl<T> LazyList<T> {
    /// Whether opening the tab should trigger a fetch.
    pub fn needs_load(&self) -> bool {
        matches!(self, LazyList::NotLoaded | LazyList::Failed(_))
    }
}

/// State for the profile page
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ProfileState {
    pub active_tab: ProfileTab,
    pub me: Option<Member>,
    pub loading: bool,
    pub error: Option<String>,
    pub my_ads: LazyList<AdSummary>,
    pub favorites: LazyList<AdSummary>,
    pub history: LazyList<HistoryEntry>,
}

impl ProfileState {
    /// Whether switching to `tab` needs a fetch.
    pub fn tab_needs_load(&self, tab: ProfileTab) -> bool {
        match tab {
            ProfileTab::Profile => false,
            ProfileTab::MyAds => self.my_ads.needs_load(),
            ProfileTab::Favorites => self.favorites.needs_load(),
            ProfileTab::History => self.history.needs_load(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_values_round_trip() {
        for tab in ProfileTab::ALL {
            assert_eq!(ProfileTab::from_value(tab.value()), Some(tab));
        }
        assert_eq!(ProfileTab::from_value("settings"), None);
    }

    #[test]
    fn test_lists_load_once_and_retry_after_failure() {
        let mut state = ProfileState::default();
        assert!(!state.tab_needs_load(ProfileTab::Profile));
        assert!(state.tab_needs_load(ProfileTab::Favorites));

        state.favorites = LazyList::Loading;
        assert!(!state.tab_needs_load(ProfileTab::Favorites));

        state.favorites = LazyList::Loaded(vec![]);
        assert!(!state.tab_needs_load(ProfileTab::Favorites));

        state.history = LazyList::Failed("Network error".to_string());
        assert!(state.tab_needs_load(ProfileTab::History));
    }
}
