//! Shared UI components

pub mod ad_card;
pub mod ad_detail;
pub mod app_layout;
pub mod auth_form;
pub mod button;
pub mod helpers;
pub mod import_form;
pub mod not_found;
pub mod popular_feed;
pub mod profile;
pub mod segmented_control;
pub mod text_input;
pub mod utils;

pub use ad_card::{AdCard, AdList};
pub use ad_detail::{
    AdDetailCallbacks, AdDetailView, AdInfoView, CommentForm, CommentItem, CommentThread,
    RatingBar, ReplyDraft,
};
pub use app_layout::{AppLayoutView, NavItem, SITE_NAME};
pub use auth_form::{AuthField, AuthFormView};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use helpers::{ErrorDisplay, LoadingSpinner};
pub use import_form::ImportFormView;
pub use not_found::NotFoundView;
pub use popular_feed::PopularFeedView;
pub use profile::{ProfileGuestView, ProfileView};
pub use segmented_control::{Segment, SegmentedControl};
pub use text_input::{TextArea, TextInput};
pub use utils::{format_price_rub, format_rating, format_timestamp};
