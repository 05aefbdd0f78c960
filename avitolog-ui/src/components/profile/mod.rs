//! Profile page views

mod view;

pub use view::{ProfileGuestView, ProfileView};
