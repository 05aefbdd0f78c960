mod ad;
mod auth;
mod home;
mod layout;
mod not_found;
mod profile;

pub use ad::Ad;
pub use auth::{Login, Register};
pub use home::Home;
pub use layout::AppLayout;
pub use not_found::NotFound;
pub use profile::Profile;
