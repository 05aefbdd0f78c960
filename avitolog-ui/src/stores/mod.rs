//! Store types for page state
//!
//! Each page owns one of these via `use_store` and hands `ReadStore` lenses
//! to the pure views. Each store derives `Store` for fine-grained reactivity.

pub mod ad_detail;
pub mod auth_form;
pub mod home;
pub mod profile;

pub use ad_detail::*;
pub use auth_form::*;
pub use home::*;
pub use profile::*;
