//! avitolog-ui - display types, stores and pure view components
//!
//! Views here never fetch data. Pages in avitolog-web own the stores, call
//! the API and pass state plus callbacks down.

pub mod components;
pub mod display_types;
pub mod stores;

pub use components::*;
pub use display_types::*;
