//! Application pages module
//!
//! - Home page (single-page landing view)
//! - Not found page, also shown for routes linked but not built yet

mod home;
mod not_found;

pub use home::HomePage;
pub use not_found::NotFoundPage;
