//! Site content and the interaction state behind the page chrome and carousel

pub mod carousel;
#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod nav;
pub mod scroll;

pub use carousel::{AUTOPLAY_INTERVAL, Carousel, CarouselError};
pub use content::{PRODUCT_COUNT, PRODUCTS, ProductEntry, TEAM_MEMBERS, TeamMember};
pub use nav::{NavLink, NavTarget, NavVariant};
pub use scroll::{SCROLL_THRESHOLD, ScrollTracker};
