pub mod carousel;
pub mod common;
pub mod layout;
pub mod pages;
pub mod team_member;

pub use carousel::{ProductCarousel, use_autoplay};
pub use layout::{Layout, scroll_to_section};
pub use team_member::TeamMemberCard;
