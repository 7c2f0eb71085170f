//! Common reusable UI components

pub mod modal;

pub use modal::DetailModal;
