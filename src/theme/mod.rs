//! Theming: color tokens and the injectable global stylesheet.

pub mod colors;
pub mod styles;

pub use colors::tone_fill;
pub use styles::GLOBAL_STYLES;
