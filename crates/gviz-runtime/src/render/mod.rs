pub mod layout;
pub mod style;

pub use layout::{Flowed, TextLayout};
pub use style::Display;
