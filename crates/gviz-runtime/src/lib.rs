pub mod config;
pub mod error;
pub mod html;
pub mod page;
pub mod render;

pub use config::{Config, LayoutConfig, SlideshowConfig, resolve_data_dir};
pub use error::{Error, Result};
pub use html::{load_html, parse_html};
pub use page::{Page, RegionReport};
pub use render::{Flowed, TextLayout};
