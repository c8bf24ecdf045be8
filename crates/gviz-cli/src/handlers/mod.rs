mod context;

pub mod config;
pub mod regions;
pub mod render;
pub mod show;

pub use context::HandlerContext;
