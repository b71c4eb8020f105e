//! Markdown subset rendering and content helpers for a portfolio blog.

pub mod blog;
pub mod chart;
pub mod components;
pub mod config;
mod error;
pub mod markdown;

pub use blog::{BlogCatalog, BlogPost, RELATED_POST_LIMIT};
pub use chart::{DataPoint, LineChart};
pub use config::{Command, Config, ThemeChoice};
pub use error::{Error, Result};
pub use markdown::{MarkdownRenderer, Rule, Theme, render};
