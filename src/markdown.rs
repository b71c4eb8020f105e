//! Markdown subset rendering.
//!
//! This module converts a small markdown dialect (headings, emphasis, code,
//! links, images, quotes, list items, paragraphs) into HTML with an ordered
//! list of substitution rules. Output styling comes from a [`Theme`], one
//! per call site: the blog article view and the editor preview.

mod renderer;
mod rules;
mod theme;

pub use renderer::MarkdownRenderer;
pub use rules::Rule;
pub use theme::Theme;

/// Renders markdown with the default article theme.
pub fn render(source: &str) -> String {
    MarkdownRenderer::new().render(source)
}
