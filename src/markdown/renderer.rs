//! Markdown subset rendering.

use std::borrow::Cow;
use std::path::Path;

use super::Theme;
use super::rules::{CodeStash, Rule, paragraphs, shield_marks, unshield_marks};
use crate::error::{Error, Result};

/// Renders the markdown subset to HTML with a fixed rule pipeline.
///
/// Rendering is total: any input produces markup, and syntax that does not
/// match a rule is left in place as literal text. Output is meant to be
/// inserted into a page as trusted HTML. Source text is not escaped unless
/// [`MarkdownRenderer::escape_html`] is enabled.
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    theme: Theme,
    escape_html: bool,
}

impl MarkdownRenderer {
    /// Creates renderer with the blog article theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates renderer with the given theme.
    ///
    /// # Arguments
    ///
    /// * `theme`: Class attributes for emitted tags
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            escape_html: false,
        }
    }

    /// Enables or disables escaping of the source text before rendering.
    ///
    /// When enabled, `&`, `<` and `"` become entities before any rule runs,
    /// so raw tags in the source cannot reach the output. `>` is kept so
    /// blockquote markers still match; on its own it cannot open a tag.
    pub fn escape_html(mut self, enabled: bool) -> Self {
        self.escape_html = enabled;
        self
    }

    /// Returns the configured theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Renders markdown content to HTML string.
    ///
    /// Line endings are normalised to `\n`, the rules of [`Rule::PIPELINE`]
    /// run in order, blank lines split paragraphs, and held code block markup
    /// is put back last so nothing rewrites it.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown content to render
    ///
    /// # Returns
    ///
    /// Rendered HTML, wrapped in at least one paragraph
    pub fn render(&self, content: &str) -> String {
        let mut source = normalize_newlines(content);
        if self.escape_html {
            source = Cow::Owned(html_escape(&source));
        }

        let shielded = shield_marks(&source);
        let marks_shielded = shielded.is_some();
        let mut text = shielded.unwrap_or_else(|| source.into_owned());
        let mut stash = CodeStash::default();
        for rule in Rule::PIPELINE {
            if !rule.matches(&text) {
                continue;
            }
            text = rule.apply_held(&text, &self.theme, &mut stash);
            tracing::trace!(rule = rule.name(), len = text.len(), "Applied markdown rule");
        }

        let html = paragraphs(&text, &self.theme);
        tracing::debug!(
            input = content.len(),
            output = html.len(),
            code_blocks = stash.len(),
            "Rendered markdown"
        );
        let html = stash.expand(&html);
        if marks_shielded {
            unshield_marks(&html)
        } else {
            html
        }
    }

    /// Renders markdown file at given path.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read
    pub fn render_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.render(&content))
    }
}

/// Converts CRLF and lone CR line endings to LF.
fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Escapes the characters that can start markup or break out of an
/// attribute value.
fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('"', "&quot;")
}
