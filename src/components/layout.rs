//! Preview document wrapper component

use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Utility stylesheet that provides the theme classes.
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// Wraps rendered markdown in a standalone HTML document
///
/// Stands in for the editor's live preview pane: the markup is inserted
/// as trusted HTML inside a dark prose container, matching the blog page.
///
/// # Arguments
///
/// * `title`: Document title text (without suffix)
/// * `body_html`: Markup produced by the markdown renderer
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn preview_document(title: &str, body_html: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Preview" }
                script src=(TAILWIND_CDN) {}
            }
            body class="bg-gray-900 text-gray-300" {
                main class="max-w-4xl mx-auto px-4 py-12" {
                    div class="prose prose-invert max-w-none" {
                        (PreEscaped(body_html))
                    }
                }
            }
        }
    }
}
