//! Presentation classes applied to rendered markdown tags.

/// CSS class attributes for every tag the renderer emits.
///
/// An empty class string omits the `class` attribute entirely, so the
/// [`Theme::plain`] preset produces bare tags (`<p></p>`, `<h1>`, ...).
/// The fenced code block's inner `<code>` never carries a class; the `code`
/// field styles inline spans only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub h1: &'static str,
    pub h2: &'static str,
    pub h3: &'static str,
    pub pre: &'static str,
    pub code: &'static str,
    pub strong: &'static str,
    pub em: &'static str,
    pub img: &'static str,
    pub a: &'static str,
    pub blockquote: &'static str,
    pub ul: &'static str,
    pub ol: &'static str,
    pub p: &'static str,
    /// Opens links in a new tab with `rel="noopener noreferrer"`.
    pub external_links: bool,
}

impl Theme {
    /// Blog post page styling.
    pub fn article() -> Self {
        Self {
            h1: "text-3xl font-bold mb-6 text-white",
            h2: "text-2xl font-bold mb-4 text-white",
            h3: "text-xl font-bold mb-3 text-white",
            pre: "bg-gray-800 text-cyan-400 text-sm font-mono p-4 rounded overflow-x-auto mb-4",
            code: "bg-gray-800 px-2 py-1 rounded text-cyan-400 font-mono",
            strong: "text-white",
            em: "text-gray-300",
            img: "max-w-full h-auto rounded-lg my-6",
            a: "text-cyan-400 hover:underline",
            blockquote: "border-l-4 border-cyan-400 pl-4 italic text-gray-300 my-4",
            ul: "list-disc list-inside text-gray-300 mb-4",
            ol: "list-decimal list-inside text-gray-300 mb-4",
            p: "text-gray-300 leading-relaxed mb-4",
            external_links: true,
        }
    }

    /// Editor live preview styling.
    ///
    /// Tighter heading margins than the article view and links stay in the
    /// editor tab.
    pub fn preview() -> Self {
        Self {
            h1: "text-3xl font-bold mb-4",
            h2: "text-2xl font-bold mb-3",
            h3: "text-xl font-bold mb-2",
            pre: "bg-gray-800 text-cyan-400 text-sm font-mono p-4 rounded overflow-x-auto",
            code: "bg-gray-800 px-2 py-1 rounded text-cyan-400",
            strong: "",
            em: "",
            img: "max-w-full h-auto rounded-lg my-4",
            a: "text-cyan-400 hover:underline",
            blockquote: "border-l-4 border-cyan-400 pl-4 italic",
            ul: "ml-4 list-disc list-inside",
            ol: "ml-4 list-decimal list-inside",
            p: "",
            external_links: false,
        }
    }

    /// No classes and no link targets.
    pub fn plain() -> Self {
        Self {
            h1: "",
            h2: "",
            h3: "",
            pre: "",
            code: "",
            strong: "",
            em: "",
            img: "",
            a: "",
            blockquote: "",
            ul: "",
            ol: "",
            p: "",
            external_links: false,
        }
    }

    /// Extra attributes appended to every `<a>` tag.
    pub(crate) fn link_attributes(&self) -> &'static str {
        if self.external_links {
            r#" target="_blank" rel="noopener noreferrer""#
        } else {
            ""
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::article()
    }
}

/// Formats an opening tag, omitting the class attribute when empty.
pub(crate) fn open_tag(tag: &str, class: &str) -> String {
    if class.is_empty() {
        format!("<{tag}>")
    } else {
        format!("<{tag} class=\"{class}\">")
    }
}

/// Formats a class attribute with a leading space, or nothing when empty.
pub(crate) fn class_attr(class: &str) -> String {
    if class.is_empty() {
        String::new()
    } else {
        format!(" class=\"{class}\"")
    }
}
