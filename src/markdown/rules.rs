//! Ordered substitution rules of the markdown subset.
//!
//! Each rule rewrites one construct of the dialect into HTML. Rules run in
//! the fixed order of [`Rule::PIPELINE`]; later rules see the output of
//! earlier ones, so the order decides the result. Bold runs before italic
//! so `**x**` is not eaten by the single asterisk pattern, and images run
//! before links so the `!` of an image is not left behind as text.
//!
//! Fenced code is verbatim. The code block rule moves its markup into a
//! [`CodeStash`] and leaves a placeholder in the text, which is expanded once
//! the whole pipeline (paragraph splitting included) has run. Inline code is
//! emitted in place and later rules still see its content.

use regex::{Captures, NoExpand, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

use super::theme::{Theme, class_attr, open_tag};

/// Delimits stash placeholders. Private use code point, never produced by
/// any rule.
const MARK: char = '\u{E000}';

/// Prefix of an escaped source character while [`MARK`] is shielded.
const ESCAPE: char = '\u{E001}';

/// Follows [`ESCAPE`] in place of a literal [`MARK`].
const ESCAPED_MARK: char = '\u{E002}';

static HEADING3: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^### (.*)$").expect("Invalid h3 regex"));
static HEADING2: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^## (.*)$").expect("Invalid h2 regex"));
static HEADING1: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^# (.*)$").expect("Invalid h1 regex"));
static CODE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(.*?)```").expect("Invalid code block regex"));
static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("Invalid inline code regex"));
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*].*?)\*\*").expect("Invalid bold regex"));
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*].*?)\*").expect("Invalid italic regex"));
static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").expect("Invalid image regex"));
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("Invalid link regex"));
static BLOCKQUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^> (.*)$").expect("Invalid blockquote regex"));
static UNORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^- (.*)$").expect("Invalid unordered item regex"));
static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[0-9]+\. (.*)$").expect("Invalid ordered item regex"));
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("Invalid paragraph regex"));
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("{MARK}([0-9]+){MARK}")).expect("Invalid placeholder regex")
});

/// One named substitution of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Heading3,
    Heading2,
    Heading1,
    CodeBlock,
    InlineCode,
    Bold,
    Italic,
    Image,
    Link,
    Blockquote,
    UnorderedItem,
    OrderedItem,
}

impl Rule {
    /// Application order. Paragraph splitting follows as the final step.
    pub const PIPELINE: [Rule; 12] = [
        Rule::Heading3,
        Rule::Heading2,
        Rule::Heading1,
        Rule::CodeBlock,
        Rule::InlineCode,
        Rule::Bold,
        Rule::Italic,
        Rule::Image,
        Rule::Link,
        Rule::Blockquote,
        Rule::UnorderedItem,
        Rule::OrderedItem,
    ];

    /// Stable identifier used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Rule::Heading3 => "heading3",
            Rule::Heading2 => "heading2",
            Rule::Heading1 => "heading1",
            Rule::CodeBlock => "code_block",
            Rule::InlineCode => "inline_code",
            Rule::Bold => "bold",
            Rule::Italic => "italic",
            Rule::Image => "image",
            Rule::Link => "link",
            Rule::Blockquote => "blockquote",
            Rule::UnorderedItem => "unordered_item",
            Rule::OrderedItem => "ordered_item",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Rule::Heading3 => &HEADING3,
            Rule::Heading2 => &HEADING2,
            Rule::Heading1 => &HEADING1,
            Rule::CodeBlock => &CODE_BLOCK,
            Rule::InlineCode => &INLINE_CODE,
            Rule::Bold => &BOLD,
            Rule::Italic => &ITALIC,
            Rule::Image => &IMAGE,
            Rule::Link => &LINK,
            Rule::Blockquote => &BLOCKQUOTE,
            Rule::UnorderedItem => &UNORDERED_ITEM,
            Rule::OrderedItem => &ORDERED_ITEM,
        }
    }

    /// Whether the rule's pattern occurs anywhere in `text`.
    pub fn matches(self, text: &str) -> bool {
        self.pattern().is_match(text)
    }

    /// Applies this rule alone and returns finished markup.
    ///
    /// The code block rule expands its output immediately, so the result
    /// never contains stash placeholders.
    pub fn apply(self, text: &str, theme: &Theme) -> String {
        let mut stash = CodeStash::default();
        let shielded = shield_marks(text);
        let applied = self.apply_held(shielded.as_deref().unwrap_or(text), theme, &mut stash);
        let expanded = stash.expand(&applied);
        match shielded {
            Some(_) => unshield_marks(&expanded),
            None => expanded,
        }
    }

    /// Applies this rule, moving verbatim code markup into `stash`.
    pub(crate) fn apply_held(self, text: &str, theme: &Theme, stash: &mut CodeStash) -> String {
        let pattern = self.pattern();
        let output = match self {
            Rule::Heading3 => wrap_first(pattern, text, "h3", theme.h3),
            Rule::Heading2 => wrap_first(pattern, text, "h2", theme.h2),
            Rule::Heading1 => wrap_first(pattern, text, "h1", theme.h1),
            Rule::CodeBlock => pattern.replace_all(text, |caps: &Captures<'_>| {
                stash.hold(format!(
                    "{}<code>{}</code></pre>",
                    open_tag("pre", theme.pre),
                    &caps[1]
                ))
            }),
            Rule::InlineCode => wrap_first(pattern, text, "code", theme.code),
            Rule::Bold => wrap_first(pattern, text, "strong", theme.strong),
            Rule::Italic => wrap_first(pattern, text, "em", theme.em),
            Rule::Image => pattern.replace_all(text, |caps: &Captures<'_>| {
                format!(
                    "<img src=\"{}\" alt=\"{}\"{} />",
                    &caps[2],
                    &caps[1],
                    class_attr(theme.img)
                )
            }),
            Rule::Link => pattern.replace_all(text, |caps: &Captures<'_>| {
                format!(
                    "<a href=\"{}\"{}{}>{}</a>",
                    &caps[2],
                    class_attr(theme.a),
                    theme.link_attributes(),
                    &caps[1]
                )
            }),
            Rule::Blockquote => wrap_first(pattern, text, "blockquote", theme.blockquote),
            Rule::UnorderedItem => pattern.replace_all(text, |caps: &Captures<'_>| {
                format!("{}<li>{}</li></ul>", open_tag("ul", theme.ul), &caps[1])
            }),
            Rule::OrderedItem => pattern.replace_all(text, |caps: &Captures<'_>| {
                format!("{}<li>{}</li></ol>", open_tag("ol", theme.ol), &caps[1])
            }),
        };
        output.into_owned()
    }
}

/// Replaces every match with its first capture group wrapped in `tag`.
fn wrap_first<'t>(
    pattern: &Regex,
    text: &'t str,
    tag: &str,
    class: &str,
) -> Cow<'t, str> {
    let open = open_tag(tag, class);
    pattern.replace_all(text, |caps: &Captures<'_>| format!("{open}{}</{tag}>", &caps[1]))
}

/// Final step: blank lines split paragraphs and single newlines break lines.
///
/// The whole text is wrapped in one paragraph, so empty input still yields
/// an empty `<p></p>`.
pub(crate) fn paragraphs(text: &str, theme: &Theme) -> String {
    let open = open_tag("p", theme.p);
    let boundary = format!("</p>{open}");
    let split = PARAGRAPH_BREAK.replace_all(text, NoExpand(&boundary));
    let broken = split.replace('\n', "<br>");
    format!("{open}{broken}</p>")
}

/// Verbatim code markup held out of the pipeline.
#[derive(Debug, Default)]
pub(crate) struct CodeStash {
    entries: Vec<String>,
}

impl CodeStash {
    /// Stores `markup` and returns the placeholder standing in for it.
    fn hold(&mut self, markup: String) -> String {
        let index = self.entries.len();
        self.entries.push(markup);
        format!("{MARK}{index}{MARK}")
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Replaces placeholders with their held markup.
    ///
    /// Held markup is inserted as is and not scanned again. Placeholders
    /// with an unknown index stay as text.
    pub(crate) fn expand(&self, text: &str) -> String {
        PLACEHOLDER
            .replace_all(text, |caps: &Captures<'_>| {
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| self.entries.get(index))
                    .map_or_else(|| caps[0].to_string(), String::clone)
            })
            .into_owned()
    }
}

/// Escapes literal [`MARK`] characters so only stash placeholders carry one.
///
/// Returns `None` when the text holds no mark. Otherwise [`ESCAPE`] becomes
/// a doubled escape and [`MARK`] becomes [`ESCAPE`] plus [`ESCAPED_MARK`].
/// Only text shielded here may be passed to [`unshield_marks`].
pub(crate) fn shield_marks(text: &str) -> Option<String> {
    if !text.contains(MARK) {
        return None;
    }

    let mut shielded = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            ESCAPE => shielded.extend([ESCAPE, ESCAPE]),
            MARK => shielded.extend([ESCAPE, ESCAPED_MARK]),
            _ => shielded.push(c),
        }
    }
    Some(shielded)
}

/// Restores characters escaped by [`shield_marks`].
pub(crate) fn unshield_marks(text: &str) -> String {
    let mut restored = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != ESCAPE {
            restored.push(c);
            continue;
        }
        match chars.next() {
            Some(ESCAPED_MARK) => restored.push(MARK),
            Some(ESCAPE) | None => restored.push(ESCAPE),
            Some(other) => restored.extend([ESCAPE, other]),
        }
    }
    restored
}
