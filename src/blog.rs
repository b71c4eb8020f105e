//! Blog post catalog loaded from static JSON.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use crate::error::{Error, Result};
use crate::markdown::MarkdownRenderer;

/// Characters of content counted as one minute of reading.
const CHARS_PER_MINUTE: usize = 1000;

/// Number of related posts shown below a post.
pub const RELATED_POST_LIMIT: usize = 3;

/// Single blog post as stored in `blogs.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BlogPost {
    id: u64,
    title: String,
    #[serde(default)]
    excerpt: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    date: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    image: String,
    #[serde(default)]
    views: u64,
    #[serde(default)]
    published: bool,
}

impl BlogPost {
    /// Post identifier.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Post title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Short summary shown on listing cards.
    pub fn excerpt(&self) -> &str {
        &self.excerpt
    }

    /// Markdown body.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Author display name.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Publication date as stored.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Tags in stored order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Cover image URL, empty when absent.
    pub fn image(&self) -> &str {
        &self.image
    }

    /// View counter.
    pub fn views(&self) -> u64 {
        self.views
    }

    /// Whether the post is visible on the public blog.
    pub fn is_published(&self) -> bool {
        self.published
    }

    /// Estimated reading time in whole minutes, rounded up.
    ///
    /// Empty content reads in zero minutes.
    pub fn read_minutes(&self) -> usize {
        self.content.chars().count().div_ceil(CHARS_PER_MINUTE)
    }

    /// Renders the post body with the given renderer.
    pub fn render_content(&self, renderer: &MarkdownRenderer) -> String {
        renderer.render(&self.content)
    }

    fn shares_tag_with(&self, other: &BlogPost) -> bool {
        self.tags.iter().any(|tag| other.tags.contains(tag))
    }

    fn matches_term(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.excerpt.to_lowercase().contains(needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }
}

/// All posts of the blog, in file order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BlogCatalog {
    blogs: Vec<BlogPost>,
}

impl BlogCatalog {
    /// Creates catalog from posts.
    pub fn new(blogs: Vec<BlogPost>) -> Self {
        Self { blogs }
    }

    /// Parses catalog from `{ "blogs": [...] }` JSON.
    ///
    /// # Errors
    ///
    /// Returns error if JSON is malformed or a post lacks `id` or `title`
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        tracing::debug!(posts = catalog.blogs.len(), "Parsed blog catalog");
        Ok(catalog)
    }

    /// Reads and parses catalog file.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or parsed
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Every post, published or not.
    pub fn posts(&self) -> &[BlogPost] {
        &self.blogs
    }

    /// Published posts in file order.
    pub fn published(&self) -> impl Iterator<Item = &BlogPost> {
        self.blogs.iter().filter(|post| post.published)
    }

    /// Looks up a published post by id.
    ///
    /// Drafts are not returned even when the id matches.
    pub fn find_published(&self, id: u64) -> Option<&BlogPost> {
        self.published().find(|post| post.id == id)
    }

    /// Filters published posts by search term and tag.
    ///
    /// A non-empty term matches case-insensitively against title, excerpt
    /// and tags. A non-empty tag must equal one of the post's tags exactly.
    /// Empty filters match everything.
    ///
    /// # Arguments
    ///
    /// * `term`: Free text search term
    /// * `tag`: Exact tag to require
    pub fn search(&self, term: &str, tag: &str) -> Vec<&BlogPost> {
        let needle = term.to_lowercase();
        self.published()
            .filter(|post| needle.is_empty() || post.matches_term(&needle))
            .filter(|post| tag.is_empty() || post.tags.iter().any(|t| t == tag))
            .collect()
    }

    /// Unique tags across all posts in first-seen order.
    pub fn all_tags(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.blogs
            .iter()
            .flat_map(|post| post.tags.iter())
            .filter(|tag| seen.insert(tag.as_str()))
            .map(String::as_str)
            .collect()
    }

    /// Other published posts sharing at least one tag with `post`.
    ///
    /// # Arguments
    ///
    /// * `post`: Post being displayed
    /// * `limit`: Maximum number of related posts
    pub fn related(&self, post: &BlogPost, limit: usize) -> Vec<&BlogPost> {
        self.published()
            .filter(|other| other.id != post.id && other.shares_tag_with(post))
            .take(limit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r##"{
        "blogs": [
            {
                "id": 1,
                "title": "Rust Ownership",
                "excerpt": "Borrowing explained",
                "content": "# Ownership\n\n**Move** semantics.",
                "author": "Ada",
                "date": "2024-01-10",
                "tags": ["Rust", "Systems"],
                "image": "/img/rust.png",
                "views": 120,
                "published": true
            },
            {
                "id": 2,
                "title": "Draft Notes",
                "excerpt": "Not ready",
                "content": "wip",
                "tags": ["Rust"],
                "published": false
            },
            {
                "id": 3,
                "title": "Async Patterns",
                "excerpt": "Futures and tasks in rust",
                "content": "",
                "tags": ["Async", "Systems"],
                "published": true
            },
            {
                "id": 4,
                "title": "CSS Grid",
                "excerpt": "Layouts",
                "content": "grid",
                "tags": ["Web"],
                "published": true
            }
        ]
    }"##;

    fn catalog() -> BlogCatalog {
        BlogCatalog::from_json(CATALOG).expect("Fixture should parse")
    }

    #[test]
    fn test_from_json_reads_all_posts() {
        // Act
        let catalog = catalog();

        // Assert
        assert_eq!(catalog.posts().len(), 4);
        let first = &catalog.posts()[0];
        assert_eq!(first.title(), "Rust Ownership");
        assert_eq!(first.author(), "Ada");
        assert_eq!(first.views(), 120);
        assert_eq!(first.image(), "/img/rust.png");
        assert_eq!(first.date(), "2024-01-10");
    }

    #[test]
    fn test_from_json_defaults_missing_fields() {
        // Arrange
        let json = r#"{"blogs":[{"id":9,"title":"Bare"}]}"#;

        // Act
        let catalog = BlogCatalog::from_json(json).expect("Should parse");

        // Assert
        let post = &catalog.posts()[0];
        assert!(!post.is_published(), "Missing flag should mean draft");
        assert!(post.tags().is_empty());
        assert_eq!(post.views(), 0);
    }

    #[test]
    fn test_from_json_invalid() {
        let result = BlogCatalog::from_json("{\"blogs\": [");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = BlogCatalog::load("/nonexistent/blogs.json");
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_published_skips_drafts() {
        // Act
        let ids: Vec<u64> = catalog().published().map(BlogPost::id).collect();

        // Assert
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_find_published() {
        let catalog = catalog();
        assert_eq!(catalog.find_published(3).map(BlogPost::id), Some(3));
        assert!(catalog.find_published(2).is_none(), "Draft should be hidden");
        assert!(catalog.find_published(99).is_none());
    }

    #[test]
    fn test_search_term_case_insensitive() {
        // Arrange
        let catalog = catalog();

        // Act
        let hits = catalog.search("RUST", "");

        // Assert: title of 1, excerpt of 3, never the draft
        let ids: Vec<u64> = hits.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_search_matches_tags() {
        let catalog = catalog();
        let ids: Vec<u64> = catalog.search("syst", "").iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_search_tag_exact() {
        // Arrange
        let catalog = catalog();

        // Act
        let exact = catalog.search("", "Systems");
        let partial = catalog.search("", "System");

        // Assert
        assert_eq!(exact.len(), 2);
        assert!(partial.is_empty(), "Tag filter should not match substrings");
    }

    #[test]
    fn test_search_combined_filters() {
        let catalog = catalog();
        let ids: Vec<u64> = catalog
            .search("async", "Systems")
            .iter()
            .map(|p| p.id())
            .collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_search_empty_returns_published() {
        assert_eq!(catalog().search("", "").len(), 3);
    }

    #[test]
    fn test_all_tags_unique_in_order() {
        // Act
        let catalog = catalog();
        let tags = catalog.all_tags();

        // Assert: drafts contribute tags too
        assert_eq!(tags, vec!["Rust", "Systems", "Async", "Web"]);
    }

    #[test]
    fn test_related_posts() {
        // Arrange
        let catalog = catalog();
        let post = catalog.find_published(1).expect("Post 1 exists");

        // Act
        let related = catalog.related(post, RELATED_POST_LIMIT);

        // Assert: shares Systems with 3; 2 is a draft; 4 shares nothing
        let ids: Vec<u64> = related.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_related_respects_limit() {
        // Arrange
        let posts = (1..=6)
            .map(|id| BlogPost {
                id,
                title: format!("Post {id}"),
                excerpt: String::new(),
                content: String::new(),
                author: String::new(),
                date: String::new(),
                tags: vec!["shared".to_string()],
                image: String::new(),
                views: 0,
                published: true,
            })
            .collect();
        let catalog = BlogCatalog::new(posts);
        let post = &catalog.posts()[0];

        // Act
        let related = catalog.related(post, 3);

        // Assert
        let ids: Vec<u64> = related.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn test_read_minutes() {
        // Arrange
        let catalog = catalog();
        let mut long = catalog.posts()[0].clone();
        long.content = "x".repeat(1001);

        // Assert
        assert_eq!(catalog.posts()[0].read_minutes(), 1);
        assert_eq!(catalog.posts()[2].read_minutes(), 0);
        assert_eq!(long.read_minutes(), 2);
    }

    #[test]
    fn test_read_minutes_counts_chars_not_bytes() {
        let mut post = catalog().posts()[0].clone();
        post.content = "é".repeat(1000);
        assert_eq!(post.read_minutes(), 1);
    }

    #[test]
    fn test_render_content() {
        // Arrange
        let catalog = catalog();
        let renderer = MarkdownRenderer::new();

        // Act
        let html = catalog.posts()[0].render_content(&renderer);

        // Assert
        assert!(html.contains(">Ownership</h1>"), "Got: {}", html);
        assert!(html.contains(">Move</strong>"), "Got: {}", html);
    }
}
