//! Compiled regex patterns and tag lists used by the crate itself.
//!
//! All patterns are compiled once at first use with `LazyLock`.
//! User-supplied search patterns live in [`crate::search`].

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Elements whose text content is raw text and never matched.
pub const RAW_TEXT_TAGS: &[&str] = &["script", "style", "textarea"];

/// Tag used as the synthetic container around the fragment.
pub const CONTAINER_TAG: &str = "body";

/// Tag used as the parsing context for string replacements.
pub const MARKUP_CONTEXT_TAG: &str = "div";

/// Matches an opening `<html>`, `<head>` or `<body>` tag.
///
/// The tag name must be followed by `>`, `/` or whitespace so that
/// `<header>` and `<bodyguard>` do not count.
pub static DOCUMENT_SCOPE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(?:html|head|body)(?:[\s/>]|$)").expect("DOCUMENT_SCOPE_TAG regex")
});

/// Matches a `/source/flags` pattern literal.
pub static PATTERN_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A/(.*)/([A-Za-z]*)\z").expect("PATTERN_LITERAL regex")
});

/// Matches `<meta charset="...">`.
pub static CHARSET_META: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("CHARSET_META regex")
});

/// Matches `<meta http-equiv="Content-Type" content="...; charset=...">`.
pub static CONTENT_TYPE_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#)
        .expect("CONTENT_TYPE_CHARSET regex")
});
