//! # replace-in-html
//!
//! Replace text inside an HTML fragment without touching its markup.
//!
//! The fragment is parsed, every text node is searched on its own, and each
//! occurrence is swapped for replacement content: plain text, markup, or
//! nodes built by a callback. Attribute values and the contents of
//! `<script>`, `<style>` and `<textarea>` are never matched.
//!
//! ## Quick Start
//!
//! ```rust
//! use replace_in_html::replace_in_html;
//!
//! let html = replace_in_html("<p>hi :meow:!</p>", ":meow:", "<b>cat</b>")?;
//! assert_eq!(html, "<p>hi <b>cat</b>!</p>");
//! # Ok::<(), replace_in_html::Error>(())
//! ```
//!
//! ## Patterns and replacers
//!
//! - A string search is matched literally, every occurrence.
//! - A [`Pattern`] follows JavaScript `RegExp` conventions: without the
//!   global flag only the first occurrence of each text node is replaced;
//!   sticky patterns must match at the start of a text node.
//! - A string replacer is parsed as markup for every match.
//! - [`Replacer::computed`] maps each matched string to a [`Replacement`].
//!
//! Matches never span text nodes: `me<b>ow</b>` does not contain `meow`.

mod error;
mod options;
mod patterns;

/// DOM adapter: fragment container, text splitting, text cursor.
pub mod dom;

/// Byte input decoding.
pub mod encoding;

/// Replacer strategies and replacement coercion.
pub mod replacer;

/// Search patterns.
pub mod search;

/// The text splice engine.
pub mod splice;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;
pub use replacer::{NodeFactory, Replacement, Replacer};
pub use search::{Pattern, Search};

use dom::Fragment;
use patterns::DOCUMENT_SCOPE_TAG;

/// Replaces pattern occurrences in the text of an HTML fragment.
///
/// # Arguments
///
/// * `html` - An HTML fragment; it must not contain `<html>`, `<head>` or `<body>`
/// * `search` - A literal string or a [`Pattern`]
/// * `replacer` - Markup used for every match, or a [`Replacer::computed`] function
///
/// # Returns
///
/// The serialized fragment. Returns an `Error` if the arguments are invalid
/// or a replacement cannot be inserted.
///
/// # Example
///
/// ```rust
/// use replace_in_html::{replace_in_html, Pattern, Replacer};
///
/// let mut n = 0;
/// let html = replace_in_html(
///     "meow, meow <span>meow</span>",
///     Pattern::new("meow")?.global(),
///     Replacer::computed(move |_, _| {
///         n += 1;
///         n.to_string().into()
///     }),
/// )?;
/// assert_eq!(html, "1, 2 <span>3</span>");
/// # Ok::<(), replace_in_html::Error>(())
/// ```
pub fn replace_in_html<'r>(
    html: &str,
    search: impl Into<Search>,
    replacer: impl Into<Replacer<'r>>,
) -> Result<String> {
    replace_in_html_with_options(html, search, replacer, &Options::default())
}

/// Replaces pattern occurrences with custom options.
///
/// # Example
///
/// ```rust
/// use replace_in_html::{replace_in_html_with_options, Options};
///
/// let options = Options {
///     skip_tags: vec!["code".to_string()],
/// };
/// let html = replace_in_html_with_options("<code>meow</code> meow", "meow", "cat", &options)?;
/// assert_eq!(html, "<code>meow</code> cat");
/// # Ok::<(), replace_in_html::Error>(())
/// ```
pub fn replace_in_html_with_options<'r>(
    html: &str,
    search: impl Into<Search>,
    replacer: impl Into<Replacer<'r>>,
    options: &Options,
) -> Result<String> {
    if DOCUMENT_SCOPE_TAG.is_match(html) {
        return Err(Error::DocumentScope);
    }

    let pattern = search.into().into_pattern()?;
    let mut replacer = replacer.into();

    let fragment = Fragment::parse(html);
    splice::process(&fragment, &pattern, &mut replacer, options)?;
    Ok(fragment.inner_html())
}

/// Replaces pattern occurrences in an HTML fragment given as raw bytes.
///
/// The encoding is taken from a byte order mark or a `<meta charset>`
/// declaration, defaulting to UTF-8. Invalid sequences become U+FFFD.
///
/// # Example
///
/// ```rust
/// use replace_in_html::replace_in_html_bytes;
///
/// let html = replace_in_html_bytes(b"<meta charset=\"ISO-8859-1\">Caf\xE9", "Caf\u{e9}", "Tea")?;
/// assert_eq!(html, "<meta charset=\"ISO-8859-1\">Tea");
/// # Ok::<(), replace_in_html::Error>(())
/// ```
pub fn replace_in_html_bytes<'r>(
    html: &[u8],
    search: impl Into<Search>,
    replacer: impl Into<Replacer<'r>>,
) -> Result<String> {
    replace_in_html_bytes_with_options(html, search, replacer, &Options::default())
}

/// Replaces pattern occurrences in raw bytes with custom options.
pub fn replace_in_html_bytes_with_options<'r>(
    html: &[u8],
    search: impl Into<Search>,
    replacer: impl Into<Replacer<'r>>,
    options: &Options,
) -> Result<String> {
    let html = encoding::decode(html);
    replace_in_html_with_options(&html, search, replacer, options)
}
