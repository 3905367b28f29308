//! Configuration options for replacement.
//!
//! The `Options` struct controls which parts of the fragment are left alone.

use crate::patterns::RAW_TEXT_TAGS;

/// Configuration options for replacement.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use replace_in_html::Options;
///
/// // Also leave <code> blocks untouched
/// let mut skip_tags = Options::default().skip_tags;
/// skip_tags.push("code".to_string());
///
/// let options = Options { skip_tags };
/// assert!(options.skips("CODE"));
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Tags whose direct text children are never matched.
    ///
    /// Compared ASCII-case-insensitively against the parent element of each
    /// text node.
    ///
    /// Default: `["script", "style", "textarea"]`
    pub skip_tags: Vec<String>,
}

impl Options {
    /// Whether text directly inside `tag` must be left alone.
    #[must_use]
    pub fn skips(&self, tag: &str) -> bool {
        self.skip_tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            skip_tags: RAW_TEXT_TAGS.iter().map(|t| (*t).to_string()).collect(),
        }
    }
}
