//! `href`/`src` attribute rewriting inside HTML text.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::links::resolve::rewrite_link;
use crate::plan::FilenameMapping;

/// `href="..."`, `src='...'` and friends. Group 1 or 2 holds the value.
static LINK_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(?:href|src)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap()
});

/// Outcome of rewriting one HTML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlRewrite {
    pub content: String,
    /// Number of attribute values that changed.
    pub links: usize,
}

impl HtmlRewrite {
    pub fn is_changed(&self) -> bool {
        self.links > 0
    }
}

/// Rewrite every in-tree link of a page located in `base_dir`.
///
/// Only attribute values are replaced; all other bytes are copied through.
pub fn rewrite_html(content: &str, base_dir: &Path, mapping: &FilenameMapping) -> HtmlRewrite {
    let mut output = String::with_capacity(content.len());
    let mut last = 0;
    let mut links = 0;

    for caps in LINK_ATTRIBUTE.captures_iter(content) {
        let Some(value) = caps.get(1).or_else(|| caps.get(2)) else {
            continue;
        };

        if let Some(rewritten) = rewrite_link(value.as_str(), base_dir, mapping) {
            tracing::debug!("Link '{}' -> '{}'", value.as_str(), rewritten);
            output.push_str(&content[last..value.start()]);
            output.push_str(&rewritten);
            last = value.end();
            links += 1;
        }
    }

    output.push_str(&content[last..]);
    HtmlRewrite {
        content: output,
        links,
    }
}
