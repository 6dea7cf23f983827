//! Resolution of a single link value against the filename mapping.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use url::Url;

use crate::plan::FilenameMapping;

/// Whether a link value points outside the export tree.
///
/// Fragments, root-absolute paths, protocol-relative URLs and anything with a
/// scheme (`https:`, `mailto:`, `data:`) are external.
pub fn is_external(value: &str) -> bool {
    value.is_empty()
        || value.starts_with('#')
        || value.starts_with('/')
        || Url::parse(value).is_ok()
}

/// Split a link into its path and the `?query`/`#fragment` tail.
fn split_tail(value: &str) -> (&str, &str) {
    match value.find(|c: char| c == '?' || c == '#') {
        Some(pos) => value.split_at(pos),
        None => (value, ""),
    }
}

fn decode_segment(raw: &str) -> Option<Cow<'_, str>> {
    let unescaped = if raw.contains("&amp;") {
        Cow::Owned(raw.replace("&amp;", "&"))
    } else {
        Cow::Borrowed(raw)
    };
    match urlencoding::decode(&unescaped) {
        Ok(decoded) => Some(Cow::Owned(decoded.into_owned())),
        Err(_) => None,
    }
}

/// Rewrite a relative link found in a page under `base_dir`.
///
/// `base_dir` is the page's directory relative to the export root, in
/// original (pre-rename) names. Returns `None` when the value is external,
/// points to something not in the tree, or needs no change.
pub fn rewrite_link(value: &str, base_dir: &Path, mapping: &FilenameMapping) -> Option<String> {
    if is_external(value) {
        return None;
    }

    let (path, tail) = split_tail(value);
    if path.is_empty() {
        return None;
    }

    let mut current: PathBuf = base_dir.to_path_buf();
    let mut segments: Vec<Cow<'_, str>> = Vec::new();
    let mut changed = false;

    for raw in path.split('/') {
        match raw {
            "" | "." => segments.push(Cow::Borrowed(raw)),
            ".." => {
                if !current.pop() {
                    return None;
                }
                segments.push(Cow::Borrowed(raw));
            }
            _ => {
                let decoded = decode_segment(raw)?;
                current.push(decoded.as_ref());

                let entry = mapping.get(&current)?;
                let cleaned = entry.cleaned.file_name()?.to_str()?;
                if cleaned == decoded {
                    segments.push(Cow::Borrowed(raw));
                } else {
                    segments.push(urlencoding::encode(cleaned));
                    changed = true;
                }
            }
        }
    }

    if !changed {
        return None;
    }

    let mut rewritten = segments.join("/");
    rewritten.push_str(tail);
    Some(rewritten)
}
