//! Name cleaning and manipulation.

use std::ops::Range;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use uuid::Uuid;

use crate::error::{Error, Result};

/// A Notion identifier at the start of a string, plain or hyphenated.
static UUID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}|[0-9a-fA-F]{32})",
    )
    .unwrap()
});

/// Upper bound for `_N` suffix searches.
pub const MAX_SUFFIX: usize = 10_000;

/// Result of cleaning a single path component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedName {
    /// The cleaned file or directory name.
    pub name: String,
    /// The first identifier stripped from the name, if any.
    pub uuid: Option<Uuid>,
}

impl CleanedName {
    /// Whether cleaning changed anything.
    pub fn is_changed(&self, original: &str) -> bool {
        self.name != original
    }
}

/// Identifier starting exactly at `i`, as `(end, uuid)`.
///
/// The match must not run on into a letter or digit.
fn uuid_at(stem: &str, i: usize) -> Option<(usize, Uuid)> {
    let found = UUID_PATTERN.find(&stem[i..])?;
    let end = i + found.end();
    if stem.as_bytes().get(end).is_some_and(|b| b.is_ascii_alphanumeric()) {
        return None;
    }
    let uuid = Uuid::parse_str(found.as_str()).ok()?;
    Some((end, uuid))
}

/// Byte ranges of every identifier in `stem`, each widened to swallow one
/// leading separator (space, underscore or hyphen).
///
/// Each hex run is tried at its start, then with the identifier aligned to
/// the end of the run, so `Cafe<id>` and `2024<id>` lose the identifier too.
fn uuid_spans(stem: &str) -> Vec<(Range<usize>, Uuid)> {
    let bytes = stem.as_bytes();
    let mut spans = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_hexdigit() {
            i += 1;
            continue;
        }

        let run_end = bytes[i..]
            .iter()
            .position(|b| !b.is_ascii_hexdigit())
            .map_or(bytes.len(), |n| i + n);

        // Plain form ends with the run; hyphenated form's first group does.
        let candidates = [Some(i), run_end.checked_sub(32), run_end.checked_sub(8)];
        let found = candidates
            .into_iter()
            .flatten()
            .filter(|&start| start >= i)
            .find_map(|start| uuid_at(stem, start).map(|(end, uuid)| (start, end, uuid)));

        let Some((start, end, uuid)) = found else {
            i = run_end;
            continue;
        };

        let start = if start == i && i > 0 && matches!(bytes[i - 1], b' ' | b'_' | b'-') {
            i - 1
        } else {
            start
        };
        spans.push((start..end, uuid));
        i = end;
    }

    spans
}

/// Check whether a name still carries a Notion identifier.
pub fn has_uuid(name: &str) -> bool {
    !uuid_spans(name).is_empty()
}

/// Split a file name into stem and extension.
///
/// The extension is the text after the last dot when it is a non-empty run of
/// word characters and the dot is not the first character.
pub fn split_extension(name: &str) -> (&str, Option<&str>) {
    match name.rfind('.') {
        Some(dot) if dot > 0 => {
            let ext = &name[dot + 1..];
            if !ext.is_empty() && ext.chars().all(|c| c.is_alphanumeric() || c == '_') {
                (&name[..dot], Some(ext))
            } else {
                (name, None)
            }
        }
        _ => (name, None),
    }
}

/// Strip Notion identifiers from a file or directory name.
///
/// Files keep their extension; directory names are treated as a bare stem.
/// If nothing readable remains, `placeholder` is used as the stem.
pub fn clean_name(name: &str, is_dir: bool, placeholder: &str) -> CleanedName {
    let (stem, ext) = if is_dir {
        (name, None)
    } else {
        split_extension(name)
    };

    let spans = uuid_spans(stem);
    if spans.is_empty() {
        return CleanedName {
            name: name.to_string(),
            uuid: None,
        };
    }

    let mut cleaned = String::with_capacity(stem.len());
    let mut last = 0;
    for (range, _) in &spans {
        cleaned.push_str(&stem[last..range.start]);
        last = range.end;
    }
    cleaned.push_str(&stem[last..]);

    let cleaned = cleaned.trim();
    let stem = if cleaned.is_empty() { placeholder } else { cleaned };

    let name = match ext {
        Some(ext) => format!("{}.{}", stem, ext),
        None => stem.to_string(),
    };

    CleanedName {
        name,
        uuid: spans.first().map(|(_, uuid)| *uuid),
    }
}

/// Insert a `_N` suffix before the extension (files) or at the end (directories).
///
/// `"Plan.html"` becomes `"Plan_1.html"`, directory `"Plan"` becomes `"Plan_1"`.
pub fn with_suffix(name: &str, n: usize, is_dir: bool) -> String {
    if is_dir {
        return format!("{}_{}", name, n);
    }
    match split_extension(name) {
        (stem, Some(ext)) => format!("{}_{}.{}", stem, n, ext),
        (stem, None) => format!("{}_{}", stem, n),
    }
}

/// Validate and sanitize a filename by removing or replacing invalid characters.
///
/// Returns an error if the filename contains path traversal patterns.
pub fn sanitize_filename(name: &str) -> Result<String> {
    if name.contains("..") {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidFilename(format!(
            "Path separators not allowed in filename: '{}'",
            name
        )));
    }

    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed in filename: '{}'",
            name
        )));
    }

    let sanitized: String = name
        .chars()
        .map(|c| match c {
            ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Filename cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}

/// Sanitize a path component with less strict validation.
///
/// Used for the workspace name, which comes from page content: separators are
/// replaced rather than rejected, so dots inside the name are harmless.
/// Trailing dots are dropped, which also rules out `.` and `..`.
pub fn sanitize_path_component(name: &str) -> Result<String> {
    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed: '{}'",
            name
        )));
    }

    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let sanitized = sanitized.trim().trim_end_matches('.').to_string();
    if sanitized.is_empty() {
        return Err(Error::InvalidFilename(
            "Path component cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}

/// Find a free path next to `path` by appending `_1`, `_2`, ... if it exists.
pub fn make_unique_path(path: &Path, is_dir: bool) -> Result<PathBuf> {
    if path.symlink_metadata().is_err() {
        return Ok(path.to_path_buf());
    }

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::InvalidFilename(path.display().to_string()))?;
    let parent = path.parent().unwrap_or(Path::new("."));

    for counter in 1..=MAX_SUFFIX {
        let candidate = parent.join(with_suffix(name, counter, is_dir));
        if candidate.symlink_metadata().is_err() {
            return Ok(candidate);
        }
    }

    Err(Error::NameCollisionUnresolved(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLACEHOLDER: &str = "untitled";

    #[test]
    fn test_clean_name_plain_uuid() {
        let cleaned = clean_name(
            "Project Plan 0123456789abcdef0123456789abcdef.html",
            false,
            PLACEHOLDER,
        );
        assert_eq!(cleaned.name, "Project Plan.html");
        assert_eq!(
            cleaned.uuid.unwrap().simple().to_string(),
            "0123456789abcdef0123456789abcdef"
        );
    }

    #[test]
    fn test_clean_name_hyphenated_uuid() {
        let cleaned = clean_name(
            "Project Plan abc12345-6789-4abc-8def-0123456789ab.html",
            false,
            PLACEHOLDER,
        );
        assert_eq!(cleaned.name, "Project Plan.html");
        assert!(cleaned.uuid.is_some());
    }

    #[test]
    fn test_clean_name_separators() {
        let id = "0123456789abcdef0123456789ABCDEF";
        assert_eq!(clean_name(&format!("Notes_{}.md", id), false, PLACEHOLDER).name, "Notes.md");
        assert_eq!(clean_name(&format!("Notes-{}.md", id), false, PLACEHOLDER).name, "Notes.md");
        assert_eq!(clean_name(&format!("Notes{}.md", id), false, PLACEHOLDER).name, "Notes.md");
    }

    #[test]
    fn test_clean_name_directory_keeps_dots() {
        let cleaned = clean_name(
            "Release v1.2 0123456789abcdef0123456789abcdef",
            true,
            PLACEHOLDER,
        );
        assert_eq!(cleaned.name, "Release v1.2");
    }

    #[test]
    fn test_clean_name_uuid_in_middle() {
        let cleaned = clean_name(
            "Meeting 0123456789abcdef0123456789abcdef notes.html",
            false,
            PLACEHOLDER,
        );
        assert_eq!(cleaned.name, "Meeting notes.html");
    }

    #[test]
    fn test_clean_name_empty_stem_uses_placeholder() {
        let cleaned = clean_name("0123456789abcdef0123456789abcdef.png", false, PLACEHOLDER);
        assert_eq!(cleaned.name, "untitled.png");

        let cleaned = clean_name("0123456789abcdef0123456789abcdef", true, PLACEHOLDER);
        assert_eq!(cleaned.name, "untitled");
    }

    #[test]
    fn test_clean_name_identifier_glued_to_hex_word() {
        let id = "0123456789abcdef0123456789abcdef";
        assert_eq!(clean_name(&format!("Cafe{}.html", id), false, PLACEHOLDER).name, "Cafe.html");
        assert_eq!(clean_name(&format!("2024{}.html", id), false, PLACEHOLDER).name, "2024.html");
        assert_eq!(
            clean_name("Bead abc12345-6789-4abc-8def-0123456789ab", true, PLACEHOLDER).name,
            "Bead"
        );
        assert_eq!(
            clean_name("Beadabc12345-6789-4abc-8def-0123456789ab", true, PLACEHOLDER).name,
            "Bead"
        );

        // 40-digit run: the trailing 32 digits are the identifier
        let cleaned = clean_name("commit 0123456789abcdef0123456789abcdef01234567.txt", false, PLACEHOLDER);
        assert_eq!(cleaned.name, "commit 01234567.txt");
    }

    #[test]
    fn test_clean_name_leaves_other_hex_alone() {
        // identifier running on into a word
        let name = "commit 0123456789abcdef0123456789abcdef0123456g.txt";
        assert_eq!(clean_name(name, false, PLACEHOLDER).name, name);

        // 31 digits
        let name = "short 0123456789abcdef0123456789abcde.txt";
        assert_eq!(clean_name(name, false, PLACEHOLDER).name, name);

        let name = "Plain name.html";
        let cleaned = clean_name(name, false, PLACEHOLDER);
        assert_eq!(cleaned.name, name);
        assert!(cleaned.uuid.is_none());
        assert!(!cleaned.is_changed(name));
    }

    #[test]
    fn test_clean_name_is_idempotent() {
        let once = clean_name(
            "Roadmap 0123456789abcdef0123456789abcdef.html",
            false,
            PLACEHOLDER,
        );
        let twice = clean_name(&once.name, false, PLACEHOLDER);
        assert_eq!(once.name, twice.name);
        assert!(!has_uuid(&twice.name));
    }

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("a.html"), ("a", Some("html")));
        assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", Some("gz")));
        assert_eq!(split_extension(".hidden"), (".hidden", None));
        assert_eq!(split_extension("no_extension"), ("no_extension", None));
        assert_eq!(split_extension("trailing."), ("trailing.", None));
    }

    #[test]
    fn test_with_suffix() {
        assert_eq!(with_suffix("Plan.html", 1, false), "Plan_1.html");
        assert_eq!(with_suffix("Plan", 2, false), "Plan_2");
        assert_eq!(with_suffix("Release v1.2", 1, true), "Release v1.2_1");
    }

    #[test]
    fn test_sanitize_filename_valid() {
        assert_eq!(sanitize_filename("normal.txt").unwrap(), "normal.txt");
        assert_eq!(sanitize_filename("file:name.txt").unwrap(), "file_name.txt");
    }

    #[test]
    fn test_sanitize_filename_rejects() {
        assert!(sanitize_filename("../etc/passwd").is_err());
        assert!(sanitize_filename("path/to/file.txt").is_err());
        assert!(sanitize_filename("file\0name.txt").is_err());
        assert!(sanitize_filename("   ").is_err());
    }

    #[test]
    fn test_sanitize_path_component() {
        assert_eq!(
            sanitize_path_component("R&D / Design: 2024").unwrap(),
            "R&D _ Design_ 2024"
        );
        assert_eq!(sanitize_path_component("../evil").unwrap(), ".._evil");
        assert_eq!(sanitize_path_component("Q1..Q2").unwrap(), "Q1..Q2");
        assert_eq!(sanitize_path_component("Ideas...").unwrap(), "Ideas");
        assert!(sanitize_path_component("..").is_err());
        assert!(sanitize_path_component(".").is_err());
        assert!(sanitize_path_component("  ").is_err());
    }

    #[test]
    fn test_make_unique_path() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("Wiki 2024-03-01");
        assert_eq!(make_unique_path(&target, true).unwrap(), target);

        std::fs::create_dir(&target).unwrap();
        std::fs::create_dir(dir.path().join("Wiki 2024-03-01_1")).unwrap();
        assert_eq!(
            make_unique_path(&target, true).unwrap(),
            dir.path().join("Wiki 2024-03-01_2")
        );
    }
}
