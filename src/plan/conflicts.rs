//! Per-directory collision resolution.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::error::{Error, Result};
use crate::fs::naming::{clean_name, with_suffix, CleanedName, MAX_SUFFIX};

/// One entry of a directory listing, in scan order.
#[derive(Debug, Clone, Copy)]
pub struct Sibling<'a> {
    pub name: &'a str,
    pub is_dir: bool,
}

fn fold(name: &str) -> String {
    name.to_lowercase()
}

/// Compute collision-free cleaned names for the children of one directory.
///
/// Names that are already clean are reserved before anything else, so a
/// clean tree never gets renamed. The remaining siblings claim their cleaned
/// name in scan order; the first claim keeps it and later claims receive the
/// lowest free `_N` suffix. Comparison ignores case.
pub fn resolve_siblings(
    dir: &Path,
    siblings: &[Sibling<'_>],
    placeholder: &str,
) -> Result<Vec<CleanedName>> {
    let mut resolved: Vec<CleanedName> = siblings
        .iter()
        .map(|s| clean_name(s.name, s.is_dir, placeholder))
        .collect();

    let mut taken: HashSet<String> = siblings
        .iter()
        .zip(&resolved)
        .filter(|(sibling, cleaned)| !cleaned.is_changed(sibling.name))
        .map(|(sibling, _)| fold(sibling.name))
        .collect();

    let mut next_suffix: HashMap<String, usize> = HashMap::new();

    for (sibling, cleaned) in siblings.iter().zip(resolved.iter_mut()) {
        if !cleaned.is_changed(sibling.name) {
            continue;
        }

        if taken.insert(fold(&cleaned.name)) {
            continue;
        }

        let base = cleaned.name.clone();
        let counter = next_suffix.entry(fold(&base)).or_insert(1);
        loop {
            if *counter > MAX_SUFFIX {
                return Err(Error::NameCollisionUnresolved(dir.join(&base)));
            }
            let candidate = with_suffix(&base, *counter, sibling.is_dir);
            *counter += 1;
            if taken.insert(fold(&candidate)) {
                tracing::debug!(
                    "Collision in {}: '{}' becomes '{}'",
                    dir.display(),
                    sibling.name,
                    candidate
                );
                cleaned.name = candidate;
                break;
            }
        }
    }

    Ok(resolved)
}
