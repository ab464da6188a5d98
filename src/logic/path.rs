//! Path resolution
//!
//! Paths are absolute and slash-delimited; the root is the single separator.
//! Segments are matched against child names exactly (case-sensitive).

use crate::error::{HierarchyError, Result};
use crate::model::Node;

/// Path separator
pub const SEPARATOR: char = '/';

/// Path of the root container
pub const ROOT: &str = "/";

/// Check whether a path addresses the root
pub fn is_root(path: &str) -> bool {
    segments(path).next().is_none()
}

/// Iterate over the non-empty segments of a path
///
/// Repeated or trailing separators are ignored.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(SEPARATOR).filter(|s| !s.is_empty())
}

/// Canonical form of a path: leading separator, no empty segments
///
/// # Examples
/// ```
/// use arbor::logic::path::normalize;
///
/// assert_eq!(normalize("/A//B/"), "/A/B");
/// assert_eq!(normalize("A/B"), "/A/B");
/// assert_eq!(normalize(""), "/");
/// ```
pub fn normalize(path: &str) -> String {
    let parts: Vec<&str> = segments(path).collect();
    if parts.is_empty() {
        ROOT.to_string()
    } else {
        format!("{}{}", SEPARATOR, parts.join("/"))
    }
}

/// Append a child name to a parent path
///
/// # Examples
/// ```
/// use arbor::logic::path::join;
///
/// assert_eq!(join("/", "Documents"), "/Documents");
/// assert_eq!(join("/Documents", "Notes.txt"), "/Documents/Notes.txt");
/// ```
pub fn join(parent: &str, name: &str) -> String {
    if is_root(parent) {
        format!("{}{}", SEPARATOR, name)
    } else {
        format!("{}{}{}", normalize(parent), SEPARATOR, name)
    }
}

/// Path with its final segment removed
///
/// The root has no parent; callers check `is_root` first. For the root this
/// returns the root itself.
///
/// # Examples
/// ```
/// use arbor::logic::path::parent_path;
///
/// assert_eq!(parent_path("/A/B/C"), "/A/B");
/// assert_eq!(parent_path("/A"), "/");
/// assert_eq!(parent_path("/"), "/");
/// ```
pub fn parent_path(path: &str) -> String {
    let mut parts: Vec<&str> = segments(path).collect();
    parts.pop();
    if parts.is_empty() {
        ROOT.to_string()
    } else {
        format!("{}{}", SEPARATOR, parts.join("/"))
    }
}

/// Final segment of a path (None for the root)
pub fn file_name(path: &str) -> Option<&str> {
    segments(path).last()
}

/// Check whether `path` equals `ancestor` or lies below it
///
/// # Examples
/// ```
/// use arbor::logic::path::is_same_or_descendant;
///
/// assert!(is_same_or_descendant("/A/B", "/A"));
/// assert!(is_same_or_descendant("/A", "/A"));
/// assert!(!is_same_or_descendant("/AB", "/A"));
/// assert!(is_same_or_descendant("/anything", "/"));
/// ```
pub fn is_same_or_descendant(path: &str, ancestor: &str) -> bool {
    let mut own = segments(path);
    segments(ancestor).all(|seg| own.next() == Some(seg))
}

/// Re-root `path` from `old` onto `new`; paths outside `old` are returned as is
///
/// # Examples
/// ```
/// use arbor::logic::path::rebase;
///
/// assert_eq!(rebase("/A/B/C", "/A", "/X"), "/X/B/C");
/// assert_eq!(rebase("/A", "/A", "/D/A"), "/D/A");
/// assert_eq!(rebase("/AB", "/A", "/X"), "/AB");
/// ```
pub fn rebase(path: &str, old: &str, new: &str) -> String {
    if !is_same_or_descendant(path, old) {
        return normalize(path);
    }
    segments(path)
        .skip(segments(old).count())
        .fold(normalize(new), |acc, seg| join(&acc, seg))
}

/// Walk from `root` to the node addressed by `path`.
///
/// The root path resolves to `root` without traversal. A missing segment is
/// `NotFound`; a non-terminal segment naming a leaf is `InvalidTarget`.
pub fn resolve<'a>(root: &'a Node, path: &str) -> Result<&'a Node> {
    let mut current = root;

    for seg in segments(path) {
        if !current.is_container() {
            return Err(HierarchyError::InvalidTarget(format!(
                "cannot descend into '{}'",
                current.path()
            )));
        }
        current = current
            .child(seg)
            .ok_or_else(|| HierarchyError::NotFound(normalize(path)))?;
    }

    Ok(current)
}

/// Mutable variant of [`resolve`]
pub fn resolve_mut<'a>(root: &'a mut Node, path: &str) -> Result<&'a mut Node> {
    let mut current = root;

    for seg in segments(path) {
        let current_path = current.path().to_string();
        let children = match current.children_mut() {
            Some(children) => children,
            None => {
                return Err(HierarchyError::InvalidTarget(format!(
                    "cannot descend into '{}'",
                    current_path
                )))
            }
        };
        current = children
            .iter_mut()
            .find(|c| c.name() == seg)
            .ok_or_else(|| HierarchyError::NotFound(normalize(path)))?;
    }

    Ok(current)
}

/// Resolve a path that must name a container
pub fn resolve_container<'a>(root: &'a Node, path: &str) -> Result<&'a Node> {
    let node = resolve(root, path)?;
    if node.is_container() {
        Ok(node)
    } else {
        Err(HierarchyError::NotAContainer(node.path().to_string()))
    }
}
