//! Cursor movement logic
//!
//! Pure functions for moving the list cursor with wrapping behavior.

/// Calculate the next cursor index with wrapping
///
/// If at the end, wraps around to the beginning. If nothing is under the
/// cursor, lands on the first item.
///
/// # Examples
/// ```
/// use arbor::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(1), 3), Some(2));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i >= list_len - 1 => 0,
        Some(i) => i + 1,
        None => 0,
    })
}

/// Calculate the previous cursor index with wrapping
///
/// # Examples
/// ```
/// use arbor::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(None, 0), None);
/// assert_eq!(prev_selection(Some(1), 3), Some(0));
/// assert_eq!(prev_selection(Some(0), 3), Some(2));
/// assert_eq!(prev_selection(None, 3), Some(2));
/// ```
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => list_len - 1,
        Some(i) => i - 1,
    })
}

/// Keep a cursor inside a list that may have shrunk
pub fn clamp_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }
    Some(current.unwrap_or(0).min(list_len - 1))
}

/// Move the cursor by a page without wrapping
pub fn page_selection(current: Option<usize>, list_len: usize, delta: isize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }
    let from = current.unwrap_or(0) as isize;
    let to = (from + delta).clamp(0, list_len as isize - 1);
    Some(to as usize)
}
