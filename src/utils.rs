/// Utility functions used by the binary

use std::path::PathBuf;

/// Get platform-specific debug log path
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("arbor-debug.log");
    path
}

/// Shorten a path from the left so it fits `max_width` columns
///
/// Keeps the final segments, which are the most specific part.
pub fn truncate_path_left(path: &str, max_width: usize) -> String {
    let count = path.chars().count();
    if count <= max_width {
        return path.to_string();
    }
    if max_width <= 1 {
        return "…".chars().take(max_width).collect();
    }
    let keep = max_width - 1;
    let tail: String = path.chars().skip(count - keep).collect();
    format!("…{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_log_path_in_temp_dir() {
        let path = get_debug_log_path();
        assert!(path.starts_with(std::env::temp_dir()));
        assert!(path.ends_with("arbor-debug.log"));
    }

    #[test]
    fn test_truncate_path_left() {
        assert_eq!(truncate_path_left("/short", 10), "/short");
        assert_eq!(truncate_path_left("/Documents/Reports", 8), "…Reports");
        assert_eq!(truncate_path_left("/abc", 0), "");
    }
}
