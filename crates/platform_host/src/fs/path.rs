//! Virtual-path helpers shared by the mock filesystem and its consumers.

/// Normalizes a virtual filesystem path.
///
/// Trims whitespace, collapses repeated separators, resolves `.`/`..`, ensures a leading slash,
/// and returns `/` for empty or fully-collapsed paths.
pub fn normalize_virtual_path(path: &str) -> String {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return "/".to_string();
    }

    let mut out = String::new();
    for segment in trimmed.split('/') {
        if segment.is_empty() || segment == "." {
            continue;
        }
        if segment == ".." {
            if let Some(idx) = out.rfind('/') {
                out.truncate(idx);
            }
            continue;
        }
        out.push('/');
        out.push_str(segment);
    }

    if out.is_empty() {
        "/".to_string()
    } else {
        out
    }
}

/// Resolves `target` against the working directory `cwd`.
///
/// Absolute targets ignore `cwd`; relative targets are appended to it before normalization.
pub fn join_virtual_path(cwd: &str, target: &str) -> String {
    if target.starts_with('/') {
        normalize_virtual_path(target)
    } else {
        normalize_virtual_path(&format!("{cwd}/{target}"))
    }
}

/// Returns the parent directory of a normalized path (`/` for the root).
pub fn parent_virtual_path(path: &str) -> String {
    let normalized = normalize_virtual_path(path);
    match normalized.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(idx) => normalized[..idx].to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_virtual_path_matches_expected_cases() {
        let cases = [
            ("", "/"),
            ("   ", "/"),
            ("foo/bar", "/foo/bar"),
            ("/foo//bar/", "/foo/bar"),
            ("./foo/../bar", "/bar"),
            ("/../../", "/"),
        ];

        for (input, expected) in cases {
            assert_eq!(normalize_virtual_path(input), expected, "input={input:?}");
        }
    }

    #[test]
    fn join_resolves_relative_and_absolute_targets() {
        assert_eq!(join_virtual_path("/home/user", "Documents"), "/home/user/Documents");
        assert_eq!(join_virtual_path("/home/user", "../"), "/home");
        assert_eq!(join_virtual_path("/home/user", "/etc"), "/etc");
        assert_eq!(join_virtual_path("/", "usr//bin/"), "/usr/bin");
    }

    #[test]
    fn parent_of_root_and_nested_paths() {
        assert_eq!(parent_virtual_path("/"), "/");
        assert_eq!(parent_virtual_path("/home"), "/");
        assert_eq!(parent_virtual_path("/home/user/Desktop"), "/home/user");
    }
}
