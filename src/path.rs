//! Slash-separated paths inside a tree source.
//!
//! Paths are relative to the tree root and never contain `..`; the root itself is `.`.

/// The root of every tree.
pub const ROOT: &str = ".";

/// Join a directory path and a child name with a single separator.
pub fn join(base: &str, name: &str) -> String {
    if base == ROOT || base.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", base.trim_end_matches('/'), name)
    }
}

/// Last segment of a path, `.` for the root.
pub fn base_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => ROOT,
    }
}

/// Reason a raw argument cannot address an entry in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invalid {
    Absolute,
    ParentSegment,
}

impl Invalid {
    pub fn reason(self) -> &'static str {
        match self {
            Invalid::Absolute => "absolute paths are not allowed",
            Invalid::ParentSegment => "'..' segments are not allowed",
        }
    }
}

/// Normalize a user-supplied argument into a tree path.
///
/// Drops `.` and empty segments, so `./a//b/` becomes `a/b` and `./` becomes `.`.
pub fn clean(arg: &str) -> Result<String, Invalid> {
    if arg.starts_with('/') {
        return Err(Invalid::Absolute);
    }

    let mut segments = Vec::new();
    for segment in arg.split('/') {
        match segment {
            "" | "." => continue,
            ".." => return Err(Invalid::ParentSegment),
            s => segments.push(s),
        }
    }

    if segments.is_empty() {
        Ok(ROOT.to_string())
    } else {
        Ok(segments.join("/"))
    }
}
