//! Fixed five-field entry report for `stat`

use std::fmt;

use chrono::{DateTime, Utc};

use crate::source::Entry;

/// Renders `Name`, `Size`, `IsDir`, `Mode` and `Modified`, one per line, in that order.
pub struct StatReport<'a>(pub &'a Entry);

impl fmt::Display for StatReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entry = self.0;
        let modified: DateTime<Utc> = entry.modified.into();
        writeln!(f, "Name: {}", entry.name)?;
        writeln!(f, "Size: {}", entry.size)?;
        writeln!(f, "IsDir: {}", entry.is_dir())?;
        writeln!(f, "Mode: {}", entry.mode)?;
        writeln!(f, "Modified: {}", modified.format("%Y-%m-%d %H:%M:%S%.f %z UTC"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{MemoryTree, TreeSource};
    use std::time::{Duration, SystemTime};

    #[test]
    fn test_stat_file() {
        let entry = MemoryTree::new().with_file("foo", "foo").stat("foo").unwrap();
        assert_eq!(
            StatReport(&entry).to_string(),
            "Name: foo\nSize: 3\nIsDir: false\nMode: -rw-r--r--\nModified: 1970-01-01 00:00:00 +0000 UTC\n"
        );
    }

    #[test]
    fn test_stat_directory() {
        let entry = MemoryTree::new().with_dir("folder").stat("folder").unwrap();
        let report = StatReport(&entry).to_string();
        let lines: Vec<_> = report.lines().collect();
        assert_eq!(lines[0], "Name: folder");
        assert_eq!(lines[2], "IsDir: true");
        assert_eq!(lines[3], "Mode: drwxr-xr-x");
    }

    #[test]
    fn test_field_order() {
        let mut tree = MemoryTree::new();
        let when = SystemTime::UNIX_EPOCH + Duration::new(1_700_000_000, 250_000_000);
        tree.insert_file("f", "12345", 0o600, when);
        let entry = tree.stat("f").unwrap();

        let report = StatReport(&entry).to_string();
        let labels: Vec<_> = report
            .lines()
            .map(|l| l.split_once(": ").unwrap().0)
            .collect();
        assert_eq!(labels, ["Name", "Size", "IsDir", "Mode", "Modified"]);
        assert!(report.contains("Size: 5\n"));
        assert!(report.contains("Mode: -rw-------\n"));
        assert!(report.contains("Modified: 2023-11-14 22:13:20.250 +0000 UTC\n"));
    }
}
