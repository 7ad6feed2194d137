//! One-level directory listing for `ls`

use termcolor::WriteColor;
use tracing::warn;

use crate::error::Result;
use crate::path;
use crate::source::{TreeSource, sort_by_name};

use super::config::OutputConfig;
use super::utils::write_name;

/// Formatter for `ls` output.
pub struct ListFormatter {
    config: OutputConfig,
}

impl ListFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// List `path`: a directory's immediate children sorted by name with `/` after
    /// directories, or the path itself when it is not a directory.
    ///
    /// Failing to stat or list `path` is fatal. A child that cannot be stat-ed gets
    /// an inline `name: cannot stat: reason` line and the listing goes on.
    pub fn write<W: WriteColor + ?Sized>(
        &self,
        source: &dyn TreeSource,
        path: &str,
        out: &mut W,
    ) -> Result<()> {
        let entry = source.stat(path)?;
        if !entry.is_dir() {
            writeln!(out, "{}", path)?;
            return Ok(());
        }

        let mut children = source.list(path)?;
        sort_by_name(&mut children);

        for listed in &children {
            let child_path = path::join(path, &listed.name);
            match source.stat(&child_path) {
                Ok(child) if child.is_dir() => {
                    write_name(out, &listed.name, true, self.config.use_color)?;
                    writeln!(out, "/")?;
                }
                Ok(_) => writeln!(out, "{}", listed.name)?,
                Err(e) => {
                    warn!(path = %child_path, error = %e, "cannot stat child");
                    writeln!(out, "{}: cannot stat: {}", listed.name, e.reason())?;
                }
            }
        }
        Ok(())
    }
}
