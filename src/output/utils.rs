//! Shared utility functions for output formatting

use std::io;
use termcolor::{Color, ColorSpec, WriteColor};

/// Connector drawn before an entry, depending on whether a sibling follows it.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { "└── " } else { "├── " }
}

/// Prefix for the children of an entry, extending its parent's prefix.
pub fn continuation_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    }
}

/// Write an entry name, bold blue for directories when color is on.
pub fn write_name<W: WriteColor + ?Sized>(
    out: &mut W,
    name: &str,
    is_dir: bool,
    use_color: bool,
) -> io::Result<()> {
    if use_color && is_dir {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(out, "{}", name)?;
        out.reset()?;
    } else {
        write!(out, "{}", name)?;
    }
    Ok(())
}
