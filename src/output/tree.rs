//! Tree formatter for buffered output
//!
//! This module provides `TreeFormatter` which renders a complete `TreeNode`
//! into branch-drawn text, either as a plain string or with colors.

use std::io;
use termcolor::{NoColor, WriteColor};

use crate::tree::TreeNode;

use super::config::OutputConfig;
use super::utils::{connector, continuation_prefix, write_name};

/// Formatter for `tree` output.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render to a plain string, one line per node, ending in a single newline.
    pub fn format(&self, node: &TreeNode) -> String {
        let mut out = NoColor::new(Vec::new());
        // Writing into a Vec cannot fail
        let _ = self.write(node, &mut out);
        String::from_utf8_lossy(&out.into_inner()).into_owned()
    }

    /// Write the rendered block. The root is labelled as given; trailing
    /// whitespace of the block is dropped before the final newline.
    pub fn write<W: WriteColor + ?Sized>(&self, node: &TreeNode, out: &mut W) -> io::Result<()> {
        let mut lines = Vec::new();
        collect_lines(node, "", true, true, &mut lines);

        let last = lines.len().saturating_sub(1);
        for (i, line) in lines.iter().enumerate() {
            let label = if i == last {
                line.label.trim_end()
            } else {
                line.label
            };
            write!(out, "{}{}", line.prefix, line.connector)?;
            write_name(out, label, line.is_dir, self.config.use_color)?;
            writeln!(out)?;
        }
        Ok(())
    }
}

struct Line<'a> {
    prefix: String,
    connector: &'static str,
    label: &'a str,
    is_dir: bool,
}

fn collect_lines<'a>(
    node: &'a TreeNode,
    prefix: &str,
    is_last: bool,
    is_root: bool,
    lines: &mut Vec<Line<'a>>,
) {
    if is_root {
        // Root node - print without connector
        lines.push(Line {
            prefix: String::new(),
            connector: "",
            label: &node.label,
            is_dir: node.is_dir,
        });
    } else {
        lines.push(Line {
            prefix: prefix.to_string(),
            connector: connector(is_last),
            label: &node.label,
            is_dir: node.is_dir,
        });
    }

    let child_prefix = if is_root {
        String::new()
    } else {
        continuation_prefix(prefix, is_last)
    };

    for (i, child) in node.children.iter().enumerate() {
        let child_is_last = i == node.children.len() - 1;
        collect_lines(child, &child_prefix, child_is_last, false, lines);
    }
}
