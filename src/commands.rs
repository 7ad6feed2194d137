//! Command dispatch: one resolver call, then each path in order
//!
//! Every verb writes plain text to `out`. Any error returned from here is fatal for
//! the whole invocation; the only per-entry leniency lives in the `ls` formatter.

use std::io::{self, Write};

use termcolor::WriteColor;
use tracing::debug;

use crate::config::CommandContext;
use crate::error::{CommandError, FsError, Result};
use crate::hash::digest_reader;
use crate::output::{ListFormatter, StatReport, TreeFormatter};
use crate::path::ROOT;
use crate::sniff::{SNIFF_LEN, read_prefix};
use crate::source::{SourceResolver, TreeSource};
use crate::tree::TreeNode;

/// The user-facing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Cat,
    File,
    Hashsum,
    Ls,
    Stat,
    Tree,
}

impl Verb {
    pub fn name(self) -> &'static str {
        match self {
            Verb::Cat => "cat",
            Verb::File => "file",
            Verb::Hashsum => "hashsum",
            Verb::Ls => "ls",
            Verb::Stat => "stat",
            Verb::Tree => "tree",
        }
    }

    /// `ls` and `tree` fall back to the tree root when given no paths.
    pub fn defaults_to_root(self) -> bool {
        matches!(self, Verb::Ls | Verb::Tree)
    }
}

/// Resolve `args` once and run `verb` over every resulting path.
pub fn run<W: WriteColor + ?Sized>(
    verb: Verb,
    resolver: &dyn SourceResolver,
    args: &[String],
    ctx: &CommandContext,
    out: &mut W,
) -> Result<()> {
    let resolved = resolver.resolve(args)?;
    let mut paths = resolved.paths;
    if paths.is_empty() && verb.defaults_to_root() {
        paths.push(ROOT.to_string());
    }
    debug!(verb = verb.name(), ?paths, "running");

    let source = resolved.source.as_ref();
    for path in &paths {
        match verb {
            Verb::Cat => cat(source, path, out)?,
            Verb::File => file(source, path, ctx, out)?,
            Verb::Hashsum => hashsum(source, path, out)?,
            Verb::Ls => ListFormatter::new(ctx.output).write(source, path, out)?,
            Verb::Stat => stat(source, path, out)?,
            Verb::Tree => tree(source, path, ctx, out)?,
        }
    }
    out.flush()?;
    Ok(())
}

/// Copy a file's bytes to `out` unchanged.
pub fn cat<W: Write + ?Sized>(source: &dyn TreeSource, path: &str, out: &mut W) -> Result<()> {
    let mut reader = source.open(path)?;
    let mut sink = OutputSink::new(out);
    io::copy(&mut reader, &mut sink).map_err(|e| {
        if sink.failed {
            CommandError::Output(e)
        } else {
            FsError::from_io(path, e).into()
        }
    })?;
    Ok(())
}

/// Print `path: mime` from the first [`SNIFF_LEN`] bytes.
pub fn file<W: Write + ?Sized>(
    source: &dyn TreeSource,
    path: &str,
    ctx: &CommandContext,
    out: &mut W,
) -> Result<()> {
    let mut reader = source.open(path)?;
    let mut buf = vec![0u8; SNIFF_LEN];
    let n = read_prefix(&mut reader, &mut buf).map_err(|e| FsError::from_io(path, e))?;
    writeln!(out, "{}: {}", path, ctx.sniffer.sniff(&buf[..n]))?;
    Ok(())
}

/// Print MD5, SHA1, SHA256 and SHA512 of a file, computed in one read pass.
pub fn hashsum<W: Write + ?Sized>(source: &dyn TreeSource, path: &str, out: &mut W) -> Result<()> {
    let mut reader = source.open(path)?;
    let digests = digest_reader(&mut reader).map_err(|e| FsError::from_io(path, e))?;
    write!(out, "{}", digests)?;
    Ok(())
}

pub fn stat<W: Write + ?Sized>(source: &dyn TreeSource, path: &str, out: &mut W) -> Result<()> {
    let entry = source.stat(path)?;
    write!(out, "{}", StatReport(&entry))?;
    Ok(())
}

pub fn tree<W: WriteColor + ?Sized>(
    source: &dyn TreeSource,
    path: &str,
    ctx: &CommandContext,
    out: &mut W,
) -> Result<()> {
    let node = TreeNode::build(source, path)?;
    let (dirs, files) = node.counts();
    debug!(path, dirs, files, "built tree");
    TreeFormatter::new(ctx.output).write(&node, out)?;
    Ok(())
}

/// Forwards to `out` and remembers whether a write failed, so an `io::copy`
/// error can be pinned on the right side.
struct OutputSink<'a, W: ?Sized> {
    out: &'a mut W,
    failed: bool,
}

impl<'a, W: Write + ?Sized> OutputSink<'a, W> {
    fn new(out: &'a mut W) -> Self {
        Self { out, failed: false }
    }
}

impl<W: Write + ?Sized> Write for OutputSink<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf).inspect_err(|_| self.failed = true)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush().inspect_err(|_| self.failed = true)
    }
}
