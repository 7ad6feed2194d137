//! CLI entry point for fs

use std::io::Write;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use fscmd::{AppConfig, ColorMode, RootResolver, Verb};
use termcolor::{ColorChoice, StandardStream};
use tracing::error;

#[derive(Parser, Debug)]
#[command(name = "fs")]
#[command(about = "Inspect a directory tree with cat, file, hashsum, ls, stat and tree")]
#[command(version)]
struct Args {
    /// Write diagnostic logs to stderr (filter with FS_LOG)
    #[arg(short = 'd', long = "debug", global = true, hide = true)]
    debug: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto", global = true)]
    color: ColorMode,

    /// Directory to use as the tree root
    #[arg(short = 'C', long = "root", value_name = "DIR", default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print file contents
    Cat {
        #[arg(value_name = "PATH")]
        paths: Vec<String>,
    },
    /// Print the content type of files
    File {
        #[arg(value_name = "PATH")]
        paths: Vec<String>,
    },
    /// Print MD5, SHA1, SHA256 and SHA512 digests of files
    Hashsum {
        #[arg(value_name = "PATH")]
        paths: Vec<String>,
    },
    /// List directory contents
    Ls {
        #[arg(value_name = "PATH")]
        paths: Vec<String>,
    },
    /// Print entry metadata
    Stat {
        #[arg(value_name = "PATH")]
        paths: Vec<String>,
    },
    /// Print a directory hierarchy
    Tree {
        #[arg(value_name = "PATH")]
        paths: Vec<String>,
    },
}

impl Command {
    fn into_parts(self) -> (Verb, Vec<String>) {
        match self {
            Command::Cat { paths } => (Verb::Cat, paths),
            Command::File { paths } => (Verb::File, paths),
            Command::Hashsum { paths } => (Verb::Hashsum, paths),
            Command::Ls { paths } => (Verb::Ls, paths),
            Command::Stat { paths } => (Verb::Stat, paths),
            Command::Tree { paths } => (Verb::Tree, paths),
        }
    }
}

fn main() {
    let args = Args::parse();

    let config = AppConfig {
        debug: args.debug,
        color: args.color,
        root: args.root,
    };
    fscmd::logging::init(&config.log_config());

    let ctx = config.context();
    let choice = if ctx.output.use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let stdout = StandardStream::stdout(choice);
    let mut out = stdout.lock();

    let (verb, paths) = args.command.into_parts();
    let resolver = RootResolver::new(&config.root);

    let result = fscmd::run(verb, &resolver, &paths, &ctx, &mut out);
    // Output written before a failure still goes out.
    let _ = out.flush();
    if let Err(e) = result {
        error!(verb = verb.name(), error = %e, "command failed");
        eprintln!("fs: error: {}", e);
        process::exit(1);
    }
}
