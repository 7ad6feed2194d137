//! Application configuration assembled from command-line flags

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::ValueEnum;

use crate::logging::LogConfig;
use crate::output::OutputConfig;
use crate::sniff::{SignatureSniffer, TypeSniffer};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorMode {
    /// Decide whether to emit color on stdout.
    pub fn should_use_color(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // https://no-color.org/
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                if std::env::var_os("FORCE_COLOR").is_some() {
                    return true;
                }
                if std::env::var("TERM").is_ok_and(|t| t == "dumb") {
                    return false;
                }
                std::io::stdout().is_terminal()
            }
        }
    }
}

/// Everything the binary needs to know before running a command.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub debug: bool,
    pub color: ColorMode,
    /// Directory the default resolver binds as the tree root.
    pub root: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            debug: false,
            color: ColorMode::Auto,
            root: PathBuf::from("."),
        }
    }
}

impl AppConfig {
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            enabled: self.debug,
            ..LogConfig::default()
        }
    }

    pub fn context(&self) -> CommandContext {
        CommandContext {
            output: OutputConfig {
                use_color: self.color.should_use_color(),
            },
            ..CommandContext::default()
        }
    }
}

/// Per-invocation settings handed to the dispatcher.
pub struct CommandContext {
    pub output: OutputConfig,
    pub sniffer: Box<dyn TypeSniffer + Send + Sync>,
}

impl Default for CommandContext {
    fn default() -> Self {
        Self {
            output: OutputConfig::plain(),
            sniffer: Box::new(SignatureSniffer),
        }
    }
}
