//! Output configuration types

/// Configuration for output formatting.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Highlight directory names. Never changes the printed characters, only color.
    pub use_color: bool,
}

impl OutputConfig {
    pub fn plain() -> Self {
        Self { use_color: false }
    }
}
