//! Output formatting configuration.
//!
//! [`ManifestConfig`] is a small builder holding the settings that shape the
//! emitted text without changing its content: whether lines are broken and
//! indented, and by how many spaces per nesting level.
//!
//! # Example
//!
//! ```
//! use mpdgen::{ManifestConfig, ManifestGenerator};
//!
//! let config = ManifestConfig::new().with_pretty(true).with_indent(4);
//! let generator = ManifestGenerator::with_config(config);
//! assert!(generator.config().pretty());
//! ```

/// Default number of spaces per nesting level in pretty mode.
pub const DEFAULT_INDENT: u32 = 2;

/// Formatting settings for manifest generation.
///
/// Defaults: pretty printing off, indent width [`DEFAULT_INDENT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestConfig {
    pretty: bool,
    indent: u32,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self {
            pretty: false,
            indent: DEFAULT_INDENT,
        }
    }

    /// Enable or disable pretty printing.
    ///
    /// When disabled the whole document is emitted as a single line.
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Set the number of spaces per nesting level.
    ///
    /// Only takes effect in pretty mode.
    #[must_use]
    pub fn with_indent(mut self, indent: u32) -> Self {
        self.indent = indent;
        self
    }

    /// Whether pretty printing is enabled.
    pub fn pretty(&self) -> bool {
        self.pretty
    }

    /// Spaces per nesting level.
    pub fn indent(&self) -> u32 {
        self.indent
    }
}
