//! Line-oriented text builder for manifest output.
//!
//! Each element line is produced in three steps: [`begin`](ManifestWriter::begin)
//! writes the indentation and the opening text, the `attr_*` methods append
//! ` key="value"` pairs, and [`finish`](ManifestWriter::finish) writes the
//! closing suffix and, in pretty mode, the newline. Outside pretty mode both
//! indentation and newlines are suppressed so the document is one line.

use std::fmt::Write as _;
use std::iter::repeat_n;

use crate::config::ManifestConfig;
use crate::stream::ByteRange;
use crate::utilities::escape_xml;

pub(crate) struct ManifestWriter {
    out: String,
    pretty: bool,
    indent: usize,
}

impl ManifestWriter {
    pub(crate) fn new(config: &ManifestConfig) -> Self {
        Self {
            out: String::new(),
            pretty: config.pretty(),
            indent: config.indent() as usize,
        }
    }

    /// Indent to `depth` and write `text` without ending the line.
    pub(crate) fn begin(&mut self, depth: usize, text: &str) {
        if self.pretty {
            self.out.extend(repeat_n(' ', depth * self.indent));
        }
        self.out.push_str(text);
    }

    /// Write escaped character data.
    pub(crate) fn text(&mut self, text: &str) {
        self.out.push_str(&escape_xml(text));
    }

    /// Write `suffix` and end the line.
    pub(crate) fn finish(&mut self, suffix: &str) {
        self.out.push_str(suffix);
        if self.pretty {
            self.out.push('\n');
        }
    }

    /// A complete line with no attributes.
    pub(crate) fn line(&mut self, depth: usize, text: &str) {
        self.begin(depth, text);
        self.finish("");
    }

    pub(crate) fn attr_str(&mut self, key: &str, value: &str) {
        let _ = write!(self.out, " {key}=\"{}\"", escape_xml(value));
    }

    pub(crate) fn attr_int(&mut self, key: &str, value: u64) {
        let _ = write!(self.out, " {key}=\"{value}\"");
    }

    pub(crate) fn attr_range(&mut self, key: &str, range: &ByteRange) {
        let _ = write!(self.out, " {key}=\"{range}\"");
    }

    pub(crate) fn attr_bool(&mut self, key: &str, value: bool) {
        let _ = write!(self.out, " {key}=\"{value}\"");
    }

    pub(crate) fn into_string(self) -> String {
        self.out
    }
}
