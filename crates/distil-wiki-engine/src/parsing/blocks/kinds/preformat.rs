/// Preformatted block: `{{{` ... `}}}`.
///
/// A raw zone. Lines inside are kept verbatim and no block or inline parsing
/// happens until the closer.
pub struct Preformat;

impl Preformat {
    pub const OPEN: &'static str = "{{{";
    pub const CLOSE: &'static str = "}}}";

    /// If the line opens a preformatted block, returns the text after `{{{`.
    pub fn open(line: &str) -> Option<&str> {
        line.strip_prefix(Self::OPEN)
    }

    /// Splits a line at the closer, returning the text before it.
    ///
    /// Text after the closer is dropped.
    pub fn close(line: &str) -> Option<&str> {
        line.find(Self::CLOSE).map(|at| line[..at].trim_end())
    }
}
