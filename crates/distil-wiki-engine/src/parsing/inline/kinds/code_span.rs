/// Code span inline type with owned delimiter constant.
///
/// Code spans follow the same no-nesting rule as every other span: their
/// content is always literal.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: &'static [u8; 1] = b"`";
}
