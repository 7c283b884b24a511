/// Bare external link, recognised without any surrounding markup.
pub struct AutoUrl;

impl AutoUrl {
    pub const SCHEMES: [&'static [u8]; 2] = [b"http://", b"https://"];
    /// Characters that end a URL.
    const STOP: &'static [char] = &['[', ']', '{', '}', '(', ')', '<', '>', '"'];
    /// Characters dropped from the end of a URL (sentence punctuation).
    const TRAILING: &'static [char] = &['.', ',', ';', ':', '!', '?'];

    /// Returns the byte length of the URL at the start of `rest`, if any.
    pub fn scan(rest: &str) -> Option<usize> {
        let scheme = Self::SCHEMES
            .iter()
            .find(|scheme| rest.as_bytes().starts_with(scheme))?;
        let body = &rest[scheme.len()..];
        let end = body
            .find(|c: char| c.is_whitespace() || Self::STOP.contains(&c))
            .unwrap_or(body.len());
        let body = body[..end].trim_end_matches(Self::TRAILING);
        if body.is_empty() {
            return None;
        }
        Some(scheme.len() + body.len())
    }
}
