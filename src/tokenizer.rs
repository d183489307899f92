use std::iter::FusedIterator;

/// A lazy iterator of lowercase word tokens over a byte slice.
///
/// A token is a maximal run of ASCII letters, apostrophes (`'`) and hyphens
/// (`-`). Uppercase letters are folded to lowercase; every other byte
/// (including all non-ASCII bytes) is a delimiter. Tokens are never empty.
///
/// # Examples
///
/// ```
/// use commonwords::Tokens;
///
/// let got = Tokens::new(b"Don't stop-me NOW!").collect::<Vec<_>>();
/// assert_eq!(got, ["don't", "stop-me", "now"]);
/// ```
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    bytes: std::slice::Iter<'a, u8>,
}

impl<'a> Tokens<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes: bytes.iter(),
        }
    }
}

/// Map a byte to the character it contributes to a token, or [`None`] if it
/// is a delimiter.
fn fold(b: u8) -> Option<char> {
    match b {
        b'A'..=b'Z' => Some(char::from(b.to_ascii_lowercase())),
        b'a'..=b'z' | b'\'' | b'-' => Some(char::from(b)),
        _ => None,
    }
}

impl Iterator for Tokens<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let mut word = String::new();

        for &b in self.bytes.by_ref() {
            match fold(b) {
                Some(c) => word.push(c),
                None if !word.is_empty() => return Some(word),
                None => {}
            }
        }

        // End of input flushes any partial token.
        (!word.is_empty()).then_some(word)
    }
}

impl FusedIterator for Tokens<'_> {}
