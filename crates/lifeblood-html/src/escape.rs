//! Text escaping for markup and URLs.

/// Escape `s` for use in element content or a double-quoted attribute.
pub fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      _ => out.push(c),
    }
  }
  out
}

/// Percent-encode `s` as a URI component: every byte outside
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )` becomes `%XX`.
///
/// The output never contains `"`, `<`, `>` or `&`, so it is also safe inside a
/// double-quoted attribute.
pub fn encode_uri_component(s: &str) -> String {
  const HEX: &[u8; 16] = b"0123456789ABCDEF";

  let mut out = String::with_capacity(s.len());
  for &b in s.as_bytes() {
    match b {
      b'A'..=b'Z'
      | b'a'..=b'z'
      | b'0'..=b'9'
      | b'-'
      | b'_'
      | b'.'
      | b'!'
      | b'~'
      | b'*'
      | b'\''
      | b'('
      | b')' => out.push(b as char),
      _ => {
        out.push('%');
        out.push(HEX[usize::from(b >> 4)] as char);
        out.push(HEX[usize::from(b & 0x0f)] as char);
      }
    }
  }
  out
}
