//! Distinguished-name text in the lenient RFC 2253 section 4 form, rewritten
//! into the strict RFC 4514 form `x509-cert` parses.
//!
//! Accepted on input: spaces around `,`, `+` and `=`; `;` as an RDN
//! separator; double-quoted values; an `OID.` prefix on dotted types.

use crate::domain::error::{AnchorError, AnchorResult};

pub(crate) fn normalize(text: &str) -> AnchorResult<String> {
  let mut lexer = Lexer { text, pos: 0 };
  let mut out = String::with_capacity(text.len());
  loop {
    lexer.skip_spaces();
    out.push_str(lexer.attribute_type()?);
    out.push('=');
    lexer.skip_spaces();
    let value = lexer.value()?;
    push_value(&mut out, &value);
    lexer.skip_spaces();
    match lexer.bump() {
      None => return Ok(out),
      Some(b'+') => out.push('+'),
      Some(b',' | b';') => out.push(','),
      Some(c) => {
        return Err(invalid(format!(
          "unexpected '{}' at offset {}",
          char::from(c),
          lexer.pos - 1
        )))
      }
    }
  }
}

enum Value {
  Hex(String),
  Bytes(Vec<u8>),
}

struct Lexer<'a> {
  text: &'a str,
  pos: usize,
}

impl<'a> Lexer<'a> {
  fn peek(&self) -> Option<u8> {
    self.text.as_bytes().get(self.pos).copied()
  }

  fn bump(&mut self) -> Option<u8> {
    let c = self.peek()?;
    self.pos += 1;
    Some(c)
  }

  fn skip_spaces(&mut self) {
    while self.peek() == Some(b' ') {
      self.pos += 1;
    }
  }

  fn attribute_type(&mut self) -> AnchorResult<&'a str> {
    let start = self.pos;
    loop {
      match self.peek() {
        Some(b'=') => break,
        None | Some(b',' | b'+' | b';') => {
          return Err(invalid(format!("missing '=' after attribute type at offset {start}")))
        }
        Some(_) => self.pos += 1,
      }
    }
    let raw = self.text[start..self.pos].trim_end_matches(' ');
    self.pos += 1;
    if raw.is_empty() {
      return Err(invalid(format!("empty attribute type at offset {start}")));
    }
    Ok(raw
      .strip_prefix("OID.")
      .or_else(|| raw.strip_prefix("oid."))
      .unwrap_or(raw))
  }

  fn value(&mut self) -> AnchorResult<Value> {
    match self.peek() {
      Some(b'#') => {
        self.pos += 1;
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
          self.pos += 1;
        }
        if self.pos == start {
          return Err(invalid(format!("empty hex value at offset {start}")));
        }
        Ok(Value::Hex(self.text[start..self.pos].to_owned()))
      }
      Some(b'"') => {
        let open = self.pos;
        self.pos += 1;
        let mut bytes = Vec::new();
        loop {
          match self.bump() {
            None => return Err(invalid(format!("unterminated quoted value at offset {open}"))),
            Some(b'"') => return Ok(Value::Bytes(bytes)),
            Some(b'\\') => bytes.push(self.escaped()?),
            Some(c) => bytes.push(c),
          }
        }
      }
      _ => {
        let mut bytes = Vec::new();
        // Unescaped trailing spaces are not part of the value.
        let mut significant = 0;
        while let Some(c) = self.peek() {
          match c {
            b',' | b'+' | b';' => break,
            b'\\' => {
              self.pos += 1;
              bytes.push(self.escaped()?);
              significant = bytes.len();
            }
            b' ' => {
              self.pos += 1;
              bytes.push(c);
            }
            _ => {
              self.pos += 1;
              bytes.push(c);
              significant = bytes.len();
            }
          }
        }
        bytes.truncate(significant);
        Ok(Value::Bytes(bytes))
      }
    }
  }

  /// The character after a backslash: a special character or two hex digits.
  fn escaped(&mut self) -> AnchorResult<u8> {
    let at = self.pos;
    match self.bump() {
      Some(c @ (b',' | b'=' | b'+' | b'<' | b'>' | b'#' | b';' | b'"' | b'\\' | b' ')) => Ok(c),
      Some(h) if h.is_ascii_hexdigit() => match self.bump() {
        Some(l) if l.is_ascii_hexdigit() => Ok((hex_digit(h) << 4) | hex_digit(l)),
        _ => Err(invalid(format!("bad hex escape at offset {at}"))),
      },
      _ => Err(invalid(format!("bad escape at offset {at}"))),
    }
  }
}

fn hex_digit(c: u8) -> u8 {
  match c {
    b'0'..=b'9' => c - b'0',
    b'a'..=b'f' => c - b'a' + 10,
    _ => c - b'A' + 10,
  }
}

fn push_value(out: &mut String, value: &Value) {
  let bytes = match value {
    Value::Hex(digits) => {
      out.push('#');
      out.push_str(digits);
      return;
    }
    Value::Bytes(bytes) => bytes,
  };
  let last = bytes.len().saturating_sub(1);
  for (i, &b) in bytes.iter().enumerate() {
    match b {
      // A backslash goes out as hex so it never sits in front of a separator.
      b'\\' => out.push_str("\\5c"),
      b',' | b'+' | b';' | b'"' | b'<' | b'>' | b'=' => {
        out.push('\\');
        out.push(char::from(b));
      }
      b'#' if i == 0 => out.push_str("\\#"),
      b' ' if i == 0 || i == last => out.push_str("\\ "),
      0x20..=0x7e => out.push(char::from(b)),
      _ => out.push_str(&format!("\\{b:02x}")),
    }
  }
}

fn invalid(message: String) -> AnchorError {
  AnchorError::InvalidName(message)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn strict_text_passes_through() {
    assert_eq!(normalize("CN=Foo,O=Bar,C=US").unwrap(), "CN=Foo,O=Bar,C=US");
  }

  #[test]
  fn spaces_around_separators_are_dropped() {
    assert_eq!(normalize(" CN = Foo , O=Bar + OU = Ops ").unwrap(), "CN=Foo,O=Bar+OU=Ops");
  }

  #[test]
  fn semicolon_separates_rdns() {
    assert_eq!(normalize("CN=Foo; O=Bar").unwrap(), "CN=Foo,O=Bar");
  }

  #[test]
  fn quoted_values_are_escaped() {
    assert_eq!(normalize("CN=\"Quoted, Inc\",C=US").unwrap(), "CN=Quoted\\, Inc,C=US");
    assert_eq!(normalize("CN=\" padded \"").unwrap(), "CN=\\ padded\\ ");
  }

  #[test]
  fn escapes_survive() {
    assert_eq!(normalize("CN=a\\,b\\ ").unwrap(), "CN=a\\,b\\ ");
    assert_eq!(normalize("CN=back\\\\slash").unwrap(), "CN=back\\5cslash");
    assert_eq!(normalize("CN=caf\\C3\\A9").unwrap(), "CN=caf\\c3\\a9");
  }

  #[test]
  fn oid_prefix_and_hex_values() {
    assert_eq!(normalize("OID.2.5.4.3=#0c03466f6f").unwrap(), "2.5.4.3=#0c03466f6f");
  }

  #[test]
  fn malformed_text_is_rejected() {
    for text in ["CN", "=Foo", "CN=Foo,", "CN=\"open", "CN=\"q\"x", "CN=bad\\q", "CN=#"] {
      assert!(matches!(normalize(text), Err(AnchorError::InvalidName(_))), "{text}");
    }
  }
}
