//! Edge label text.
//!
//! Labels are built unescaped; [`crate::dot::write_edge`] escapes them once
//! when the statement is written.

use std::fmt::Write;

/// Separator between labels that share one drawn edge.
pub const LABEL_SEPARATOR: &str = "|";

/// `'c'` for printable ASCII, `'\n'`/`'\r'`/`'\t'` for those controls,
/// `0xNN` for everything else.
pub fn byte_label(byte: u8) -> String {
    match byte {
        b'\n' => "'\\n'".to_string(),
        b'\r' => "'\\r'".to_string(),
        b'\t' => "'\\t'".to_string(),
        0x20..=0x7e => format!("'{}'", byte as char),
        _ => format!("0x{byte:02x}"),
    }
}

pub fn range_label(start: u8, end: u8) -> String {
    if start == end {
        byte_label(start)
    } else {
        format!("{}:{}", byte_label(start), byte_label(end))
    }
}

/// The bytes of a literal match as quoted text.
///
/// Valid UTF-8 is written as is. Control characters other than `\n`, `\r`
/// and `\t`, and bytes that are not valid UTF-8, are written as `\xNN`.
pub fn sequence_label(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push('\'');
    for chunk in bytes.utf8_chunks() {
        for ch in chunk.valid().chars() {
            match ch {
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                ch if ch.is_control() => {
                    let mut buf = [0u8; 4];
                    for byte in ch.encode_utf8(&mut buf).bytes() {
                        push_hex(&mut out, byte);
                    }
                }
                ch => out.push(ch),
            }
        }
        for &byte in chunk.invalid() {
            push_hex(&mut out, byte);
        }
    }
    out.push('\'');
    out
}

fn push_hex(out: &mut String, byte: u8) {
    let _ = write!(out, "\\x{byte:02x}");
}

pub fn code_label(code: i32) -> String {
    format!("code={code}")
}

pub fn otherwise_label(no_advance: bool) -> &'static str {
    if no_advance { "otherwise" } else { "skipTo" }
}

pub fn join_labels(labels: &[String]) -> String {
    labels.join(LABEL_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_bytes_are_quoted() {
        assert_eq!(byte_label(0x41), "'A'");
        assert_eq!(byte_label(b' '), "' '");
        assert_eq!(byte_label(b'~'), "'~'");
        assert_eq!(byte_label(b'"'), "'\"'");
    }

    #[test]
    fn named_controls_use_escape_form() {
        assert_eq!(byte_label(0x0a), r"'\n'");
        assert_eq!(byte_label(0x0d), r"'\r'");
        assert_eq!(byte_label(0x09), r"'\t'");
    }

    #[test]
    fn other_bytes_are_hex() {
        assert_eq!(byte_label(0x00), "0x00");
        assert_eq!(byte_label(0x1f), "0x1f");
        assert_eq!(byte_label(0x7f), "0x7f");
        assert_eq!(byte_label(0xff), "0xff");
    }

    #[test]
    fn ranges() {
        assert_eq!(range_label(b'a', b'a'), "'a'");
        assert_eq!(range_label(b'0', b'5'), "'0':'5'");
        assert_eq!(range_label(0x00, b' '), "0x00:' '");
    }

    #[test]
    fn sequences() {
        assert_eq!(sequence_label(b"hello"), "'hello'");
        assert_eq!(sequence_label(b"a\r\nb"), r"'a\r\nb'");
        assert_eq!(sequence_label(&[0x00, b'x', 0x7f]), r"'\x00x\x7f'");
    }

    #[test]
    fn sequences_keep_utf8_text() {
        assert_eq!(sequence_label("café".as_bytes()), "'café'");
        assert_eq!(sequence_label("→ 日本".as_bytes()), "'→ 日本'");
        // A C1 control is valid UTF-8 but still escaped byte by byte.
        assert_eq!(sequence_label("a\u{85}b".as_bytes()), r"'a\xc2\x85b'");
    }

    #[test]
    fn invalid_utf8_bytes_are_hex() {
        assert_eq!(sequence_label(&[b'x', 0xc3]), r"'x\xc3'");
        assert_eq!(sequence_label(&[0xff, b'o', b'k', 0xfe]), r"'\xffok\xfe'");
        assert_eq!(sequence_label(&[b'c', b'a', b'f', 0xc3, 0xa9, 0xff]), r"'café\xff'");
    }

    #[test]
    fn codes_and_otherwise() {
        assert_eq!(code_label(0), "code=0");
        assert_eq!(code_label(-1), "code=-1");
        assert_eq!(otherwise_label(true), "otherwise");
        assert_eq!(otherwise_label(false), "skipTo");
    }

    #[test]
    fn join_uses_bar() {
        let labels = vec!["'a':'z'".to_string(), "'if'".to_string()];
        assert_eq!(join_labels(&labels), "'a':'z'|'if'");
        assert_eq!(join_labels(&[]), "");
    }
}
