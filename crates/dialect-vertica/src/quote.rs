use dialect_core::clause::Writer;

/// Writes `s` as a double-quoted identifier, quoting each `.`-separated
/// segment on its own: `schema.table` becomes `"schema"."table"`.
///
/// Embedded `"` characters are written as-is.
pub(crate) fn quote_to(writer: &mut dyn Writer, s: &str) {
    writer.write_char('"');
    for (i, segment) in s.split('.').enumerate() {
        if i > 0 {
            writer.write_str(".\"");
        }
        writer.write_str(segment);
        writer.write_char('"');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(s: &str) -> String {
        let mut out = String::new();
        quote_to(&mut out, s);
        out
    }

    #[test]
    fn simple_identifier() {
        assert_eq!(quote("simple"), r#""simple""#);
    }

    #[test]
    fn qualified_identifier() {
        assert_eq!(quote("a.b.c"), r#""a"."b"."c""#);
        assert_eq!(quote("schema.table"), r#""schema"."table""#);
    }

    #[test]
    fn empty_identifier() {
        assert_eq!(quote(""), r#""""#);
    }

    #[test]
    fn empty_segments_are_kept() {
        assert_eq!(quote(".a"), r#"""."a""#);
        assert_eq!(quote("a..b"), r#""a".""."b""#);
    }

    #[test]
    fn embedded_quotes_are_not_escaped() {
        assert_eq!(quote(r#"we"ird"#), r#""we"ird""#);
    }
}
