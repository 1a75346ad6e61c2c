//! C string header (`language.inl`) rendering.
//!
//! The firmware includes this file to get compiled-in fallback strings, one
//! `STRING(label, "text")` per entry, in the same order as the TRF string map.

use std::fmt::Write;

use crate::Translation;

/// Renders the fallback string header for `translation`.
pub fn render_header(translation: &Translation) -> String {
    let mut out = format!("#define TRANSLATION_VER {}\n\n", translation.version());
    for (label, text) in translation.strings() {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "STRING({label}, \"{}\")", escape_c(text));
    }
    out
}

/// Escapes text for a C string literal.
pub fn escape_c(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\r' => out.push_str("\\r"),
            '\n' => out.push_str("\\n"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;

    #[test]
    fn test_escape_c() {
        assert_eq!(escape_c("plain"), "plain");
        assert_eq!(escape_c("a\r\nb"), "a\\r\\nb");
        assert_eq!(escape_c(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_c(r"C:\path"), r"C:\\path");
        assert_eq!(escape_c("%s → 日本"), "%s → 日本");
    }

    #[test]
    fn test_render_header() {
        let strings = IndexMap::from([
            ("YES".to_owned(), "Yes".to_owned()),
            ("PROMPT".to_owned(), "Press A\nto continue".to_owned()),
        ]);
        let translation = Translation::new("English", 2, strings);
        assert_eq!(
            render_header(&translation),
            "#define TRANSLATION_VER 2\n\n\
             STRING(YES, \"Yes\")\n\
             STRING(PROMPT, \"Press A\\nto continue\")\n"
        );
    }
}
