//! Argument blob encoding
//!
//! Submitted events carry a list of string arguments; the stored record
//! collapses that list into one opaque blob safe for embedding both in a
//! JSON string and in generated source for the hosted sub-language. The
//! encoding is deterministic and injective: two different argument lists
//! never produce the same blob.

use std::fmt::Write;

/// Collapse an argument list into a single embedding-safe string
///
/// Arguments are joined with `,`. Within an argument, `\` and `"` are
/// backslash-escaped, and commas and control characters are written as
/// `\u`-style escapes, so the separator stays unambiguous and the blob drops
/// into a JSON string verbatim.
///
/// # Examples
///
/// ```
/// use seqhost_wire::encode_args;
///
/// assert_eq!(encode_args(&[]), "");
/// assert_eq!(encode_args(&["1".into(), "up".into()]), "1,up");
/// assert_eq!(encode_args(&["a,b".into()]), "a\\u002cb");
/// ```
pub fn encode_args(args: &[String]) -> String {
    let mut out = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        for c in arg.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '"' => out.push_str("\\\""),
                ',' => out.push_str("\\u002c"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                c if c.is_control() => {
                    let _ = write!(out, "\\u{:04x}", c as u32);
                }
                c => out.push(c),
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_is_empty_blob() {
        assert_eq!(encode_args(&[]), "");
    }

    #[test]
    fn test_plain_args_join_with_commas() {
        let blob = encode_args(&["1".to_string(), "up".to_string(), "now".to_string()]);
        assert_eq!(blob, "1,up,now");
    }

    #[test]
    fn test_quotes_and_backslashes_escaped() {
        assert_eq!(encode_args(&["say \"hi\"".to_string()]), "say \\\"hi\\\"");
        assert_eq!(encode_args(&["a\\b".to_string()]), "a\\\\b");
    }

    #[test]
    fn test_interior_commas_distinct_from_separators() {
        let one_arg = encode_args(&["a,b".to_string()]);
        let two_args = encode_args(&["a".to_string(), "b".to_string()]);
        assert_ne!(one_arg, two_args);
        assert_eq!(one_arg, "a\\u002cb");
        assert_eq!(two_args, "a,b");
    }

    #[test]
    fn test_blob_is_json_string_safe() {
        let blob = encode_args(&["tab\there".to_string(), "quote\"".to_string()]);
        let doc = format!("{{\"args\":\"{}\"}}", blob);
        let parsed: serde_json::Value = serde_json::from_str(&doc).unwrap();
        assert_eq!(parsed["args"], "tab\there,quote\"");
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Injectivity over the separator: encoding never lets an
            /// argument's own commas collide with the join character.
            #[test]
            fn encoding_is_injective_across_splits(a in "[a-z,\"\\\\]{0,8}", b in "[a-z,\"\\\\]{0,8}") {
                let joined = encode_args(&[a.clone(), b.clone()]);
                let single = encode_args(&[format!("{},{}", a, b)]);
                prop_assert_ne!(joined.clone(), single);

                // The blob always drops into a JSON string verbatim.
                let doc = format!("{{\"args\":\"{}\"}}", joined);
                prop_assert!(serde_json::from_str::<serde_json::Value>(&doc).is_ok());
            }
        }
    }
}
