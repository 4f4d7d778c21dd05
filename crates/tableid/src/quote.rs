//! Quoting of database and table names for display.

/// Returns the name as is if it can be written without quotes, otherwise
/// wraps it in back quotes.
pub fn quote_if_needed(name: &str) -> String {
    if is_bare_identifier(name) {
        name.to_string()
    } else {
        back_quote(name)
    }
}

/// Wraps the name in back quotes, escaping back quotes, backslashes and
/// control characters.
pub fn back_quote(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    out.push('`');
    for c in name.chars() {
        match c {
            '`' => out.push_str("\\`"),
            '\\' => out.push_str("\\\\"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            other => out.push(other),
        }
    }
    out.push('`');
    out
}

fn is_bare_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => (),
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_only_when_needed() {
        struct Test {
            input: &'static str,
            expected: &'static str,
        }

        let tests = vec![
            Test {
                input: "users",
                expected: "users",
            },
            Test {
                input: "_t1",
                expected: "_t1",
            },
            Test {
                input: "Table_2",
                expected: "Table_2",
            },
            Test {
                input: "1abc",
                expected: "`1abc`",
            },
            Test {
                input: "my table",
                expected: "`my table`",
            },
            Test {
                input: "a`b",
                expected: "`a\\`b`",
            },
            Test {
                input: "a\\b",
                expected: "`a\\\\b`",
            },
            Test {
                input: "line\nbreak",
                expected: "`line\\nbreak`",
            },
            Test {
                input: "",
                expected: "``",
            },
            Test {
                input: "héllo",
                expected: "`héllo`",
            },
        ];

        for test in tests {
            assert_eq!(test.expected, quote_if_needed(test.input), "input: {:?}", test.input);
        }
    }

    #[test]
    fn back_quote_always_quotes() {
        assert_eq!("`users`", back_quote("users"));
    }
}
