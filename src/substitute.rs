//! Placeholder expansion: splices escaped values into a SQL template while
//! skipping over embedded string/identifier literals.

use crate::error::{Error, Result};
use crate::escape::escape_value;
use crate::value::Value;

#[derive(Clone, Copy, PartialEq)]
enum State {
    Default,
    SingleQuoted,
    EString,
    DoubleQuoted,
}

/// Expand `?` and `$N` placeholders in `template`, splicing in `values`
/// escaped via [`escape_value`]. `?` consumes values in order of
/// appearance (0-based counter); `$N` indexes `values[N - 1]` directly.
/// The two styles may be mixed; each tracks its own cursor.
pub fn substitute(template: &str, values: &[Value]) -> Result<String> {
    let chars: Vec<char> = template.chars().collect();
    let mut out = String::with_capacity(template.len());
    let mut state = State::Default;
    let mut literal_start = 0usize;
    let mut qmark_cursor = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        let c = chars[i];
        match state {
            State::Default => match c {
                '?' => {
                    let value = values.get(qmark_cursor).ok_or(Error::MissingBind {
                        index: qmark_cursor + 1,
                        supplied: values.len(),
                    })?;
                    out.push_str(&escape_value(value)?);
                    qmark_cursor += 1;
                    i += 1;
                }
                '$' if chars.get(i + 1).is_some_and(|d| d.is_ascii_digit()) => {
                    let mut j = i + 1;
                    let mut digits = String::new();
                    while j < chars.len() && chars[j].is_ascii_digit() {
                        digits.push(chars[j]);
                        j += 1;
                    }
                    let n: usize = digits.parse().expect("digits only");
                    let value = n
                        .checked_sub(1)
                        .and_then(|idx| values.get(idx))
                        .ok_or(Error::MissingBind {
                            index: n,
                            supplied: values.len(),
                        })?;
                    out.push_str(&escape_value(value)?);
                    i = j;
                }
                ('E' | 'e') if chars.get(i + 1) == Some(&'\'') => {
                    out.push(c);
                    out.push('\'');
                    literal_start = i;
                    state = State::EString;
                    i += 2;
                }
                '\'' => {
                    out.push(c);
                    literal_start = i;
                    state = State::SingleQuoted;
                    i += 1;
                }
                '"' => {
                    out.push(c);
                    literal_start = i;
                    state = State::DoubleQuoted;
                    i += 1;
                }
                _ => {
                    out.push(c);
                    i += 1;
                }
            },
            State::SingleQuoted => match c {
                '\'' if chars.get(i + 1) == Some(&'\'') => {
                    out.push_str("''");
                    i += 2;
                }
                '\'' => {
                    out.push(c);
                    state = State::Default;
                    i += 1;
                }
                _ => {
                    out.push(c);
                    i += 1;
                }
            },
            State::EString => match c {
                '\\' => {
                    out.push(c);
                    match chars.get(i + 1) {
                        Some(escaped) => {
                            out.push(*escaped);
                            i += 2;
                        }
                        None => return Err(Error::LexError { position: literal_start }),
                    }
                }
                '\'' => {
                    out.push(c);
                    state = State::Default;
                    i += 1;
                }
                _ => {
                    out.push(c);
                    i += 1;
                }
            },
            State::DoubleQuoted => match c {
                '"' if chars.get(i + 1) == Some(&'"') => {
                    out.push_str("\"\"");
                    i += 2;
                }
                '"' => {
                    out.push(c);
                    state = State::Default;
                    i += 1;
                }
                _ => {
                    out.push(c);
                    i += 1;
                }
            },
        }
    }

    if state != State::Default {
        return Err(Error::LexError {
            position: literal_start,
        });
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_marks_consume_in_order() {
        let result = substitute(
            "a = ?, b = '?''?', c = ?",
            &[Value::Int(1), Value::Int(2)],
        )
        .unwrap();
        assert_eq!(result, "a = 1, b = '?''?', c = 2");
    }

    #[test]
    fn dollar_placeholders_index_directly() {
        let result = substitute("$2, $1", &[Value::Int(10), Value::Int(20)]).unwrap();
        assert_eq!(result, "20, 10");
    }

    #[test]
    fn dollar_zero_errors_instead_of_panicking() {
        let err = substitute("$0", &[Value::Int(1)]).unwrap_err();
        assert!(matches!(err, Error::MissingBind { index: 0, .. }));
    }

    #[test]
    fn missing_bind_errors() {
        let err = substitute("?, ?", &[Value::Int(1)]).unwrap_err();
        assert!(matches!(err, Error::MissingBind { index: 2, supplied: 1 }));
    }

    #[test]
    fn unterminated_single_quote_errors() {
        let err = substitute("select '?", &[]).unwrap_err();
        assert!(matches!(err, Error::LexError { .. }));
    }

    #[test]
    fn placeholders_inert_inside_estring() {
        let result = substitute("E'a ? b \\' c', ?", &[Value::Int(1)]).unwrap();
        assert_eq!(result, "E'a ? b \\' c', 1");
    }

    #[test]
    fn doubled_quote_inside_double_quoted_identifier_is_inert() {
        let result = substitute(r#""a""b", ?"#, &[Value::Int(5)]).unwrap();
        assert_eq!(result, r#""a""b", 5"#);
    }
}
