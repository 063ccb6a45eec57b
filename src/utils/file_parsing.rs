#[inline]
fn is_quote(ch: char) -> bool {
    ch == '\'' || ch == '"'
}

#[inline]
pub fn strip_surrounding_quotes(s: &str) -> &str {
    let b = s.as_bytes();
    if b.len() >= 2 {
        let first = b[0];
        let last = b[b.len() - 1];
        if (first == b'\'' && last == b'\'') || (first == b'"' && last == b'"') {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Cuts the line at the first `%` that is not inside quotes.
pub fn strip_comment(line: &str) -> &str {
    let mut in_quotes: Option<char> = None;
    for (i, ch) in line.char_indices() {
        match in_quotes {
            Some(q) if ch == q => in_quotes = None,
            Some(_) => {}
            None if is_quote(ch) => in_quotes = Some(ch),
            None if ch == '%' => return &line[..i],
            None => {}
        }
    }
    line
}

/// Splits on `delimiter` outside quotes; every field is trimmed and loses its
/// surrounding quotes.
pub fn split_fields(line: &str, delimiter: char) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut in_quotes: Option<char> = None;

    for ch in line.chars() {
        match in_quotes {
            Some(q) => {
                if ch == q {
                    in_quotes = None;
                }
                cur.push(ch);
            }
            None => {
                if is_quote(ch) {
                    in_quotes = Some(ch);
                    cur.push(ch);
                } else if ch == delimiter {
                    out.push(strip_surrounding_quotes(cur.trim()).to_string());
                    cur.clear();
                } else {
                    cur.push(ch);
                }
            }
        }
    }
    let last = cur.trim();
    if !last.is_empty() || !out.is_empty() {
        out.push(strip_surrounding_quotes(last).to_string());
    }
    out
}

/// First whitespace-separated token and the trimmed remainder.
pub fn split_keyword(line: &str) -> (&str, &str) {
    let line = line.trim_start();
    match line.find(char::is_whitespace) {
        Some(i) => (&line[..i], line[i..].trim()),
        None => (line, ""),
    }
}

/// Reads a name that is either quoted or a bare token, returning it without
/// quotes together with the trimmed remainder.
pub fn take_name(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    let first = s.chars().next()?;
    if is_quote(first) {
        let close = s[1..].find(first)? + 1;
        Some((&s[1..close], s[close + 1..].trim()))
    } else {
        let (name, rest) = split_keyword(s);
        Some((name, rest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_quotes_works() {
        assert_eq!(strip_surrounding_quotes("'a,b'"), "a,b");
        assert_eq!(strip_surrounding_quotes(r#""x""#), "x");
        assert_eq!(strip_surrounding_quotes("nq"), "nq");
    }

    #[test]
    fn comments_outside_quotes_only() {
        assert_eq!(strip_comment("a,b % trailing"), "a,b ");
        assert_eq!(strip_comment("'50%',b"), "'50%',b");
        assert_eq!(strip_comment("% whole line"), "");
    }

    #[test]
    fn fields_are_trimmed_and_unquoted() {
        let p = split_fields(r#"'sunny day', hot ,"a,b",no"#, ',');
        assert_eq!(p, vec!["sunny day", "hot", "a,b", "no"]);
        assert!(split_fields("", ',').is_empty());
        assert_eq!(split_fields("a,", ','), vec!["a", ""]);
    }

    #[test]
    fn keyword_and_name() {
        assert_eq!(split_keyword("@attribute  outlook {a}"), ("@attribute", "outlook {a}"));
        assert_eq!(split_keyword("@data"), ("@data", ""));
        assert_eq!(take_name("'play golf' {yes,no}"), Some(("play golf", "{yes,no}")));
        assert_eq!(take_name("windy {TRUE,FALSE}"), Some(("windy", "{TRUE,FALSE}")));
        assert_eq!(take_name("'unterminated {a}"), None);
        assert_eq!(take_name("   "), None);
    }
}
