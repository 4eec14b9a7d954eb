use std::borrow::Cow;

/// Normalize CRLF/CR to LF. Multi-line control values are stored with
/// LF newlines only.
pub fn normalize_newlines(s: &str) -> Cow<'_, str> {
    if !s.contains('\r') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut it = s.chars().peekable();
    while let Some(ch) = it.next() {
        match ch {
            '\r' => {
                if it.peek() == Some(&'\n') {
                    let _ = it.next();
                }
                out.push('\n');
            }
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lf_only_borrows() {
        assert!(matches!(normalize_newlines("a\nb"), Cow::Borrowed("a\nb")));
    }

    #[test]
    fn crlf_and_bare_cr_become_lf() {
        assert_eq!(normalize_newlines("a\r\nb\rc").as_ref(), "a\nb\nc");
        assert_eq!(normalize_newlines("\r\r\n").as_ref(), "\n\n");
    }
}
