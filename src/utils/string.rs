use thiserror::Error;

#[derive(Debug, Error)]
pub enum UnquoteError {
    #[error("literal is not quoted: {0}")]
    NotQuoted(String),

    #[error("unterminated literal: {0}")]
    Unterminated(String),

    #[error("invalid escape sequence: \\{0}")]
    InvalidEscape(String),
}

/// Unquotes a Go string literal the way `strconv.Unquote` does for the cases
/// Ginkgo suite names actually hit: interpreted literals (`"..."`) with their
/// escape sequences resolved, and raw literals (`` `...` ``) taken verbatim.
pub fn unquote_go_string(literal: &str) -> Result<String, UnquoteError> {
    let s = literal.trim();

    if s.len() >= 2 && s.starts_with('`') {
        if !s.ends_with('`') {
            return Err(UnquoteError::Unterminated(s.to_string()));
        }
        // raw literal: no escapes
        return Ok(s[1..s.len() - 1].to_string());
    }

    if s.len() < 2 || !s.starts_with('"') || !s.ends_with('"') {
        return Err(UnquoteError::NotQuoted(s.to_string()));
    }

    let inner = &s[1..s.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let esc = chars
            .next()
            .ok_or_else(|| UnquoteError::Unterminated(s.to_string()))?;
        match esc {
            'a' => out.push('\x07'),
            'b' => out.push('\x08'),
            'f' => out.push('\x0c'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'v' => out.push('\x0b'),
            '\\' => out.push('\\'),
            '\'' => out.push('\''),
            '"' => out.push('"'),
            'x' => out.push(read_hex_escape(&mut chars, 2)?),
            'u' => out.push(read_hex_escape(&mut chars, 4)?),
            'U' => out.push(read_hex_escape(&mut chars, 8)?),
            other => return Err(UnquoteError::InvalidEscape(other.to_string())),
        }
    }

    Ok(out)
}

fn read_hex_escape(chars: &mut std::str::Chars<'_>, digits: usize) -> Result<char, UnquoteError> {
    let mut value: u32 = 0;
    let mut seen = String::new();
    for _ in 0..digits {
        let c = chars
            .next()
            .ok_or_else(|| UnquoteError::InvalidEscape(seen.clone()))?;
        seen.push(c);
        let digit = c
            .to_digit(16)
            .ok_or_else(|| UnquoteError::InvalidEscape(seen.clone()))?;
        value = value * 16 + digit;
    }
    char::from_u32(value).ok_or(UnquoteError::InvalidEscape(seen))
}
