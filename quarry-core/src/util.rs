use std::fmt::{self, Write};

/// Writes every value through `f`, inserting `separator` between consecutive values.
pub fn separated_by<T, W, F>(
    out: &mut W,
    values: impl IntoIterator<Item = T>,
    mut f: F,
    separator: &str,
) -> fmt::Result
where
    W: Write + ?Sized,
    F: FnMut(&mut W, T) -> fmt::Result,
{
    let mut first = true;
    for v in values {
        if !first {
            out.write_str(separator)?;
        }
        first = false;
        f(out, v)?;
    }
    Ok(())
}

/// Writes `value` as a single quoted string literal, doubling the embedded quotes.
pub fn write_quoted<W: Write + ?Sized>(out: &mut W, value: &str) -> fmt::Result {
    out.write_char('\'')?;
    let mut pos = 0;
    for (i, c) in value.char_indices() {
        if c == '\'' {
            out.write_str(&value[pos..i])?;
            out.write_str("''")?;
            pos = i + 1;
        }
    }
    out.write_str(&value[pos..])?;
    out.write_char('\'')
}

/// Shortens long text for log lines, marking the cut with `...`.
pub fn truncate_long(text: &str) -> Truncated<'_> {
    const LIMIT: usize = 497;
    match text.char_indices().nth(LIMIT) {
        Some((end, _)) => Truncated(text[..end].trim_end(), true),
        None => Truncated(text, false),
    }
}

pub struct Truncated<'a>(&'a str, bool);

impl fmt::Display for Truncated<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)?;
        if self.1 {
            f.write_str("...")?;
        }
        Ok(())
    }
}
