//! Ellipsis normalization
//!
//! Runs of three or more periods are rewritten as `…` characters, one per
//! complete group of three, followed by the leftover periods.

use std::borrow::Cow;

/// Ellipsis character
pub const ELLIPSIS: char = '…';

/// Collapse runs of periods. Borrows the input when there is nothing to do.
pub fn normalize_ellipsis(text: &str) -> Cow<'_, str> {
    if !text.contains("...") {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut run = 0usize;
    for ch in text.chars() {
        if ch == '.' {
            run += 1;
            continue;
        }
        flush_run(&mut out, run);
        run = 0;
        out.push(ch);
    }
    flush_run(&mut out, run);

    Cow::Owned(out)
}

fn flush_run(out: &mut String, run: usize) {
    // short runs fall out as run / 3 == 0
    out.extend(std::iter::repeat(ELLIPSIS).take(run / 3));
    out.extend(std::iter::repeat('.').take(run % 3));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_lengths() {
        assert_eq!(normalize_ellipsis("a.b"), "a.b");
        assert_eq!(normalize_ellipsis("a..b"), "a..b");
        assert_eq!(normalize_ellipsis("a...b"), "a…b");
        assert_eq!(normalize_ellipsis("Espera...."), "Espera….");
        assert_eq!(normalize_ellipsis("....."), "…..");
        assert_eq!(normalize_ellipsis("......"), "……");
    }

    #[test]
    fn test_borrows_when_unchanged() {
        assert!(matches!(normalize_ellipsis("Hola. Adiós.."), Cow::Borrowed(_)));
        assert!(matches!(normalize_ellipsis("Hola..."), Cow::Owned(_)));
    }

    #[test]
    fn test_multiple_runs() {
        assert_eq!(normalize_ellipsis("uno... dos.... tres."), "uno… dos…. tres.");
    }
}
