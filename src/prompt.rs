//! Interactive confirmation before anything is touched.

use std::io::{self, BufRead, Write};
use std::path::Path;

/// The only answer that lets the export proceed (case-insensitive).
pub const AFFIRMATIVE: &str = "y";

/// Show `destination` and ask whether to continue.
///
/// Reads one line. Returns `Ok(true)` only for `y`/`Y` (surrounding
/// whitespace ignored); end of input counts as a refusal.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W, destination: &Path) -> io::Result<bool> {
    writeln!(
        out,
        "This script will export VMware virtual network settings to the following location:"
    )?;
    writeln!(out, "{}", destination.display())?;
    write!(out, "Do you want to continue? (Y/N): ")?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}

pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case(AFFIRMATIVE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(answer: &str) -> (bool, String) {
        let mut input = answer.as_bytes();
        let mut out = Vec::new();
        let ok = confirm(&mut input, &mut out, Path::new("/backups/WS17_vnet_1.dat")).unwrap();
        (ok, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_accepts_y_any_case() {
        assert!(ask("y\n").0);
        assert!(ask("Y\n").0);
        assert!(ask("  y  \r\n").0);
    }

    #[test]
    fn test_rejects_everything_else() {
        for answer in ["n\n", "N\n", "yes\n", "YES\n", "\n", "", "yy\n", "1\n", "ok\n"] {
            assert!(!ask(answer).0, "answer {answer:?} should not confirm");
        }
    }

    #[test]
    fn test_prompt_shows_destination() {
        let (_, transcript) = ask("n\n");
        assert!(transcript.contains("/backups/WS17_vnet_1.dat"));
        assert!(transcript.ends_with("Do you want to continue? (Y/N): "));
    }

    #[test]
    fn test_only_first_line_is_read() {
        let mut input = "n\ny\n".as_bytes();
        let mut out = Vec::new();
        assert!(!confirm(&mut input, &mut out, Path::new("x")).unwrap());
    }
}
