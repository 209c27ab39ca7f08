//! Keywords command implementation.

use std::io::{self, Write};

use minic_lex::KEYWORDS;

use crate::error::Result;

/// Execute the keywords command, printing the table to stdout.
pub fn run_keywords() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_keywords(&mut out)?;
    out.flush()?;
    Ok(())
}

/// Writes one `spelling ordinal` line per reserved word, in table order.
pub fn write_keywords<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    for (spelling, token) in KEYWORDS.iter() {
        writeln!(out, "{} {}", spelling, token.number())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_table_output() {
        let mut out = Vec::new();
        write_keywords(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 16);
        assert_eq!(lines[0], "const 30");
        assert_eq!(lines[6], "while 36");
        assert_eq!(lines[7], "char 40");
        assert_eq!(lines[15], "break 48");
    }
}
