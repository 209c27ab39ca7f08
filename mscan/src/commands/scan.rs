//! Scan command implementation.
//!
//! Reads a Mini C source file (or stdin), writes one line per token, the
//! final `eof` token included, and reports lexical diagnostics on stderr.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use minic_lex::{write_token, Scanner, ScannerConfig, TokenRecord};
use minic_util::Handler;
use tracing::{debug, info};

use crate::config::OutputFormat;
use crate::error::{MscanError, Result};

/// Arguments for the scan command.
#[derive(Debug, Clone, Default)]
pub struct ScanArgs {
    /// Source file; stdin when absent or `-`.
    pub input: Option<PathBuf>,
    /// Token listing destination; stdout when absent.
    pub output: Option<PathBuf>,
    /// How tokens are written.
    pub format: OutputFormat,
    /// Scanner settings.
    pub scanner: ScannerConfig,
}

/// Execute the scan command.
///
/// Fails with [`MscanError::Lexical`] when the input had lexical errors,
/// after the full listing was written.
pub fn run_scan(args: ScanArgs) -> Result<()> {
    let reader = open_input(args.input.as_deref())?;
    let mut writer = open_output(args.output.as_deref())?;
    let mut handler = Handler::new();

    debug!(format = ?args.format, config = ?args.scanner, "scanning");
    let count = write_tokens(reader, &mut handler, args.scanner, args.format, &mut writer)?;
    writer.flush()?;

    for diagnostic in handler.diagnostics() {
        eprintln!("{}", diagnostic);
    }
    info!(
        tokens = count,
        errors = handler.error_count(),
        "scan finished"
    );

    handler.check()?;
    Ok(())
}

/// Scans `reader` to the end, writing every token to `out`.
///
/// Returns the number of tokens written, `eof` included.
pub fn write_tokens<R: Read, W: Write + ?Sized>(
    reader: R,
    handler: &mut Handler,
    config: ScannerConfig,
    format: OutputFormat,
    out: &mut W,
) -> Result<usize> {
    let mut scanner = Scanner::with_config(reader, handler, config);
    let mut count = 0;

    loop {
        let token = scanner.next_token();
        match format {
            OutputFormat::Listing => write_token(&token, out)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &TokenRecord::from(&token))?;
                writeln!(out)?;
            },
        }
        count += 1;

        if token.is_eof() {
            return Ok(count);
        }
    }
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        Some(path) if path != Path::new("-") => {
            let file = File::open(path).map_err(|e| {
                MscanError::Validation(format!("Cannot open {}: {}", path.display(), e))
            })?;
            Ok(Box::new(BufReader::new(file)))
        },
        _ => Ok(Box::new(io::stdin().lock())),
    }
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)?;
            Ok(Box::new(BufWriter::new(file)))
        },
        None => Ok(Box::new(io::stdout().lock())),
    }
}
