use std::io::Write;

use anyhow::Result;
use disasm::{Disassembler, disassemble_at};
use serde_json::json;

use crate::args::OutputFormat;

/// Writes the listing of `code` to `out`, `base` is where `code` starts in its
/// input and offsets are reported from there.
///
/// `label` is printed as a `; <label>` banner (text) or a `file` field (json)
/// when several inputs are listed. Returns `false` when decoding stopped on an
/// invalid word.
pub fn write_listing(
    out: &mut impl Write,
    format: OutputFormat,
    label: Option<&str>,
    code: &[u8],
    base: usize,
) -> Result<bool> {
    match format {
        OutputFormat::Text => write_text(out, label, code, base),
        OutputFormat::Json => write_json(out, label, code, base),
    }
}

fn write_text(out: &mut impl Write, label: Option<&str>, code: &[u8], base: usize) -> Result<bool> {
    if let Some(label) = label {
        writeln!(out, "; {label}")?;
    }

    match disassemble_at(code, base) {
        Ok(listing) => {
            out.write_all(listing.as_bytes())?;
            Ok(true)
        }
        Err(e) => {
            tracing::error!("{e}");
            // The listing ends on the header of the bad word.
            writeln!(out, "{}", e.into_listing())?;
            Ok(false)
        }
    }
}

fn write_json(out: &mut impl Write, label: Option<&str>, code: &[u8], base: usize) -> Result<bool> {
    for decoded in Disassembler::with_base_offset(code, base) {
        let line = match decoded {
            Ok(op_code) => json!({
                "file": label,
                "header": op_code.header().to_string().trim_end(),
                "asm": op_code.mnemonic(),
                "opcode": op_code,
            }),
            Err(e) => {
                let line = json!({ "file": label, "error": e.to_string() });
                writeln!(out, "{line}")?;
                tracing::error!("{e}");
                return Ok(false);
            }
        };
        writeln!(out, "{line}")?;
    }

    Ok(true)
}
