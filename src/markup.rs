//! Markup serialization for the external renderer.
//!
//! A circuit is projected onto a line-oriented circuitikz instruction
//! language, one `\draw` instruction per segment, framed by a fixed
//! document preamble and postamble. The serializer walks the circuit's
//! canonical order and never reorders, merges, or deduplicates, so output
//! is reproducible byte for byte.
//!
//! Rendered files are named by content: the SHA-256 of the serialized body
//! (framing excluded) truncated to a fixed-length hex prefix, so identical
//! structures map to identical filenames.

use sha2::{Digest, Sha256};

use crate::circuit::{Circuit, Segment};
use crate::error::{CircuitgenError, Result};

/// Fixed document framing emitted before the instructions.
pub const PREAMBLE: &str = "\\documentclass{standalone}\n\\usepackage{circuitikz}\n\\begin{document}\n\\begin{circuitikz}\n";

/// Fixed document framing emitted after the instructions.
pub const POSTAMBLE: &str = "\\end{circuitikz}\n\\end{document}\n";

/// Length of the hex prefix used for content-addressed filenames.
pub const FILENAME_HASH_LEN: usize = 15;

/// Serialize one segment as a draw instruction.
///
/// `\draw (x1, y1) to[<kind>] (x2, y2);`, with `, l=<label>` inside the
/// brackets when the segment carries a label. An untyped segment is an
/// internal defect and is reported, never silently skipped.
pub fn instruction(segment: &Segment) -> Result<String> {
    let kind = segment.kind.ok_or_else(|| CircuitgenError::UntypedSegment {
        from: segment.from.to_string(),
        to: segment.to.to_string(),
    })?;
    Ok(match &segment.label {
        Some(label) => format!(
            "\\draw {} to[{}, l={}] {};",
            segment.from,
            kind.token(),
            label,
            segment.to
        ),
        None => format!("\\draw {} to[{}] {};", segment.from, kind.token(), segment.to),
    })
}

/// Serialize the circuit body as a single line of space-joined
/// instructions.
///
/// This is the form stored in the formulas ledger and hashed for content
/// addressing; the document framing is excluded.
pub fn serialize_body(circuit: &Circuit) -> Result<String> {
    let instructions: Vec<String> = circuit.iter().map(instruction).collect::<Result<_>>()?;
    Ok(instructions.join(" "))
}

/// Serialize the circuit as a complete document, one instruction per line
/// between [`PREAMBLE`] and [`POSTAMBLE`].
pub fn serialize(circuit: &Circuit) -> Result<String> {
    let mut out = String::from(PREAMBLE);
    for segment in circuit {
        out.push_str(&instruction(segment)?);
        out.push('\n');
    }
    out.push_str(POSTAMBLE);
    Ok(out)
}

/// Content-addressed filename stem for a serialized body.
pub fn content_filename(body: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(body.as_bytes());
    let digest = hasher.finalize();
    let mut hex = String::with_capacity(FILENAME_HASH_LEN);
    for byte in digest {
        hex.push_str(&format!("{byte:02x}"));
        if hex.len() >= FILENAME_HASH_LEN {
            break;
        }
    }
    hex.truncate(FILENAME_HASH_LEN);
    hex
}
