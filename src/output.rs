use std::io::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::parser::Extraction;
use crate::record::ContactRecord;
use crate::settings::OutputFormat;

const OUT: &str = "<stdout>";

/// One extracted card, labelled with where its text came from.
#[derive(Debug, Clone, Serialize)]
pub struct CardResult {
    pub source: String,
    #[serde(flatten)]
    pub record: ContactRecord,
}

pub fn write_results<W: Write>(out: &mut W, format: OutputFormat, results: &[CardResult]) -> Result<()> {
    match format {
        OutputFormat::Json => {
            for r in results {
                serde_json::to_writer(&mut *out, r)?;
                writeln!(out).map_err(|e| Error::io(OUT, e))?;
            }
        }
        OutputFormat::Pretty => {
            serde_json::to_writer_pretty(&mut *out, results)?;
            writeln!(out).map_err(|e| Error::io(OUT, e))?;
        }
        OutputFormat::Table => {
            for (i, r) in results.iter().enumerate() {
                if i > 0 {
                    writeln!(out).map_err(|e| Error::io(OUT, e))?;
                }
                write_record_table(out, &r.source, &r.record).map_err(|e| Error::io(OUT, e))?;
            }
        }
    }
    Ok(())
}

fn write_record_table<W: Write>(out: &mut W, source: &str, record: &ContactRecord) -> std::io::Result<()> {
    writeln!(out, "== {} ==", source)?;
    for (key, value) in record.entries() {
        writeln!(out, "{:<9} | {}", key, value)?;
    }
    Ok(())
}

/// Per-line reading followed by the resulting record.
pub fn write_explanation<W: Write>(out: &mut W, source: &str, extraction: &Extraction) -> Result<()> {
    let io = |e: std::io::Error| Error::io(OUT, e);
    writeln!(out, "{:>3} | {:<8} | {:<13} | {}", "#", "Tag", "Claimed by", "Text").map_err(io)?;
    writeln!(out, "{}", "-".repeat(72)).map_err(io)?;
    for line in &extraction.lines {
        let claimed = line
            .claimed_by
            .map(|c| format!("{:?}", c))
            .unwrap_or_else(|| "-".into());
        writeln!(
            out,
            "{:>3} | {:<8} | {:<13} | {}",
            line.index,
            line.tag.to_string(),
            claimed,
            truncate(&line.text, 48)
        )
        .map_err(io)?;
    }
    let residuals = extraction.residuals().count();
    writeln!(out, "\n{} lines, {} unclaimed\n", extraction.lines.len(), residuals).map_err(io)?;
    write_record_table(out, source, &extraction.record).map_err(io)
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
