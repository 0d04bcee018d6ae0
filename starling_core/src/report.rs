//! Simulation reports and file export.
//!
//! A report wraps a snapshot with an id and a timestamp. It can be rendered
//! as text, or exported as JSON and as a CSV of every curve sample. All
//! files are written atomically so a reader never sees a partial export.

use crate::simulation::{Scenario, SimulationSnapshot};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use uuid::Uuid;

pub const TEXT_FILE_NAME: &str = "report.txt";
pub const JSON_FILE_NAME: &str = "report.json";
pub const CSV_FILE_NAME: &str = "curves.csv";

/// A snapshot stamped for export
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationReport {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub snapshot: SimulationSnapshot,
}

impl SimulationReport {
    pub fn new(snapshot: SimulationSnapshot) -> Self {
        Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            snapshot,
        }
    }
}

/// A row in the curve CSV
#[derive(Debug, Serialize)]
struct CurveRow<'a> {
    series: &'a str,
    edv: f64,
    sv: f64,
    co: f64,
}

fn signed_pct(pct: f64) -> String {
    if pct > 0.0 {
        format!("+{:.0}", pct)
    } else {
        format!("{:.0}", pct)
    }
}

/// Render the human-readable report
pub fn render_text(report: &SimulationReport) -> String {
    let mut out = String::new();
    // fmt::Write for String never returns an error
    write_report(&mut out, report).expect("writing to a String cannot fail");
    out
}

fn write_report(out: &mut String, report: &SimulationReport) -> fmt::Result {
    let snapshot = &report.snapshot;
    let inputs = &snapshot.inputs;

    writeln!(out, "Cardiac Simulation Report")?;
    writeln!(
        out,
        "Generated: {}",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(out, "Report ID: {}", report.id)?;
    writeln!(out)?;

    writeln!(out, "Simulation parameters")?;
    writeln!(out, "  - End-diastolic volume (EDV): {:.0} mL", inputs.edv)?;
    writeln!(out, "  - Inotropy: {} %", signed_pct(inputs.inotropy_pct))?;
    writeln!(out, "  - Afterload: {} %", signed_pct(inputs.afterload_pct))?;
    writeln!(out)?;

    writeln!(out, "Computed results")?;
    write_result_line(out, "Baseline", &snapshot.baseline)?;
    if let Some(ref scenario) = snapshot.inotropy {
        write_result_line(out, "With inotropy", scenario)?;
    }
    if let Some(ref scenario) = snapshot.afterload {
        write_result_line(out, "With afterload", scenario)?;
    }
    writeln!(out, "  - Heart rate: {:.0} beats/min", snapshot.heart_rate)
}

fn write_result_line(out: &mut String, title: &str, scenario: &Scenario) -> fmt::Result {
    writeln!(
        out,
        "  - {}: CO {:.2} L/min, SV {:.1} mL/beat",
        title, scenario.current.co, scenario.current.sv
    )
}

/// Write `contents` to `path` via a locked temp file and atomic rename
fn write_atomic<F>(path: &Path, write_contents: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&parent)?;

    let temp = NamedTempFile::new_in(&parent)?;

    // Exclusive lock serializes concurrent exporters targeting the same directory
    temp.as_file().lock_exclusive()?;

    {
        let mut writer = std::io::BufWriter::new(temp.as_file());
        write_contents(&mut writer)?;
        writer.flush()?;
    }

    temp.as_file().sync_all()?;
    temp.as_file().unlock()?;

    temp.persist(path).map_err(|e| Error::Io(e.error))?;

    tracing::debug!("Wrote {:?}", path);
    Ok(())
}

/// Write the rendered text report
pub fn write_text(path: &Path, report: &SimulationReport) -> Result<()> {
    let text = render_text(report);
    write_atomic(path, |w| {
        w.write_all(text.as_bytes())?;
        Ok(())
    })
}

/// Write the report as pretty-printed JSON
pub fn write_json(path: &Path, report: &SimulationReport) -> Result<()> {
    write_atomic(path, |w| {
        serde_json::to_writer_pretty(&mut *w, report)?;
        w.write_all(b"\n")?;
        Ok(())
    })
}

/// Write every curve sample of every scenario as CSV
///
/// Returns the number of rows written.
pub fn write_curves_csv(path: &Path, snapshot: &SimulationSnapshot) -> Result<usize> {
    let mut rows = 0;
    write_atomic(path, |w| {
        let mut writer = csv::WriterBuilder::new().has_headers(true).from_writer(w);
        for scenario in snapshot.scenarios() {
            for point in &scenario.curve {
                writer.serialize(CurveRow {
                    series: &scenario.label,
                    edv: point.edv,
                    sv: point.sv,
                    co: point.co,
                })?;
                rows += 1;
            }
        }
        writer.flush()?;
        Ok(())
    })?;
    Ok(rows)
}

/// Paths written by [`export_all`]
#[derive(Clone, Debug)]
pub struct ExportedFiles {
    pub text: PathBuf,
    pub json: PathBuf,
    pub csv: PathBuf,
    pub csv_rows: usize,
}

/// Write text, JSON and CSV exports into `dir`
pub fn export_all(dir: &Path, report: &SimulationReport) -> Result<ExportedFiles> {
    std::fs::create_dir_all(dir)?;

    let text = dir.join(TEXT_FILE_NAME);
    let json = dir.join(JSON_FILE_NAME);
    let csv = dir.join(CSV_FILE_NAME);

    write_text(&text, report)?;
    write_json(&json, report)?;
    let csv_rows = write_curves_csv(&csv, &report.snapshot)?;

    tracing::info!(
        "Exported report {} to {:?} ({} curve rows)",
        report.id,
        dir,
        csv_rows
    );

    Ok(ExportedFiles {
        text,
        json,
        csv,
        csv_rows,
    })
}
