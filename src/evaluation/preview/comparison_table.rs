use crate::evaluation::MetricsRecord;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;
use strum_macros::{Display as StrumDisplay, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    StrumDisplay,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub learner: String,
    pub sample_size: usize,
    pub metrics: MetricsRecord,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    rows: &'a [ComparisonRow],
}

/// Metrics of several learners across sample sizes, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonTable {
    entries: Vec<ComparisonRow>,
}

impl ComparisonTable {
    pub fn push(&mut self, learner: impl Into<String>, sample_size: usize, metrics: MetricsRecord) {
        self.entries.push(ComparisonRow {
            learner: learner.into(),
            sample_size,
            metrics,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rows(&self) -> &[ComparisonRow] {
        &self.entries
    }

    /// Learner names in order of first appearance.
    pub fn learners(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for row in &self.entries {
            if !names.contains(&row.learner.as_str()) {
                names.push(&row.learner);
            }
        }
        names
    }

    /// Records for one learner, indexed by sample-size position.
    pub fn for_learner(&self, learner: &str) -> Vec<&ComparisonRow> {
        self.entries.iter().filter(|r| r.learner == learner).collect()
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: ReportFormat) -> Result<(), Error> {
        match fmt {
            ReportFormat::Csv => self.export_with_delimiter(path, ','),
            ReportFormat::Tsv => self.export_with_delimiter(path, '\t'),
            ReportFormat::Json => self.export_json(path),
        }
    }

    fn export_with_delimiter<P: AsRef<Path>>(&self, path: P, delimiter: char) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        write!(w, "learner{d}sample_size", d = delimiter)?;
        for name in MetricsRecord::NAMES {
            write!(w, "{delimiter}{name}")?;
        }
        writeln!(w)?;
        for row in &self.entries {
            write!(w, "{}{d}{}", row.learner, row.sample_size, d = delimiter)?;
            for value in row.metrics.values() {
                write!(w, "{delimiter}{value:.6}")?;
            }
            writeln!(w)?;
        }
        w.flush()
    }

    fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let report = JsonReport {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            rows: &self.entries,
        };
        let mut w = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut w, &report)?;
        writeln!(w)?;
        w.flush()
    }
}

impl Display for ComparisonTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let width = self
            .entries
            .iter()
            .map(|r| r.learner.len())
            .max()
            .unwrap_or(0)
            .max("learner".len());
        write!(f, "{:<width$} {:>8}", "learner", "samples")?;
        for name in MetricsRecord::NAMES {
            write!(f, " {name:>10}")?;
        }
        for row in &self.entries {
            write!(f, "\n{:<width$} {:>8}", row.learner, row.sample_size)?;
            for value in row.metrics.values() {
                write!(f, " {value:>10.4}")?;
            }
        }
        Ok(())
    }
}
