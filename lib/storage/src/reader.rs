// CSV readers for the reactions and jobs sources
use csv::{ReaderBuilder, StringRecord, Trim};
use likesim_core::{Error, Job, Reaction, Result};
use std::io::Read;
use std::path::Path;

/// Parse a boolean in any of the accepted spellings
pub fn parse_direction(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

fn csv_reader<R: Read>(source: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(source)
}

/// Positional field access with row-level error context
struct Row<'a> {
    record: &'a StringRecord,
    path: &'a Path,
    line: u64,
}

impl<'a> Row<'a> {
    fn new(record: &'a StringRecord, path: &'a Path) -> Self {
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        Self { record, path, line }
    }

    fn field(&self, index: usize, name: &str) -> Result<&'a str> {
        self.record.get(index).ok_or_else(|| {
            Error::invalid_record(self.path, self.line, format!("missing column {name}"))
        })
    }

    fn id(&self, index: usize, name: &str) -> Result<i64> {
        let raw = self.field(index, name)?;
        raw.parse::<i64>().map_err(|e| {
            Error::invalid_record(self.path, self.line, format!("{name} {raw:?}: {e}"))
        })
    }

    fn direction(&self, index: usize) -> Result<bool> {
        let raw = self.field(index, "direction")?;
        parse_direction(raw).ok_or_else(|| {
            Error::invalid_record(self.path, self.line, format!("direction {raw:?} is not a boolean"))
        })
    }
}

fn csv_error(path: &Path, e: csv::Error) -> Error {
    Error::Csv {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

/// Read reactions: `user_id, job_id, direction, time`, header row first.
///
/// `path` is only used for error messages. The first bad row aborts the read.
pub fn read_reactions<R: Read>(source: R, path: &Path) -> Result<Vec<Reaction>> {
    let mut reactions = Vec::new();
    for record in csv_reader(source).into_records() {
        let record = record.map_err(|e| csv_error(path, e))?;
        let row = Row::new(&record, path);
        reactions.push(Reaction {
            user_id: row.id(0, "user_id")?,
            job_id: row.id(1, "job_id")?,
            liked: row.direction(2)?,
            timestamp: record.get(3).unwrap_or_default().to_string(),
        });
    }
    Ok(reactions)
}

/// Read jobs: `job_id, company_id`, header row first
pub fn read_jobs<R: Read>(source: R, path: &Path) -> Result<Vec<Job>> {
    let mut jobs = Vec::new();
    for record in csv_reader(source).into_records() {
        let record = record.map_err(|e| csv_error(path, e))?;
        let row = Row::new(&record, path);
        jobs.push(Job::new(row.id(0, "job_id")?, row.id(1, "company_id")?));
    }
    Ok(jobs)
}
