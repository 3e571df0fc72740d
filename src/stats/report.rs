use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use super::Statistics;
use crate::error::{Error, Result};

/// One labeled line of a statistics report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRecord {
    /// Name of the hash function that produced the table.
    pub label: String,
    pub statistics: Statistics,
}

impl ReportRecord {
    /// Tags `statistics` with `label`.
    ///
    /// The label must be non-empty and may contain neither whitespace nor `=`,
    /// otherwise the line could not be read back.
    pub fn new(label: impl Into<String>, statistics: Statistics) -> Result<Self> {
        let label = label.into();
        if label.is_empty() || label.chars().any(|c| c.is_whitespace() || c == '=') {
            return Err(Error::invalid_argument(format!(
                "report label `{label}` must be non-empty without whitespace or `=`"
            )));
        }
        Ok(Self { label, statistics })
    }
}

impl fmt::Display for ReportRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.statistics;
        write!(
            f,
            "label={} buckets={} total={} load_factor={:.6} min={} max={} variance={:.6} std_dev={:.6} lengths=",
            self.label,
            s.bucket_count(),
            s.total,
            s.load_factor,
            s.min,
            s.max,
            s.variance,
            s.std_dev
        )?;
        for (i, len) in s.bucket_lengths.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{len}")?;
        }
        Ok(())
    }
}

fn parse_count(key: &str, value: &str) -> Result<usize> {
    value
        .parse()
        .map_err(|_| Error::ParseRecord(format!("`{key}` is not a count: `{value}`")))
}

/// Parses a record line.
///
/// The floating point fields are recomputed from `lengths`; the integer
/// fields must agree with them.
impl FromStr for ReportRecord {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut label = None;
        let mut lengths = None;
        let mut declared = Vec::new();
        let mut seen: Vec<&str> = Vec::new();

        for field in line.split_whitespace() {
            let (key, value) = field
                .split_once('=')
                .ok_or_else(|| Error::ParseRecord(format!("field without `=`: `{field}`")))?;

            if seen.contains(&key) {
                return Err(Error::ParseRecord(format!("duplicate field `{key}`")));
            }
            seen.push(key);

            match key {
                "label" => label = Some(value.to_string()),
                "lengths" => {
                    let parsed = value
                        .split(',')
                        .map(|len| parse_count(key, len))
                        .collect::<Result<Vec<usize>>>()?;
                    lengths = Some(parsed);
                }
                "buckets" | "total" | "min" | "max" => {
                    declared.push((key, parse_count(key, value)?));
                }
                "load_factor" | "variance" | "std_dev" => {
                    value.parse::<f64>().map_err(|_| {
                        Error::ParseRecord(format!("`{key}` is not a number: `{value}`"))
                    })?;
                }
                other => {
                    return Err(Error::ParseRecord(format!("unknown field `{other}`")));
                }
            }
        }

        let label = label.ok_or_else(|| Error::ParseRecord("missing `label`".to_string()))?;
        let lengths = lengths.ok_or_else(|| Error::ParseRecord("missing `lengths`".to_string()))?;
        let statistics = Statistics::from_lengths(lengths);

        for (key, value) in declared {
            let expected = match key {
                "buckets" => statistics.bucket_count(),
                "total" => statistics.total,
                "min" => statistics.min,
                _ => statistics.max,
            };
            if value != expected {
                return Err(Error::ParseRecord(format!(
                    "`{key}={value}` disagrees with lengths ({expected})"
                )));
            }
        }

        ReportRecord::new(label, statistics)
            .map_err(|e| Error::ParseRecord(e.to_string()))
    }
}

/// Reads every record from a report, skipping blank lines.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<ReportRecord>> {
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(line.parse()?);
    }
    Ok(records)
}
