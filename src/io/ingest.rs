//! CSV ingest of source parameters.
//!
//! One row per source. Masses come either as `chirp_mass,mass_ratio` or as
//! component masses `mass_1,mass_2` (M☉). Spins, phase, inclination and `tc`
//! default to zero when their column is absent; `distance` (Mpc) is required.
//!
//! Aligned-spin columns: `chi1,chi2`. Precessing columns:
//! `chi1x,chi1y,chi1z,chi2x,chi2y,chi2z`.
//!
//! Rows that fail to parse or validate are skipped and reported with their
//! line number; an input with no usable rows is an error.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::conversion::{chirp_mass, mass_ratio};
use crate::domain::{
    AlignedSpinBatch, AlignedSpinParams, PrecessingSpinBatch, PrecessingSpinParams,
    SourceParameters,
};
use crate::error::WaveformError;

/// A row-level error encountered during ingest.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

/// Parsed parameters plus what was skipped.
#[derive(Debug, Clone)]
pub struct IngestedParams {
    pub params: SourceParameters<f64>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
    pub rows_used: usize,
}

pub fn load_parameters(path: &Path, precessing: bool) -> Result<IngestedParams, WaveformError> {
    let file = File::open(path)
        .map_err(|e| WaveformError::io(format!("failed to open CSV '{}'", path.display()), e))?;
    read_parameters(file, precessing)
}

pub fn read_parameters<R: Read>(reader: R, precessing: bool) -> Result<IngestedParams, WaveformError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| WaveformError::Parse(format!("failed to read CSV headers: {e}")))?
        .clone();
    let header_map = build_header_map(&headers);
    ensure_required_columns_exist(&header_map)?;

    let mut aligned = Vec::new();
    let mut twisted = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // Line 1 is the header.
        let line = idx + 2;
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        let parsed = if precessing {
            parse_precessing(&record, &header_map).map(|p| twisted.push(p))
        } else {
            parse_aligned(&record, &header_map).map(|p| aligned.push(p))
        };
        if let Err(message) = parsed {
            row_errors.push(RowError { line, message });
        }
    }

    let rows_used = aligned.len() + twisted.len();
    if rows_used == 0 {
        return Err(WaveformError::Parse(match row_errors.first() {
            Some(e) => format!("no valid rows (line {}: {})", e.line, e.message),
            None => "no rows in parameter CSV".to_string(),
        }));
    }

    let params = if precessing {
        SourceParameters::Precessing(PrecessingSpinBatch::from_rows(&twisted))
    } else {
        SourceParameters::Aligned(AlignedSpinBatch::from_rows(&aligned))
    };

    Ok(IngestedParams {
        params,
        row_errors,
        rows_read,
        rows_used,
    })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports may prefix the first header with a BOM.
    name.trim().trim_start_matches('\u{feff}').to_ascii_lowercase()
}

fn ensure_required_columns_exist(header_map: &HashMap<String, usize>) -> Result<(), WaveformError> {
    let has = |k: &str| header_map.contains_key(k);
    if !(has("chirp_mass") && has("mass_ratio")) && !(has("mass_1") && has("mass_2")) {
        return Err(WaveformError::Parse(
            "missing mass columns: need `chirp_mass,mass_ratio` or `mass_1,mass_2`".to_string(),
        ));
    }
    if !has("distance") {
        return Err(WaveformError::Parse("missing required column: `distance`".to_string()));
    }
    Ok(())
}

fn get_optional<'a>(
    record: &'a StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
) -> Option<&'a str> {
    let idx = header_map.get(name)?;
    record.get(*idx).map(str::trim).filter(|s| !s.is_empty())
}

fn parse_field(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
    default: Option<f64>,
) -> Result<f64, String> {
    let Some(raw) = get_optional(record, header_map, name) else {
        return default.ok_or_else(|| format!("missing required value: `{name}`"));
    };
    let v = raw
        .parse::<f64>()
        .map_err(|_| format!("invalid number for `{name}`: {raw:?}"))?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(format!("non-finite value for `{name}`"))
    }
}

/// `(chirp_mass, mass_ratio)` from whichever mass columns the file has.
fn parse_masses(record: &StringRecord, header_map: &HashMap<String, usize>) -> Result<(f64, f64), String> {
    if header_map.contains_key("chirp_mass") {
        let mc = parse_field(record, header_map, "chirp_mass", None)?;
        let q = parse_field(record, header_map, "mass_ratio", None)?;
        if mc <= 0.0 {
            return Err("`chirp_mass` must be positive".to_string());
        }
        if !(q > 0.0 && q.is_finite()) {
            return Err(format!("`mass_ratio` must be positive (got {q})"));
        }
        return Ok((mc, q));
    }
    let m1 = parse_field(record, header_map, "mass_1", None)?;
    let m2 = parse_field(record, header_map, "mass_2", None)?;
    if m1 <= 0.0 || m2 <= 0.0 {
        return Err("component masses must be positive".to_string());
    }
    Ok((chirp_mass(m1, m2), mass_ratio(m1, m2)))
}

fn parse_distance(record: &StringRecord, header_map: &HashMap<String, usize>) -> Result<f64, String> {
    let d = parse_field(record, header_map, "distance", None)?;
    if d > 0.0 { Ok(d) } else { Err(format!("`distance` must be positive (got {d})")) }
}

fn parse_aligned(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
) -> Result<AlignedSpinParams<f64>, String> {
    let (chirp_mass, mass_ratio) = parse_masses(record, header_map)?;
    let field = |name| parse_field(record, header_map, name, Some(0.0));
    let (chi1, chi2) = (field("chi1")?, field("chi2")?);
    if chi1.abs() > 1.0 || chi2.abs() > 1.0 {
        return Err("aligned spins must lie in [-1, 1]".to_string());
    }
    Ok(AlignedSpinParams {
        chirp_mass,
        mass_ratio,
        chi1,
        chi2,
        distance: parse_distance(record, header_map)?,
        phase: field("phase")?,
        inclination: field("inclination")?,
    })
}

fn parse_precessing(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
) -> Result<PrecessingSpinParams<f64>, String> {
    let (chirp_mass, mass_ratio) = parse_masses(record, header_map)?;
    let field = |name| parse_field(record, header_map, name, Some(0.0));
    let s1 = [field("chi1x")?, field("chi1y")?, field("chi1z")?];
    let s2 = [field("chi2x")?, field("chi2y")?, field("chi2z")?];
    for (body, s) in [(1, s1), (2, s2)] {
        let norm = s.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm > 1.0 {
            return Err(format!("spin {body} magnitude {norm:.4} above 1"));
        }
    }
    Ok(PrecessingSpinParams {
        chirp_mass,
        mass_ratio,
        chi1x: s1[0],
        chi1y: s1[1],
        chi1z: s1[2],
        chi2x: s2[0],
        chi2y: s2[1],
        chi2z: s2[2],
        distance: parse_distance(record, header_map)?,
        tc: field("tc")?,
        phase: field("phase")?,
        inclination: field("inclination")?,
    })
}
