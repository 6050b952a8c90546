use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::calculator::{BmrMode, calculate};
use crate::error::{Result, TdeeError};
use crate::models::{ActivityLevel, Derived, Inputs};

/// One input line as text, before any parsing.
///
/// Short rows leave the missing columns empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawRow {
    pub weight_kg: String,
    pub body_fat_pct: String,
    /// Key 1-5 or a level name.
    pub activity: String,
    pub target_loss_kg_per_month: Option<String>,
}

/// A raw row, or the reason its line could not be read.
pub type RowResult = std::result::Result<RawRow, String>;

fn parse_number(column: &str, text: &str) -> Result<f64> {
    text.trim()
        .parse()
        .map_err(|_| TdeeError::InvalidInput(format!("{} is not a number: {:?}", column, text)))
}

impl RawRow {
    /// Parse the text columns into calculator inputs.
    pub fn to_inputs(&self) -> Result<Inputs> {
        let weight_kg = parse_number("weight_kg", &self.weight_kg)?;
        let body_fat_pct = parse_number("body_fat_pct", &self.body_fat_pct)?;
        let activity = ActivityLevel::resolve(&self.activity)?;
        let target = match self.target_loss_kg_per_month.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(text) => Some(parse_number("target_loss_kg_per_month", text)?),
        };

        Ok(Inputs::new(
            weight_kg,
            body_fat_pct,
            i64::from(activity.key()),
            target,
        ))
    }
}

/// One output CSV row. Computed columns stay empty when the row failed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchRow {
    pub row: usize,
    pub weight_kg: String,
    pub body_fat_pct: String,
    pub activity: String,
    pub target_loss_kg_per_month: Option<String>,
    pub lean_mass_kg: Option<f64>,
    pub formula: Option<String>,
    pub bmr_kcal: Option<f64>,
    pub tdee_kcal: Option<f64>,
    pub deficit_per_day_kcal: Option<i64>,
    pub recommended_intake_kcal: Option<f64>,
    pub weekly_loss_kg: Option<f64>,
    pub protein_g: Option<f64>,
    pub fat_g: Option<f64>,
    pub carb_g: Option<f64>,
    pub chicken_g: Option<i64>,
    pub eggs: Option<i64>,
    pub oil_tbsp: Option<f64>,
    pub rice_g: Option<i64>,
    pub pasta_g: Option<i64>,
    pub udon_g: Option<i64>,
    pub low_intake_warning: Option<bool>,
    pub error: Option<String>,
}

impl BatchRow {
    fn failed(row: usize, error: String) -> Self {
        warn!(row, %error, "skipping invalid row");
        Self {
            row,
            error: Some(error),
            ..Default::default()
        }
    }

    fn fill(&mut self, derived: &Derived) {
        self.lean_mass_kg = Some(round_to(derived.lean_mass_kg, 2));
        self.formula = Some(derived.bmr.formula.name().to_string());
        self.bmr_kcal = Some(round_to(derived.bmr.kcal, 2));
        self.tdee_kcal = Some(round_to(derived.tdee_kcal, 2));
        if let Some(target) = derived.target {
            self.deficit_per_day_kcal = Some(target.deficit_per_day_kcal);
            self.recommended_intake_kcal = Some(round_to(target.recommended_intake_kcal, 2));
            self.weekly_loss_kg = Some(round_to(target.weekly_loss_kg, 3));
        }
        self.protein_g = Some(round_to(derived.macro_grams.protein, 1));
        self.fat_g = Some(round_to(derived.macro_grams.fat, 1));
        self.carb_g = Some(round_to(derived.macro_grams.carb, 1));

        let food = derived.food_equivalents;
        self.chicken_g = Some(food.chicken_g);
        self.eggs = Some(food.eggs);
        self.oil_tbsp = Some(round_to(food.oil_tbsp, 1));
        self.rice_g = Some(food.rice_g);
        self.pasta_g = Some(food.pasta_g);
        self.udon_g = Some(food.udon_g);
        self.low_intake_warning = Some(derived.low_intake_warning());
    }
}

/// Round to n decimal places for the CSV.
fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Calculate one input row. Parse and validation failures land in `error`.
pub fn process_row(row: usize, raw: &RawRow, mode: BmrMode) -> BatchRow {
    let result = raw.to_inputs().and_then(|inputs| calculate(&inputs, mode));

    let mut out = match result {
        Ok(derived) => {
            let mut out = BatchRow {
                row,
                ..Default::default()
            };
            out.fill(&derived);
            out
        }
        Err(e) => BatchRow::failed(row, e.to_string()),
    };

    out.weight_kg = raw.weight_kg.clone();
    out.body_fat_pct = raw.body_fat_pct.clone();
    out.activity = raw.activity.clone();
    out.target_loss_kg_per_month = raw.target_loss_kg_per_month.clone();
    out
}

/// Fail unless `path` is an existing file.
pub fn check_input(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(TdeeError::InvalidInput(format!(
            "input file not found: {}",
            path.display()
        )))
    }
}

/// Read every data line of a CSV file with a header line.
///
/// A line that cannot be read as a row is returned as `Err` with the reason;
/// only I/O failures abort the read.
pub fn read_rows<P: AsRef<Path>>(path: P) -> Result<Vec<RowResult>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)?;
    let headers = rdr.headers()?.clone();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let row = match record {
            Ok(record) => record
                .deserialize::<RawRow>(Some(&headers))
                .map_err(|e| e.to_string()),
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => Err(e.to_string()),
        };
        rows.push(row);
    }
    Ok(rows)
}

pub fn write_rows<P: AsRef<Path>>(path: P, rows: &[BatchRow]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Calculate every row of `input` and write the results to `output`.
///
/// Returns (rows written, rows that failed).
pub fn run_batch(input: &Path, output: &Path, mode: BmrMode) -> Result<(usize, usize)> {
    check_input(input)?;
    let raw_rows = read_rows(input)?;
    info!(rows = raw_rows.len(), path = %input.display(), "loaded batch input");

    // Row numbers are 1-based data lines, header excluded
    let rows: Vec<BatchRow> = raw_rows
        .iter()
        .enumerate()
        .map(|(i, raw)| match raw {
            Ok(raw) => process_row(i + 1, raw, mode),
            Err(reason) => BatchRow::failed(i + 1, reason.clone()),
        })
        .collect();
    let failed = rows.iter().filter(|r| r.error.is_some()).count();

    write_rows(output, &rows)?;
    info!(rows = rows.len(), failed, path = %output.display(), "wrote batch output");

    Ok((rows.len(), failed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn raw(weight: &str, body_fat: &str, activity: &str, target: Option<&str>) -> RawRow {
        RawRow {
            weight_kg: weight.to_string(),
            body_fat_pct: body_fat.to_string(),
            activity: activity.to_string(),
            target_loss_kg_per_month: target.map(str::to_string),
        }
    }

    #[test]
    fn test_process_row_valid() {
        let row = process_row(1, &raw("70", "20", "3", Some("2.0")), BmrMode::Tiered);
        assert!(row.error.is_none());
        assert_eq!(row.formula.as_deref(), Some("簡易式"));
        assert_eq!(row.tdee_kcal, Some(2430.4));
        assert_eq!(row.deficit_per_day_kcal, Some(513));
        assert_eq!(row.eggs, Some(20));
        assert_eq!(row.low_intake_warning, Some(false));
    }

    #[test]
    fn test_process_row_invalid_keeps_inputs() {
        let row = process_row(4, &raw("70", "120", "3", None), BmrMode::Tiered);
        assert_eq!(row.row, 4);
        assert_eq!(row.body_fat_pct, "120");
        assert!(row.error.unwrap().contains("body fat"));
        assert!(row.tdee_kcal.is_none());
    }

    #[test]
    fn test_process_row_unparsable_weight() {
        let row = process_row(2, &raw("abc", "20", "3", None), BmrMode::Tiered);
        assert_eq!(row.weight_kg, "abc");
        assert!(row.error.unwrap().contains("weight_kg"));
        assert!(row.formula.is_none());
    }

    #[test]
    fn test_to_inputs_resolves_activity_name() {
        let inputs = raw("90", "15", "sedentary", Some("")).to_inputs().unwrap();
        assert_eq!(inputs.activity, 1);
        assert_eq!(inputs.target_loss_kg_per_month, None);
    }

    #[test]
    fn test_read_rows_optional_target() {
        let csv = "weight_kg,body_fat_pct,activity,target_loss_kg_per_month\n\
                   70,20,3,2.0\n\
                   55, 25, 1,\n\
                   60\n";
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let rows = read_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 3);
        let first = rows[0].as_ref().unwrap();
        assert_eq!(first.target_loss_kg_per_month.as_deref(), Some("2.0"));
        let second = rows[1].as_ref().unwrap();
        assert_eq!(second.activity, "1");

        // Short line reads with empty columns and fails later on parse
        let short = rows[2].as_ref().unwrap();
        assert_eq!(short.weight_kg, "60");
        assert!(short.to_inputs().is_err());
    }

    #[test]
    fn test_run_batch_missing_input() {
        let output = NamedTempFile::new().unwrap();
        let err = run_batch(
            Path::new("does/not/exist.csv"),
            output.path(),
            BmrMode::Tiered,
        )
        .unwrap_err();
        assert!(matches!(err, TdeeError::InvalidInput(_)));
    }
}
