use std::io::Write;

use tempfile::NamedTempFile;

use tdee_calc_rs::batch::{read_rows, run_batch};
use tdee_calc_rs::calculator::{BmrMode, calculate};
use tdee_calc_rs::interface::build_report;
use tdee_calc_rs::models::Inputs;

#[test]
fn test_report_for_katch_mcardle() {
    let derived = calculate(&Inputs::new(50.0, 30.0, 1, Some(1.0)), BmrMode::Tiered).unwrap();
    let report = build_report(&derived);

    assert!(report.steps.contains(
        "基礎代謝（Katch–McArdle） = 370 + 21.6 × LBM = 370 + 21.6 × 35.0 = 1126.0 kcal"
    ));
    assert!(report.result.contains("活動レベル: 座りがち (係数 1.2)"));
    // 1351.2 - 257 = 1094.2
    assert!(report.low_intake_warning);
    assert!(report
        .target_summary
        .unwrap()
        .contains("推奨摂取カロリー: 1094 kcal/日"));
}

#[test]
fn test_report_for_cunningham() {
    let derived = calculate(&Inputs::new(90.0, 15.0, 4, None), BmrMode::Tiered).unwrap();
    let report = build_report(&derived);

    assert!(report.steps.contains("500 + 22 × 76.5 = 2183.0 kcal"));
    assert!(report.result.contains("使用式: Cunningham"));
    assert!(!report.low_intake_warning);
}

#[test]
fn test_json_output_names_formula() {
    let derived = calculate(&Inputs::new(70.0, 20.0, 3, Some(2.0)), BmrMode::Tiered).unwrap();
    let json: serde_json::Value = serde_json::to_value(&derived).unwrap();

    assert_eq!(json["bmr"]["formula"], "Simple");
    assert_eq!(json["activity"], "ModeratelyActive");
    assert_eq!(json["target"]["deficit_per_day_kcal"], 513);
    assert_eq!(json["food_equivalents"]["eggs"], 20);
}

#[test]
fn test_batch_writes_every_row() {
    let csv = "weight_kg,body_fat_pct,activity,target_loss_kg_per_month\n\
               70,20,3,2.0\n\
               70,150,3,\n\
               90,15,4,\n";
    let mut input = NamedTempFile::new().unwrap();
    input.write_all(csv.as_bytes()).unwrap();
    let output = NamedTempFile::new().unwrap();

    assert_eq!(read_rows(input.path()).unwrap().len(), 3);

    let (rows, failed) = run_batch(input.path(), output.path(), BmrMode::Tiered).unwrap();
    assert_eq!(rows, 3);
    assert_eq!(failed, 1);

    let mut rdr = csv::Reader::from_path(output.path()).unwrap();
    let headers = rdr.headers().unwrap().clone();
    let formula_col = headers.iter().position(|h| h == "formula").unwrap();
    let error_col = headers.iter().position(|h| h == "error").unwrap();

    let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 3);
    assert_eq!(&records[0][formula_col], "簡易式");
    assert!(records[0][error_col].is_empty());
    assert!(records[1][formula_col].is_empty());
    assert!(records[1][error_col].contains("body fat"));
    assert_eq!(&records[2][formula_col], "Cunningham");
}

#[test]
fn test_batch_unparsable_row_does_not_abort() {
    let csv = "weight_kg,body_fat_pct,activity,target_loss_kg_per_month\n\
               70,20,3,2.0\n\
               abc,20,3,\n\
               90,15,sedentary,\n";
    let mut input = NamedTempFile::new().unwrap();
    input.write_all(csv.as_bytes()).unwrap();
    let output = NamedTempFile::new().unwrap();

    let (rows, failed) = run_batch(input.path(), output.path(), BmrMode::Tiered).unwrap();
    assert_eq!(rows, 3);
    assert_eq!(failed, 1);

    let mut rdr = csv::Reader::from_path(output.path()).unwrap();
    let headers = rdr.headers().unwrap().clone();
    let col = |name: &str| headers.iter().position(|h| h == name).unwrap();
    let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();

    assert_eq!(records.len(), 3);
    assert_eq!(&records[1][col("weight_kg")], "abc");
    assert!(records[1][col("error")].contains("weight_kg"));
    assert!(records[1][col("tdee_kcal")].is_empty());

    // Activity given by name
    assert_eq!(&records[2][col("activity")], "sedentary");
    assert_eq!(&records[2][col("formula")], "Cunningham");
    assert!(records[2][col("error")].is_empty());
}

#[test]
fn test_batch_missing_input_is_an_error() {
    let output = NamedTempFile::new().unwrap();
    let result = run_batch(
        std::path::Path::new("no/such/input.csv"),
        output.path(),
        BmrMode::Tiered,
    );
    assert!(result.is_err());
}
