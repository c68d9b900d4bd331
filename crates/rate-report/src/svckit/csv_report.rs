//! CSV Report Output

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::error::Result;
use crate::model::{CSV_HEADER, PriceRecord};

/// Stable ascending sort by price; errored rows (price 0) come first
pub fn sort_by_price(records: &[PriceRecord]) -> Vec<PriceRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| a.price_in_reference.cmp(&b.price_in_reference));
    sorted
}

/// `exchange_rates_<YYYYMMDD-HHMMSS>.csv`
pub fn report_file_name(at: NaiveDateTime) -> String {
    format!("exchange_rates_{}.csv", at.format("%Y%m%d-%H%M%S"))
}

/// Write already-sorted records under `dir`, creating it if needed
pub fn write_report(dir: &Path, file_name: &str, records: &[PriceRecord]) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&path)?;
    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use temp_dir::TempDir;

    fn read_rows(path: &Path) -> Vec<Vec<String>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)
            .unwrap();
        reader
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn test_sort_puts_errors_first() {
        let records = vec![
            PriceRecord::new("A").with_price(dec!(5)),
            PriceRecord::new("B").with_error("ERROR: Invalid symbol"),
            PriceRecord::new("C").with_price(dec!(2)),
        ];

        let sorted = sort_by_price(&records);
        let tickers: Vec<&str> = sorted.iter().map(|r| r.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let records = vec![
            PriceRecord::new("X").with_error("ERROR: one"),
            PriceRecord::new("Y").with_price(dec!(0.1)),
            PriceRecord::new("Z").with_error("ERROR: two"),
        ];

        let sorted = sort_by_price(&records);
        let tickers: Vec<&str> = sorted.iter().map(|r| r.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["X", "Z", "Y"]);
    }

    #[test]
    fn test_sort_uses_decimal_ordering() {
        // "10" < "9" as strings, not as decimals
        let records = vec![
            PriceRecord::new("TEN").with_price(dec!(10)),
            PriceRecord::new("NINE").with_price(dec!(9.5)),
        ];
        let sorted = sort_by_price(&records);
        assert_eq!(sorted[0].ticker, "NINE");
    }

    #[test]
    fn test_report_file_name() {
        let at = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        assert_eq!(report_file_name(at), "exchange_rates_20240102-030405.csv");
    }

    #[test]
    fn test_write_creates_directory_and_round_trips() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("output");
        let records = sort_by_price(&[
            PriceRecord::new("ETH").with_price(dec!(0.05)),
            PriceRecord::new("DOGE").with_error("ERROR: Invalid symbol"),
        ]);

        let path = write_report(&dir, "report.csv", &records).unwrap();
        assert!(dir.is_dir());
        assert_eq!(path, dir.join("report.csv"));

        let rows = read_rows(&path);
        assert_eq!(rows[0], vec!["ticker", "price_in_btc", "error"]);
        assert_eq!(rows[1], vec!["DOGE", "0", "ERROR: Invalid symbol"]);
        assert_eq!(rows[2], vec!["ETH", "0.05", ""]);

        let parsed: Vec<PriceRecord> = rows[1..]
            .iter()
            .map(|row| PriceRecord {
                ticker: row[0].clone(),
                price_in_reference: row[1].parse::<Decimal>().unwrap(),
                error: Some(row[2].clone()).filter(|e| !e.is_empty()),
            })
            .collect();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_empty_report_still_has_header() {
        let tmp = TempDir::new().unwrap();
        let path = write_report(tmp.path(), "empty.csv", &[]).unwrap();
        let rows = read_rows(&path);
        assert_eq!(rows, vec![vec!["ticker", "price_in_btc", "error"]]);
    }

    #[test]
    fn test_existing_directory_is_fine() {
        let tmp = TempDir::new().unwrap();
        write_report(tmp.path(), "a.csv", &[]).unwrap();
        assert!(write_report(tmp.path(), "b.csv", &[]).is_ok());
    }
}
