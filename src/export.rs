use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::{constants::CSV_HEADER, domain::PlantingRecord, storage};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("could not build CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("could not finish CSV buffer: {0}")]
    Buffer(String),
    #[error("could not write {path}: {reason}")]
    Write { path: String, reason: String },
}

/// One CSV line: crop, area, the date as typed, and profit to two decimals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    pub crop: String,
    pub area: String,
    pub date: String,
    pub profit: String,
}

impl From<&PlantingRecord> for ExportRow {
    fn from(record: &PlantingRecord) -> Self {
        Self {
            crop: record.crop().to_string(),
            area: record.area().to_string(),
            date: record.date_text().to_string(),
            profit: format!("{:.2}", record.total_profit()),
        }
    }
}

pub fn export_rows(records: &[PlantingRecord]) -> Vec<ExportRow> {
    records.iter().map(ExportRow::from).collect()
}

pub fn render_csv(records: &[PlantingRecord]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for row in export_rows(records) {
        writer.serialize(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Buffer(e.to_string()))
}

pub fn export_to_file(path: &Path, records: &[PlantingRecord]) -> Result<(), ExportError> {
    let content = render_csv(records)?;
    storage::atomic_write(path, content.as_bytes()).map_err(|reason| ExportError::Write {
        path: path.display().to_string(),
        reason,
    })?;
    info!(path = %path.display(), rows = records.len(), "records exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::{
        domain::RecordStore,
        storage::unique_path,
        validation::{submission, validate_submission},
    };

    fn store_with(rows: &[(&str, &str, &str)]) -> RecordStore {
        let mut store = RecordStore::new();
        for (crop, area, date) in rows {
            let draft =
                validate_submission(&submission(crop, area, date, "100", "50", "300")).unwrap();
            store.insert(PlantingRecord::from_draft(draft));
        }
        store
    }

    #[test]
    fn test_render_csv_header_only_when_empty() {
        let csv = render_csv(&[]).unwrap();
        assert_eq!(csv, "Cultura,Área (ha),Data,Lucro (R$)\n");
    }

    #[test]
    fn test_render_csv_rows_newest_first() {
        let store = store_with(&[("Milho", "2", "01/01/2025"), ("Soja", "1.5", "10/02/2025")]);
        let csv = render_csv(store.all()).unwrap();

        assert_eq!(
            csv,
            "Cultura,Área (ha),Data,Lucro (R$)\n\
             Soja,1.5,10/02/2025,225.00\n\
             Milho,2,01/01/2025,300.00\n"
        );
    }

    #[test]
    fn test_render_csv_quotes_commas_in_crop() {
        let store = store_with(&[("Milho, safrinha", "1", "01/01/2025")]);
        let csv = render_csv(store.all()).unwrap();
        assert!(csv.contains("\"Milho, safrinha\",1,01/01/2025,150.00"));
    }

    #[test]
    fn test_export_to_file_writes_csv() {
        let path = unique_path("seedfall_export", "csv");
        let store = store_with(&[("Trigo", "3", "05/05/2025")]);

        export_to_file(&path, store.all()).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("Cultura,Área (ha),Data,Lucro (R$)\n"));
        assert!(written.contains("Trigo,3,05/05/2025,450.00"));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_export_to_missing_dir_fails() {
        let path = Path::new("/nonexistent-seedfall-dir/out.csv");
        assert!(matches!(
            export_to_file(path, &[]),
            Err(ExportError::Write { .. })
        ));
    }
}
