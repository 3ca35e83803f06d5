//! CSV Loader
//!
//! Reads the launch records file into a [`LaunchDataset`].
//! Columns are located by header name; unknown columns are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::error::{DatasetError, DatasetResult};
use super::types::{LaunchDataset, LaunchRecord, Outcome};

/// Maximum number of row errors kept in a [`LoadReport`]
const MAX_REPORTED_ERRORS: usize = 100;

/// Header names of the columns the loader reads
#[derive(Debug, Clone)]
pub struct ColumnNames {
    pub launch_site: String,
    pub payload_mass: String,
    pub outcome: String,
    pub booster_version_category: String,
    /// Optional column, hover text only
    pub flight_number: String,
    /// Optional column, hover text only
    pub booster_version: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            launch_site: "Launch Site".to_string(),
            payload_mass: "Payload Mass (kg)".to_string(),
            outcome: "class".to_string(),
            booster_version_category: "Booster Version Category".to_string(),
            flight_number: "Flight Number".to_string(),
            booster_version: "Booster Version".to_string(),
        }
    }
}

/// Resolved column positions for one file
struct ColumnIndex {
    launch_site: usize,
    payload_mass: usize,
    outcome: usize,
    booster_version_category: usize,
    flight_number: Option<usize>,
    booster_version: Option<usize>,
}

impl ColumnIndex {
    fn resolve(headers: &csv::StringRecord, names: &ColumnNames) -> DatasetResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &str| find(name).ok_or_else(|| DatasetError::MissingColumn(name.to_string()));

        Ok(Self {
            launch_site: require(&names.launch_site)?,
            payload_mass: require(&names.payload_mass)?,
            outcome: require(&names.outcome)?,
            booster_version_category: require(&names.booster_version_category)?,
            flight_number: find(&names.flight_number),
            booster_version: find(&names.booster_version),
        })
    }
}

/// Summary of a load
#[derive(Debug, Default)]
pub struct LoadReport {
    pub rows_loaded: usize,
    pub rows_failed: usize,
    pub errors: Vec<String>,
}

/// A loaded dataset plus the report describing how it was read
#[derive(Debug)]
pub struct LoadedDataset {
    pub dataset: LaunchDataset,
    pub report: LoadReport,
}

/// Launch records loader with configurable column names
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    columns: ColumnNames,
    delimiter: u8,
    /// Fail on the first malformed row instead of skipping it
    strict: bool,
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetLoader {
    pub fn new() -> Self {
        Self {
            columns: ColumnNames::default(),
            delimiter: b',',
            strict: false,
        }
    }

    /// Set the header names to look for
    pub fn with_columns(mut self, columns: ColumnNames) -> Self {
        self.columns = columns;
        self
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set strict mode
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Load records from a file
    pub fn load(&self, path: &Path) -> DatasetResult<LoadedDataset> {
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let loaded = self.read(file)?;
        tracing::info!(
            path = %path.display(),
            rows = loaded.report.rows_loaded,
            failed = loaded.report.rows_failed,
            sites = loaded.dataset.sites().len(),
            "Loaded launch dataset"
        );
        Ok(loaded)
    }

    /// Load records from an in-memory CSV string
    pub fn load_str(&self, csv_data: &str) -> DatasetResult<LoadedDataset> {
        self.read(csv_data.as_bytes())
    }

    fn read<R: Read>(&self, source: R) -> DatasetResult<LoadedDataset> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(self.delimiter)
            .flexible(true)
            .from_reader(source);

        let headers = reader.headers()?.clone();
        let index = ColumnIndex::resolve(&headers, &self.columns)?;

        let mut records = Vec::new();
        let mut report = LoadReport::default();

        for (row_num, result) in reader.records().enumerate() {
            // Header occupies line 1
            let line = row_num + 2;

            let parsed = result
                .map_err(|e| DatasetError::InvalidRow {
                    line,
                    reason: e.to_string(),
                })
                .and_then(|row| self.parse_row(&row, &index, line));

            match parsed {
                Ok(record) => {
                    records.push(record);
                    report.rows_loaded += 1;
                }
                Err(e) if self.strict => return Err(e),
                Err(e) => {
                    tracing::warn!(line, error = %e, "Skipping malformed launch record");
                    report.rows_failed += 1;
                    report.errors.push(e.to_string());
                }
            }
        }

        if report.errors.len() > MAX_REPORTED_ERRORS {
            let total = report.errors.len();
            report.errors.truncate(MAX_REPORTED_ERRORS);
            report
                .errors
                .push(format!("... and {} more errors", total - MAX_REPORTED_ERRORS));
        }

        let dataset = LaunchDataset::new(records)?;
        Ok(LoadedDataset { dataset, report })
    }

    fn parse_row(
        &self,
        row: &csv::StringRecord,
        index: &ColumnIndex,
        line: usize,
    ) -> DatasetResult<LaunchRecord> {
        let invalid = |reason: String| DatasetError::InvalidRow { line, reason };
        let field = |idx: usize, name: &str| {
            row.get(idx)
                .map(str::trim)
                .ok_or_else(|| invalid(format!("missing {} field", name)))
        };

        let launch_site = field(index.launch_site, &self.columns.launch_site)?;
        if launch_site.is_empty() {
            return Err(invalid("empty launch site".to_string()));
        }

        let payload_raw = field(index.payload_mass, &self.columns.payload_mass)?;
        let payload_mass_kg: f64 = payload_raw
            .parse()
            .ok()
            .filter(|v: &f64| v.is_finite())
            .ok_or_else(|| invalid(format!("invalid payload mass '{}'", payload_raw)))?;

        let outcome_raw = field(index.outcome, &self.columns.outcome)?;
        let outcome = Outcome::from_class(outcome_raw)
            .ok_or_else(|| invalid(format!("invalid outcome flag '{}'", outcome_raw)))?;

        let category = field(
            index.booster_version_category,
            &self.columns.booster_version_category,
        )?;

        let mut record = LaunchRecord::new(launch_site, payload_mass_kg, outcome, category);

        if let Some(number) = index
            .flight_number
            .and_then(|idx| row.get(idx))
            .and_then(|s| s.trim().parse::<u32>().ok())
        {
            record = record.flight_number(number);
        }

        if let Some(version) = index
            .booster_version
            .and_then(|idx| row.get(idx))
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            record = record.booster_version(version);
        }

        Ok(record)
    }
}

/// Load a dataset file with default column names
pub fn load_dataset(path: &Path, strict: bool) -> DatasetResult<LoadedDataset> {
    DatasetLoader::new().with_strict(strict).load(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const REFERENCE_CSV: &str = ",Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,0,0.0,F9 v1.0  B0004,v1.0
2,3,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0
3,4,VAFB SLC-4E,1,500.0,F9 v1.1  B1003,v1.1
4,5,KSC LC-39A,1,9600.0,F9 FT B1031.1,FT";

    #[test]
    fn test_load_reference_layout() {
        let loaded = DatasetLoader::new().load_str(REFERENCE_CSV).unwrap();
        let dataset = loaded.dataset;

        assert_eq!(loaded.report.rows_loaded, 5);
        assert_eq!(loaded.report.rows_failed, 0);
        assert_eq!(
            dataset.sites(),
            &[
                "CCAFS LC-40".to_string(),
                "VAFB SLC-4E".to_string(),
                "KSC LC-39A".to_string()
            ]
        );
        assert_eq!(dataset.payload_bounds().low, 0.0);
        assert_eq!(dataset.payload_bounds().high, 9600.0);

        let first = &dataset.records()[0];
        assert_eq!(first.outcome, Outcome::Failure);
        assert_eq!(first.flight_number, Some(1));
        assert_eq!(first.booster_version.as_deref(), Some("F9 v1.0  B0003"));
        assert_eq!(first.booster_version_category, "v1.0");
    }

    #[test]
    fn test_optional_columns_absent() {
        let csv_data = "Launch Site,Payload Mass (kg),class,Booster Version Category
A,100,1,FT";
        let loaded = DatasetLoader::new().load_str(csv_data).unwrap();
        let record = &loaded.dataset.records()[0];
        assert_eq!(record.flight_number, None);
        assert_eq!(record.booster_version, None);
    }

    #[test]
    fn test_missing_required_column() {
        let csv_data = "Launch Site,Payload Mass (kg),Booster Version Category
A,100,FT";
        let err = DatasetLoader::new().load_str(csv_data).unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn(ref c) if c == "class"));
    }

    #[test]
    fn test_malformed_rows_skipped() {
        let csv_data = "Launch Site,Payload Mass (kg),class,Booster Version Category
A,100,1,FT
A,heavy,1,FT
B,200,7,B4
B,300,0,B4";
        let loaded = DatasetLoader::new().load_str(csv_data).unwrap();

        assert_eq!(loaded.report.rows_loaded, 2);
        assert_eq!(loaded.report.rows_failed, 2);
        assert!(loaded.report.errors[0].starts_with("Line 3:"));
        assert!(loaded.report.errors[1].starts_with("Line 4:"));
        assert_eq!(loaded.dataset.len(), 2);
    }

    #[test]
    fn test_strict_mode_fails_fast() {
        let csv_data = "Launch Site,Payload Mass (kg),class,Booster Version Category
A,100,1,FT
A,,1,FT";
        let err = DatasetLoader::new()
            .with_strict(true)
            .load_str(csv_data)
            .unwrap_err();
        assert!(matches!(err, DatasetError::InvalidRow { line: 3, .. }));
    }

    #[test]
    fn test_all_rows_bad_is_empty() {
        let csv_data = "Launch Site,Payload Mass (kg),class,Booster Version Category
A,x,1,FT";
        let err = DatasetLoader::new().load_str(csv_data).unwrap_err();
        assert!(matches!(err, DatasetError::Empty));
    }

    #[test]
    fn test_custom_delimiter() {
        let csv_data = "Launch Site;Payload Mass (kg);class;Booster Version Category
A;100;1;FT";
        let loaded = DatasetLoader::new()
            .with_delimiter(b';')
            .load_str(csv_data)
            .unwrap();
        assert_eq!(loaded.dataset.len(), 1);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(REFERENCE_CSV.as_bytes()).unwrap();

        let loaded = load_dataset(file.path(), true).unwrap();
        assert_eq!(loaded.dataset.len(), 5);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_dataset(Path::new("/nonexistent/launches.csv"), false).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }
}
