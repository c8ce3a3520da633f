use crate::constants::datetime::SECONDS_PER_DAY;
use crate::data::series::SampleSeries;
use crate::error::{Result, SpcError};
use polars::prelude::*;
use std::path::{Path, PathBuf};

/// DataSource wraps a materialized Polars DataFrame loaded from CSV or Parquet
pub struct DataSource {
    frame: DataFrame,
    /// Original file path
    file_path: Option<PathBuf>,
}

impl DataSource {
    /// Load data from a file (CSV or Parquet)
    pub fn load(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| SpcError::UnsupportedFormat {
                extension: String::new(),
            })?;

        let lazy = match extension.to_lowercase().as_str() {
            "parquet" => LazyFrame::scan_parquet(path, Default::default())?,
            "csv" => LazyCsvReader::new(path)
                .with_has_header(true)
                .with_infer_schema_length(Some(100))
                .with_try_parse_dates(true)
                .finish()?,
            ext => {
                return Err(SpcError::UnsupportedFormat {
                    extension: ext.to_string(),
                });
            }
        };

        let frame = lazy.collect()?;
        tracing::info!(
            path = %path.display(),
            rows = frame.height(),
            columns = frame.width(),
            "data source loaded"
        );

        Ok(Self {
            frame,
            file_path: Some(path.to_path_buf()),
        })
    }

    /// Create DataSource from an already-loaded DataFrame
    pub fn from_dataframe(frame: DataFrame) -> Self {
        Self {
            frame,
            file_path: None,
        }
    }

    pub fn dataframe(&self) -> &DataFrame {
        &self.frame
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn column_values(&self, name: &str) -> Result<Series> {
        self.frame
            .column(name)
            .map(|c| c.as_materialized_series().clone())
            .map_err(|_| SpcError::ColumnNotFound {
                column: name.to_string(),
            })
    }

    /// Get a column's values as Vec<f64>
    /// Missing or non-numeric values become NaN
    /// Datetime/Date columns are converted to Unix timestamps (seconds since epoch)
    pub fn column_as_f64(&self, name: &str) -> Result<Vec<f64>> {
        let series = self.column_values(name)?;

        match series.dtype() {
            DataType::Datetime(unit, _) => {
                let per_second = match unit {
                    TimeUnit::Nanoseconds => 1_000_000_000.0,
                    TimeUnit::Microseconds => 1_000_000.0,
                    TimeUnit::Milliseconds => 1_000.0,
                };
                let timestamps = series
                    .datetime()?
                    .into_iter()
                    .map(|opt| opt.map(|ts| ts as f64 / per_second).unwrap_or(f64::NAN))
                    .collect();
                return Ok(timestamps);
            }
            DataType::Date => {
                let timestamps = series
                    .date()?
                    .into_iter()
                    .map(|opt| {
                        opt.map(|days| days as f64 * SECONDS_PER_DAY)
                            .unwrap_or(f64::NAN)
                    })
                    .collect();
                return Ok(timestamps);
            }
            DataType::String => {
                let parsed = series
                    .str()?
                    .into_iter()
                    .map(|opt| {
                        opt.and_then(|s| s.trim().parse::<f64>().ok())
                            .unwrap_or(f64::NAN)
                    })
                    .collect();
                return Ok(parsed);
            }
            _ => {}
        }

        let cast = series.cast(&DataType::Float64)?;
        Ok(cast
            .f64()?
            .into_iter()
            .map(|opt| opt.unwrap_or(f64::NAN))
            .collect())
    }

    /// Extract the (x, y) columns as a cleaned, sorted sample series
    pub fn samples(&self, x_column: &str, y_column: &str) -> Result<SampleSeries> {
        profiling::scope!("DataSource::samples");

        let xs = self.column_as_f64(x_column)?;
        let ys = self.column_as_f64(y_column)?;
        let raw_rows = xs.len();
        let series = SampleSeries::from_pairs(xs.into_iter().zip(ys))?;

        if series.len() < raw_rows {
            tracing::debug!(
                dropped = raw_rows - series.len(),
                "rows dropped as missing or duplicate"
            );
        }
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_csv_samples() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "time,thickness,operator").unwrap();
        writeln!(file, "3,11.0,a").unwrap();
        writeln!(file, "1,10.0,b").unwrap();
        writeln!(file, "2,,c").unwrap();
        writeln!(file, "1,10.0,b").unwrap();
        writeln!(file, "4,12.5,a").unwrap();
        file.flush().unwrap();

        let ds = DataSource::load(file.path()).unwrap();
        assert_eq!(ds.height(), 5);
        assert_eq!(ds.column_names(), vec!["time", "thickness", "operator"]);

        let series = ds.samples("time", "thickness").unwrap();
        let xy: Vec<(f64, f64)> = series.samples().iter().map(|s| (s.x, s.y)).collect();
        assert_eq!(xy, vec![(1.0, 10.0), (3.0, 11.0), (4.0, 12.5)]);
    }

    #[test]
    fn test_missing_column() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "x,y").unwrap();
        writeln!(file, "1,2").unwrap();
        file.flush().unwrap();

        let ds = DataSource::load(file.path()).unwrap();
        let err = ds.samples("x", "pressure").unwrap_err();
        assert!(matches!(err, SpcError::ColumnNotFound { ref column } if column == "pressure"));
    }

    #[test]
    fn test_unsupported_format() {
        let file = Builder::new().suffix(".xlsx").tempfile().unwrap();
        let err = DataSource::load(file.path()).err().unwrap();
        assert!(matches!(err, SpcError::UnsupportedFormat { ref extension } if extension == "xlsx"));
    }

    #[test]
    fn test_date_column_as_timestamps() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "date,value").unwrap();
        writeln!(file, "2024-01-02,15.3").unwrap();
        writeln!(file, "2024-01-01,10.5").unwrap();
        file.flush().unwrap();

        let ds = DataSource::load(file.path()).unwrap();
        let series = ds.samples("date", "value").unwrap();

        // 2024-01-01 00:00:00 UTC
        let start_ts = 1704067200.0;
        assert_eq!(series.len(), 2);
        assert_eq!(series.samples()[0].x, start_ts);
        assert_eq!(series.samples()[0].y, 10.5);
        assert_eq!(series.samples()[1].x, start_ts + SECONDS_PER_DAY);
    }

    #[test]
    fn test_from_dataframe() {
        let frame = df!(
            "x" => &[2.0, 1.0, 3.0],
            "y" => &[5.0, 4.0, 6.0]
        )
        .unwrap();
        let ds = DataSource::from_dataframe(frame);
        assert!(ds.file_path().is_none());

        let series = ds.samples("x", "y").unwrap();
        assert_eq!(series.y_min(), 4.0);
        assert_eq!(series.y_max(), 6.0);
        assert_eq!(series.samples()[0].x, 1.0);
    }
}
