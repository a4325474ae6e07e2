//! Score receipt files offline.
//!
//! # Usage
//!
//! ```bash
//! # Print the points for each receipt file
//! receipt-cli points receipts/target.json receipts/corner-market.json
//!
//! # Show what each rule contributed
//! receipt-cli points --breakdown receipts/target.json
//!
//! # Emit one JSON object per file
//! receipt-cli points --json receipts/*.json
//! ```
//!
//! Each file holds one receipt in the same JSON shape accepted by
//! `POST /receipts/process`.

use std::path::{Path, PathBuf};

use receipt_processor_core::{PointsBreakdown, PointsError, Receipt};
use thiserror::Error;
use tracing::{error, info};

/// Errors that can occur while scoring one file.
#[derive(Debug, Error)]
pub enum ScoreError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a receipt.
    #[error("{path} is not a valid receipt: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The receipt could not be scored.
    #[error("{path} could not be scored: {source}")]
    Points {
        path: PathBuf,
        #[source]
        source: PointsError,
    },
}

/// How scored receipts are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `<file>: <points> points`
    Summary,
    /// Summary line followed by one line per rule.
    Breakdown,
    /// One JSON object per file.
    Json,
}

/// Decode and score a receipt held in `content`.
///
/// # Errors
///
/// Returns [`ScoreError::Decode`] or [`ScoreError::Points`], naming `path`.
pub fn score_str(path: &Path, content: &str) -> Result<PointsBreakdown, ScoreError> {
    let receipt: Receipt = serde_json::from_str(content).map_err(|source| ScoreError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    PointsBreakdown::compute(&receipt).map_err(|source| ScoreError::Points {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and score a receipt file.
///
/// # Errors
///
/// Returns a [`ScoreError`] if the file cannot be read, decoded, or scored.
pub async fn score_file(path: &Path) -> Result<PointsBreakdown, ScoreError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ScoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    score_str(path, &content)
}

/// Render a scored receipt for printing.
#[must_use]
pub fn render(path: &Path, breakdown: &PointsBreakdown, format: OutputFormat) -> String {
    let path = path.display();
    match format {
        OutputFormat::Summary => format!("{path}: {} points", breakdown.total),
        OutputFormat::Breakdown => {
            let rows = [
                ("retailer name", breakdown.retailer),
                ("round total", breakdown.round_total),
                ("quarter total", breakdown.quarter_total),
                ("item pairs", breakdown.item_pairs),
                ("descriptions", breakdown.descriptions),
                ("odd day", breakdown.odd_day),
                ("afternoon", breakdown.afternoon),
            ];

            let mut out = format!("{path}: {} points", breakdown.total);
            for (rule, points) in rows {
                out.push_str(&format!("\n  {rule:<14} {points:>6}"));
            }
            out
        }
        OutputFormat::Json => serde_json::json!({
            "file": path.to_string(),
            "points": breakdown.total,
            "breakdown": breakdown,
        })
        .to_string(),
    }
}

/// Score every file, printing results as they are produced.
///
/// Files that fail are logged and skipped; the command fails afterwards if
/// any did.
///
/// # Errors
///
/// Returns an error naming how many files failed.
pub async fn run(files: &[PathBuf], format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let mut failed = 0_usize;

    for path in files {
        match score_file(path).await {
            Ok(breakdown) => {
                info!(path = %path.display(), points = breakdown.total, "Scored receipt");
                #[allow(clippy::print_stdout)]
                {
                    println!("{}", render(path, &breakdown, format));
                }
            }
            Err(e) => {
                error!("{e}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(format!("{failed} of {} receipts failed", files.len()).into());
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TARGET: &str = r#"{
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
            {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
            {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
            {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
            {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
        ],
        "total": "35.35"
    }"#;

    #[test]
    fn test_score_str() {
        let breakdown = score_str(Path::new("target.json"), TARGET).unwrap();
        assert_eq!(breakdown.total, 28);
    }

    #[test]
    fn test_score_str_decode_error_names_file() {
        let err = score_str(Path::new("broken.json"), "{not json").unwrap_err();
        assert!(matches!(err, ScoreError::Decode { .. }));
        assert!(err.to_string().starts_with("broken.json"));
    }

    #[test]
    fn test_score_str_points_error() {
        let content = TARGET.replace("35.35", "thirty");
        let err = score_str(Path::new("target.json"), &content).unwrap_err();
        assert!(matches!(
            err,
            ScoreError::Points {
                source: PointsError::InvalidTotal(_),
                ..
            }
        ));
    }

    #[test]
    fn test_render_formats() {
        let path = Path::new("target.json");
        let breakdown = score_str(path, TARGET).unwrap();

        assert_eq!(
            render(path, &breakdown, OutputFormat::Summary),
            "target.json: 28 points"
        );

        let detailed = render(path, &breakdown, OutputFormat::Breakdown);
        assert_eq!(detailed.lines().count(), 8);
        assert!(detailed.contains("item pairs"));

        let json: serde_json::Value =
            serde_json::from_str(&render(path, &breakdown, OutputFormat::Json)).unwrap();
        assert_eq!(json["points"], 28);
        assert_eq!(json["breakdown"]["oddDay"], 6);
    }

    #[tokio::test]
    async fn test_score_file_missing() {
        let err = score_file(Path::new("/nonexistent/receipt.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, ScoreError::Read { .. }));
    }
}
