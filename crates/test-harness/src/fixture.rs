use std::fs;
use std::path::Path;

use arrangement_types::{Curve, Point, XMonotoneCurve};

use crate::HarnessError;

/// Load a pool of x-monotone curves, one `x1 y1 x2 y2` line each.
/// Blank lines and `#` comments are skipped.
pub fn load_xcurves(path: impl AsRef<Path>) -> Result<Vec<XMonotoneCurve>, HarnessError> {
    let path = path.as_ref();
    retained_lines(path)?
        .into_iter()
        .map(|(line, text)| {
            let values = parse_floats(path, line, &text)?;
            if values.len() != 4 {
                return Err(parse_error(
                    path,
                    line,
                    format!("expected 4 coordinates, got {}", values.len()),
                ));
            }
            XMonotoneCurve::new(
                Point::new(values[0], values[1]),
                Point::new(values[2], values[3]),
            )
            .map_err(|error| parse_error(path, line, error.to_string()))
        })
        .collect()
}

/// Load a pool of general curves, one `n x1 y1 ... xn yn` polyline line each.
pub fn load_curves(path: impl AsRef<Path>) -> Result<Vec<Curve>, HarnessError> {
    let path = path.as_ref();
    retained_lines(path)?
        .into_iter()
        .map(|(line, text)| {
            let mut tokens = text.split_whitespace();
            let count: usize = tokens
                .next()
                .and_then(|t| t.parse().ok())
                .ok_or_else(|| parse_error(path, line, "missing point count".to_string()))?;

            let coords: Vec<f64> = tokens
                .map(|t| {
                    t.parse()
                        .map_err(|_| parse_error(path, line, format!("bad coordinate `{t}`")))
                })
                .collect::<Result<_, _>>()?;
            if coords.len() != 2 * count {
                return Err(parse_error(
                    path,
                    line,
                    format!("expected {} coordinates, got {}", 2 * count, coords.len()),
                ));
            }

            let points = coords
                .chunks_exact(2)
                .map(|pair| Point::new(pair[0], pair[1]))
                .collect();
            Curve::new(points).map_err(|error| parse_error(path, line, error.to_string()))
        })
        .collect()
}

fn retained_lines(path: &Path) -> Result<Vec<(usize, String)>, HarnessError> {
    let text = fs::read_to_string(path).map_err(|source| HarnessError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                Some((i + 1, trimmed.to_string()))
            }
        })
        .collect())
}

fn parse_floats(path: &Path, line: usize, text: &str) -> Result<Vec<f64>, HarnessError> {
    text.split_whitespace()
        .map(|t| {
            t.parse()
                .map_err(|_| parse_error(path, line, format!("bad coordinate `{t}`")))
        })
        .collect()
}

fn parse_error(path: &Path, line: usize, reason: String) -> HarnessError {
    HarnessError::Parse {
        path: path.to_path_buf(),
        line,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    static FILE_SEQ: AtomicU32 = AtomicU32::new(0);

    fn write_fixture(content: &str) -> std::path::PathBuf {
        let seq = FILE_SEQ.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "harness-fixture-{}-{seq}.txt",
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn xcurve_file_round_trips() {
        let path = write_fixture("# two segments\n0 0 1 0\n\n0 2 1 3\n");
        let pool = load_xcurves(&path).unwrap();
        assert_eq!(pool.len(), 2);
        assert_eq!(pool[0].left(), Point::new(0.0, 0.0));
        assert_eq!(pool[1].right(), Point::new(1.0, 3.0));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn curve_file_reads_counted_polylines() {
        let path = write_fixture("3 0 0 1 1 2 0\n2 5 5 6 6\n");
        let pool = load_curves(&path).unwrap();
        assert_eq!(pool.len(), 2);
        assert_eq!(pool[0].points().len(), 3);
        assert_eq!(pool[1].points().len(), 2);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn bad_lines_name_their_location() {
        let path = write_fixture("0 0 1 0\n0 0 banana 0\n");
        let error = load_xcurves(&path).unwrap_err();
        assert!(matches!(error, HarnessError::Parse { line: 2, .. }));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn wrong_coordinate_count_is_rejected() {
        let path = write_fixture("0 0 1\n");
        assert!(load_xcurves(&path).is_err());
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            load_xcurves("/no/such/pool.txt"),
            Err(HarnessError::Io { .. })
        ));
    }
}
