//! Point source: delimited `x,y` text.
//!
//! One point per line, two comma-separated numbers. Whitespace around a
//! field is ignored and blank lines are skipped. This module sits outside
//! the annealing core; the core only ever sees `&[Point]`.

use crate::error::{Result, TspError};
use crate::geometry::Point;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// File name used when none is given.
pub const DEFAULT_FILE_NAME: &str = "delivery_points.txt";

/// Directory searched when none is given.
pub const DEFAULT_DIRECTORY: &str = "delivery_points";

/// Parses points from `x,y` lines.
///
/// # Errors
/// [`TspError::MalformedInput`] with the 1-based line number when a line
/// does not hold exactly two finite numbers.
///
/// # Examples
///
/// ```
/// use tsp_anneal::points::parse_points;
///
/// let points = parse_points("0,0\n3, 4\n").unwrap();
/// assert_eq!(points.len(), 2);
/// assert_eq!(points[1].y, 4.0);
/// ```
pub fn parse_points(text: &str) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        points.push(parse_line(line, idx + 1)?);
    }
    Ok(points)
}

fn parse_line(line: &str, line_no: usize) -> Result<Point> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [x, y] = fields.as_slice() else {
        return Err(TspError::malformed(
            line_no,
            format!("expected 2 fields, got {}", fields.len()),
        ));
    };
    Ok(Point::new(
        parse_coord(x, line_no)?,
        parse_coord(y, line_no)?,
    ))
}

fn parse_coord(field: &str, line_no: usize) -> Result<f64> {
    let value: f64 = field
        .parse()
        .map_err(|e| TspError::malformed(line_no, format!("{field:?}: {e}")))?;
    if !value.is_finite() {
        return Err(TspError::malformed(
            line_no,
            format!("coordinate {field:?} is not finite"),
        ));
    }
    Ok(value)
}

/// Reads and parses the points file at `path`.
///
/// # Errors
/// [`TspError::SourceUnavailable`] if the file cannot be read, or
/// [`TspError::MalformedInput`] from [`parse_points`].
pub fn read_points(path: impl AsRef<Path>) -> Result<Vec<Point>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| TspError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let points = parse_points(&text)?;
    debug!("read {} points from {}", points.len(), path.display());
    Ok(points)
}

/// Joins an optional directory and file name, falling back to
/// [`DEFAULT_DIRECTORY`] and [`DEFAULT_FILE_NAME`].
pub fn resolve_path(directory: Option<&Path>, file_name: Option<&str>) -> PathBuf {
    directory
        .unwrap_or_else(|| Path::new(DEFAULT_DIRECTORY))
        .join(file_name.unwrap_or(DEFAULT_FILE_NAME))
}
