//! Locations table loader.
//!
//! Reads a CSV with a header row. Columns are matched by name, case-insensitively:
//! `name` (or `suburb`), `latitude`, `longitude`. Extra columns are ignored.

use super::types::{Field, Location, LocationError};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const NAME_COLUMNS: &[&str] = &["name", "suburb"];
const LAT_COLUMN: &str = "latitude";
const LON_COLUMN: &str = "longitude";

struct Columns {
    name: usize,
    lat: usize,
    lon: usize,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self, LocationError> {
        let find = |wanted: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(wanted))
        };

        let name = NAME_COLUMNS
            .iter()
            .find_map(|&c| find(c))
            .ok_or(LocationError::MissingColumn(Field::Name))?;
        let lat = find(LAT_COLUMN).ok_or(LocationError::MissingColumn(Field::Latitude))?;
        let lon = find(LON_COLUMN).ok_or(LocationError::MissingColumn(Field::Longitude))?;

        Ok(Self { name, lat, lon })
    }
}

/// Load locations from a CSV file on disk.
pub fn load_from_path(path: &Path) -> Result<Vec<Location>, LocationError> {
    let file = File::open(path).map_err(|e| LocationError::Io(path.to_path_buf(), e))?;
    let locations = load_from_reader(file)?;
    log::info!("Loaded {} locations from {}", locations.len(), path.display());
    Ok(locations)
}

/// Load locations from any CSV source. Order follows the input; duplicates are kept.
pub fn load_from_reader<R: Read>(source: R) -> Result<Vec<Location>, LocationError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(source);

    let columns = Columns::from_headers(reader.headers()?)?;

    let mut locations = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        locations.push(parse_record(&record, &columns, line)?);
    }
    Ok(locations)
}

fn parse_record(
    record: &StringRecord,
    columns: &Columns,
    line: u64,
) -> Result<Location, LocationError> {
    let name = required(record, columns.name, Field::Name, line)?;
    let lat = coordinate(record, columns.lat, Field::Latitude, 90.0, line)?;
    let lon = coordinate(record, columns.lon, Field::Longitude, 180.0, line)?;
    Ok(Location::new(name, lat, lon))
}

fn required<'r>(
    record: &'r StringRecord,
    idx: usize,
    field: Field,
    line: u64,
) -> Result<&'r str, LocationError> {
    match record.get(idx) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(LocationError::MissingField { line, field }),
    }
}

fn coordinate(
    record: &StringRecord,
    idx: usize,
    field: Field,
    limit: f64,
    line: u64,
) -> Result<f64, LocationError> {
    let raw = required(record, idx, field, line)?;
    let value: f64 = raw.parse().map_err(|_| LocationError::InvalidNumber {
        line,
        field,
        value: raw.to_string(),
    })?;
    // NaN fails the range check too
    if !(-limit..=limit).contains(&value) {
        return Err(LocationError::OutOfRange { line, field, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn load_str(data: &str) -> Result<Vec<Location>, LocationError> {
        load_from_reader(data.as_bytes())
    }

    #[test]
    fn test_load_suburb_column() {
        let data = "suburb,latitude,longitude\n\
                    Bondi,-33.8915,151.2767\n\
                    Coogee,-33.9200,151.2577\n";
        let locs = load_str(data).unwrap();
        assert_eq!(locs.len(), 2);
        assert_eq!(locs[0], Location::new("Bondi", -33.8915, 151.2767));
        assert_eq!(locs[1].name, "Coogee");
    }

    #[test]
    fn test_load_name_column_any_order_and_case() {
        let data = "Longitude,State,Name,Latitude\n151.0011,NSW,Parramatta,-33.8150\n";
        let locs = load_str(data).unwrap();
        assert_eq!(locs, vec![Location::new("Parramatta", -33.8150, 151.0011)]);
    }

    #[test]
    fn test_load_trims_whitespace() {
        let data = "name,latitude,longitude\n  Surry Hills , -33.8886 , 151.2094 \n";
        let locs = load_str(data).unwrap();
        assert_eq!(locs[0].name, "Surry Hills");
        assert!((locs[0].lat + 33.8886).abs() < 1e-9);
    }

    #[test]
    fn test_load_keeps_duplicates_in_order() {
        let data = "name,latitude,longitude\nA,1,1\nB,2,2\nA,1,1\n";
        let names: Vec<_> = load_str(data).unwrap().into_iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["A", "B", "A"]);
    }

    #[test]
    fn test_load_header_only() {
        let locs = load_str("name,latitude,longitude\n").unwrap();
        assert!(locs.is_empty());
    }

    #[test]
    fn test_missing_column() {
        let err = load_str("name,latitude\nA,1\n").unwrap_err();
        assert!(matches!(err, LocationError::MissingColumn(Field::Longitude)));
    }

    #[test]
    fn test_missing_field_short_row() {
        let err = load_str("name,latitude,longitude\nA,1,1\nB,2\n").unwrap_err();
        match err {
            LocationError::MissingField { line, field } => {
                assert_eq!(line, 3);
                assert_eq!(field, Field::Longitude);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_name() {
        let err = load_str("name,latitude,longitude\n,1,1\n").unwrap_err();
        assert!(matches!(
            err,
            LocationError::MissingField { line: 2, field: Field::Name }
        ));
    }

    #[test]
    fn test_invalid_number() {
        let err = load_str("name,latitude,longitude\nA,north,1\n").unwrap_err();
        match err {
            LocationError::InvalidNumber { line, field, value } => {
                assert_eq!(line, 2);
                assert_eq!(field, Field::Latitude);
                assert_eq!(value, "north");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range() {
        let err = load_str("name,latitude,longitude\nA,10,181\n").unwrap_err();
        assert!(matches!(
            err,
            LocationError::OutOfRange { field: Field::Longitude, .. }
        ));

        let err = load_str("name,latitude,longitude\nA,NaN,0\n").unwrap_err();
        assert!(matches!(
            err,
            LocationError::OutOfRange { field: Field::Latitude, .. }
        ));
    }

    #[test]
    fn test_load_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "suburb,latitude,longitude").unwrap();
        writeln!(file, "Manly,-33.7969,151.2878").unwrap();
        file.flush().unwrap();

        let locs = load_from_path(file.path()).unwrap();
        assert_eq!(locs, vec![Location::new("Manly", -33.7969, 151.2878)]);
    }

    #[test]
    fn test_load_from_missing_path() {
        let err = load_from_path(Path::new("/nonexistent/suburbs.csv")).unwrap_err();
        assert!(matches!(err, LocationError::Io(..)));
    }
}
