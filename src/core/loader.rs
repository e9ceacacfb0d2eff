use crate::domain::model::Record;
use crate::utils::error::{EtlError, Result};
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Loads every row of a listings CSV, mapping values onto the header's field names.
pub fn load_listings<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();
    tracing::debug!("Opening listings file: {}", path.display());

    let file = File::open(path)?;
    let records = read_listings(file)?;

    tracing::info!("Loaded {} listings from {}", records.len(), path.display());
    Ok(records)
}

fn lines_spanned(record: &StringRecord) -> u64 {
    1 + record
        .iter()
        .map(|field| field.matches('\n').count() as u64)
        .sum::<u64>()
}

/// Rows shorter than the header are rejected; trailing extra fields are dropped.
///
/// The csv reader skips blank lines silently, so each row's starting line is
/// checked against where the previous row ended and a gap is reported as an
/// empty row.
pub fn read_listings<R: Read>(input: R) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let header = reader.headers()?.clone();
    if header.is_empty() {
        return Err(EtlError::MissingHeader);
    }
    tracing::debug!("Header fields: {:?}", header);

    let mut next_line = 1 + lines_spanned(&header);
    let mut records: Vec<Record> = Vec::new();
    for row in reader.records() {
        let row = row?;
        let line = row.position().map(|pos| pos.line()).unwrap_or(next_line);

        if line > next_line {
            return Err(EtlError::MalformedRow {
                line: next_line,
                expected: header.len(),
                found: 0,
            });
        }

        if row.len() < header.len() {
            return Err(EtlError::MalformedRow {
                line,
                expected: header.len(),
                found: row.len(),
            });
        }

        next_line = line + lines_spanned(&row);
        records.push(header.iter().zip(row.iter()).collect());
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "id,name,neighbourhood_group,room_type,price\n\
        1,Sunny loft,Manhattan,Entire home/apt,200\n\
        2,\"Cozy room, near park\",Brooklyn,Private room,85.5\n";

    #[test]
    fn test_read_listings_maps_header_fields() {
        let records = read_listings(SAMPLE.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("neighbourhood_group"), Some("Manhattan"));
        assert_eq!(records[0].get("price"), Some("200"));
        assert_eq!(records[1].get("name"), Some("Cozy room, near park"));
        assert_eq!(records[1].get("price"), Some("85.5"));
        assert_eq!(records[1].data.len(), 5);
    }

    #[test]
    fn test_read_listings_header_only() {
        let records = read_listings("id,neighbourhood_group,room_type,price\n".as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_read_listings_short_row_is_rejected() {
        let input = "id,neighbourhood_group,room_type,price\n1,Bronx,Private room\n";

        match read_listings(input.as_bytes()) {
            Err(EtlError::MalformedRow {
                line,
                expected,
                found,
            }) => {
                assert_eq!(line, 2);
                assert_eq!(expected, 4);
                assert_eq!(found, 3);
            }
            other => panic!("expected MalformedRow, got {:?}", other),
        }
    }

    #[test]
    fn test_read_listings_empty_input_has_no_header() {
        assert!(matches!(
            read_listings("".as_bytes()),
            Err(EtlError::MissingHeader)
        ));
    }

    #[test]
    fn test_read_listings_blank_line_is_rejected() {
        let input = "neighbourhood_group,room_type,price\n\
            Queens,Private room,80\n\
            \n\
            Bronx,Shared room,40\n";

        match read_listings(input.as_bytes()) {
            Err(EtlError::MalformedRow {
                line,
                expected,
                found,
            }) => {
                assert_eq!(line, 3);
                assert_eq!(expected, 3);
                assert_eq!(found, 0);
            }
            other => panic!("expected MalformedRow, got {:?}", other),
        }
    }

    #[test]
    fn test_read_listings_quoted_newline_is_not_a_gap() {
        let input = "name,neighbourhood_group,room_type,price\n\
            \"Loft\nwith view\",Manhattan,Entire home/apt,250\n\
            Studio,Queens,Private room,90\n";

        let records = read_listings(input.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("name"), Some("Loft\nwith view"));
        assert_eq!(records[1].get("price"), Some("90"));
    }

    #[test]
    fn test_read_listings_ignores_extra_fields() {
        let input = "neighbourhood_group,room_type,price\nQueens,Shared room,40,extra\n";
        let records = read_listings(input.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].data.len(), 3);
        assert_eq!(records[0].get("price"), Some("40"));
    }

    #[test]
    fn test_load_listings_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(SAMPLE.as_bytes()).unwrap();

        let records = load_listings(temp_file.path()).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_load_listings_missing_file() {
        let result = load_listings("does/not/exist/listings.csv");
        assert!(matches!(result, Err(EtlError::IoError(_))));
    }
}
