//! City dataset loader
//!
//! Reads the destination CSV once at startup. Expected header columns:
//! `City`, `Rating`, `About the city (long Description)`, `Best Time to visit`.
//! Any other columns are ignored.

use std::io::Read;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::TravelRankError;
use crate::models::CityRecord;

const CITY_COLUMN: &str = "City";

/// Load every city from a CSV file, in file order
pub fn load_cities<P: AsRef<Path>>(path: P) -> Result<Vec<CityRecord>, TravelRankError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| {
        TravelRankError::dataset(format!("Failed to open {}: {e}", path.display()))
    })?;

    let cities = load_cities_from_reader(file)?;
    info!("Loaded {} cities from {}", cities.len(), path.display());
    Ok(cities)
}

/// Load cities from any CSV source
pub fn load_cities_from_reader<R: Read>(reader: R) -> Result<Vec<CityRecord>, TravelRankError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| TravelRankError::dataset(format!("Failed to read CSV header: {e}")))?
        .clone();
    if !headers.iter().any(|h| h == CITY_COLUMN) {
        return Err(TravelRankError::dataset(format!(
            "Missing required column: {CITY_COLUMN}"
        )));
    }

    let mut cities = Vec::new();
    for (row_idx, result) in reader.deserialize::<CityRecord>().enumerate() {
        // +2: 0-based index plus the header row
        let row_num = row_idx + 2;
        let mut record = result
            .map_err(|e| TravelRankError::dataset(format!("Invalid row {row_num}: {e}")))?;

        if record.city.is_empty() {
            warn!("Skipping row {} with an empty city name", row_num);
            continue;
        }
        record.rating = record.rating.filter(|rating| rating.is_finite());

        debug!("Row {}: {}", row_num, record.city);
        cities.push(record);
    }

    Ok(cities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str =
        "Unnamed: 0,City,Rating,Ideal duration,Best Time to visit,City_desc,About the city (long Description)";

    #[test]
    fn test_load_preserves_order_and_fields() {
        let csv = format!(
            "{HEADER}\n0,Manali,4.6,2-4 days,October to June,Hill town,\"Snow, valleys and cafes\"\n1,Goa,4.5,3-5 days,November to March,Beaches,Sun and sand\n"
        );
        let cities = load_cities_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(cities.len(), 2);
        assert_eq!(cities[0].city, "Manali");
        assert_eq!(cities[0].rating, Some(4.6));
        assert_eq!(cities[0].best_time, "October to June");
        assert_eq!(cities[0].description, "Snow, valleys and cafes");
        assert_eq!(cities[1].city, "Goa");
    }

    #[test]
    fn test_missing_or_invalid_rating_is_none() {
        let csv = format!(
            "{HEADER}\n0,Leh,,,June to September,,Cold desert\n1,Ooty,N/A,,All year,,Hills\n2,Agra,NaN,,Winter,,Taj\n"
        );
        let cities = load_cities_from_reader(csv.as_bytes()).unwrap();
        assert!(cities.iter().all(|c| c.rating.is_none()));
    }

    #[test]
    fn test_only_city_column_required() {
        let cities = load_cities_from_reader("City\nShimla\n".as_bytes()).unwrap();
        assert_eq!(cities, vec![CityRecord::new("Shimla", None)]);
    }

    #[test]
    fn test_blank_city_rows_are_skipped() {
        let cities = load_cities_from_reader("City,Rating\n ,4.0\nPune,3.9\n".as_bytes()).unwrap();
        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].city, "Pune");
    }

    #[test]
    fn test_missing_city_column_fails() {
        let result = load_cities_from_reader("Town,Rating\nPune,3.9\n".as_bytes());
        assert!(matches!(result, Err(TravelRankError::Dataset { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "City,Rating\nVaranasi,4.4").unwrap();

        let cities = load_cities(file.path()).unwrap();
        assert_eq!(cities[0].city, "Varanasi");
    }

    #[test]
    fn test_missing_file_fails() {
        let err = load_cities("/nonexistent/holidify.csv").unwrap_err();
        assert!(err.to_string().contains("Failed to open"));
    }
}
