use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use crate::models::property::Property;

const DEFAULT_DATA_PATH: &str = "static/data/cleaned_tourist_data.json";

#[derive(Debug, Deserialize)]
struct TouristDataFile {
    #[serde(rename = "touristData", default)]
    tourist_data: Vec<Property>,
}

/// Reads the pre-normalized property catalog from disk.
///
/// The file is expected to be the output of the external cleaning step:
/// numeric fields already coerced, names trimmed and cased, list fields
/// split. Deserialization only fills schema defaults for absent fields;
/// no further normalization happens here. Callers handle a load failure
/// by continuing with an empty catalog.
pub struct DataLoader {
    data_path: PathBuf,
}

impl DataLoader {
    pub fn from_env() -> Self {
        let data_path = std::env::var("TOURISM_DATA_PATH")
            .unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string());
        Self {
            data_path: PathBuf::from(data_path),
        }
    }

    pub fn with_path(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
        }
    }

    pub fn load(&self) -> Result<Vec<Property>, Box<dyn Error>> {
        let raw = fs::read_to_string(&self.data_path)?;
        let file: TouristDataFile = serde_json::from_str(&raw)?;

        log::info!(
            "loaded {} property records from {}",
            file.tourist_data.len(),
            self.data_path.display()
        );
        Ok(file.tourist_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_error_not_a_panic() {
        let loader = DataLoader::with_path("does/not/exist.json");
        assert!(loader.load().is_err());
    }

    #[test]
    fn partial_records_deserialize_with_defaults() {
        let raw = r#"{
            "touristData": [
                {
                    "hotelGuestHouseName": "Sample Hotel",
                    "type": {"hotel": true},
                    "facilities": {"rooms": {"numberOfRooms": 12}, "wifiInternet": true}
                }
            ]
        }"#;
        let file: TouristDataFile = serde_json::from_str(raw).expect("valid payload");
        let property = &file.tourist_data[0];

        assert_eq!(property.hotel_guest_house_name, "Sample Hotel");
        assert!(property.kind.hotel);
        assert!(!property.kind.guest_house);
        assert_eq!(property.facilities.rooms.number_of_rooms, 12);
        assert!(property.facilities.wifi_internet);
        // Everything absent comes back as a type-correct default.
        assert_eq!(property.full_address, "");
        assert_eq!(property.tourist_demographics.total_tourists_recorded, 0);
        assert!(property.most_popular_places.is_empty());
        assert!(property.mostly_tourist_interests.is_empty());
    }
}
