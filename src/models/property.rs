use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// One hotel / guest house record as produced by the normalization step.
///
/// Every field carries a `serde` default so a record with absent optional
/// fields still deserializes into a fully-populated value. The loader is
/// expected to hand us pre-cleaned data; nothing here re-validates it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Property {
    pub hotel_guest_house_name: String,
    pub full_address: String,
    pub phone_numbers: Vec<String>,
    #[serde(rename = "type")]
    pub kind: PropertyKind,
    pub location: GeoPoint,
    pub construction_materials: ConstructionMaterials,
    pub facilities: Facilities,
    pub has_own_transport: bool,
    /// Interest name -> whether tourists staying here mostly come for it.
    /// Ordered map so feature tokens come out in the same order every run.
    pub mostly_tourist_interests: BTreeMap<String, bool>,
    pub most_popular_places: Vec<String>,
    pub interesting_meals: Vec<String>,
    pub tourist_demographics: TouristDemographics,
    pub average_occupancy_per_day: u32,
    pub average_stay_duration_days: u32,
    pub additional_notes: AdditionalNotes,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyKind {
    pub hotel: bool,
    pub guest_house: bool,
    pub other: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConstructionMaterials {
    pub cement: bool,
    pub wood: bool,
    pub organic: bool,
    pub other: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Facilities {
    pub rooms: Rooms,
    pub wifi_internet: bool,
    pub guide_services: bool,
    pub transport_arrangement: bool,
    pub restaurant_dining: bool,
    pub laundry_services: bool,
    pub other_facilities: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Rooms {
    pub number_of_rooms: u32,
    pub available: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TouristDemographics {
    pub total_tourists_recorded: u64,
    pub pakistani_tourists: PakistaniTourists,
    pub foreign_tourists: u64,
    pub breakdown_by_foreign_country: Vec<CountryCount>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PakistaniTourists {
    pub count: u64,
    pub local: u64,
    pub non_local: u64,
    pub breakdown_by_origin: Vec<OriginCount>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OriginCount {
    pub origin: String,
    pub count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CountryCount {
    pub country: String,
    pub count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdditionalNotes {
    pub challenges_faced: String,
    pub special_services: String,
    pub tourist_origin_feedback: String,
}

/// Read-only handle over the loaded property records.
///
/// Built once at startup and shared by reference everywhere; there is no
/// way to mutate it afterwards, so concurrent readers need no locking.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    properties: Arc<Vec<Property>>,
}

impl Catalog {
    pub fn new(properties: Vec<Property>) -> Self {
        Self {
            properties: Arc::new(properties),
        }
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Property> {
        self.properties.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Property> {
        self.properties.iter()
    }
}
