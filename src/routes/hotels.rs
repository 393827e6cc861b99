use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::models::property::Property;
use crate::AppState;

/*
    /api/hotels/
*/

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_per_page")]
    pub per_page: usize,
    #[serde(default)]
    pub search: String,
}

fn default_page() -> usize {
    1
}

fn default_per_page() -> usize {
    10
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    /// Comma-separated facility names: wifi, restaurant, transport.
    #[serde(default)]
    pub facilities: String,
}

/// Map-pin projection of one catalog entry.
#[derive(Debug, Serialize)]
pub struct HotelLocation {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub address: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub rooms: u32,
    pub tourists: u64,
    pub has_wifi: bool,
    pub has_restaurant: bool,
    pub has_transport: bool,
    pub phone_numbers: Vec<String>,
}

pub async fn list_hotels(
    data: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    let matches: Vec<&Property> = data
        .catalog
        .iter()
        .filter(|property| name_or_address_matches(property, &query.search))
        .collect();

    let page = query.page.max(1);
    let start = (page - 1).saturating_mul(query.per_page);
    let paginated: Vec<&Property> = matches
        .iter()
        .skip(start)
        .take(query.per_page)
        .copied()
        .collect();

    HttpResponse::Ok().json(json!({
        "success": true,
        "hotels": paginated,
        "total": matches.len(),
        "page": page,
        "per_page": query.per_page,
    }))
}

pub async fn search_hotels(
    data: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    let wanted: Vec<&str> = query
        .facilities
        .split(',')
        .map(str::trim)
        .filter(|facility| !facility.is_empty())
        .collect();

    let hotels: Vec<&Property> = data
        .catalog
        .iter()
        .filter(|property| name_or_address_matches(property, &query.q))
        .filter(|property| {
            wanted.iter().all(|facility| match *facility {
                "wifi" => property.facilities.wifi_internet,
                "restaurant" => property.facilities.restaurant_dining,
                "transport" => {
                    property.facilities.transport_arrangement || property.has_own_transport
                }
                _ => true,
            })
        })
        .collect();

    HttpResponse::Ok().json(json!({
        "success": true,
        "hotels": hotels,
        "total": hotels.len(),
    }))
}

pub async fn hotel_locations(data: web::Data<AppState>) -> impl Responder {
    let locations: Vec<HotelLocation> = data
        .catalog
        .iter()
        .map(|property| HotelLocation {
            name: property.hotel_guest_house_name.clone(),
            lat: property.location.latitude,
            lng: property.location.longitude,
            address: property.full_address.clone(),
            kind: if property.kind.hotel {
                "hotel"
            } else {
                "guest_house"
            },
            rooms: property.facilities.rooms.number_of_rooms,
            tourists: property.tourist_demographics.total_tourists_recorded,
            has_wifi: property.facilities.wifi_internet,
            has_restaurant: property.facilities.restaurant_dining,
            has_transport: property.facilities.transport_arrangement
                || property.has_own_transport,
            phone_numbers: property.phone_numbers.clone(),
        })
        .collect();

    HttpResponse::Ok().json(json!({
        "success": true,
        "locations": locations,
    }))
}

fn name_or_address_matches(property: &Property, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    property
        .hotel_guest_house_name
        .to_lowercase()
        .contains(&needle)
        || property.full_address.to_lowercase().contains(&needle)
}
