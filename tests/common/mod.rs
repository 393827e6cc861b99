use skardu_tourism_api::models::property::{Catalog, Property};
use skardu_tourism_api::AppState;

/// A property with the given capacity/facility profile; the interest
/// flags are all set true.
pub fn property(
    name: &str,
    address: &str,
    rooms: u32,
    wifi: bool,
    restaurant: bool,
    laundry: bool,
    own_transport: bool,
    interests: &[&str],
    places: &[&str],
) -> Property {
    let mut property = Property::default();
    property.hotel_guest_house_name = name.to_string();
    property.full_address = address.to_string();
    property.kind.hotel = true;
    property.facilities.rooms.number_of_rooms = rooms;
    property.facilities.wifi_internet = wifi;
    property.facilities.restaurant_dining = restaurant;
    property.facilities.laundry_services = laundry;
    property.has_own_transport = own_transport;
    for interest in interests {
        property
            .mostly_tourist_interests
            .insert(interest.to_string(), true);
    }
    property.most_popular_places = places.iter().map(|place| place.to_string()).collect();
    property
}

/// Small catalog spanning all three budget tiers.
pub fn fixture_catalog() -> Catalog {
    Catalog::new(vec![
        // 2 + 1 + 1 + 1 + 2 = 7 -> high
        property(
            "Grand Shangrila",
            "Kachura Road, Skardu",
            25,
            true,
            true,
            true,
            true,
            &["lake", "nature"],
            &["Shangrila Lake", "Kachura Lake"],
        ),
        // 1 + 1 + 1 = 3 -> medium
        property(
            "Riverside Inn",
            "College Road, Skardu",
            15,
            true,
            true,
            false,
            false,
            &["lake", "historical"],
            &["Kharpocho Fort"],
        ),
        // 1 + 1 + 1 = 3 -> medium
        property(
            "Valley View",
            "Main Bazaar, Shigar",
            12,
            true,
            false,
            true,
            false,
            &["valley", "trekking"],
            &["Shigar Valley"],
        ),
        // 0 -> low
        property(
            "Sadpara Rest House",
            "Sadpara Road, Skardu",
            6,
            false,
            false,
            false,
            false,
            &["trekking", "nature"],
            &["Deosai Plains"],
        ),
    ])
}

pub fn fixture_state() -> AppState {
    AppState::new(fixture_catalog())
}

/// A catalog of near-identical medium-tier hotels, large enough to
/// overflow the recommendation cap.
pub fn uniform_catalog(count: usize) -> Catalog {
    let properties = (0..count)
        .map(|i| {
            property(
                &format!("Hotel {i}"),
                "Skardu",
                15,
                true,
                true,
                false,
                false,
                &["lake"],
                &[],
            )
        })
        .collect();
    Catalog::new(properties)
}
