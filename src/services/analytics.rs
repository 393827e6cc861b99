use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::property::Catalog;

/// Assumed spend per recorded tourist, PKR.
const REVENUE_PER_TOURIST: u64 = 15_000;
const GROWTH_POTENTIAL_RATE: f64 = 0.3;

const SMALL_HOTEL_ROOMS: u32 = 10;
const LARGE_HOTEL_ROOMS: u32 = 30;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocalSplit {
    pub local: u64,
    pub non_local: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Demographics {
    pub total_tourists: u64,
    pub pakistani_tourists: u64,
    pub foreign_tourists: u64,
    pub breakdown_by_origin: BTreeMap<String, u64>,
    pub breakdown_by_foreign_country: BTreeMap<String, u64>,
    pub local_vs_nonlocal: LocalSplit,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FacilityCoverage {
    pub count: u64,
    pub percentage: f64,
}

/// Coverage of each tracked facility across the catalog. Conference
/// halls and parking are only mentioned in the free-text field, so they
/// are sniffed by substring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FacilitiesReport {
    pub wifi: FacilityCoverage,
    pub guide_services: FacilityCoverage,
    pub transport: FacilityCoverage,
    pub restaurant: FacilityCoverage,
    pub laundry: FacilityCoverage,
    pub own_transport: FacilityCoverage,
    pub conference_hall: FacilityCoverage,
    pub parking: FacilityCoverage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceMentions {
    pub place: String,
    pub mentions: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemporalStats {
    pub avg_occupancy: f64,
    pub avg_stay_duration: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_hotels: u64,
    pub total_rooms: u64,
    pub total_tourists: u64,
    pub avg_tourists_per_hotel: u64,
    pub avg_occupancy: f64,
    pub avg_stay_duration: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RevenueEstimate {
    pub estimated_total_revenue: u64,
    pub revenue_per_tourist: u64,
    pub potential_growth: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardData {
    pub summary_stats: SummaryStats,
    pub demographics: Demographics,
    pub facilities: FacilitiesReport,
    pub popular_places: Vec<PlaceMentions>,
    pub geographic_distribution: BTreeMap<String, u64>,
    pub revenue_estimates: RevenueEstimate,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Season {
    pub months: Vec<String>,
    pub factor: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonalTrends {
    pub peak_season: Season,
    pub shoulder_season: Season,
    pub off_season: Season,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SizeClassCounts {
    pub small: u64,
    pub medium: u64,
    pub large: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SizeClassShares {
    pub small: f64,
    pub medium: f64,
    pub large: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompetitorAnalysis {
    pub size_distribution: SizeClassCounts,
    pub market_share_by_size: SizeClassShares,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComprehensiveAnalytics {
    #[serde(flatten)]
    pub dashboard: DashboardData,
    pub seasonal_trends: SeasonalTrends,
    pub competitor_analysis: CompetitorAnalysis,
    pub market_gaps: Vec<String>,
    pub growth_opportunities: Vec<String>,
}

/// Dashboard-style aggregation over the catalog. All tallies are computed
/// once at construction; the per-request methods only assemble views.
/// Independent of the similarity index.
pub struct AnalyticsEngine {
    catalog: Catalog,
    demographics: Demographics,
    facilities: FacilitiesReport,
    popular_places: Vec<PlaceMentions>,
    geographic: BTreeMap<String, u64>,
    temporal: TemporalStats,
}

impl AnalyticsEngine {
    pub fn new(catalog: Catalog) -> Self {
        let demographics = compute_demographics(&catalog);
        let facilities = compute_facilities(&catalog);
        let popular_places = compute_popular_places(&catalog);
        let geographic = compute_geographic(&catalog);
        let temporal = compute_temporal(&catalog);

        log::info!("analytics precomputed over {} properties", catalog.len());

        Self {
            catalog,
            demographics,
            facilities,
            popular_places,
            geographic,
            temporal,
        }
    }

    pub fn tourist_demographics(&self) -> &Demographics {
        &self.demographics
    }

    pub fn facilities_analysis(&self) -> &FacilitiesReport {
        &self.facilities
    }

    pub fn popular_places_analysis(&self) -> &[PlaceMentions] {
        &self.popular_places
    }

    pub fn dashboard_data(&self) -> DashboardData {
        DashboardData {
            summary_stats: self.summary_stats(),
            demographics: self.demographics.clone(),
            facilities: self.facilities.clone(),
            popular_places: self.popular_places.clone(),
            geographic_distribution: self.geographic.clone(),
            revenue_estimates: self.revenue_estimates(),
            generated_at: Utc::now(),
        }
    }

    pub fn comprehensive_analytics(&self) -> ComprehensiveAnalytics {
        ComprehensiveAnalytics {
            dashboard: self.dashboard_data(),
            seasonal_trends: seasonal_trends(),
            competitor_analysis: self.competitor_analysis(),
            market_gaps: self.market_gaps(),
            growth_opportunities: self.growth_opportunities(),
        }
    }

    fn summary_stats(&self) -> SummaryStats {
        let total_hotels = self.catalog.len() as u64;
        let total_rooms: u64 = self
            .catalog
            .iter()
            .map(|property| property.facilities.rooms.number_of_rooms as u64)
            .sum();
        let total_tourists = self.demographics.total_tourists;
        let avg_tourists_per_hotel = if total_hotels > 0 {
            ((total_tourists as f64) / (total_hotels as f64)).round() as u64
        } else {
            0
        };

        SummaryStats {
            total_hotels,
            total_rooms,
            total_tourists,
            avg_tourists_per_hotel,
            avg_occupancy: self.temporal.avg_occupancy,
            avg_stay_duration: self.temporal.avg_stay_duration,
        }
    }

    fn revenue_estimates(&self) -> RevenueEstimate {
        let estimated_total_revenue = self.demographics.total_tourists * REVENUE_PER_TOURIST;
        RevenueEstimate {
            estimated_total_revenue,
            revenue_per_tourist: REVENUE_PER_TOURIST,
            potential_growth: (estimated_total_revenue as f64 * GROWTH_POTENTIAL_RATE).round()
                as u64,
        }
    }

    fn competitor_analysis(&self) -> CompetitorAnalysis {
        let mut counts = SizeClassCounts::default();
        for property in self.catalog.iter() {
            let rooms = property.facilities.rooms.number_of_rooms;
            if rooms < SMALL_HOTEL_ROOMS {
                counts.small += 1;
            } else if rooms < LARGE_HOTEL_ROOMS {
                counts.medium += 1;
            } else {
                counts.large += 1;
            }
        }

        let total = self.catalog.len() as f64;
        let share = |count: u64| {
            if total > 0.0 {
                round2(count as f64 / total * 100.0)
            } else {
                0.0
            }
        };

        CompetitorAnalysis {
            market_share_by_size: SizeClassShares {
                small: share(counts.small),
                medium: share(counts.medium),
                large: share(counts.large),
            },
            size_distribution: counts,
        }
    }

    fn market_gaps(&self) -> Vec<String> {
        let mut gaps = Vec::new();
        if self.facilities.conference_hall.percentage < 20.0 {
            gaps.push(format!(
                "Conference facilities (only {:.1}% availability)",
                self.facilities.conference_hall.percentage
            ));
        }
        if self.facilities.laundry.percentage < 40.0 {
            gaps.push(format!(
                "Laundry services (only {:.1}% availability)",
                self.facilities.laundry.percentage
            ));
        }
        gaps
    }

    fn growth_opportunities(&self) -> Vec<String> {
        let mut opportunities = Vec::new();

        if self.demographics.total_tourists > 0 {
            let foreign_share = self.demographics.foreign_tourists as f64
                / self.demographics.total_tourists as f64
                * 100.0;
            if foreign_share < 20.0 {
                opportunities.push(format!(
                    "Increase foreign tourist focus (currently {foreign_share:.1}%)"
                ));
            }
        }

        if self.facilities.wifi.percentage < 80.0 {
            opportunities.push("Improve WiFi infrastructure".to_string());
        }

        opportunities
    }
}

fn compute_demographics(catalog: &Catalog) -> Demographics {
    let mut demographics = Demographics::default();

    for property in catalog.iter() {
        let demo = &property.tourist_demographics;
        demographics.total_tourists += demo.total_tourists_recorded;
        demographics.pakistani_tourists += demo.pakistani_tourists.count;
        demographics.foreign_tourists += demo.foreign_tourists;
        demographics.local_vs_nonlocal.local += demo.pakistani_tourists.local;
        demographics.local_vs_nonlocal.non_local += demo.pakistani_tourists.non_local;

        for origin in &demo.pakistani_tourists.breakdown_by_origin {
            *demographics
                .breakdown_by_origin
                .entry(origin.origin.clone())
                .or_insert(0) += origin.count;
        }
        for country in &demo.breakdown_by_foreign_country {
            *demographics
                .breakdown_by_foreign_country
                .entry(country.country.clone())
                .or_insert(0) += country.count;
        }
    }

    demographics
}

fn compute_facilities(catalog: &Catalog) -> FacilitiesReport {
    let mut report = FacilitiesReport::default();

    for property in catalog.iter() {
        let facilities = &property.facilities;
        if facilities.wifi_internet {
            report.wifi.count += 1;
        }
        if facilities.guide_services {
            report.guide_services.count += 1;
        }
        if facilities.transport_arrangement {
            report.transport.count += 1;
        }
        if facilities.restaurant_dining {
            report.restaurant.count += 1;
        }
        if facilities.laundry_services {
            report.laundry.count += 1;
        }
        if property.has_own_transport {
            report.own_transport.count += 1;
        }

        let other = facilities.other_facilities.to_lowercase();
        if other.contains("conference") {
            report.conference_hall.count += 1;
        }
        if other.contains("parking") {
            report.parking.count += 1;
        }
    }

    let total = catalog.len() as f64;
    for coverage in [
        &mut report.wifi,
        &mut report.guide_services,
        &mut report.transport,
        &mut report.restaurant,
        &mut report.laundry,
        &mut report.own_transport,
        &mut report.conference_hall,
        &mut report.parking,
    ] {
        coverage.percentage = if total > 0.0 {
            round2(coverage.count as f64 / total * 100.0)
        } else {
            0.0
        };
    }

    report
}

fn compute_popular_places(catalog: &Catalog) -> Vec<PlaceMentions> {
    let mut mentions: Vec<PlaceMentions> = Vec::new();

    for property in catalog.iter() {
        for place in &property.most_popular_places {
            match mentions.iter_mut().find(|entry| entry.place == *place) {
                Some(entry) => entry.mentions += 1,
                None => mentions.push(PlaceMentions {
                    place: place.clone(),
                    mentions: 1,
                }),
            }
        }
    }

    // Most mentioned first; ties keep first-seen order.
    mentions.sort_by(|a, b| b.mentions.cmp(&a.mentions));
    mentions
}

fn compute_geographic(catalog: &Catalog) -> BTreeMap<String, u64> {
    let mut locations = BTreeMap::new();
    for property in catalog.iter() {
        let area = property
            .full_address
            .rsplit(',')
            .next()
            .unwrap_or("")
            .trim()
            .to_string();
        *locations.entry(area).or_insert(0) += 1;
    }
    locations
}

fn compute_temporal(catalog: &Catalog) -> TemporalStats {
    if catalog.is_empty() {
        return TemporalStats::default();
    }

    let count = catalog.len() as f64;
    let occupancy: f64 = catalog
        .iter()
        .map(|property| property.average_occupancy_per_day as f64)
        .sum();
    let stay: f64 = catalog
        .iter()
        .map(|property| property.average_stay_duration_days as f64)
        .sum();

    TemporalStats {
        avg_occupancy: round2(occupancy / count),
        avg_stay_duration: round2(stay / count),
    }
}

fn seasonal_trends() -> SeasonalTrends {
    let months = |names: &[&str]| names.iter().map(|name| name.to_string()).collect();
    SeasonalTrends {
        peak_season: Season {
            months: months(&["May", "June", "July", "August", "September"]),
            factor: 1.8,
        },
        shoulder_season: Season {
            months: months(&["April", "October"]),
            factor: 1.2,
        },
        off_season: Season {
            months: months(&[
                "November", "December", "January", "February", "March",
            ]),
            factor: 0.6,
        },
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
