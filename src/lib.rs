use std::sync::Arc;

pub mod data;
pub mod models;
pub mod routes;
pub mod services;

use models::property::Catalog;
use services::analytics::AnalyticsEngine;
use services::itinerary::ItineraryPlanner;
use services::recommender::Recommender;

/// Shared application state: every engine is built once from the catalog
/// and is read-only afterwards, so cloning the state into each actix
/// worker is just a handful of `Arc` bumps.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub recommender: Arc<Recommender>,
    pub planner: ItineraryPlanner,
    pub analytics: Arc<AnalyticsEngine>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        let recommender = Arc::new(Recommender::new(catalog.clone()));
        let planner = ItineraryPlanner::new(recommender.clone());
        let analytics = Arc::new(AnalyticsEngine::new(catalog.clone()));

        Self {
            catalog,
            recommender,
            planner,
            analytics,
        }
    }
}
