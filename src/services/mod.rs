pub mod analytics;
pub mod expenses;
pub mod features;
pub mod itinerary;
pub mod recommender;
pub mod similarity;
