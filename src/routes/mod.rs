pub mod analytics;
pub mod health;
pub mod hotels;
pub mod recommend;
