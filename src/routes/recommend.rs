use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::models::query::{ExpenseRequest, ItineraryRequest, RecommendHotelsRequest};
use crate::services::expenses::ExpenseEstimator;
use crate::AppState;

/*
    /api/recommend/
*/
pub async fn recommend_hotels(
    data: web::Data<AppState>,
    input: web::Json<RecommendHotelsRequest>,
) -> impl Responder {
    let recommendations = data.recommender.recommend(&input);
    HttpResponse::Ok().json(json!({
        "success": true,
        "recommendations": recommendations,
    }))
}

pub async fn create_itinerary(
    data: web::Data<AppState>,
    input: web::Json<ItineraryRequest>,
) -> impl Responder {
    let itinerary = data.planner.plan(&input);
    HttpResponse::Ok().json(json!({
        "success": true,
        "itinerary": itinerary,
    }))
}

pub async fn estimate_expenses(input: web::Json<ExpenseRequest>) -> impl Responder {
    let expense_estimate = ExpenseEstimator::estimate(&input);
    HttpResponse::Ok().json(json!({
        "success": true,
        "expense_estimate": expense_estimate,
    }))
}
