use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::AppState;

/*
    /api/analytics/
*/
pub async fn dashboard(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "success": true,
        "data": data.analytics.dashboard_data(),
    }))
}

pub async fn comprehensive(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "success": true,
        "data": data.analytics.comprehensive_analytics(),
    }))
}

pub async fn demographics(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "success": true,
        "data": data.analytics.tourist_demographics(),
    }))
}

pub async fn popular_places(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "success": true,
        "data": data.analytics.popular_places_analysis(),
    }))
}

pub async fn facilities(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "success": true,
        "data": data.analytics.facilities_analysis(),
    }))
}
