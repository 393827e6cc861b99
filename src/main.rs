use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use skardu_tourism_api::data::DataLoader;
use skardu_tourism_api::models::property::Catalog;
use skardu_tourism_api::{routes, AppState};

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);

    let properties = match DataLoader::from_env().load() {
        Ok(properties) => properties,
        Err(err) => {
            log::warn!("failed to load tourism data: {err}; continuing with an empty catalog");
            Vec::new()
        }
    };
    let catalog = Catalog::new(properties);

    // Every engine is fully constructed here, before the server accepts
    // its first request; afterwards the state is read-only.
    let state = AppState::new(catalog);
    log::info!("engines ready, binding {host}:{port}");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .route("/health", web::get().to(routes::health::health))
            .app_data(web::Data::new(state.clone()))
            .service(
                web::scope("/api")
                    .service(
                        web::scope("/recommend")
                            .route(
                                "/hotels",
                                web::post().to(routes::recommend::recommend_hotels),
                            )
                            .route(
                                "/itinerary",
                                web::post().to(routes::recommend::create_itinerary),
                            )
                            .route(
                                "/expenses",
                                web::post().to(routes::recommend::estimate_expenses),
                            ),
                    )
                    .service(
                        web::scope("/analytics")
                            .route("/dashboard", web::get().to(routes::analytics::dashboard))
                            .route(
                                "/comprehensive",
                                web::get().to(routes::analytics::comprehensive),
                            )
                            .route(
                                "/demographics",
                                web::get().to(routes::analytics::demographics),
                            )
                            .route(
                                "/popular-places",
                                web::get().to(routes::analytics::popular_places),
                            )
                            .route("/facilities", web::get().to(routes::analytics::facilities)),
                    )
                    .service(
                        web::scope("/hotels")
                            .route("/search", web::get().to(routes::hotels::search_hotels))
                            .route(
                                "/locations",
                                web::get().to(routes::hotels::hotel_locations),
                            )
                            .route("", web::get().to(routes::hotels::list_hotels)),
                    ),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
