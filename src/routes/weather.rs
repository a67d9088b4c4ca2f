use crate::core::{is_valid_cep, normalize_cep};
use crate::models::{ErrorResponse, WeatherResponse};
use crate::services::{CepLookup, WeatherLookup};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub cep: Arc<dyn CepLookup>,
    pub weather: Arc<dyn WeatherLookup>,
}

/// Configure all weather-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(index))
        .route("/health", web::get().to(health_check))
        .route("/weather/{cep}", web::get().to(weather_by_cep));
}

/// Running indicator for the root path
async fn index() -> impl Responder {
    "cep-weather service is running"
}

/// Health check endpoint, touches no upstream dependency
async fn health_check() -> impl Responder {
    "OK"
}

/// Current weather by CEP
///
/// GET /weather/{cep}
///
/// The path segment may carry the conventional hyphen ("01310-100").
/// Resolution is strictly sequential: CEP to city, then city to
/// temperature. Upstream failures map to 500 with the detail kept
/// server-side; an unknown CEP maps to 404.
async fn weather_by_cep(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let cep = normalize_cep(path.trim());

    if !is_valid_cep(&cep) {
        tracing::info!("Rejected malformed CEP {:?}", path.as_str());
        return HttpResponse::UnprocessableEntity().json(ErrorResponse::new("invalid zipcode"));
    }

    let location = match state.cep.lookup(&cep).await {
        Ok(Some(location)) => location,
        Ok(None) => {
            tracing::info!("CEP {} not found", cep);
            return HttpResponse::NotFound().json(ErrorResponse::new("can not find zipcode"));
        }
        Err(e) => {
            tracing::error!("Failed to resolve CEP {}: {}", cep, e);
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::new("internal server error"));
        }
    };

    tracing::debug!("CEP {} resolved to {}/{}", cep, location.city, location.state);

    let reading = match state.weather.current_temperature(&location.city).await {
        Ok(reading) => reading,
        Err(e) => {
            tracing::error!("Failed to fetch weather for {}: {}", location.city, e);
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::new("internal server error"));
        }
    };

    HttpResponse::Ok().json(WeatherResponse::from_celsius(reading.celsius))
}
