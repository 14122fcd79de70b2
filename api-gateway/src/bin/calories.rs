//! Calories Lambda - Handles /api/calories endpoint.
//!
//! Endpoints:
//! - GET /api/calories - Today's remaining calories from Airtable
//! - OPTIONS /api/calories - CORS preflight

use lambda_http::http::Method;
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use shared::http::{error_response, json_response, preflight_response};
use shared::{AirtableClient, CalorieResult, Clock, Config, DateKey, LocalClock};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Application state
struct AppState {
    /// Configuration problems are kept here and reported on each request
    airtable: shared::Result<AirtableClient>,
    clock: Box<dyn Clock>,
}

impl AppState {
    fn new(config: shared::Result<Config>, clock: Box<dyn Clock>) -> Self {
        Self {
            airtable: config.and_then(AirtableClient::new),
            clock,
        }
    }
}

async fn calories_today(state: &AppState, method: &Method) -> shared::Result<CalorieResult> {
    if method != Method::GET {
        return Err(shared::Error::MethodNotAllowed(method.to_string()));
    }

    let airtable = state.airtable.as_ref().map_err(Clone::clone)?;

    let date = DateKey::today(&*state.clock);
    let records = airtable.records_for_day(&date).await?;
    let result = CalorieResult::new(date, &records);

    info!(
        %date,
        records_found = result.records_found,
        calories_left_today = result.calories_left_today,
        "Fetched calories"
    );

    Ok(result)
}

async fn handler(state: Arc<AppState>, event: Request) -> Result<Response<Body>, Error> {
    if event.method() == Method::OPTIONS {
        return preflight_response();
    }

    match calories_today(&state, event.method()).await {
        Ok(result) => json_response(200, &result),
        Err(e) => {
            error!(
                method = %event.method(),
                status = e.status_code(),
                error = %e,
                "Calories request failed"
            );
            error_response(&e)
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::from_env();
    if let Err(e) = &config {
        error!(error = %e, "Invalid configuration, requests will fail until it is fixed");
    }

    let state = Arc::new(AppState::new(config, Box::new(LocalClock)));

    run(service_fn(move |event| {
        let state = Arc::clone(&state);
        async move { handler(state, event).await }
    }))
    .await
}
