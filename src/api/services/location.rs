use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{error, info, trace};

use crate::api::middleware::RequestId;
use crate::errors::MedihelpError;
use crate::services::{
    Coordinate, FacilityFinder, FacilityRecord, SearchOutcome, SearchParams, format_outcome,
};

pub const LOCATION_RECEIVED: &str = "Location received!";
pub const INVALID_JSON: &str = "Invalid JSON data received";

#[derive(Debug, Serialize)]
pub struct LocationResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub hospitals: Vec<FacilityRecord>,
    pub formatted_results: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub formatted_results: String,
}

impl ErrorResponse {
    fn new(error: String) -> Self {
        Self {
            formatted_results: format!("Error: {}", error),
            error,
        }
    }
}

pub struct LocationService;

impl LocationService {
    /// POST /location
    ///
    /// Body: `{"latitude": <number>, "longitude": <number>}`
    pub async fn receive_location(
        body: web::Bytes,
        finder: web::Data<FacilityFinder>,
        params: Option<web::Data<SearchParams>>,
        request_id: Option<web::ReqData<RequestId>>,
    ) -> HttpResponse {
        let request_id = request_id.map(|id| id.into_inner().0);

        let coordinate = match parse_coordinate(&body) {
            Ok(coordinate) => coordinate,
            Err(err) => {
                info!("Rejected location request: {}", err);
                return HttpResponse::BadRequest().json(ErrorResponse::new(err.user_message()));
            }
        };
        info!("Received user location: {}", coordinate);

        let params = params.map(|p| *p.get_ref()).unwrap_or_default();
        let finder = finder.into_inner();

        // Overpass 调用是阻塞的，放到线程池执行
        match web::block(move || finder.find_with(Some(coordinate), params)).await {
            Ok(outcome) => Self::outcome_response(outcome),
            Err(e) => {
                error!(
                    request_id = request_id.as_deref().unwrap_or("-"),
                    "Facility search aborted: {}", e
                );
                HttpResponse::InternalServerError()
                    .json(ErrorResponse::new(format!("Server error: {}", e)))
            }
        }
    }

    /// OPTIONS /location，直接确认
    pub async fn preflight() -> impl Responder {
        trace!("Acknowledging OPTIONS /location");
        HttpResponse::Ok().json(json!({ "status": "ok" }))
    }

    fn outcome_response(outcome: SearchOutcome) -> HttpResponse {
        let formatted_results = format_outcome(&outcome);

        let (status, error) = match &outcome {
            SearchOutcome::Failed(err) => (Self::status_for(err), Some(err.user_message())),
            SearchOutcome::Found(_) | SearchOutcome::NoResults => (StatusCode::OK, None),
        };

        HttpResponse::build(status).json(LocationResponse {
            message: LOCATION_RECEIVED.to_string(),
            error,
            hospitals: outcome.into_records(),
            formatted_results,
        })
    }

    fn status_for(err: &MedihelpError) -> StatusCode {
        match err {
            MedihelpError::Throttled(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::BAD_GATEWAY,
        }
    }
}

/// Extract the coordinate from a request body.
///
/// Numbers and numeric strings are accepted; `null` counts as missing.
/// The error text names the offending field(s).
pub fn parse_coordinate(body: &[u8]) -> Result<Coordinate, MedihelpError> {
    let data: Value =
        serde_json::from_slice(body).map_err(|_| MedihelpError::validation(INVALID_JSON))?;
    let obj = match data.as_object() {
        Some(obj) if !obj.is_empty() => obj,
        _ => return Err(MedihelpError::validation(INVALID_JSON)),
    };

    let lat = obj.get("latitude").filter(|v| !v.is_null());
    let lon = obj.get("longitude").filter(|v| !v.is_null());

    let (lat, lon) = match (lat, lon) {
        (Some(lat), Some(lon)) => (lat, lon),
        (None, None) => {
            return Err(MedihelpError::validation(
                "Missing latitude and longitude in request",
            ));
        }
        (None, Some(_)) => return Err(MedihelpError::validation("Missing latitude in request")),
        (Some(_), None) => return Err(MedihelpError::validation("Missing longitude in request")),
    };

    let latitude =
        numeric(lat).ok_or_else(|| MedihelpError::validation("Invalid latitude in request"))?;
    let longitude =
        numeric(lon).ok_or_else(|| MedihelpError::validation("Invalid longitude in request"))?;
    Ok(Coordinate::new(latitude, longitude))
}

fn numeric(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

/// Location 路由配置
pub fn location_routes() -> actix_web::Resource {
    web::resource("/location")
        .route(web::post().to(LocationService::receive_location))
        .route(web::method(actix_web::http::Method::OPTIONS).to(LocationService::preflight))
}
