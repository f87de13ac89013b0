use axum::extract::State;
use axum::Json;

use crate::extractors::LenientJson;
use crate::AppState;

use super::requests::ScanRequest;
use super::responses::ScanResponse;

/// Always 200: analysis failures surface as an empty `results` list.
pub async fn post_scan(
    State(state): State<AppState>,
    LenientJson(body): LenientJson<ScanRequest>,
) -> Json<ScanResponse> {
    let results = state.scanner.handle(&body.text).await;
    Json(ScanResponse { results })
}
