use serde::Serialize;
use slant_analysis::Finding;

#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub results: Vec<Finding>,
}
