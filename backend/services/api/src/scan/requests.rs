use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    pub text: String,
}
