use serde::Serialize;

#[derive(Debug, PartialEq, Serialize)]
pub struct HealthCheckResponse {
    pub error: bool,
    pub version: &'static str,
}
