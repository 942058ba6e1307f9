use serde::{Deserialize, Serialize};

pub const HEALTHY: &str = "healthy";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    pub fn healthy(version: &str) -> Self {
        Self {
            status: HEALTHY.to_string(),
            version: version.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_json() {
        let body = serde_json::to_string(&HealthResponse::healthy("2.3.1")).unwrap();
        assert_eq!(body, r#"{"status":"healthy","version":"2.3.1"}"#);

        let decoded: HealthResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(decoded.status, "healthy");
        assert_eq!(decoded.version, "2.3.1");
        assert_eq!(serde_json::to_string(&decoded).unwrap(), body);
    }

    #[test]
    fn test_health_response_escapes_version() {
        let body = serde_json::to_string(&HealthResponse::healthy("1.0\"beta")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["version"], "1.0\"beta");
    }
}
