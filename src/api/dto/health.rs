//! Response body of `GET /health`.

use serde::Serialize;

/// Overall service state. Serialized as `"healthy"` or `"degraded"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
}

/// Result of checking one backing component. Serialized as `"ok"` or `"error"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Ok,
    Error,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub checks: HealthChecks,
}

/// The store is the only component the API depends on.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: ComponentCheck,
}

#[derive(Debug, Serialize)]
pub struct ComponentCheck {
    pub status: ComponentStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HealthResponse {
    /// Derives the overall status from the database check.
    pub fn from_database(database: ComponentCheck) -> Self {
        let status = match database.status {
            ComponentStatus::Ok => ServiceStatus::Healthy,
            ComponentStatus::Error => ServiceStatus::Degraded,
        };

        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks: HealthChecks { database },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_failed_database_check_degrades_service() {
        let response = HealthResponse::from_database(ComponentCheck {
            status: ComponentStatus::Error,
            message: Some("pool closed".to_string()),
        });

        assert_eq!(response.status, ServiceStatus::Degraded);

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["status"], "degraded");
        assert_eq!(
            value["checks"]["database"],
            json!({"status": "error", "message": "pool closed"})
        );
    }

    #[test]
    fn test_message_omitted_when_absent() {
        let response = HealthResponse::from_database(ComponentCheck {
            status: ComponentStatus::Ok,
            message: None,
        });

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["status"], "healthy");
        assert_eq!(value["checks"]["database"], json!({"status": "ok"}));
    }
}
