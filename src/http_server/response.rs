//! # Response Formatting
//!
//! Success envelope types for the HTTP API. Every body carries a
//! `success` flag; listings also carry the item count, mutations a
//! human-readable message.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// List response with item count
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub success: bool,
    pub count: usize,
    pub data: Vec<T>,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        let count = data.len();
        Self {
            success: true,
            count,
            data,
        }
    }
}

/// Single record response
#[derive(Debug, Clone, Serialize)]
pub struct SingleResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> SingleResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Mutation response with a message and the affected record
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> MessageResponse<T> {
    pub fn created(data: T) -> Self {
        Self {
            success: true,
            message: "User created successfully".to_string(),
            data,
        }
    }

    pub fn updated(data: T) -> Self {
        Self {
            success: true,
            message: "User updated successfully".to_string(),
            data,
        }
    }

    pub fn deleted(data: T) -> Self {
        Self {
            success: true,
            message: "User deleted successfully".to_string(),
            data,
        }
    }
}

/// Liveness check response, independent of the store
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: String,
    pub timestamp: String,
    pub version: String,
}

impl HealthResponse {
    pub fn now() -> Self {
        Self {
            success: true,
            message: "Server is running".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_response_serialization() {
        let response = ListResponse::new(vec![json!({"id": 1}), json!({"id": 2})]);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["count"], 2);
        assert_eq!(json["data"][1]["id"], 2);
    }

    #[test]
    fn test_single_response_serialization() {
        let response = SingleResponse::new(json!({"id": 1, "name": "Test"}));

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["id"], 1);
    }

    #[test]
    fn test_message_response_variants() {
        let created = MessageResponse::created(json!({"id": 1}));
        assert_eq!(created.message, "User created successfully");

        let deleted = MessageResponse::deleted(json!({"id": 1}));
        assert_eq!(deleted.message, "User deleted successfully");
    }

    #[test]
    fn test_health_response_has_timestamp() {
        let response = HealthResponse::now();
        assert!(response.success);
        assert!(response.timestamp.contains('T'));
    }
}
