use serde::{Deserialize, Serialize};

pub const HEALTHY_MESSAGE: &str = "Service healthy.";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub message: String,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            message: HEALTHY_MESSAGE.to_string(),
        }
    }
}
