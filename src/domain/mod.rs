mod health_status;
mod root_path;

pub use health_status::{HealthStatus, HEALTHY_MESSAGE};
pub use root_path::{RootPath, DEFAULT_ROOT_PATH};
