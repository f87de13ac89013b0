use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of a running service process, reported by `/info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub instance_id: Uuid,
    pub model: String,
}

impl ServiceInfo {
    pub fn new(name: &str, model: &str) -> Self {
        Self {
            name: name.to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            instance_id: Uuid::new_v4(),
            model: model.to_owned(),
        }
    }
}
