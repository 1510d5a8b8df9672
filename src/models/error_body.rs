//! Error envelope returned by ARM on failed requests.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ArmErrorBody {
    pub error: ArmErrorDetail,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ArmErrorDetail {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}
