//! Build information endpoint

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Build metadata reported by `GET /v1/app-info`.
///
/// `git_commit` and `build_id` come from the `GIT_COMMIT` / `BUILD_ID`
/// variables present at compile time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    pub version: String,
    pub git_commit: String,
    pub build_id: String,
    pub platform: String,
    pub profile: String,
}

impl AppInfo {
    pub fn new(
        version: impl Into<String>,
        git_commit: impl Into<String>,
        build_id: impl Into<String>,
    ) -> Self {
        Self {
            version: version.into(),
            git_commit: git_commit.into(),
            build_id: build_id.into(),
            platform: format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH),
            profile: if cfg!(debug_assertions) { "debug" } else { "release" }.to_string(),
        }
    }

    /// Information baked in at compile time
    pub fn from_build() -> Self {
        Self::new(
            env!("CARGO_PKG_VERSION"),
            option_env!("GIT_COMMIT").unwrap_or("unknown"),
            option_env!("BUILD_ID").unwrap_or("unknown"),
        )
    }
}

/// GET /v1/app-info
pub async fn app_info(State(state): State<AppState>) -> Json<AppInfo> {
    Json(state.app_info.clone())
}
