use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthOut {
    pub ok: bool,
    pub version: &'static str,
}

pub async fn handle() -> Json<HealthOut> {
    Json(HealthOut { ok: true, version: env!("CARGO_PKG_VERSION") })
}
