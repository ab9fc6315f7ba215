use axum::Json;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::VoiceCatalog;

#[derive(Serialize)]
pub struct VoiceResponse {
    pub index: usize,
    pub id: &'static str,
    pub name: &'static str,
}

pub async fn voices_handler() -> impl IntoResponse {
    let voices: Vec<VoiceResponse> = VoiceCatalog::voices()
        .iter()
        .enumerate()
        .map(|(index, voice)| VoiceResponse {
            index,
            id: voice.id,
            name: voice.name,
        })
        .collect();

    Json(voices)
}
