//! AI coach handlers

use std::sync::Arc;
use axum::{extract::State, response::Json};

use crate::{
    catalog::coach::{QUICK_SUGGESTIONS, WEEKLY_INSIGHTS},
    error::FitResult,
    state::{AppState, CoachExchange},
};
use crate::api::{
    extract::ApiJson,
    responses::{ChatRequest, CoachProfileResponse, ConversationResponse},
};

pub async fn coach_profile(State(state): State<Arc<AppState>>) -> Json<CoachProfileResponse> {
    Json(CoachProfileResponse {
        profile: state.profile.clone(),
        quick_suggestions: QUICK_SUGGESTIONS.to_vec(),
        insights: WEEKLY_INSIGHTS.to_vec(),
    })
}

pub async fn list_messages(
    State(state): State<Arc<AppState>>,
) -> FitResult<Json<ConversationResponse>> {
    Ok(Json(ConversationResponse {
        messages: state.conversation()?,
    }))
}

/// Handle POST /ai-coach/messages - responds after the coach delay
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<ChatRequest>,
) -> FitResult<Json<CoachExchange>> {
    Ok(Json(state.send_message(&request.message).await?))
}

pub async fn clear_messages(
    State(state): State<Arc<AppState>>,
) -> FitResult<Json<ConversationResponse>> {
    Ok(Json(ConversationResponse {
        messages: state.clear_conversation()?,
    }))
}
