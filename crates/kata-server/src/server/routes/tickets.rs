use crate::server::{
    error::{ApiError, Message},
    state::AppState,
};
use axum::{Json, extract::State, http::StatusCode};

/// Accepts a ticket during opening hours.
///
/// POST /tickets
///
/// 202 inside [`kata::OPEN_HOURS`] (server local time), 403 outside.
#[tracing::instrument(skip_all)]
pub async fn post_ticket(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    if !kata::accept_ticket(&*state.clock) {
        tracing::info!("Ticket refused outside opening hours");
        return Err(ApiError::TicketWindowClosed);
    }

    Ok((StatusCode::ACCEPTED, Json(Message::new("ticket accepted"))))
}
