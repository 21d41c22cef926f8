use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::handlers::contact_dtos::{ContactRequest, ContactResponse};
use crate::utils::mailer::{ContactEmail, OPERATOR_ADDRESS};
use crate::AppState;

// Fixed response copy; the client renders these verbatim.
pub const MSG_RECEIVED: &str = "Mensagem recebida com sucesso!";
pub const MSG_INVALID: &str = "Dados invalidos. Por favor, verifique os campos.";
pub const MSG_FAILED: &str = "Erro ao processar mensagem. Tente novamente.";

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, (StatusCode, Json<ContactResponse>)> {
    if let Err(e) = payload.validate() {
        tracing::warn!("rejected contact payload: {}", e);
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ContactResponse {
                success: false,
                message: MSG_INVALID.to_string(),
            }),
        ));
    }

    match &state.mailer {
        Some(mailer) => {
            let mail = ContactEmail {
                name: payload.name.clone(),
                email: payload.email.clone(),
                message: payload.message.clone(),
            };
            if let Err(e) = mailer.send_contact(mail).await {
                tracing::error!("failed to dispatch contact email: {:#}", e);
                return Err((
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ContactResponse {
                        success: false,
                        message: MSG_FAILED.to_string(),
                    }),
                ));
            }
            tracing::info!("contact email sent to {}", OPERATOR_ADDRESS);
        }
        None => {
            // No credentials configured: record the message and report
            // success anyway so a misconfigured deployment stays invisible
            // to the visitor.
            tracing::info!(
                "email credentials not configured; recording contact message from {} <{}>: {}",
                payload.name,
                payload.email,
                payload.message
            );
        }
    }

    Ok(Json(ContactResponse {
        success: true,
        message: MSG_RECEIVED.to_string(),
    }))
}

#[cfg(test)]
#[path = "contact_handlers_test.rs"]
mod tests;
