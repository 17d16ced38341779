//! Interactive Q&A HTTP handler.
//!
//! ```text
//! POST /api/ask
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require_text};

/// Request payload: a question plus an arbitrary JSON weather context.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AskRequestBody {
    /// Free-text question.
    pub question: Option<String>,
    /// Structured weather context the assistant should reason over.
    #[schema(value_type = Object)]
    pub context: Option<Value>,
}

/// Response payload carrying the assistant's answer.
#[derive(Debug, Serialize, ToSchema)]
pub struct AskResponseBody {
    /// Completion text, or the literal `"No answer."` fallback.
    pub answer: String,
}

/// Answer a free-text question using the supplied weather context.
#[utoipa::path(
    post,
    path = "/api/ask",
    request_body = AskRequestBody,
    responses(
        (status = 200, description = "The assistant's answer", body = AskResponseBody),
        (status = 400, description = "Missing question", body = ErrorSchema),
        (status = 503, description = "Assistant unavailable", body = ErrorSchema)
    ),
    tags = ["ask"],
    operation_id = "askAssistant"
)]
#[post("/ask")]
pub async fn ask_assistant(
    state: web::Data<HttpState>,
    body: web::Json<AskRequestBody>,
) -> ApiResult<web::Json<AskResponseBody>> {
    let body = body.into_inner();
    let question = require_text(body.question.as_deref(), FieldName::new("question"))?;
    let context = body.context.unwrap_or(Value::Null);

    let answer = state.assistant.answer(question, &context).await?;
    Ok(web::Json(AskResponseBody { answer }))
}

#[cfg(test)]
#[path = "ask_tests.rs"]
mod tests;
