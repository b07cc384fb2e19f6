//! Gift advisor route handlers.
//!
//! A plain form post; the reply renders into the same page. The advisor
//! service never fails (it degrades to canned replies), so neither does
//! this handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::filters;
use crate::state::AppState;

use super::PageContext;

/// Advisor form fields.
#[derive(Debug, Deserialize)]
pub struct AdvisorForm {
    age: String,
    interest: String,
    #[serde(default)]
    budget: String,
}

/// Advisor page template. Submitted values are echoed back so the form
/// survives the round trip.
#[derive(Template, WebTemplate)]
#[template(path = "advisor.html")]
pub struct AdvisorTemplate {
    pub ctx: PageContext,
    pub reply: Option<String>,
    pub error: Option<&'static str>,
    pub age: String,
    pub interest: String,
    pub budget: String,
}

/// Display the advisor form.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> AdvisorTemplate {
    let ctx = PageContext::build(&state, &session).await;

    AdvisorTemplate {
        ctx,
        reply: None,
        error: None,
        age: String::new(),
        interest: String::new(),
        budget: String::new(),
    }
}

/// Ask for advice and render the reply into the form page.
#[instrument(skip_all)]
pub async fn ask(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AdvisorForm>,
) -> AdvisorTemplate {
    let age = form.age.trim().to_string();
    let interest = form.interest.trim().to_string();
    let budget = form.budget.trim().to_string();

    let (reply, error) = if age.is_empty() || interest.is_empty() {
        (None, Some("Iltimos, bolaning yoshi va qiziqishlarini kiriting"))
    } else {
        let reply = state.advisor().advice(&age, &interest, &budget).await;
        (Some(reply), None)
    };

    let ctx = PageContext::build(&state, &session).await;

    AdvisorTemplate {
        ctx,
        reply,
        error,
        age,
        interest,
        budget,
    }
}
