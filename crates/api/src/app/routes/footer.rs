use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Form, Json, Router,
};

use forgeerp_core::SalesDocumentId;
use forgeerp_sales::{FooterField, FormData};

use crate::app::errors;
use crate::app::services::AppServices;
use crate::context::UserContext;

pub fn router() -> Router {
    Router::new()
        .route("/footer/fields", get(list_footer_fields))
        .route("/documents/:id/footer", get(get_footer).post(apply_footer))
}

/// Built-in field names and the extra fields contributed by mods.
pub async fn list_footer_fields(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let builtin: Vec<&str> = FooterField::ALL.iter().map(|f| f.as_str()).collect();
    let extra = services.footer.mods().new_fields();
    Json(serde_json::json!({ "builtin": builtin, "extra": extra })).into_response()
}

pub async fn get_footer(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.documents.get(id) {
        Some(doc) => Html(services.footer.render(&doc)).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "document not found"),
    }
}

pub async fn apply_footer(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<UserContext>,
    Path(id): Path<String>,
    Form(form): Form<FormData>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let Some(mut doc) = services.documents.get(id) else {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "document not found");
    };

    if let Err(e) = services.footer.apply(&mut doc, &form, user.user()) {
        tracing::warn!(
            document = %id,
            user = %user.user().nick,
            error = %e,
            "sales footer rejected"
        );
        return errors::domain_error_to_response(e);
    }

    let html = services.footer.render(&doc);
    services.documents.upsert(id, doc);
    tracing::info!(
        document = %id,
        user = %user.user().nick,
        fields = form.len(),
        "sales footer saved"
    );

    (StatusCode::OK, Html(html)).into_response()
}

fn parse_id(raw: &str) -> Result<SalesDocumentId, axum::response::Response> {
    raw.parse().map_err(|_| {
        errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid document id")
    })
}
