use axum::Router;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{Contact, CreateContact, PhoneSearchQuery, UpdateContact},
    AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::contacts::create_contact,
        crate::routes::contacts::list_contacts,
        crate::routes::contacts::update_contact,
        crate::routes::contacts::search_contacts_by_phone,
    ),
    components(
        schemas(Contact, CreateContact, UpdateContact, PhoneSearchQuery)
    ),
    tags(
        (name = "contacts", description = "Contact management endpoints")
    ),
    info(
        title = "Rolodex API",
        version = "0.1.0",
        description = "Contact management API"
    )
)]
pub struct ApiDoc;

pub fn create_swagger_router() -> Router<Arc<AppState>> {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}
