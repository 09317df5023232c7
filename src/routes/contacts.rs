use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::{
    errors::contact::ContactError,
    models::{Contact, CreateContact, PhoneSearchQuery, UpdateContact},
    AppState,
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_contacts).post(create_contact))
        .route("/search", get(search_contacts_by_phone))
        .route("/{id}", put(update_contact))
}

pub(crate) fn validate_create_contact(contact: &CreateContact) -> Result<(), String> {
    if contact.first_name.trim().is_empty() {
        return Err("first_name must not be empty".to_string());
    }
    if contact.last_name.trim().is_empty() {
        return Err("last_name must not be empty".to_string());
    }
    if contact.phone.trim().is_empty() {
        return Err("phone must not be empty".to_string());
    }
    Ok(())
}

pub(crate) fn validate_update_contact(update: &UpdateContact) -> Result<(), String> {
    if let Some(first_name) = &update.first_name {
        if first_name.trim().is_empty() {
            return Err("first_name must not be empty".to_string());
        }
    }
    if let Some(last_name) = &update.last_name {
        if last_name.trim().is_empty() {
            return Err("last_name must not be empty".to_string());
        }
    }
    if let Some(phone) = &update.phone {
        if phone.trim().is_empty() {
            return Err("phone must not be empty".to_string());
        }
    }
    Ok(())
}

/// Create a new contact
#[utoipa::path(
    post,
    path = "/contacts",
    tag = "contacts",
    request_body = CreateContact,
    responses(
        (status = 201, description = "Contact created successfully", body = Contact),
        (status = 400, description = "Bad request - invalid contact data"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_contact(
    State(state): State<Arc<AppState>>,
    Json(contact_data): Json<CreateContact>,
) -> Result<(StatusCode, Json<Contact>), ContactError> {
    if let Err(validation_error) = validate_create_contact(&contact_data) {
        error!("Contact validation failed: {}", validation_error);
        return Err(ContactError::invalid_field(validation_error));
    }

    let contact = state.db.create_contact(contact_data).await.map_err(|e| {
        error!("Failed to create contact in database: {}", e);
        ContactError::internal_server_error(format!("Database error: {}", e))
    })?;

    Ok((StatusCode::CREATED, Json(contact)))
}

/// List all contacts in insertion order
#[utoipa::path(
    get,
    path = "/contacts",
    tag = "contacts",
    responses(
        (status = 200, description = "List of all contacts", body = Vec<Contact>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_contacts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Contact>>, ContactError> {
    let contacts = state.db.get_all_contacts().await.map_err(|e| {
        error!("Failed to list contacts: {}", e);
        ContactError::internal_server_error(format!("Database error: {}", e))
    })?;

    Ok(Json(contacts))
}

/// Update an existing contact with any subset of its data fields
#[utoipa::path(
    put,
    path = "/contacts/{id}",
    tag = "contacts",
    params(
        ("id" = Uuid, Path, description = "Contact ID")
    ),
    request_body = UpdateContact,
    responses(
        (status = 200, description = "Contact updated successfully", body = Contact),
        (status = 400, description = "Bad request - invalid contact data"),
        (status = 404, description = "Contact not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_contact(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(update_data): Json<UpdateContact>,
) -> Result<Json<Contact>, ContactError> {
    if let Err(validation_error) = validate_update_contact(&update_data) {
        error!("Contact validation failed: {}", validation_error);
        return Err(ContactError::invalid_field(validation_error));
    }

    let contact = state
        .db
        .update_contact(
            id,
            update_data.first_name,
            update_data.last_name,
            update_data.phone,
        )
        .await
        .map_err(|e| {
            error!("Failed to update contact {}: {}", id, e);
            ContactError::internal_server_error(format!("Database error: {}", e))
        })?
        .ok_or(ContactError::NotFoundById { id })?;

    Ok(Json(contact))
}

/// Search contacts by exact phone number
#[utoipa::path(
    get,
    path = "/contacts/search",
    tag = "contacts",
    params(
        PhoneSearchQuery
    ),
    responses(
        (status = 200, description = "Matching contacts, possibly empty", body = Vec<Contact>),
        (status = 400, description = "Bad request - missing or blank phone parameter"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn search_contacts_by_phone(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PhoneSearchQuery>,
) -> Result<Json<Vec<Contact>>, ContactError> {
    if query.phone.trim().is_empty() {
        return Err(ContactError::invalid_field("phone must not be empty"));
    }

    let contacts = state
        .db
        .find_contacts_by_phone(&query.phone)
        .await
        .map_err(|e| {
            error!("Failed to search contacts by phone: {}", e);
            ContactError::internal_server_error(format!("Database error: {}", e))
        })?;

    Ok(Json(contacts))
}
