#[cfg(test)]
mod tests {
    use crate::models::{Contact, CreateContact, PhoneSearchQuery, UpdateContact};
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_create_contact_deserializes_all_fields() {
        let json = r#"{"first_name":"Ada","last_name":"Lovelace","phone":"555-0100"}"#;
        let contact: CreateContact = serde_json::from_str(json).unwrap();

        assert_eq!(contact.first_name, "Ada");
        assert_eq!(contact.last_name, "Lovelace");
        assert_eq!(contact.phone, "555-0100");
    }

    #[test]
    fn test_create_contact_rejects_missing_field() {
        let json = r#"{"first_name":"Ada","last_name":"Lovelace"}"#;
        let result: Result<CreateContact, _> = serde_json::from_str(json);

        assert!(result.is_err());
    }

    #[test]
    fn test_update_contact_accepts_empty_subset() {
        let update: UpdateContact = serde_json::from_str("{}").unwrap();

        assert!(update.first_name.is_none());
        assert!(update.last_name.is_none());
        assert!(update.phone.is_none());
    }

    #[test]
    fn test_update_contact_accepts_partial_subset() {
        let update: UpdateContact = serde_json::from_str(r#"{"phone":"555-0200"}"#).unwrap();

        assert!(update.first_name.is_none());
        assert!(update.last_name.is_none());
        assert_eq!(update.phone.as_deref(), Some("555-0200"));
    }

    #[test]
    fn test_contact_serializes_all_columns() {
        let now = Utc::now();
        let contact = Contact {
            id: Uuid::new_v4(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            phone: "555-0100".to_string(),
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(&contact).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 6);
        for key in [
            "id",
            "first_name",
            "last_name",
            "phone",
            "created_at",
            "updated_at",
        ] {
            assert!(object.contains_key(key), "missing key {}", key);
        }
    }

    #[test]
    fn test_phone_search_query_requires_phone() {
        let result: Result<PhoneSearchQuery, _> = serde_json::from_str("{}");
        assert!(result.is_err());

        let query: PhoneSearchQuery = serde_json::from_str(r#"{"phone":"555-0100"}"#).unwrap();
        assert_eq!(query.phone, "555-0100");
    }
}
