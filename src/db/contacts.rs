use anyhow::Result;
use sqlx::Row;
use uuid::Uuid;

use super::Database;
use crate::models::{Contact, CreateContact};

impl Database {
    pub async fn create_contact(&self, contact: CreateContact) -> Result<Contact> {
        let row = sqlx::query(
            r#"
            INSERT INTO contacts (id, first_name, last_name, phone, created_at, updated_at)
            VALUES ($1, $2, $3, $4, NOW(), NOW())
            RETURNING id, first_name, last_name, phone, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&contact.first_name)
        .bind(&contact.last_name)
        .bind(&contact.phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(Contact {
            id: row.get("id"),
            first_name: row.get("first_name"),
            last_name: row.get("last_name"),
            phone: row.get("phone"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }

    pub async fn get_contact_by_id(&self, id: Uuid) -> Result<Option<Contact>> {
        let row = sqlx::query(
            "SELECT id, first_name, last_name, phone, created_at, updated_at
             FROM contacts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(Contact {
                id: row.get("id"),
                first_name: row.get("first_name"),
                last_name: row.get("last_name"),
                phone: row.get("phone"),
                created_at: row.get("created_at"),
                updated_at: row.get("updated_at"),
            })),
            None => Ok(None),
        }
    }

    /// List all contacts in insertion order. The id tiebreak keeps rows with
    /// equal creation timestamps in a stable order.
    pub async fn get_all_contacts(&self) -> Result<Vec<Contact>> {
        let rows = sqlx::query(
            "SELECT id, first_name, last_name, phone, created_at, updated_at
             FROM contacts ORDER BY created_at ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        let contacts = rows
            .into_iter()
            .map(|row| Contact {
                id: row.get("id"),
                first_name: row.get("first_name"),
                last_name: row.get("last_name"),
                phone: row.get("phone"),
                created_at: row.get("created_at"),
                updated_at: row.get("updated_at"),
            })
            .collect();

        Ok(contacts)
    }

    /// Merge the supplied fields over the stored row and refresh updated_at.
    /// Returns None when no row matches the id.
    pub async fn update_contact(
        &self,
        id: Uuid,
        first_name: Option<String>,
        last_name: Option<String>,
        phone: Option<String>,
    ) -> Result<Option<Contact>> {
        let contact = match self.get_contact_by_id(id).await? {
            Some(contact) => contact,
            None => return Ok(None),
        };

        let first_name = first_name.unwrap_or(contact.first_name);
        let last_name = last_name.unwrap_or(contact.last_name);
        let phone = phone.unwrap_or(contact.phone);

        let row = sqlx::query(
            r#"
            UPDATE contacts SET first_name = $1, last_name = $2, phone = $3, updated_at = NOW()
            WHERE id = $4
            RETURNING id, first_name, last_name, phone, created_at, updated_at
            "#,
        )
        .bind(&first_name)
        .bind(&last_name)
        .bind(&phone)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(Some(Contact {
            id: row.get("id"),
            first_name: row.get("first_name"),
            last_name: row.get("last_name"),
            phone: row.get("phone"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }))
    }

    pub async fn find_contacts_by_phone(&self, phone: &str) -> Result<Vec<Contact>> {
        let rows = sqlx::query(
            "SELECT id, first_name, last_name, phone, created_at, updated_at
             FROM contacts WHERE phone = $1 ORDER BY created_at ASC, id ASC",
        )
        .bind(phone)
        .fetch_all(&self.pool)
        .await?;

        let contacts = rows
            .into_iter()
            .map(|row| Contact {
                id: row.get("id"),
                first_name: row.get("first_name"),
                last_name: row.get("last_name"),
                phone: row.get("phone"),
                created_at: row.get("created_at"),
                updated_at: row.get("updated_at"),
            })
            .collect();

        Ok(contacts)
    }
}
