//! Contact person records.

use crate::domain::foundation::{ContactId, DomainError, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};

/// What organizational relationship a contact represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactType {
    /// General district contact.
    Default,
    /// Billing contact, carries billing address fields.
    Billing,
    /// School-level contact.
    School,
}

/// Partial update applied through [`Contact::update`].
#[derive(Debug, Clone, Default)]
pub struct ContactChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
}

/// A person attached to a district or school.
///
/// # Invariants
///
/// - `first_name` and `last_name` are non-blank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    id: Option<ContactId>,
    first_name: String,
    last_name: String,
    contact_type: ContactType,
    phone: Option<String>,
    email: Option<String>,
    address: Option<String>,
    city: Option<String>,
    state: Option<String>,
    zip: Option<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Contact {
    /// Creates a new unpersisted contact.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if either name is blank
    pub fn create(
        first_name: String,
        last_name: String,
        contact_type: ContactType,
    ) -> Result<Self, DomainError> {
        if first_name.trim().is_empty() {
            return Err(ValidationError::empty_field("first_name").into());
        }
        if last_name.trim().is_empty() {
            return Err(ValidationError::empty_field("last_name").into());
        }

        let now = Timestamp::now();
        Ok(Self {
            id: None,
            first_name,
            last_name,
            contact_type,
            phone: None,
            email: None,
            address: None,
            city: None,
            state: None,
            zip: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Returns a copy carrying the store-assigned id.
    pub fn with_id(mut self, id: ContactId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_phone(mut self, phone: Option<String>) -> Self {
        self.phone = phone;
        self
    }

    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    pub fn with_address(
        mut self,
        address: Option<String>,
        city: Option<String>,
        state: Option<String>,
        zip: Option<String>,
    ) -> Self {
        self.address = address;
        self.city = city;
        self.state = state;
        self.zip = zip;
        self
    }

    // Accessors

    pub fn id(&self) -> Option<ContactId> {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn contact_type(&self) -> ContactType {
        self.contact_type
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn zip(&self) -> Option<&str> {
        self.zip.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Applies a partial update, returning a new instance with a refreshed
    /// `updated_at`.
    pub fn update(&self, changes: ContactChanges) -> Result<Contact, DomainError> {
        let mut next = self.clone();
        if let Some(first_name) = changes.first_name {
            if first_name.trim().is_empty() {
                return Err(ValidationError::empty_field("first_name").into());
            }
            next.first_name = first_name;
        }
        if let Some(last_name) = changes.last_name {
            if last_name.trim().is_empty() {
                return Err(ValidationError::empty_field("last_name").into());
            }
            next.last_name = last_name;
        }
        if changes.phone.is_some() {
            next.phone = changes.phone;
        }
        if changes.email.is_some() {
            next.email = changes.email;
        }
        if changes.address.is_some() {
            next.address = changes.address;
        }
        if changes.city.is_some() {
            next.city = changes.city;
        }
        if changes.state.is_some() {
            next.state = changes.state;
        }
        if changes.zip.is_some() {
            next.zip = changes.zip;
        }
        next.updated_at = Timestamp::now_after(&self.updated_at);
        Ok(next)
    }
}

/// Splits a free-text person name on the first space.
///
/// The first token becomes the first name, everything after it the last
/// name; missing or empty tokens default to "Unknown". One convention for
/// both the district and school paths.
pub fn split_person_name(name: &str) -> (String, String) {
    let trimmed = name.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let first = parts
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("Unknown");
    let last = parts
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("Unknown");
    (first.to_string(), last.to_string())
}
