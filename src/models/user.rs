use crate::core::config::DefaultsConfig;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRecord {
    /// Display name, not required to be unique
    pub name: String,
    pub email: String,
    pub age: u32,
    /// Unix timestamp, set once at creation
    pub created_at: i64,
    /// Whether the account is active
    pub is_active: bool,
    /// Stored credential; present only on records created through
    /// authentication
    pub password: Option<String>,
}

impl UserRecord {
    pub fn new(name: String, email: String, age: u32, created_at: i64) -> Self {
        Self {
            name,
            email,
            age,
            created_at,
            is_active: true,
            password: None,
        }
    }

    pub fn with_password(
        name: String,
        email: String,
        age: u32,
        password: String,
        created_at: i64,
    ) -> Self {
        Self {
            name,
            email,
            age,
            created_at,
            is_active: true,
            password: Some(password),
        }
    }
}

/// Caller-supplied description of a record to add
///
/// Missing fields are filled from the configured placeholders. The
/// candidate is consumed to build a fresh record, so the caller's value is
/// never mutated in place.
#[derive(Clone, Debug, Default)]
pub struct CandidateRecord {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
}

impl CandidateRecord {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn into_record(self, defaults: &DefaultsConfig, created_at: i64) -> UserRecord {
        UserRecord::new(
            self.name.unwrap_or_else(|| defaults.name.clone()),
            self.email.unwrap_or_else(|| defaults.email.clone()),
            self.age.unwrap_or(defaults.age),
            created_at,
        )
    }
}
