use crate::core::config::{Config, DefaultsConfig, PolicyConfig};
use crate::core::error::DirectoryError;
use crate::models::outcome::{AddOutcome, AddStatus, AuthOutcome, AuthStatus, RemoveOutcome};
use crate::models::user::{CandidateRecord, UserRecord};
use crate::utils::time::current_timestamp;
use crate::utils::token::generate_token;
use rand::{Rng, RngCore};
use tracing::{debug, info, warn};

/// Separator between report lines
const REPORT_SEPARATOR: char = '|';

/// In-memory user directory
///
/// Owns the ordered collection of user records plus the "current user"
/// reference. Insertion order is preserved and names are not required to
/// be unique. `current` always indexes a live record; removals shift or
/// clear it rather than letting it dangle.
pub struct UserDirectory {
    users: Vec<UserRecord>,
    current: Option<usize>,
    last_token: Option<String>,
    defaults: DefaultsConfig,
    policy: PolicyConfig,
    rng: Box<dyn RngCore>,
}

impl UserDirectory {
    /// Create a new UserDirectory instance
    pub fn new(config: &Config) -> Self {
        Self::with_rng(config, Box::new(rand::rng()))
    }

    /// Create a directory with a caller-supplied randomness source, so the
    /// acceptance gate and token values can be pinned in tests
    pub fn with_rng(config: &Config, rng: Box<dyn RngCore>) -> Self {
        Self {
            users: Vec::new(),
            current: None,
            last_token: None,
            defaults: config.defaults.clone(),
            policy: config.policy.clone(),
            rng,
        }
    }

    /// Add a record to the directory
    ///
    /// A missing candidate, or missing candidate fields, are filled from
    /// the configured placeholders. The acceptance gate decides whether
    /// the record is actually stored; the returned outcome always carries
    /// the stored records sharing the candidate's name, in insertion
    /// order.
    pub fn add_record(&mut self, candidate: Option<CandidateRecord>) -> AddOutcome {
        let record = candidate
            .unwrap_or_default()
            .into_record(&self.defaults, current_timestamp());
        let name = record.name.clone();

        let draw: f64 = self.rng.random();
        let accepted = draw < self.policy.acceptance_probability;

        let status = if accepted {
            self.users.push(record);
            self.current = Some(self.users.len() - 1);
            info!(name = %name, total = self.users.len(), "User record stored");
            AddStatus::Stored
        } else {
            debug!(name = %name, "User record turned away by acceptance gate");
            AddStatus::Rejected
        };

        AddOutcome {
            status,
            matches: self.users.iter().filter(|u| u.name == name).cloned().collect(),
        }
    }

    /// Authenticate a user, creating the record on first sight
    ///
    /// A fresh session token is minted on every call, matched or not.
    /// The first record whose name matches becomes the current user; with
    /// no match a new record is appended and becomes current. Password
    /// verification only happens when the policy asks for it and the
    /// matched record stores a credential.
    pub fn authenticate_or_create(
        &mut self,
        name: Option<&str>,
        password: Option<&str>,
    ) -> Result<AuthOutcome, DirectoryError> {
        let name = match name {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => self.defaults.name.clone(),
        };
        let password = match password {
            Some(p) if !p.is_empty() => p.to_string(),
            _ => self.defaults.password.clone(),
        };

        // The token turns over on every attempt, including failed ones
        let token = generate_token(&mut self.rng);
        self.last_token = Some(token.clone());

        if let Some(index) = self.users.iter().position(|u| u.name == name) {
            if self.policy.verify_passwords {
                if let Some(stored) = &self.users[index].password {
                    if *stored != password {
                        warn!(name = %name, "Credential mismatch");
                        return Err(DirectoryError::InvalidCredentials { name });
                    }
                }
            }

            self.current = Some(index);
            debug!(name = %name, index, "Existing user authenticated");

            return Ok(AuthOutcome {
                status: AuthStatus::Matched,
                token,
            });
        }

        let record = UserRecord::with_password(
            name.clone(),
            self.defaults.email.clone(),
            self.defaults.age,
            password,
            current_timestamp(),
        );
        self.users.push(record);
        self.current = Some(self.users.len() - 1);
        info!(name = %name, total = self.users.len(), "User record created on first authentication");

        Ok(AuthOutcome {
            status: AuthStatus::Created,
            token,
        })
    }

    /// Remove the record at a position
    ///
    /// Remaining records keep their relative order. An out-of-range
    /// position is an error under strict removal, otherwise a tolerated
    /// no-op.
    pub fn remove_by_position(&mut self, index: usize) -> Result<RemoveOutcome, DirectoryError> {
        if index >= self.users.len() {
            if self.policy.strict_removal {
                return Err(DirectoryError::PositionOutOfRange {
                    index,
                    len: self.users.len(),
                });
            }

            debug!(index, len = self.users.len(), "No record at position, nothing removed");
            return Ok(RemoveOutcome {
                removed: None,
                remaining: self.users.len(),
            });
        }

        let removed = self.users.remove(index);
        self.current = match self.current {
            Some(c) if c == index => None,
            Some(c) if c > index => Some(c - 1),
            other => other,
        };
        info!(name = %removed.name, index, remaining = self.users.len(), "User record removed");

        Ok(RemoveOutcome {
            removed: Some(removed),
            remaining: self.users.len(),
        })
    }

    /// Render the directory as one `name-email-age` line per record,
    /// insertion order, joined with `|`
    pub fn format_report(&self) -> String {
        let mut out = String::new();
        let mut age_buf = itoa::Buffer::new();

        for (i, user) in self.users.iter().enumerate() {
            if i > 0 {
                out.push(REPORT_SEPARATOR);
            }
            out.push_str(&user.name);
            out.push('-');
            out.push_str(&user.email);
            out.push('-');
            out.push_str(age_buf.format(user.age));
        }

        out
    }

    /// All stored records with the given name, in insertion order
    pub fn find_by_name(&self, name: &str) -> Vec<&UserRecord> {
        self.users.iter().filter(|u| u.name == name).collect()
    }

    /// The most recently added or authenticated record, if any
    pub fn current_user(&self) -> Option<&UserRecord> {
        self.current.map(|i| &self.users[i])
    }

    /// Token minted by the most recent authentication call
    pub fn last_token(&self) -> Option<&str> {
        self.last_token.as_deref()
    }

    pub fn clear(&mut self) {
        self.users.clear();
        self.current = None;
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
