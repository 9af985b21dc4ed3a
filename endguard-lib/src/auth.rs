//! Operator authentication.
//!
//! Sign-in is checked against the operator directory the backend owns,
//! mocked here as a seeded administrator account plus anything
//! registered at runtime. Sessions carry the operator; persisting them
//! across runs is the application's job, not this module's.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::AuthError;

/// Simulated directory round-trip.
const LATENCY: Duration = Duration::from_millis(120);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Administrator,
    Operator,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Administrator => "Administrator",
            Role::Operator => "Operator",
        };
        f.write_str(s)
    }
}

/// A console operator account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operator {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// An authenticated console session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub operator: Operator,
    pub started: DateTime<Utc>,
}

/// The operator directory.
///
/// The demo directory matches accounts by email only; any password
/// signs in a known account.
pub struct Directory {
    accounts: RwLock<Vec<Operator>>,
}

impl Directory {
    pub fn new() -> Self {
        let admin = Operator {
            id: Uuid::from_u128(0x1),
            name: "Admin User".to_string(),
            email: "admin@example.com".to_string(),
            role: Role::Administrator,
        };
        Self {
            accounts: RwLock::new(vec![admin]),
        }
    }

    /// Sign in as an existing operator.
    pub async fn authenticate(&self, email: &str, _password: &str) -> Result<Session, AuthError> {
        tokio::time::sleep(LATENCY).await;

        let accounts = self.accounts.read().await;
        let operator = accounts
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email.trim()))
            .ok_or(AuthError::InvalidCredentials)?;

        info!("operator {} signed in", operator.email);
        Ok(Session {
            operator: operator.clone(),
            started: Utc::now(),
        })
    }

    /// Create a new operator account and sign it in.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        _password: &str,
    ) -> Result<Session, AuthError> {
        tokio::time::sleep(LATENCY).await;

        let email = email.trim();
        if name.trim().is_empty() || email.is_empty() {
            return Err(AuthError::Registration(
                "name and email are required".to_string(),
            ));
        }

        let mut accounts = self.accounts.write().await;
        if accounts
            .iter()
            .any(|a| a.email.eq_ignore_ascii_case(email))
        {
            return Err(AuthError::Registration(format!(
                "an account for {email} already exists"
            )));
        }

        let operator = Operator {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            email: email.to_string(),
            role: Role::Operator,
        };
        accounts.push(operator.clone());

        info!("operator {} registered", operator.email);
        Ok(Session {
            operator,
            started: Utc::now(),
        })
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}
