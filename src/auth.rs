//! Session role checks.
//!
//! The role comes from the authentication layer and is only compared here. The checks gate
//! which operations the admin panel offers; they are not a security boundary.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Staff,
    /// Any other authenticated role.
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
            Role::Other(name) => name,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "admin" => Role::Admin,
            "staff" => Role::Staff,
            other => Role::Other(other.to_string()),
        })
    }
}

/// The signed-in user as seen by the clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_name: String,
    pub role: Role,
}

impl Session {
    pub fn new(user_name: impl Into<String>, role: Role) -> Self {
        Self {
            user_name: user_name.into(),
            role,
        }
    }

    pub fn admin(user_name: impl Into<String>) -> Self {
        Self::new(user_name, Role::Admin)
    }

    pub fn staff(user_name: impl Into<String>) -> Self {
        Self::new(user_name, Role::Staff)
    }

    pub fn can_manage_catalog(&self) -> bool {
        self.role == Role::Admin
    }

    /// Every authenticated role may create, edit and delete orders.
    pub fn can_manage_orders(&self) -> bool {
        true
    }

    pub fn can_change_order_status(&self) -> bool {
        self.role != Role::Staff
    }

    pub fn require(&self, allowed: bool, operation: &'static str) -> Result<(), AccessError> {
        if allowed {
            Ok(())
        } else {
            Err(AccessError::Forbidden {
                role: self.role.to_string(),
                operation,
            })
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccessError {
    #[error("Role '{role}' may not {operation}")]
    Forbidden {
        role: String,
        operation: &'static str,
    },
}
