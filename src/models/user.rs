//! User model and related types.
//!
//! This module defines the User struct and Designation enum for the
//! workers (and the admin) known to the system.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A worker's role on the shop floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Designation {
    /// Supervises a line or shift.
    Supervisor,
    /// Operates machinery.
    Operator,
    /// General helper.
    Helper,
}

/// Represents a registered user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user.
    pub id: Uuid,
    /// Login name, stored lower-cased and trimmed.
    pub username: String,
    /// Optional contact email, stored lower-cased.
    #[serde(default)]
    pub email: Option<String>,
    /// Pay for exactly 8 hours of work. `None` until the user sets it.
    #[serde(default)]
    pub daily_salary_rate: Option<Decimal>,
    /// Provident-fund account number.
    #[serde(default)]
    pub pf_number: Option<String>,
    /// Employer-assigned employee code.
    #[serde(default)]
    pub emp_code: Option<String>,
    /// Department name.
    #[serde(default)]
    pub department: Option<String>,
    /// Role on the shop floor.
    #[serde(default)]
    pub designation: Option<Designation>,
    /// Whether this user administers the system.
    #[serde(default)]
    pub is_admin: bool,
    /// When the user was registered.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a non-admin user with no rate set.
    ///
    /// The username is trimmed and lower-cased.
    ///
    /// # Examples
    ///
    /// ```
    /// use daily_wage_engine::models::User;
    ///
    /// let user = User::new("  Ramesh ");
    /// assert_eq!(user.username, "ramesh");
    /// assert!(user.daily_salary_rate.is_none());
    /// assert!(!user.is_admin);
    /// ```
    pub fn new(username: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: normalize_username(username),
            email: None,
            daily_salary_rate: None,
            pf_number: None,
            emp_code: None,
            department: None,
            designation: None,
            is_admin: false,
            created_at: Utc::now(),
        }
    }

    /// Returns true if the user has set a daily salary rate.
    pub fn has_rate(&self) -> bool {
        self.daily_salary_rate.is_some()
    }
}

/// Trims and lower-cases a username.
pub fn normalize_username(username: &str) -> String {
    username.trim().to_lowercase()
}
