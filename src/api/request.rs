//! Request types for the Daily Wage Engine API.
//!
//! This module defines the JSON request bodies and query strings accepted by
//! the entry, user and admin endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Designation, User};
use crate::store::NewEntry;

/// Request body for `POST /api/entries`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEntryRequest {
    /// The user logging the day.
    pub user_id: Uuid,
    /// The date worked.
    pub date: NaiveDate,
    /// Clock-in time, `HH:MM`.
    pub in_time: String,
    /// Clock-out time, `HH:MM`.
    pub out_time: String,
}

impl From<CreateEntryRequest> for NewEntry {
    fn from(req: CreateEntryRequest) -> Self {
        NewEntry {
            user_id: req.user_id,
            date: req.date,
            in_time: req.in_time,
            out_time: req.out_time,
        }
    }
}

/// Request body for `POST /api/users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    /// Login name; trimmed and lower-cased before storing.
    pub username: String,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// 8-hour daily rate, if already known.
    #[serde(default)]
    pub daily_salary_rate: Option<Decimal>,
    /// Provident fund account number.
    #[serde(default)]
    pub pf_number: Option<String>,
    /// Employer-assigned code.
    #[serde(default)]
    pub emp_code: Option<String>,
    /// Department name.
    #[serde(default)]
    pub department: Option<String>,
    /// Job designation.
    #[serde(default)]
    pub designation: Option<Designation>,
}

impl From<RegisterUserRequest> for User {
    fn from(req: RegisterUserRequest) -> Self {
        let mut user = User::new(&req.username);
        user.email = req.email;
        user.daily_salary_rate = req.daily_salary_rate;
        user.pf_number = req.pf_number;
        user.emp_code = req.emp_code;
        user.department = req.department;
        user.designation = req.designation;
        user
    }
}

/// Request body for `PUT /api/users/:user_id/salary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetSalaryRequest {
    /// Pay for exactly 8 hours of work.
    pub daily_salary_rate: Decimal,
}

/// Request body for `PUT /api/admin/settings/pf`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PfUpdateRequest {
    /// New PF percentage, `0..=50`.
    pub pf_percentage: Decimal,
}

/// Optional month filter for the admin entry listing.
///
/// The filter applies only when both `year` and `month` are given.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonthQuery {
    /// Calendar year.
    pub year: Option<i32>,
    /// Calendar month, 1-12.
    pub month: Option<u32>,
}

impl MonthQuery {
    /// Returns the `(year, month)` pair when both are present.
    pub fn period(&self) -> Option<(i32, u32)> {
        self.year.zip(self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_create_entry_request() {
        let json = r#"{
            "user_id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "date": "2025-03-04",
            "in_time": "09:50",
            "out_time": "18:10"
        }"#;

        let request: CreateEntryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.date, NaiveDate::from_ymd_opt(2025, 3, 4).unwrap());
        assert_eq!(request.in_time, "09:50");

        let entry: NewEntry = request.into();
        assert_eq!(entry.out_time, "18:10");
    }

    #[test]
    fn test_register_request_defaults_optional_fields() {
        let request: RegisterUserRequest =
            serde_json::from_str(r#"{"username": "  Ramesh "}"#).unwrap();
        assert!(request.daily_salary_rate.is_none());

        let user: User = request.into();
        assert_eq!(user.username, "ramesh");
        assert!(!user.is_admin);
    }

    #[test]
    fn test_register_request_with_profile() {
        let json = r#"{
            "username": "suresh",
            "daily_salary_rate": "800",
            "designation": "operator",
            "department": "Packing"
        }"#;
        let user: User = serde_json::from_str::<RegisterUserRequest>(json)
            .unwrap()
            .into();
        assert_eq!(user.daily_salary_rate, Some(Decimal::from_str("800").unwrap()));
        assert_eq!(user.designation, Some(Designation::Operator));
    }

    #[test]
    fn test_month_query_requires_both_parts() {
        let both = MonthQuery {
            year: Some(2025),
            month: Some(3),
        };
        let year_only = MonthQuery {
            year: Some(2025),
            month: None,
        };
        assert_eq!(both.period(), Some((2025, 3)));
        assert_eq!(year_only.period(), None);
    }
}
