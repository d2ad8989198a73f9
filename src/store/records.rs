//! In-memory record store.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::calculation::{compute_entry_salary, sum_amounts};
use crate::config::{pf_fraction, validate_pf_percentage};
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditTrace, Entry, TimeOfDay, User, normalize_username};

/// A request to log one day for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEntry {
    /// The user logging the day.
    pub user_id: Uuid,
    /// The date worked.
    pub date: NaiveDate,
    /// Raw in-time text, `HH:MM`.
    pub in_time: String,
    /// Raw out-time text, `HH:MM`.
    pub out_time: String,
}

/// Fields an admin may change on a user. `None` leaves a field as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    /// New username (normalized before storing).
    #[serde(default)]
    pub username: Option<String>,
    /// New daily salary rate; must be positive.
    #[serde(default)]
    pub daily_salary_rate: Option<Decimal>,
}

/// Fields an admin may overwrite on a stored entry.
///
/// Values are stored verbatim; nothing is recomputed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryUpdate {
    /// Replacement in-time.
    #[serde(default)]
    pub in_time: Option<TimeOfDay>,
    /// Replacement out-time.
    #[serde(default)]
    pub out_time: Option<TimeOfDay>,
    /// Replacement present hours.
    #[serde(default)]
    pub present_hours: Option<Decimal>,
    /// Replacement overtime hours.
    #[serde(default)]
    pub ot_hours: Option<Decimal>,
    /// Replacement present amount.
    #[serde(default)]
    pub present_amount: Option<Decimal>,
    /// Replacement overtime amount.
    #[serde(default)]
    pub ot_amount: Option<Decimal>,
    /// Replacement PF deduction.
    #[serde(default)]
    pub pf: Option<Decimal>,
    /// Replacement daily salary.
    #[serde(default)]
    pub daily_salary: Option<Decimal>,
}

/// A user together with their entry statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    /// The user record.
    pub user: User,
    /// Number of entries the user has logged.
    pub entry_count: usize,
    /// Sum of the user's daily salaries.
    pub total_salary: Decimal,
}

/// Store-wide statistics for the admin console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallStats {
    /// Number of non-admin users.
    pub total_users: usize,
    /// Number of entries across all users.
    pub total_entries: usize,
    /// Sum of every stored daily salary.
    pub total_salary_paid: Decimal,
    /// The current PF percentage.
    pub pf_percentage: Decimal,
}

#[derive(Debug)]
struct StoreState {
    users: HashMap<Uuid, User>,
    entries: HashMap<Uuid, Entry>,
    pf_percentage: Decimal,
}

impl StoreState {
    fn user(&self, user_id: Uuid) -> EngineResult<&User> {
        self.users
            .get(&user_id)
            .ok_or(EngineError::UserNotFound { user_id })
    }

    fn username_taken(&self, username: &str, except: Option<Uuid>) -> bool {
        self.users
            .values()
            .any(|u| u.username == username && Some(u.id) != except)
    }

    fn entry_for_date(&self, user_id: Uuid, date: NaiveDate) -> Option<&Entry> {
        self.entries
            .values()
            .find(|e| e.user_id == user_id && e.date == date)
    }

    fn salary_total<'a>(
        entries: impl Iterator<Item = &'a Entry>,
        what: &str,
    ) -> EngineResult<Decimal> {
        sum_amounts(entries.map(Entry::daily_salary), what)
    }
}

/// Thread-safe in-memory store shared by all request handlers.
///
/// Cloning a `RecordStore` yields another handle to the same data.
#[derive(Debug, Clone)]
pub struct RecordStore {
    state: Arc<RwLock<StoreState>>,
}

impl RecordStore {
    /// Creates an empty store with the given PF percentage.
    pub fn new(pf_percentage: Decimal) -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState {
                users: HashMap::new(),
                entries: HashMap::new(),
                pf_percentage,
            })),
        }
    }

    // ------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------

    /// Registers a user. Fails with `DuplicateUser` if the username is taken.
    pub async fn create_user(&self, mut user: User) -> EngineResult<User> {
        user.username = normalize_username(&user.username);
        user.email = user.email.map(|e| e.trim().to_lowercase());

        if user.username.is_empty() {
            return Err(EngineError::InvalidUser {
                field: "username".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        if let Some(rate) = user.daily_salary_rate {
            ensure_positive_rate(rate)?;
        }

        let mut state = self.state.write().await;
        if state.username_taken(&user.username, None) {
            return Err(EngineError::DuplicateUser {
                username: user.username,
            });
        }

        info!(user_id = %user.id, username = %user.username, "User registered");
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    /// Returns a user by ID.
    pub async fn get_user(&self, user_id: Uuid) -> EngineResult<User> {
        let state = self.state.read().await;
        state.user(user_id).cloned()
    }

    /// Returns all non-admin users, newest first, with entry statistics.
    pub async fn list_users_with_stats(&self) -> EngineResult<Vec<UserStats>> {
        let state = self.state.read().await;

        let mut users: Vec<&User> = state.users.values().filter(|u| !u.is_admin).collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        users
            .into_iter()
            .map(|user| -> EngineResult<UserStats> {
                let user_entries: Vec<&Entry> = state
                    .entries
                    .values()
                    .filter(|e| e.user_id == user.id)
                    .collect();
                Ok(UserStats {
                    user: user.clone(),
                    entry_count: user_entries.len(),
                    total_salary: StoreState::salary_total(
                        user_entries.into_iter(),
                        "total_salary",
                    )?,
                })
            })
            .collect()
    }

    /// Sets a user's 8-hour daily rate.
    pub async fn set_daily_rate(&self, user_id: Uuid, rate: Decimal) -> EngineResult<User> {
        self.update_user(
            user_id,
            UserUpdate {
                username: None,
                daily_salary_rate: Some(rate),
            },
        )
        .await
    }

    /// Applies an admin update to a user.
    ///
    /// Existing entries keep the rate they were created with.
    pub async fn update_user(&self, user_id: Uuid, update: UserUpdate) -> EngineResult<User> {
        if let Some(rate) = update.daily_salary_rate {
            ensure_positive_rate(rate)?;
        }

        let mut state = self.state.write().await;
        state.user(user_id)?;

        let username = match update.username.as_deref().map(normalize_username) {
            Some(name) if !name.is_empty() => {
                if state.username_taken(&name, Some(user_id)) {
                    return Err(EngineError::DuplicateUser { username: name });
                }
                Some(name)
            }
            _ => None,
        };

        let user = state
            .users
            .get_mut(&user_id)
            .ok_or(EngineError::UserNotFound { user_id })?;
        if let Some(name) = username {
            user.username = name;
        }
        if let Some(rate) = update.daily_salary_rate {
            user.daily_salary_rate = Some(rate);
        }

        info!(user_id = %user_id, "User updated");
        Ok(user.clone())
    }

    /// Deletes a user and all of their entries. Returns the number of
    /// entries removed.
    pub async fn delete_user(&self, user_id: Uuid) -> EngineResult<usize> {
        let mut state = self.state.write().await;
        state.user(user_id)?;

        let before = state.entries.len();
        state.entries.retain(|_, e| e.user_id != user_id);
        let removed = before - state.entries.len();
        state.users.remove(&user_id);

        info!(user_id = %user_id, entries_removed = removed, "User deleted");
        Ok(removed)
    }

    // ------------------------------------------------------------------
    // Entries
    // ------------------------------------------------------------------

    /// Creates an entry, computing its wage snapshot.
    ///
    /// The user must exist and have a daily rate, and no entry may exist for
    /// the same user and date. The wage is computed from the user's current
    /// rate and the current PF percentage. On any error nothing is stored.
    pub async fn create_entry(&self, request: NewEntry) -> EngineResult<(Entry, AuditTrace)> {
        let mut state = self.state.write().await;

        let user = state.user(request.user_id)?;
        let daily_rate = user.daily_salary_rate.ok_or(EngineError::RateNotSet {
            user_id: request.user_id,
        })?;

        if state.entry_for_date(request.user_id, request.date).is_some() {
            return Err(EngineError::DuplicateEntry {
                user_id: request.user_id,
                date: request.date,
            });
        }

        let pf_rate = pf_fraction(state.pf_percentage);
        let calc = compute_entry_salary(&request.in_time, &request.out_time, daily_rate, pf_rate)?;

        let now = Utc::now();
        let entry = Entry {
            id: Uuid::new_v4(),
            user_id: request.user_id,
            date: request.date,
            in_time: calc.in_time.as_time_of_day(),
            out_time: calc.out_time.as_time_of_day(),
            original_in_time: calc.original_in_time,
            original_out_time: calc.original_out_time,
            used_daily_salary_rate: calc.daily_rate,
            used_pf_rate: calc.pf_rate,
            breakdown: calc.breakdown,
            created_at: now,
            updated_at: now,
        };

        debug!(entry_id = %entry.id, user_id = %entry.user_id, date = %entry.date, "Entry stored");
        state.entries.insert(entry.id, entry.clone());
        Ok((entry, calc.audit_trace))
    }

    /// Returns the user's entry for a date, if any.
    pub async fn find_entry(&self, user_id: Uuid, date: NaiveDate) -> Option<Entry> {
        let state = self.state.read().await;
        state.entry_for_date(user_id, date).cloned()
    }

    /// Returns all of a user's entries, in no particular order.
    pub async fn entries_for_user(&self, user_id: Uuid) -> Vec<Entry> {
        let state = self.state.read().await;
        state
            .entries
            .values()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Overwrites fields of an entry as an admin correction.
    pub async fn update_entry(&self, entry_id: Uuid, update: EntryUpdate) -> EngineResult<Entry> {
        let mut state = self.state.write().await;
        let entry = state
            .entries
            .get_mut(&entry_id)
            .ok_or(EngineError::EntryNotFound { entry_id })?;

        if let Some(v) = update.in_time {
            entry.in_time = v;
        }
        if let Some(v) = update.out_time {
            entry.out_time = v;
        }
        if let Some(v) = update.present_hours {
            entry.breakdown.present_hours = v;
        }
        if let Some(v) = update.ot_hours {
            entry.breakdown.ot_hours = v;
        }
        if let Some(v) = update.present_amount {
            entry.breakdown.present_amount = v;
        }
        if let Some(v) = update.ot_amount {
            entry.breakdown.ot_amount = v;
        }
        if let Some(v) = update.pf {
            entry.breakdown.pf = v;
        }
        if let Some(v) = update.daily_salary {
            entry.breakdown.daily_salary = v;
        }
        entry.updated_at = Utc::now();

        info!(entry_id = %entry_id, "Entry edited");
        Ok(entry.clone())
    }

    /// Deletes any entry by ID.
    pub async fn delete_entry(&self, entry_id: Uuid) -> EngineResult<Entry> {
        let mut state = self.state.write().await;
        state
            .entries
            .remove(&entry_id)
            .ok_or(EngineError::EntryNotFound { entry_id })
    }

    /// Deletes an entry only if it belongs to the given user.
    pub async fn delete_user_entry(&self, entry_id: Uuid, user_id: Uuid) -> EngineResult<Entry> {
        let mut state = self.state.write().await;
        let owned = state
            .entries
            .get(&entry_id)
            .is_some_and(|e| e.user_id == user_id);
        if !owned {
            return Err(EngineError::EntryNotFound { entry_id });
        }
        state
            .entries
            .remove(&entry_id)
            .ok_or(EngineError::EntryNotFound { entry_id })
    }

    // ------------------------------------------------------------------
    // Settings
    // ------------------------------------------------------------------

    /// Returns the current PF percentage.
    pub async fn pf_percentage(&self) -> Decimal {
        self.state.read().await.pf_percentage
    }

    /// Changes the PF percentage used for entries created from now on.
    pub async fn set_pf_percentage(&self, percentage: Decimal) -> EngineResult<Decimal> {
        validate_pf_percentage(percentage)?;
        let mut state = self.state.write().await;
        state.pf_percentage = percentage;
        info!(pf_percentage = %percentage, "PF percentage updated");
        Ok(percentage)
    }

    /// Returns store-wide statistics.
    pub async fn overall_stats(&self) -> EngineResult<OverallStats> {
        let state = self.state.read().await;
        Ok(OverallStats {
            total_users: state.users.values().filter(|u| !u.is_admin).count(),
            total_entries: state.entries.len(),
            total_salary_paid: StoreState::salary_total(
                state.entries.values(),
                "total_salary_paid",
            )?,
            pf_percentage: state.pf_percentage,
        })
    }
}

fn ensure_positive_rate(rate: Decimal) -> EngineResult<()> {
    if rate <= Decimal::ZERO {
        return Err(EngineError::InvalidRate {
            field: "daily_salary_rate".to_string(),
            message: format!("must be greater than 0, got {}", rate),
        });
    }
    Ok(())
}
