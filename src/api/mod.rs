//! HTTP API module for the Daily Wage Engine.
//!
//! This module provides the REST endpoints workers use to log days and view
//! monthly totals, and the admin endpoints for users, entries and the PF
//! setting.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CreateEntryRequest, MonthQuery, PfUpdateRequest, RegisterUserRequest, SetSalaryRequest,
};
pub use response::{
    AdminUsersResponse, ApiError, ApiErrorResponse, EntryCreatedResponse, EntryLookupResponse,
    MessageResponse, PfSettingResponse, UserDeletedResponse,
};
pub use state::AppState;
