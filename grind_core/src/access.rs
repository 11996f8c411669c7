//! # Account Access Control
//!
//! The backend's small state machine: access-request approval, failed-login
//! lockout, and the guest usage cap.
//!
//! Every time-dependent check takes `now` explicitly so the logic stays a
//! pure function of `(state, policy, now)` and tests need no real clock.
//!
//! ## Example
//!
//! ```rust
//! use chrono::Utc;
//! use grind_core::access::{AccessRequest, LockoutPolicy, LoginTracker};
//!
//! let mut request = AccessRequest::new("pat@shopfloor.example", "Pat", "Shopfloor Inc");
//! request.approve("admin@grindcalc.example").unwrap();
//!
//! let policy = LockoutPolicy::default();
//! let mut tracker = LoginTracker::default();
//! tracker.record_failure(&policy, Utc::now());
//! assert!(tracker.check("pat@shopfloor.example", Utc::now()).is_ok());
//! ```

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Access Requests
// ============================================================================

/// Lifecycle of an access request. Pending transitions once, to Approved or
/// Denied, and never again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessStatus {
    Pending,
    Approved,
    Denied,
}

impl AccessStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessStatus::Pending => "Pending",
            AccessStatus::Approved => "Approved",
            AccessStatus::Denied => "Denied",
        }
    }
}

/// A request to open an account, decided by an admin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessRequest {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub company: String,
    pub status: AccessStatus,
    pub requested_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decided_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decided_by: Option<String>,
}

impl AccessRequest {
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        AccessRequest {
            id: Uuid::new_v4(),
            email: email.into(),
            name: name.into(),
            company: company.into(),
            status: AccessStatus::Pending,
            requested_at: Utc::now(),
            decided_at: None,
            decided_by: None,
        }
    }

    /// Approve a pending request. One-shot: deciding twice is an error.
    pub fn approve(&mut self, admin: impl Into<String>) -> CalcResult<()> {
        self.decide(AccessStatus::Approved, admin)
    }

    /// Deny a pending request. One-shot: deciding twice is an error.
    pub fn deny(&mut self, admin: impl Into<String>) -> CalcResult<()> {
        self.decide(AccessStatus::Denied, admin)
    }

    fn decide(&mut self, status: AccessStatus, admin: impl Into<String>) -> CalcResult<()> {
        if self.status != AccessStatus::Pending {
            return Err(CalcError::AccessAlreadyDecided {
                email: self.email.clone(),
                status: self.status.as_str().to_string(),
            });
        }
        self.status = status;
        self.decided_at = Some(Utc::now());
        self.decided_by = Some(admin.into());
        Ok(())
    }

    pub fn is_pending(&self) -> bool {
        self.status == AccessStatus::Pending
    }
}

// ============================================================================
// Login Lockout
// ============================================================================

/// Lockout policy: how many failures are tolerated and how long the lock
/// lasts once tripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockoutPolicy {
    /// Failures allowed before the account locks
    pub max_attempts: u32,
    /// Lockout duration in minutes
    pub lockout_minutes: i64,
}

impl Default for LockoutPolicy {
    fn default() -> Self {
        LockoutPolicy {
            max_attempts: 5,
            lockout_minutes: 15,
        }
    }
}

/// Per-account failed-login state.
///
/// Failures accumulate until a success or until a tripped lockout expires;
/// the lockout deadline is set the moment the count reaches the policy
/// maximum.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginTracker {
    pub failures: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_failure: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked_until: Option<DateTime<Utc>>,
}

impl LoginTracker {
    /// Record a failed attempt, tripping the lockout when the count reaches
    /// the policy maximum.
    pub fn record_failure(&mut self, policy: &LockoutPolicy, now: DateTime<Utc>) {
        // An expired lockout resets the slate before counting this failure
        if let Some(until) = self.locked_until {
            if now >= until {
                self.failures = 0;
                self.locked_until = None;
            }
        }

        self.failures += 1;
        self.last_failure = Some(now);
        if self.failures >= policy.max_attempts && self.locked_until.is_none() {
            self.locked_until = Some(now + Duration::minutes(policy.lockout_minutes));
        }
    }

    /// Record a successful login, clearing all failure state.
    pub fn record_success(&mut self) {
        self.failures = 0;
        self.last_failure = None;
        self.locked_until = None;
    }

    /// Check whether the account may attempt a login at `now`.
    pub fn check(&self, email: &str, now: DateTime<Utc>) -> CalcResult<()> {
        match self.locked_until {
            Some(until) if now < until => Err(CalcError::AccountLocked {
                email: email.to_string(),
                until,
            }),
            _ => Ok(()),
        }
    }
}

// ============================================================================
// Guest Sessions
// ============================================================================

/// Default calculation allowance for unauthenticated users
pub const DEFAULT_GUEST_CAP: u32 = 10;

/// A guest session consuming a capped calculation allowance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestSession {
    pub used: u32,
    pub cap: u32,
}

impl GuestSession {
    pub fn new(cap: u32) -> Self {
        GuestSession { used: 0, cap }
    }

    /// Consume one calculation from the allowance.
    ///
    /// Returns the remaining allowance, or [`CalcError::GuestCapReached`]
    /// once it is exhausted.
    pub fn try_consume(&mut self) -> CalcResult<u32> {
        if self.used >= self.cap {
            return Err(CalcError::GuestCapReached {
                used: self.used,
                cap: self.cap,
            });
        }
        self.used += 1;
        Ok(self.remaining())
    }

    pub fn remaining(&self) -> u32 {
        self.cap.saturating_sub(self.used)
    }
}

impl Default for GuestSession {
    fn default() -> Self {
        GuestSession::new(DEFAULT_GUEST_CAP)
    }
}
