//! Authentication freshness policy.
//!
//! Decides whether a user's last authentication still satisfies a required
//! strength level, given a staleness window in hours. The policy is built
//! once from configuration and passed in explicitly, keeping evaluation a
//! pure function of the clock and the user record.

use chrono::{DateTime, Duration, Utc};

use concierge_core::AuthMethod;

use crate::error::{IdentityError, Result};
use crate::models::User;

/// Environment variable holding the staleness window in hours.
pub const WINDOW_ENV_VAR: &str = "CONCIERGE_REQUIRE_AUTH_IN_HOURS";

/// Default staleness window: one week.
pub const DEFAULT_WINDOW_HOURS: u32 = 168;

/// Authentication staleness policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreshnessPolicy {
    window_hours: u32,
}

impl FreshnessPolicy {
    /// Create a policy with an explicit window.
    #[must_use]
    pub const fn new(window_hours: u32) -> Self {
        Self { window_hours }
    }

    /// Build a policy from an optional configuration string.
    ///
    /// `None` (or an empty string) falls back to the one-week default and
    /// logs an informational diagnostic.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` when the value does not parse as an
    /// integer or is negative.
    pub fn from_setting(setting: Option<&str>) -> Result<Self> {
        let Some(raw) = setting.filter(|s| !s.is_empty()) else {
            tracing::info!(
                "{WINDOW_ENV_VAR} is not set; using {DEFAULT_WINDOW_HOURS} hours (one week) as the default"
            );
            return Ok(Self::new(DEFAULT_WINDOW_HOURS));
        };

        let hours: i64 = raw.trim().parse().map_err(|e| {
            IdentityError::InvalidConfiguration(format!("{WINDOW_ENV_VAR}={raw:?}: {e}"))
        })?;
        if hours < 0 {
            return Err(IdentityError::InvalidConfiguration(format!(
                "{WINDOW_ENV_VAR} must be non-negative, got {hours}"
            )));
        }
        let hours = u32::try_from(hours).map_err(|_| {
            IdentityError::InvalidConfiguration(format!("{WINDOW_ENV_VAR}={hours} is out of range"))
        })?;

        Ok(Self::new(hours))
    }

    /// Build a policy from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` when the variable is set but does not
    /// parse as a non-negative integer.
    pub fn from_env() -> Result<Self> {
        Self::from_setting(std::env::var(WINDOW_ENV_VAR).ok().as_deref())
    }

    /// The staleness window in hours.
    #[must_use]
    pub const fn window_hours(&self) -> u32 {
        self.window_hours
    }

    /// Whether the user's last authentication satisfies `required` right
    /// now.
    #[must_use]
    pub fn is_authenticated(&self, user: &User, required: AuthMethod) -> bool {
        self.is_authenticated_at(Utc::now(), user, required)
    }

    /// Whether the user's last authentication satisfies `required` as of
    /// `now`.
    ///
    /// True iff the user has authenticated at all, strictly within the
    /// window, and with a method at least as strong as `required`. A user
    /// who never authenticated is stale, not an error.
    #[must_use]
    pub fn is_authenticated_at(
        &self,
        now: DateTime<Utc>,
        user: &User,
        required: AuthMethod,
    ) -> bool {
        let Some(last) = user.last_authenticated else {
            return false;
        };
        let cutoff = now - Duration::hours(i64::from(self.window_hours));
        cutoff < last && user.last_authentication_method >= required
    }
}

impl Default for FreshnessPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_HOURS)
    }
}
