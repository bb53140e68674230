use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, info};

use crate::activity::{Activities, Activity, ActivityName, Email};
use crate::config::RegistryConfig;
use crate::error::{ConfigResult, RegistryError, RegistryResult};

/// In-memory set of activities and their rosters.
///
/// Cloning yields another handle onto the same state. The set of activity
/// names is fixed at construction; only rosters change afterwards.
///
/// Every enroll/withdraw holds the entry's write guard across the membership
/// check and the mutation, so concurrent requests on one activity are
/// serialized while different activities proceed independently.
#[derive(Clone)]
pub struct ActivityRegistry {
    activities: Arc<DashMap<ActivityName, Activity>>,
    order: Arc<Vec<ActivityName>>,
    enforce_capacity: bool,
}

/// Successful sign-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub activity: ActivityName,
    pub email: Email,
}

impl fmt::Display for Enrollment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} signed up for {}", self.email, self.activity)
    }
}

/// Successful unregistration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Withdrawal {
    pub activity: ActivityName,
    pub email: Email,
}

impl fmt::Display for Withdrawal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} unregistered from {}", self.email, self.activity)
    }
}

impl Default for ActivityRegistry {
    fn default() -> Self {
        // built-in catalogue has no duplicates
        Self::seed(RegistryConfig::default())
    }
}

impl ActivityRegistry {
    /// Build a registry from a config, checking the seed invariants first.
    pub fn new(config: RegistryConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::seed(config))
    }

    fn seed(config: RegistryConfig) -> Self {
        let activities = DashMap::with_capacity(config.activities.len());
        let mut order = Vec::with_capacity(config.activities.len());
        for seed in config.activities {
            if activities.insert(seed.name.clone(), seed.activity).is_none() {
                order.push(seed.name);
            }
        }
        Self {
            activities: Arc::new(activities),
            order: Arc::new(order),
            enforce_capacity: config.enforce_capacity,
        }
    }

    /// Snapshot of every activity, in seed order.
    ///
    /// Each activity is read under its own shard guard, so a roster is never
    /// observed half-updated, but two activities may be read at different
    /// moments while mutations continue.
    pub fn list(&self) -> Activities {
        let entries = self
            .order
            .iter()
            .filter_map(|name| {
                self.activities
                    .get(name)
                    .map(|activity| (name.clone(), activity.value().clone()))
            })
            .collect();
        Activities::new(entries)
    }

    /// Snapshot of a single activity.
    pub fn get(&self, activity: &str) -> RegistryResult<Activity> {
        self.activities
            .get(activity)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| not_found(activity))
    }

    #[tracing::instrument(skip(self), level = "debug")]
    pub fn enroll(&self, activity: &str, email: &str) -> RegistryResult<Enrollment> {
        let mut entry = self
            .activities
            .get_mut(activity)
            .ok_or_else(|| not_found(activity))?;

        if entry.is_enrolled(email) {
            debug!("Duplicate sign-up rejected");
            return Err(RegistryError::AlreadyEnrolled {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }
        if self.enforce_capacity && entry.is_full() {
            debug!("Sign-up rejected, activity is full");
            return Err(RegistryError::ActivityFull {
                activity: activity.to_string(),
                capacity: entry.max_participants.unwrap_or_default(),
            });
        }

        entry.add_participant(email);
        info!(participants = entry.participants.len(), "Participant signed up");
        Ok(Enrollment {
            activity: activity.to_string(),
            email: email.to_string(),
        })
    }

    #[tracing::instrument(skip(self), level = "debug")]
    pub fn withdraw(&self, activity: &str, email: &str) -> RegistryResult<Withdrawal> {
        let mut entry = self
            .activities
            .get_mut(activity)
            .ok_or_else(|| not_found(activity))?;

        if !entry.remove_participant(email) {
            debug!("Unregister rejected, participant not enrolled");
            return Err(RegistryError::NotEnrolled {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }

        info!(participants = entry.participants.len(), "Participant unregistered");
        Ok(Withdrawal {
            activity: activity.to_string(),
            email: email.to_string(),
        })
    }

    pub fn names(&self) -> &[ActivityName] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn enforces_capacity(&self) -> bool {
        self.enforce_capacity
    }
}

fn not_found(activity: &str) -> RegistryError {
    debug!(activity, "Unknown activity");
    RegistryError::ActivityNotFound {
        activity: activity.to_string(),
    }
}
