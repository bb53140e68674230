use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fs::File, io::BufReader, path::Path};

use crate::activity::{Activity, ActivityName};
use crate::error::{ConfigError, ConfigResult};

/// Registry seed and behaviour switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Reject sign-ups once `max_participants` is reached
    #[serde(default)]
    pub enforce_capacity: bool,

    #[serde(default = "default_catalogue")]
    pub activities: Vec<ActivitySeed>,
}

/// One activity as it appears in a seed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySeed {
    pub name: ActivityName,

    #[serde(flatten)]
    pub activity: Activity,
}

impl ActivitySeed {
    pub fn new(name: impl Into<ActivityName>, activity: Activity) -> Self {
        Self {
            name: name.into(),
            activity,
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            enforce_capacity: false,
            activities: default_catalogue(),
        }
    }
}

impl RegistryConfig {
    /// An empty registry config, for building seeds by hand
    pub fn empty() -> Self {
        Self {
            enforce_capacity: false,
            activities: Vec::new(),
        }
    }

    pub fn with_activity(mut self, name: impl Into<ActivityName>, activity: Activity) -> Self {
        self.activities.push(ActivitySeed::new(name, activity));
        self
    }

    pub fn with_enforce_capacity(mut self, enforce: bool) -> Self {
        self.enforce_capacity = enforce;
        self
    }

    // Load and validate a JSON seed file
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_str(s: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the uniqueness invariants of the seed.
    pub fn validate(&self) -> ConfigResult<()> {
        let mut names = HashSet::new();
        for seed in &self.activities {
            if !names.insert(seed.name.as_str()) {
                return Err(ConfigError::DuplicateActivity(seed.name.clone()));
            }
            let mut emails = HashSet::new();
            for email in &seed.activity.participants {
                if !emails.insert(email.as_str()) {
                    return Err(ConfigError::DuplicateParticipant {
                        activity: seed.name.clone(),
                        email: email.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Mergington High School extracurricular catalogue.
pub fn default_catalogue() -> Vec<ActivitySeed> {
    vec![
        ActivitySeed::new(
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
            )
            .with_max_participants(12)
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        ActivitySeed::new(
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            )
            .with_max_participants(20)
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        ActivitySeed::new(
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            )
            .with_max_participants(30)
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        ActivitySeed::new(
            "Soccer Team",
            Activity::new(
                "Join the school soccer team and compete in matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            )
            .with_max_participants(22)
            .with_participants(["liam@mergington.edu", "noah@mergington.edu"]),
        ),
        ActivitySeed::new(
            "Basketball Team",
            Activity::new(
                "Practice and play basketball with the school team",
                "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            )
            .with_max_participants(15)
            .with_participants(["ava@mergington.edu", "mia@mergington.edu"]),
        ),
        ActivitySeed::new(
            "Art Club",
            Activity::new(
                "Explore your creativity through painting and drawing",
                "Thursdays, 3:30 PM - 5:00 PM",
            )
            .with_max_participants(15)
            .with_participants(["amelia@mergington.edu", "harper@mergington.edu"]),
        ),
        ActivitySeed::new(
            "Drama Club",
            Activity::new(
                "Act, direct, and produce plays and performances",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            )
            .with_max_participants(20)
            .with_participants(["ella@mergington.edu", "scarlett@mergington.edu"]),
        ),
        ActivitySeed::new(
            "Math Club",
            Activity::new(
                "Solve challenging problems and participate in math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
            )
            .with_max_participants(10)
            .with_participants(["james@mergington.edu", "benjamin@mergington.edu"]),
        ),
        ActivitySeed::new(
            "Debate Team",
            Activity::new(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
            )
            .with_max_participants(12)
            .with_participants(["charlotte@mergington.edu", "henry@mergington.edu"]),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_catalogue_is_valid() {
        let config = RegistryConfig::default();
        assert!(!config.enforce_capacity);
        assert!(!config.activities.is_empty());
        config.validate().unwrap();
    }

    #[test]
    fn test_registry_config_serde() {
        let config = RegistryConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized = RegistryConfig::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = RegistryConfig::from_str("{}").unwrap();
        assert_eq!(config, RegistryConfig::default());

        let config = RegistryConfig::from_str(
            r#"{"activities": [{"name": "Chess Club", "description": "d", "schedule": "s"}]}"#,
        )
        .unwrap();
        assert_eq!(config.activities.len(), 1);
        assert_eq!(config.activities[0].activity.max_participants, None);
        assert!(config.activities[0].activity.participants.is_empty());
    }

    #[test]
    fn test_duplicate_activity_rejected() {
        let json = r#"{"activities": [
            {"name": "Chess Club", "description": "d", "schedule": "s"},
            {"name": "Chess Club", "description": "d2", "schedule": "s2"}
        ]}"#;
        let err = RegistryConfig::from_str(json).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateActivity(name) if name == "Chess Club"));
    }

    #[test]
    fn test_duplicate_participant_rejected() {
        let json = r#"{"activities": [
            {"name": "Chess Club", "description": "d", "schedule": "s",
             "participants": ["a@x.com", "a@x.com"]}
        ]}"#;
        let err = RegistryConfig::from_str(json).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateParticipant { email, .. } if email == "a@x.com"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"enforce_capacity": true, "activities": [
                {{"name": "Chess Club", "description": "d", "schedule": "s", "max_participants": 1}}
            ]}}"#
        )
        .unwrap();

        let config = RegistryConfig::from_file(file.path()).unwrap();
        assert!(config.enforce_capacity);
        assert_eq!(config.activities[0].name, "Chess Club");
        assert_eq!(config.activities[0].activity.max_participants, Some(1));
    }

    #[test]
    fn test_example_seed_file_parses() {
        let config = RegistryConfig::from_str(include_str!("../../registry.example.json")).unwrap();
        assert!(config.enforce_capacity);
        assert_eq!(config.activities.len(), 2);
        assert_eq!(config.activities[1].activity.max_participants, None);
    }

    #[test]
    fn test_from_file_missing() {
        let err = RegistryConfig::from_file("/nonexistent/registry.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
