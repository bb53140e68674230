use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::ToSchema;

pub type Email = String;
pub type ActivityName = String;

/// An activity and its current roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Activity {
    /// Human readable description
    pub description: String,

    /// Free-form schedule, e.g. "Fridays, 3:30 PM - 5:00 PM"
    pub schedule: String,

    /// Capacity, if the activity has one
    #[serde(default)]
    pub max_participants: Option<u32>,

    /// Enrolled emails in sign-up order. Never contains duplicates.
    #[serde(default)]
    pub participants: Vec<Email>,
}

impl Activity {
    pub fn new(description: impl Into<String>, schedule: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants: None,
            participants: Vec::new(),
        }
    }

    pub fn with_max_participants(mut self, max: u32) -> Self {
        self.max_participants = Some(max);
        self
    }

    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Email>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    /// Exact, case-sensitive membership check.
    pub fn is_enrolled(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.max_participants
            .is_some_and(|max| self.participants.len() >= max as usize)
    }

    pub fn spots_left(&self) -> Option<u32> {
        let enrolled = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants
            .map(|max| max.saturating_sub(enrolled))
    }

    /// Appends without checking membership; callers check `is_enrolled` first.
    pub(crate) fn add_participant(&mut self, email: &str) {
        self.participants.push(email.to_string());
    }

    /// Returns false when the email is not on the roster.
    pub(crate) fn remove_participant(&mut self, email: &str) -> bool {
        match self.participants.iter().position(|p| p == email) {
            Some(index) => {
                self.participants.remove(index);
                true
            }
            None => false,
        }
    }
}

/// Ordered snapshot of the registry.
///
/// Serializes as a JSON object keyed by activity name, keeping the seed order
/// of the keys on both serialization and deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Activities(Vec<(ActivityName, Activity)>);

impl Activities {
    pub fn new(entries: Vec<(ActivityName, Activity)>) -> Self {
        Self(entries)
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, a)| a)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.0.iter().map(|(n, a)| (n.as_str(), a))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Activities {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, activity) in &self.0 {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Activities {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ActivitiesVisitor;

        impl<'de> Visitor<'de> for ActivitiesVisitor {
            type Value = Activities;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of activity name to activity")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, activity)) = access.next_entry::<ActivityName, Activity>()? {
                    entries.push((name, activity));
                }
                Ok(Activities(entries))
            }
        }

        deserializer.deserialize_map(ActivitiesVisitor)
    }
}
