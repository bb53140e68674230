use std::fmt::Write;

use signup_core::{Activities, Activity};

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn render_activity(name: &str, activity: &Activity) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", name);
    let _ = writeln!(out, "  {}", activity.description);
    let _ = writeln!(out, "  Schedule: {}", activity.schedule);
    match (activity.max_participants, activity.spots_left()) {
        (Some(max), Some(left)) => {
            let _ = writeln!(
                out,
                "  Capacity: {}/{} ({} spots left)",
                activity.participants.len(),
                max,
                left
            );
        }
        _ => {
            let _ = writeln!(out, "  Capacity: {} (no limit)", activity.participants.len());
        }
    }
    if activity.participants.is_empty() {
        let _ = writeln!(out, "  Participants: none yet");
    } else {
        let _ = writeln!(out, "  Participants:");
        for email in &activity.participants {
            let _ = writeln!(out, "    - {}", email);
        }
    }
    out
}

pub fn render_activities(activities: &Activities) -> String {
    activities
        .iter()
        .map(|(name, activity)| render_activity(name, activity))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_activity() {
        let activity = Activity::new("Learn chess", "Fridays")
            .with_max_participants(12)
            .with_participants(["a@x.com"]);
        let out = render_activity("Chess Club", &activity);
        assert!(out.starts_with("Chess Club\n"));
        assert!(out.contains("Capacity: 1/12 (11 spots left)"));
        assert!(out.contains("    - a@x.com"));
    }

    #[test]
    fn test_render_unbounded_empty_activity() {
        let out = render_activity("Gym Class", &Activity::new("Sports", "Mondays"));
        assert!(out.contains("(no limit)"));
        assert!(out.contains("Participants: none yet"));
    }

    #[test]
    fn test_render_activities_in_order() {
        let activities = Activities::new(vec![
            ("Zoo Club".to_string(), Activity::new("z", "Mon")),
            ("Art Club".to_string(), Activity::new("a", "Tue")),
        ]);
        let out = render_activities(&activities);
        assert!(out.find("Zoo Club").unwrap() < out.find("Art Club").unwrap());
    }
}
