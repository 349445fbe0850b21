use indexmap::IndexMap;

use crate::models::Activity;

/// (name, description, schedule, max_participants, initial participants)
type SeedRow = (&'static str, &'static str, &'static str, usize, &'static [&'static str]);

static ACTIVITIES: &[SeedRow] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Basketball Team",
        "Practice drills and compete in inter-school basketball games",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        15,
        &["james@mergington.edu"],
    ),
    (
        "Soccer Team",
        "Train together and play matches in the school league",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        22,
        &["lucas@mergington.edu", "mia@mergington.edu"],
    ),
    (
        "Art Club",
        "Explore painting, drawing and sculpture with fellow students",
        "Wednesdays, 3:30 PM - 5:00 PM",
        15,
        &["ava@mergington.edu"],
    ),
    (
        "Drama Club",
        "Rehearse and perform plays for the school community",
        "Thursdays, 3:30 PM - 5:30 PM",
        20,
        &["isabella@mergington.edu", "ethan@mergington.edu"],
    ),
    (
        "Math Club",
        "Solve challenging problems and prepare for math competitions",
        "Tuesdays, 3:30 PM - 4:30 PM",
        10,
        &["noah@mergington.edu"],
    ),
    (
        "Debate Team",
        "Develop public speaking and argumentation skills",
        "Fridays, 4:00 PM - 5:30 PM",
        12,
        &["liam@mergington.edu", "charlotte@mergington.edu"],
    ),
];

/// The fixed activity catalogue loaded at process start.
pub fn seed_activities() -> IndexMap<String, Activity> {
    ACTIVITIES
        .iter()
        .map(|(name, description, schedule, max, participants)| {
            (
                name.to_string(),
                Activity::new(*description, *schedule, *max, participants),
            )
        })
        .collect()
}
