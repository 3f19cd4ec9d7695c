use indexmap::IndexMap;

use crate::models::Activity;

/// Activities the directory starts with, in listing order.
pub fn seed_activities() -> IndexMap<String, Activity> {
    let rows = [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(&["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(&["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(&["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Basketball",
            Activity::new(
                "Practice drills and play in the inter-school league",
                "Wednesdays, 4:00 PM - 5:30 PM",
                15,
            )
            .with_participants(&["liam@mergington.edu"]),
        ),
        (
            "Soccer",
            Activity::new(
                "Team training sessions and weekend matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
            )
            .with_participants(&["noah@mergington.edu", "ava@mergington.edu"]),
        ),
        (
            "Art Club",
            Activity::new(
                "Explore drawing, painting and mixed media projects",
                "Mondays, 3:30 PM - 5:00 PM",
                15,
            )
            .with_participants(&["mia@mergington.edu"]),
        ),
        (
            "Drama Club",
            Activity::new(
                "Rehearse and perform plays for the school community",
                "Thursdays, 3:30 PM - 5:30 PM",
                20,
            )
            .with_participants(&["isabella@mergington.edu", "lucas@mergington.edu"]),
        ),
        (
            "Math Olympiad",
            Activity::new(
                "Solve challenging problems and prepare for math competitions",
                "Wednesdays, 3:30 PM - 4:30 PM",
                10,
            )
            .with_participants(&["ethan@mergington.edu"]),
        ),
        (
            "Debate Team",
            Activity::new(
                "Build public speaking skills and compete in debate tournaments",
                "Fridays, 4:00 PM - 5:30 PM",
                16,
            )
            .with_participants(&["amelia@mergington.edu", "james@mergington.edu"]),
        ),
    ];

    rows.into_iter()
        .map(|(name, activity)| (name.to_string(), activity))
        .collect()
}
