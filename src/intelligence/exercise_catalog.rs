// ABOUTME: Static exercise table keyed by muscle group with case-insensitive lookup
// ABOUTME: Unknown groups return a single-entry soft-miss list instead of an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI Contributors

//! Exercise catalog

/// Entry returned when a muscle group is not in the catalog
pub const NO_DATA_MESSAGE: &str = "No data available for this group.";

/// Muscle group -> ordered "Name: sets x reps" descriptions
const CATALOG: &[(&str, &[&str])] = &[
    (
        "chest",
        &[
            "Push-ups: 3 sets of 10-15 reps",
            "Bench Press: 3 sets of 8-12 reps",
            "Chest Flyes: 4 sets of 12-15 reps",
            "Incline Push-ups: 3 sets of 10-15 reps",
        ],
    ),
    (
        "back",
        &[
            "Pull-ups: 3 sets of 6-10 reps",
            "Bent-over Rows: 3 sets of 8-12 reps",
            "Lat Pulldowns: 3 sets of 10-12 reps",
            "Superman Holds: 3 sets of 30 seconds",
        ],
    ),
    (
        "legs",
        &[
            "Squats: 3 sets of 10-15 reps",
            "Lunges: 3 sets of 10 per leg",
            "Calf Raises: 3 sets of 15-20 reps",
            "Glute Bridges: 3 sets of 15 reps",
        ],
    ),
    (
        "arms",
        &[
            "Bicep Curls: 3 sets of 10-12 reps",
            "Tricep Dips: 3 sets of 10-15 reps",
            "Hammer Curls: 3 sets of 10-12 reps",
            "Overhead Tricep Extensions: 3 sets of 10-12 reps",
        ],
    ),
    (
        "core",
        &[
            "Planks: 3 sets of 30-60 seconds",
            "Crunches: 3 sets of 15-20 reps",
            "Russian Twists: 3 sets of 20 total reps",
            "Mountain Climbers: 3 sets of 20 total reps",
        ],
    ),
];

/// Read-only exercise table
pub struct ExerciseCatalog;

impl ExerciseCatalog {
    /// Exercises for a muscle group
    ///
    /// Matching ignores case and surrounding whitespace. An unknown group
    /// yields `[NO_DATA_MESSAGE]`.
    #[must_use]
    pub fn lookup(muscle_group: &str) -> Vec<String> {
        find(muscle_group).map_or_else(
            || vec![NO_DATA_MESSAGE.to_owned()],
            |exercises| exercises.iter().map(|&e| e.to_owned()).collect(),
        )
    }

    /// Whether the muscle group has entries
    #[must_use]
    pub fn contains(muscle_group: &str) -> bool {
        find(muscle_group).is_some()
    }

    /// Known muscle groups in table order
    #[must_use]
    pub fn muscle_groups() -> Vec<&'static str> {
        CATALOG.iter().map(|(group, _)| *group).collect()
    }
}

fn find(muscle_group: &str) -> Option<&'static [&'static str]> {
    let key = muscle_group.trim();
    CATALOG
        .iter()
        .find(|(group, _)| group.eq_ignore_ascii_case(key))
        .map(|(_, exercises)| *exercises)
}
