// ABOUTME: Integration tests for the static exercise catalog
// ABOUTME: Verifies case-insensitive lookup, entry order, and the soft-miss result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitai_coach::intelligence::{ExerciseCatalog, NO_DATA_MESSAGE};

#[test]
fn test_lookup_is_case_insensitive() {
    let lower = ExerciseCatalog::lookup("chest");
    assert_eq!(ExerciseCatalog::lookup("CHEST"), lower);
    assert_eq!(ExerciseCatalog::lookup("  Chest "), lower);
}

#[test]
fn test_entries_keep_catalog_order() {
    assert_eq!(
        ExerciseCatalog::lookup("legs"),
        [
            "Squats: 3 sets of 10-15 reps",
            "Lunges: 3 sets of 10 per leg",
            "Calf Raises: 3 sets of 15-20 reps",
            "Glute Bridges: 3 sets of 15 reps",
        ]
    );
}

#[test]
fn test_unknown_group_is_soft_miss() {
    for group in ["shoulders", "", "leg"] {
        assert_eq!(ExerciseCatalog::lookup(group), [NO_DATA_MESSAGE]);
        assert!(!ExerciseCatalog::contains(group));
    }
}

#[test]
fn test_every_group_has_four_entries() {
    let groups = ExerciseCatalog::muscle_groups();
    assert_eq!(groups, ["chest", "back", "legs", "arms", "core"]);
    for group in groups {
        assert!(ExerciseCatalog::contains(group));
        assert_eq!(ExerciseCatalog::lookup(group).len(), 4);
    }
}
