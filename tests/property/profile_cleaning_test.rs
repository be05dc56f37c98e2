// Property tests for the profile text cleaning steps: each step is total
// and its output shape holds for arbitrary input.

use proptest::prelude::*;

use stashboard::services::profile_extractor::{
    backfill_location, collapse_duplicate_halves, collapse_marker_duplicate,
    normalize_connections, split_top_skills, strip_about_prefix,
};

proptest! {
    #[test]
    fn doubled_text_collapses_to_one_copy(s in "\\S.{0,60}") {
        let doubled = format!("{}{}", s, s);
        prop_assert_eq!(collapse_duplicate_halves(&doubled), s.trim());
    }

    #[test]
    fn non_repeating_marker_text_is_unchanged(s in "[^g]{0,80}") {
        // No "get started." in the input, so nothing to collapse.
        prop_assert_eq!(collapse_marker_duplicate(&s), s);
    }

    #[test]
    fn extracted_skills_are_short_and_non_empty(s in ".{0,120}") {
        let (content, skills) = split_top_skills(&s);
        prop_assert!(!content.contains("Top skills"));
        for skill in &skills {
            prop_assert!(!skill.is_empty());
            prop_assert!(skill.chars().count() < 30);
            prop_assert_eq!(skill.trim(), skill.as_str());
        }
    }

    #[test]
    fn about_prefix_strip_never_grows_the_text(s in ".{0,80}") {
        prop_assert!(strip_about_prefix(&s).chars().count() <= s.chars().count());
    }

    #[test]
    fn backfilled_location_is_trimmed_and_non_empty(s in ".{0,120}") {
        if let Some(location) = backfill_location(&s) {
            prop_assert!(!location.is_empty());
            prop_assert_eq!(location.trim(), location.as_str());
        }
    }

    #[test]
    fn connections_wording_is_idempotent(s in "[0-9+,]{0,12}") {
        let once = normalize_connections(&s);
        prop_assert_eq!(normalize_connections(&once), once.clone());
        if !s.is_empty() {
            prop_assert!(once.to_lowercase().contains("connections"));
        }
    }

    #[test]
    fn cleaning_pipeline_is_total(s in ".{0,200}") {
        let step1 = collapse_duplicate_halves(&s);
        let step2 = collapse_marker_duplicate(&step1);
        let (step3, _skills) = split_top_skills(&step2);
        let step4 = strip_about_prefix(&step3);
        let _ = backfill_location(&step4);
    }
}
