use crate::scoring::{is_quest_complete, score_for_distance};

#[test]
fn test_tier_boundaries() {
    assert_eq!(score_for_distance(0.0), 3);
    assert_eq!(score_for_distance(100.0), 3);
    assert_eq!(score_for_distance(100.0001), 2);
    assert_eq!(score_for_distance(200.0), 2);
    assert_eq!(score_for_distance(200.0001), 1);
    assert_eq!(score_for_distance(300.0), 1);
    assert_eq!(score_for_distance(300.0001), -1);
    assert_eq!(score_for_distance(25_000.0), -1);
}

#[test]
fn test_accurate_guess_completes_the_quest() {
    assert!(is_quest_complete(99.0, 1));
    assert!(is_quest_complete(100.0, 2));
}

#[test]
fn test_last_attempt_completes_the_quest_regardless_of_distance() {
    assert!(is_quest_complete(150.0, 3));
    assert!(is_quest_complete(10_000.0, 3));
}

#[test]
fn test_inaccurate_guess_with_attempts_left_does_not_complete_the_quest() {
    assert!(!is_quest_complete(150.0, 2));
    assert!(!is_quest_complete(100.0001, 1));
}
