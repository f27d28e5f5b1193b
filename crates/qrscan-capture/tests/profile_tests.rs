use qrscan_capture::{ConstraintProfile, Facing, FacingMode};

#[test]
fn test_preferred_profile_is_all_soft() {
    let profile = ConstraintProfile::preferred();
    assert_eq!(profile.facing(), FacingMode::Prefer(Facing::Rear));
    assert_eq!(profile.resolution(), Some((1920, 1080)));
}

#[test]
fn test_fallback_profile_relaxes_resolution() {
    let profile = ConstraintProfile::fallback();
    assert_eq!(profile.facing(), FacingMode::Require(Facing::Rear));
    assert_eq!(profile.resolution(), None);
}

#[test]
fn test_profiles_differ() {
    assert_ne!(ConstraintProfile::preferred(), ConstraintProfile::fallback());
}
