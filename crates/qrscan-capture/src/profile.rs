/// Camera facing direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Rear,
    Front,
}

/// Whether a facing direction is a soft preference or a hard requirement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FacingMode {
    Prefer(Facing),
    Require(Facing),
}

/// Constraint profile handed to a media source: the facing hint and an
/// optional resolution hint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstraintProfile {
    facing: FacingMode,
    resolution: Option<(u32, u32)>,
}

impl ConstraintProfile {
    /// Preferred profile: rear camera as a soft preference, 1920x1080 as a
    /// soft resolution target.
    pub fn preferred() -> Self {
        Self {
            facing: FacingMode::Prefer(Facing::Rear),
            resolution: Some((1920, 1080)),
        }
    }

    /// Relaxed profile used for fallback acquisition: rear camera required,
    /// no resolution hint.
    pub fn fallback() -> Self {
        Self {
            facing: FacingMode::Require(Facing::Rear),
            resolution: None,
        }
    }

    pub fn facing(&self) -> FacingMode {
        self.facing
    }

    pub fn resolution(&self) -> Option<(u32, u32)> {
        self.resolution
    }
}

/// Which profile a session was acquired with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileKind {
    Preferred,
    Fallback,
}
