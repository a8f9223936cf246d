/// Number of stage markers in the step indicator.
pub const STAGE_COUNT: usize = 5;
/// Progress width of one stage bucket.
pub const STAGE_STEP: u8 = 20;

/// Active flags for the five ordered stage markers.
///
/// Always derived from a progress value; stage 1 is active as a floor so a
/// freshly started job already looks "started".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageSet {
    active: [bool; STAGE_COUNT],
}

impl Default for StageSet {
    fn default() -> Self {
        Self::initial()
    }
}

impl StageSet {
    /// Stage 1 active, the rest inactive.
    pub fn initial() -> Self {
        let mut active = [false; STAGE_COUNT];
        active[0] = true;
        Self { active }
    }

    pub fn from_progress(progress: u8) -> Self {
        let mut set = Self::initial();
        for (index, slot) in set.active.iter_mut().enumerate() {
            let threshold = u16::from(STAGE_STEP) * (index as u16 + 1);
            if u16::from(progress) >= threshold {
                *slot = true;
            }
        }
        set
    }

    /// Reset-then-set recomputation from `progress`.
    pub fn update(&mut self, progress: u8) {
        *self = Self::from_progress(progress);
    }

    /// `stage` is 1-based; out-of-range stages are never active.
    pub fn is_active(&self, stage: usize) -> bool {
        stage
            .checked_sub(1)
            .and_then(|index| self.active.get(index))
            .copied()
            .unwrap_or(false)
    }

    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|active| **active).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.active.iter().copied()
    }
}
