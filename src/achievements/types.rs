//! Milestone kinds and their display definitions.

/// What a milestone threshold is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MilestoneKind {
    /// Lifetime fish earned.
    Lifetime,
    /// Current passive fish per second.
    Dps,
}

impl MilestoneKind {
    pub fn name(&self) -> &'static str {
        match self {
            MilestoneKind::Lifetime => "Achievement",
            MilestoneKind::Dps => "DPS Milestone",
        }
    }
}

/// Display data for one milestone threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MilestoneDef {
    pub kind: MilestoneKind,
    pub threshold: u64,
    pub name: &'static str,
    pub icon: &'static str,
}

impl MilestoneDef {
    pub fn description(&self) -> String {
        match self.kind {
            MilestoneKind::Lifetime => format!("Catch {} fish in total", self.threshold),
            MilestoneKind::Dps => format!("Reach {} fish per second", self.threshold),
        }
    }
}
