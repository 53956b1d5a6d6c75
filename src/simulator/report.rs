//! Simulation report generation.

use serde::Serialize;

/// Statistics for one simulated session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunStats {
    pub seconds: u64,
    pub clicks: u64,
    pub crits: u64,
    pub ticks: u64,
    pub saves: u64,
    pub upgrades_bought: u64,
    pub permanent_upgrades_bought: u64,
    pub prestiges: u32,
    pub pearls_earned: f64,
    pub first_prestige_second: Option<u64>,
    pub achievements: u32,
    pub dps_milestones: u32,
    pub cosmetics_unlocked: u32,
    pub total_fish_earned: f64,
    pub final_fish: f64,
    pub final_pearls: f64,
    pub final_click_yield: f64,
    pub final_tick_yield: f64,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,

    pub avg_total_fish: f64,
    pub avg_prestiges: f64,
    pub avg_pearls: f64,
    /// Mean over the runs that prestiged at all.
    pub avg_first_prestige_seconds: Option<f64>,
    pub avg_achievements: f64,
    pub avg_dps_milestones: f64,
    pub avg_cosmetics: f64,
    pub avg_final_click_yield: f64,
    pub avg_final_tick_yield: f64,
    /// Crits over clicks across every run.
    pub observed_crit_rate: f64,

    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let n = f64::from(num_runs.max(1));
        let avg = |f: fn(&RunStats) -> f64| runs.iter().map(f).sum::<f64>() / n;

        let prestige_times: Vec<f64> = runs
            .iter()
            .filter_map(|r| r.first_prestige_second)
            .map(|s| s as f64)
            .collect();
        let avg_first_prestige_seconds = if prestige_times.is_empty() {
            None
        } else {
            Some(prestige_times.iter().sum::<f64>() / prestige_times.len() as f64)
        };

        let clicks: u64 = runs.iter().map(|r| r.clicks).sum();
        let crits: u64 = runs.iter().map(|r| r.crits).sum();

        Self {
            num_runs,
            avg_total_fish: avg(|r| r.total_fish_earned),
            avg_prestiges: avg(|r| f64::from(r.prestiges)),
            avg_pearls: avg(|r| r.pearls_earned),
            avg_first_prestige_seconds,
            avg_achievements: avg(|r| f64::from(r.achievements)),
            avg_dps_milestones: avg(|r| f64::from(r.dps_milestones)),
            avg_cosmetics: avg(|r| f64::from(r.cosmetics_unlocked)),
            avg_final_click_yield: avg(|r| r.final_click_yield),
            avg_final_tick_yield: avg(|r| r.final_tick_yield),
            observed_crit_rate: if clicks == 0 {
                0.0
            } else {
                crits as f64 / clicks as f64
            },
            run_stats: runs,
        }
    }

    /// Human-readable summary.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");
        report.push_str(&format!("Runs: {}\n\n", self.num_runs));

        report.push_str("── ECONOMY ──────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Fish Earned:     {:.0}\n",
            self.avg_total_fish
        ));
        report.push_str(&format!(
            "  Avg Click Yield:     {:.2}\n",
            self.avg_final_click_yield
        ));
        report.push_str(&format!(
            "  Avg Tick Yield:      {:.2}/s\n",
            self.avg_final_tick_yield
        ));
        report.push_str(&format!(
            "  Crit Rate:           {:.2}%\n\n",
            self.observed_crit_rate * 100.0
        ));

        report.push_str("── PRESTIGE ─────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Prestiges:       {:.2}\n", self.avg_prestiges));
        report.push_str(&format!("  Avg Pearls Earned:   {:.2}\n", self.avg_pearls));
        match self.avg_first_prestige_seconds {
            Some(seconds) => report.push_str(&format!(
                "  Avg First Prestige:  {:.0}s ({:.1} min)\n\n",
                seconds,
                seconds / 60.0
            )),
            None => report.push_str("  Avg First Prestige:  never\n\n"),
        }

        report.push_str("── UNLOCKS ──────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Achievements:    {:.2}\n",
            self.avg_achievements
        ));
        report.push_str(&format!(
            "  Avg DPS Milestones:  {:.2}\n",
            self.avg_dps_milestones
        ));
        report.push_str(&format!("  Avg Cosmetics:       {:.2}\n", self.avg_cosmetics));

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(fish: f64, prestiges: u32, first: Option<u64>) -> RunStats {
        RunStats {
            total_fish_earned: fish,
            prestiges,
            first_prestige_second: first,
            clicks: 100,
            crits: 5,
            ..RunStats::default()
        }
    }

    #[test]
    fn test_averages() {
        let report = SimReport::from_runs(vec![run(100.0, 0, None), run(300.0, 2, Some(600))]);
        assert_eq!(report.num_runs, 2);
        assert_eq!(report.avg_total_fish, 200.0);
        assert_eq!(report.avg_prestiges, 1.0);
        assert_eq!(report.avg_first_prestige_seconds, Some(600.0));
        assert!((report.observed_crit_rate - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_empty_report_does_not_divide_by_zero() {
        let report = SimReport::from_runs(Vec::new());
        assert_eq!(report.avg_total_fish, 0.0);
        assert_eq!(report.avg_first_prestige_seconds, None);
        assert_eq!(report.observed_crit_rate, 0.0);
    }

    #[test]
    fn test_text_and_json_render() {
        let report = SimReport::from_runs(vec![run(100.0, 0, None)]);
        assert!(report.to_text().contains("never"));
        let json: serde_json::Value = serde_json::from_str(&report.to_json()).expect("json");
        assert_eq!(json["num_runs"], 1);
    }
}
