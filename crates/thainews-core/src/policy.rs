use crate::types::ScanMode;

/// How many entries to take from each source, per run mode and window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitPolicy {
    /// Cap for the single deep-dive query.
    pub deep_dive: usize,
    /// Broad-scan cap when `window_days <= short_window_max_days`.
    pub short_window: usize,
    /// Broad-scan cap for longer windows.
    pub long_window: usize,
    pub short_window_max_days: u32,
}

impl Default for LimitPolicy {
    fn default() -> Self {
        Self {
            deep_dive: 30,
            short_window: 15,
            long_window: 25,
            short_window_max_days: 3,
        }
    }
}

impl LimitPolicy {
    /// Per-source entry cap for a run.
    #[must_use]
    pub fn limit_for(&self, mode: &ScanMode, window_days: u32) -> usize {
        match mode {
            ScanMode::DeepDive { .. } => self.deep_dive,
            ScanMode::BroadScan if window_days <= self.short_window_max_days => {
                self.short_window
            }
            ScanMode::BroadScan => self.long_window,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deep() -> ScanMode {
        ScanMode::DeepDive {
            keyword: "Delta".to_string(),
        }
    }

    #[test]
    fn deep_dive_ignores_window() {
        let policy = LimitPolicy::default();
        for days in [1, 3, 7, 14, 30] {
            assert_eq!(policy.limit_for(&deep(), days), 30);
        }
    }

    #[test]
    fn broad_scan_threshold_is_inclusive() {
        let policy = LimitPolicy::default();
        assert_eq!(policy.limit_for(&ScanMode::BroadScan, 1), 15);
        assert_eq!(policy.limit_for(&ScanMode::BroadScan, 3), 15);
        assert_eq!(policy.limit_for(&ScanMode::BroadScan, 4), 25);
        assert_eq!(policy.limit_for(&ScanMode::BroadScan, 30), 25);
    }

    #[test]
    fn custom_thresholds_apply() {
        let policy = LimitPolicy {
            deep_dive: 10,
            short_window: 5,
            long_window: 30,
            short_window_max_days: 7,
        };
        assert_eq!(policy.limit_for(&ScanMode::BroadScan, 7), 5);
        assert_eq!(policy.limit_for(&ScanMode::BroadScan, 14), 30);
        assert_eq!(policy.limit_for(&deep(), 14), 10);
    }
}
