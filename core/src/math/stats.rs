use crate::prelude::SampleStats;

pub struct StatsHelper;

impl StatsHelper {
    pub fn summarize(samples: &[i32]) -> SampleStats {
        if samples.is_empty() {
            return SampleStats::default();
        }
        let min = samples.iter().copied().min().unwrap_or_default();
        let max = samples.iter().copied().max().unwrap_or_default();
        SampleStats {
            count: samples.len(),
            min,
            max,
        }
    }
}
