use super::decoder::{Level, SegmentKind};
use crate::config::ProfileConfig;
use crate::engines::evaluation::FitnessEvaluator;
use anyhow::{bail, Result};

/// Normalized segment preferences of one player
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerProfile {
    pub name: String,
    shares: [f64; 7],
    max_gap_run: usize,
}

impl PlayerProfile {
    pub fn from_config(config: &ProfileConfig) -> Result<Self> {
        let raw = config.shares();
        let total: f64 = raw.iter().sum();
        if !total.is_finite() || total <= 0.0 {
            bail!("profile '{}' has no positive preference", config.name);
        }

        let mut shares = [0.0; 7];
        for (share, value) in shares.iter_mut().zip(raw) {
            *share = value / total;
        }

        Ok(Self {
            name: config.name.clone(),
            shares,
            max_gap_run: config.max_gap_run,
        })
    }

    pub fn share(&self, kind: SegmentKind) -> f64 {
        self.shares[kind.index()]
    }
}

/// Scores how closely a level's segment mix matches the player's preferences.
///
/// The score is `1 - total variation distance` between the two distributions, minus a
/// penalty for every gap beyond the longest run the player tolerates. Always in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileEvaluator;

impl FitnessEvaluator<Level, PlayerProfile> for ProfileEvaluator {
    fn evaluate(&self, level: &Level, profile: &PlayerProfile) -> Result<f64> {
        if level.is_empty() {
            bail!("cannot score an empty level");
        }

        let len = level.len() as f64;
        let distance: f64 = SegmentKind::ALL
            .iter()
            .map(|&kind| (level.count(kind) as f64 / len - profile.share(kind)).abs())
            .sum::<f64>()
            / 2.0;

        let excess_gaps = level.longest_gap_run().saturating_sub(profile.max_gap_run) as f64;
        let score = 1.0 - distance - excess_gaps / len;

        Ok(score.clamp(0.0, 1.0))
    }
}
