use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::LevelforgeError;
use serde::{Deserialize, Serialize};

/// Player preferences the reference evaluator scores levels against.
///
/// Each share is the relative amount of that segment kind the player enjoys; shares are
/// normalized, so only their ratios matter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub name: String,
    pub flat: f64,
    pub gaps: f64,
    pub hills: f64,
    pub enemies: f64,
    pub coins: f64,
    pub blocks: f64,
    pub pipes: f64,
    /// Longest run of consecutive gaps before the level is penalized
    pub max_gap_run: usize,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: "casual".to_string(),
            flat: 4.0,
            gaps: 1.0,
            hills: 2.0,
            enemies: 1.0,
            coins: 2.0,
            blocks: 1.0,
            pipes: 1.0,
            max_gap_run: 2,
        }
    }
}

impl ProfileConfig {
    pub fn shares(&self) -> [f64; 7] {
        [
            self.flat,
            self.gaps,
            self.hills,
            self.enemies,
            self.coins,
            self.blocks,
            self.pipes,
        ]
    }
}

impl ConfigSection for ProfileConfig {
    fn section_name() -> &'static str {
        "profile"
    }

    fn validate(&self) -> Result<(), LevelforgeError> {
        let shares = self.shares();
        if shares.iter().any(|share| !share.is_finite() || *share < 0.0) {
            return Err(LevelforgeError::Configuration(
                "Profile shares must be finite and non-negative".to_string(),
            ));
        }
        if shares.iter().sum::<f64>() <= 0.0 {
            return Err(LevelforgeError::Configuration(
                "Profile needs at least one positive share".to_string(),
            ));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        let share = |name: &str, default: f64, description: &str| FieldManifest {
            name: name.to_string(),
            field_type: "float".to_string(),
            default: serde_json::json!(default),
            min: Some(0.0),
            max: None,
            description: description.to_string(),
        };

        ConfigManifest {
            section: "Profile".to_string(),
            fields: vec![
                share("flat", 4.0, "Preference for plain ground"),
                share("gaps", 1.0, "Preference for pits to jump over"),
                share("hills", 2.0, "Preference for raised terrain"),
                share("enemies", 1.0, "Preference for enemies"),
                share("coins", 2.0, "Preference for collectibles"),
                share("blocks", 1.0, "Preference for question and brick blocks"),
                share("pipes", 1.0, "Preference for pipes"),
                FieldManifest {
                    name: "max_gap_run".to_string(),
                    field_type: "integer".to_string(),
                    default: serde_json::json!(2),
                    min: Some(0.0),
                    max: None,
                    description: "Consecutive gaps tolerated before penalties apply".to_string(),
                },
            ],
        }
    }
}
