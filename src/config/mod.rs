pub mod evolution;
pub mod manager;
pub mod profile;
pub mod traits;

pub use evolution::{EvolutionConfig, SelectionMode};
pub use manager::{AppConfig, ConfigManager};
pub use profile::ProfileConfig;
pub use traits::{ConfigManifest, ConfigSection, FieldManifest};
