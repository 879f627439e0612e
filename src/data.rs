mod filesystem_access;
mod fusion_config;
mod label_map;
mod label_threshold;
mod severity_thresholds;
mod time_calc;
pub mod send_channels;

pub use filesystem_access::FsAccess;
pub use fusion_config::{FusionConfig, CONFIG_FILE_NAME};
pub use label_map::LabelMap;
pub use label_threshold::LabelThreshold;
pub use severity_thresholds::SeverityThresholds;
pub use time_calc::TimeCalc;
