mod classifier_outcome;
mod damage_box;
mod damage_colour;
mod damage_label;
mod fusion_input;
mod image_dimensions;
mod merged_detection;
mod raw_detection;
mod result_record;
mod road_verdict;
mod severity_assessment;

pub use classifier_outcome::*;
pub use damage_box::*;
pub use damage_colour::*;
pub use damage_label::*;
pub use fusion_input::*;
pub use image_dimensions::*;
pub use merged_detection::*;
pub use raw_detection::*;
pub use result_record::*;
pub use road_verdict::*;
pub use severity_assessment::*;
