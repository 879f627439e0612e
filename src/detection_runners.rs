pub mod inference_process;

pub use inference_process::*;
