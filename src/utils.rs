use std::{fs, io};
use std::io::{BufRead, BufReader};
use std::time::{Duration, Instant};

pub(crate) fn file_to_vec(filename: String) -> io::Result<Vec<String>> {
    let file_in = fs::File::open(filename)?;
    let file_reader = BufReader::new(file_in);
    file_reader.lines().collect()
}

pub(crate) fn trace(profile: bool, l_type: &str, l_step: &str, start: Instant, _elapsed: Duration) -> Duration {
    if profile {
        log::debug!("{} | Total={:.2?} | {}={:.2?}", l_type, start.elapsed(), l_step, start.elapsed() - _elapsed);
    }
    else {
        log::trace!("{} | Total={:.2?} | {}={:.2?}", l_type, start.elapsed(), l_step, start.elapsed() - _elapsed);
    }
    start.elapsed()
}

/// Rounds half away from zero to `decimals` places.
pub(crate) fn round_to(x: f32, decimals: i32) -> f32 {
    let factor = 10f64.powi(decimals);
    ((x as f64 * factor).round() / factor) as f32
}

pub(crate) fn round_to_f64(x: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (x * factor).round() / factor
}
