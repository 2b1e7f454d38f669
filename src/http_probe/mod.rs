pub mod client;
pub mod probe;
pub mod result;

use std::fmt::Write;

/// Flattens an error and its source chain into a single-line description.
pub(crate) fn describe(mut err: &(dyn std::error::Error + 'static)) -> String {
    let mut s = format!("{}", err);
    while let Some(src) = err.source() {
        let _ = write!(s, ": {}", src);
        err = src;
    }
    s
}
