use log::debug;
use std::time::Instant;

pub struct TimeEstimation;

impl TimeEstimation {
    pub fn estimate<T, F: FnOnce() -> T>(action: F) -> (T, u128) {
        let now = Instant::now();

        let result = action();

        (result, now.elapsed().as_millis())
    }
}

pub struct Logging;

impl Logging {
    /// Runs `action` and logs how long it took at debug level
    pub fn estimate_result<T, F: FnOnce() -> T>(action: F, message: &str) -> T {
        let (result, elapsed) = TimeEstimation::estimate(action);

        debug!("{}, {} ms", message, elapsed);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_returns_action_result() {
        let (value, _elapsed) = TimeEstimation::estimate(|| 21 * 2);
        assert_eq!(value, 42);
    }

    #[test]
    fn test_estimate_result_passes_value_through() {
        let value = Logging::estimate_result(|| String::from("done"), "test action");
        assert_eq!(value, "done");
    }
}
