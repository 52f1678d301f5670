use std::time::Instant;

pub struct TimeEstimation;

impl TimeEstimation {
    /// Runs `action` and returns its result with the elapsed milliseconds
    pub fn estimate<T, F: FnOnce() -> T>(action: F) -> (T, u128) {
        let now = Instant::now();

        let result = action();

        (result, now.elapsed().as_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_returns_action_result() {
        let (value, elapsed) = TimeEstimation::estimate(|| 40 + 2);

        assert_eq!(value, 42);
        assert!(elapsed < 1000);
    }
}
