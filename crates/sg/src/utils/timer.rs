use std::ops::{Deref, DerefMut};
use std::time::{Duration, Instant};

pub struct TimedResult<T> {
    pub res: T,
    pub elapsed: Duration,
}

impl<T> Deref for TimedResult<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.res
    }
}

impl<T> DerefMut for TimedResult<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.res
    }
}

pub fn timed_scope<R, F: FnOnce() -> R>(f: F) -> TimedResult<R> {
    let begin = Instant::now();
    let res = f();

    TimedResult {
        res,
        elapsed: begin.elapsed(),
    }
}

/// Run `f` and log how long it took under the `scoped timer` target
pub fn timed_scope_log<R, F: FnOnce() -> R>(label: &'static str, f: F) -> TimedResult<R> {
    let timed = timed_scope(f);
    log::info!(target: "scoped timer", "{}: {}", label, format_elapsed(timed.elapsed));
    timed
}

pub fn format_elapsed(elapsed: Duration) -> String {
    if elapsed < Duration::from_millis(1) {
        let micro = elapsed.as_secs_f32() * 1_000_000.;
        format!("{micro:.3}µs")
    } else if elapsed < Duration::from_secs(1) {
        let milli = elapsed.as_secs_f32() * 1000.;
        format!("{milli:.3}ms")
    } else if elapsed < Duration::from_secs(60) {
        format!("{:.3}s", elapsed.as_secs_f32())
    } else {
        let secs = elapsed.as_secs();
        let (h, m, s) = (secs / 3600, (secs / 60) % 60, secs % 60);
        format!("{h}h{m}m{s}s")
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{format_elapsed, timed_scope};

    #[test]
    fn elapsed_units() {
        assert_eq!(format_elapsed(Duration::from_micros(250)), "250.000µs");
        assert_eq!(format_elapsed(Duration::from_millis(12)), "12.000ms");
        assert_eq!(format_elapsed(Duration::from_millis(2500)), "2.500s");
        assert_eq!(format_elapsed(Duration::from_secs(3723)), "1h2m3s");
    }

    #[test]
    fn timed_scope_keeps_result() {
        let timed = timed_scope(|| 21 * 2);
        assert_eq!(*timed, 42);
    }
}
