use chrono::{DateTime, Local};

/// Prints a timestamped progress line to stdout.
/// Given a starting time first, it also prints how long it took from that time to now.
/// ```
/// use quotescrap::info_time;
///
/// info_time!("page {}, {} quotes", 1, 10);
/// let start = chrono::Local::now();
/// info_time!(start, "scraped {} pages", 10);
/// ```
#[macro_export]
macro_rules! info_time {
    ($strfm:literal $(,)? $($arg:expr),*) => {{
        println!("{:<30} : {}", ::chrono::Local::now(), format!($strfm, $($arg),*));
    }};
    ($time:expr, $strfm:literal $(,)? $($arg:expr),*) => {{
        let local_now = ::chrono::Local::now();
        println!(
            "{:<30} : {}\nRUNTIME: {} sec",
            local_now,
            format!($strfm, $($arg),*),
            $crate::elapsed_secs($time, local_now)
        );
    }};
}

/// Seconds between `start` and `now`, with microsecond precision.
#[doc(hidden)]
pub fn elapsed_secs(start: DateTime<Local>, now: DateTime<Local>) -> f64 {
    (now - start)
        .num_microseconds()
        .map(|n| n as f64 / 1_000_000.0)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn elapsed_secs_has_microsecond_precision() {
        let start = Local::now();
        let now = start + TimeDelta::microseconds(1_500_250);
        assert_eq!(elapsed_secs(start, now), 1.50025);
    }
}
