//! Wall-clock access for timestamping aggregate mutations.

use chrono::{DateTime, Duration, Utc};

/// Current UTC time.
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Current UTC time, forced strictly past `previous`.
///
/// Consecutive mutations can land on the same clock reading; in that case the
/// result is `previous` plus one microsecond.
pub fn after(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}
