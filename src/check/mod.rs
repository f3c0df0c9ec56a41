// src/check/mod.rs
mod content;
mod extract;
mod http;
mod record;
#[cfg(feature = "redis")]
mod redis;
mod transport;

pub use content::Content;
pub use extract::{ErrorStatusExtractor, ExtractorError, StatusExtractor};
pub use http::{CheckerError, HttpCheck, HttpChecker};
pub use record::{CheckRecord, Checks};
#[cfg(feature = "redis")]
pub use self::redis::RedisChecker;
pub use transport::{
    ProbeResponse, ProbeTransport, ReqwestTransport, RequestOptions, TransportError,
};

use crate::status::Status;

/// Merge several check results into one overall status and one checks
/// object. Later results overwrite earlier ones on a record-key collision.
pub fn combine<I>(results: I) -> (Status, Checks)
where
    I: IntoIterator<Item = (Status, Checks)>,
{
    let mut overall = Status::Pass;
    let mut merged = Checks::new();
    for (status, checks) in results {
        overall = overall.max(status);
        merged.extend(checks);
    }
    (overall, merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_merges_statuses_and_records() {
        let mut first = Checks::new();
        first.insert(
            "db:health".to_string(),
            CheckRecord::new("http://db/health", "pass"),
        );
        let mut second = Checks::new();
        second.insert(
            "cache:health".to_string(),
            CheckRecord::new("http://cache/health", "warn"),
        );

        let (status, merged) = combine([(Status::Pass, first), (Status::Warn, second)]);
        assert_eq!(status, Status::Warn);
        assert_eq!(merged.len(), 2);
        assert!(merged.contains_key("db:health"));
        assert!(merged.contains_key("cache:health"));
    }

    #[test]
    fn combine_of_nothing_is_a_pass() {
        let (status, checks) = combine([]);
        assert_eq!(status, Status::Pass);
        assert!(checks.is_empty());
    }
}
