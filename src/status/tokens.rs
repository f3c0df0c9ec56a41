// src/status/tokens.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Health level of a component or of the whole service.
///
/// Ordered so that merging a set of statuses is a plain `max`:
/// `Pass < Warn < Fail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    Pass,
    Warn,
    Fail,
}

impl Status {
    /// Merge statuses: any fail wins, else any warn, else pass.
    /// Order-independent; an empty input is a pass.
    pub fn aggregate<I>(statuses: I) -> Status
    where
        I: IntoIterator<Item = Status>,
    {
        statuses.into_iter().fold(Status::Pass, Status::max)
    }

    pub fn is_pass(self) -> bool {
        self == Status::Pass
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Canonical literals; custom wire literals go through StatusTokens.
        let literal = match self {
            Status::Pass => "pass",
            Status::Warn => "warn",
            Status::Fail => "fail",
        };
        f.write_str(literal)
    }
}

/// Wire literals used for each health level.
///
/// Defaults follow the health-check response convention
/// (`"pass"`/`"warn"`/`"fail"`). Services integrating with another
/// convention remap the literals once at startup (`"ok"` or `"up"` for
/// pass, `"error"` or `"down"` for fail) and hand the same tokens to every
/// checker and response builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTokens {
    #[serde(default = "default_pass")]
    pub pass: String,
    #[serde(default = "default_warn")]
    pub warn: String,
    #[serde(default = "default_fail")]
    pub fail: String,
}

fn default_pass() -> String {
    "pass".to_string()
}

fn default_warn() -> String {
    "warn".to_string()
}

fn default_fail() -> String {
    "fail".to_string()
}

impl Default for StatusTokens {
    fn default() -> Self {
        Self {
            pass: default_pass(),
            warn: default_warn(),
            fail: default_fail(),
        }
    }
}

impl StatusTokens {
    pub fn new(
        pass: impl Into<String>,
        warn: impl Into<String>,
        fail: impl Into<String>,
    ) -> Self {
        Self {
            pass: pass.into(),
            warn: warn.into(),
            fail: fail.into(),
        }
    }

    /// Literal reported on the wire for `status`.
    pub fn literal(&self, status: Status) -> &str {
        match status {
            Status::Pass => &self.pass,
            Status::Warn => &self.warn,
            Status::Fail => &self.fail,
        }
    }

    /// Map a wire literal back to its level.
    ///
    /// Unrecognized literals count as pass: only the warn and fail tokens
    /// ever demote a service.
    pub fn classify(&self, literal: &str) -> Status {
        if literal == self.fail {
            Status::Fail
        } else if literal == self.warn {
            Status::Warn
        } else {
            Status::Pass
        }
    }

    /// Aggregate a sequence of wire literals into one level.
    pub fn aggregate<I, S>(&self, literals: I) -> Status
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Status::aggregate(literals.into_iter().map(|l| self.classify(l.as_ref())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn aggregate_empty_is_pass() {
        assert_eq!(Status::aggregate([]), Status::Pass);
    }

    #[test]
    fn aggregate_all_pass_is_pass() {
        assert_eq!(
            Status::aggregate([Status::Pass, Status::Pass, Status::Pass]),
            Status::Pass
        );
    }

    #[test]
    fn aggregate_warn_without_fail_is_warn() {
        assert_eq!(
            Status::aggregate([Status::Pass, Status::Warn, Status::Pass]),
            Status::Warn
        );
    }

    #[test]
    fn aggregate_fail_wins_over_warn() {
        assert_eq!(
            Status::aggregate([Status::Warn, Status::Fail, Status::Pass]),
            Status::Fail
        );
    }

    #[test]
    fn literal_aggregation_matches_default_tokens() {
        let tokens = StatusTokens::default();
        assert_eq!(tokens.aggregate(["pass", "warn", "pass"]), Status::Warn);
        assert_eq!(tokens.aggregate(["warn", "fail"]), Status::Fail);
        assert_eq!(tokens.aggregate(Vec::<&str>::new()), Status::Pass);
    }

    #[test]
    fn unrecognized_literal_counts_as_pass() {
        let tokens = StatusTokens::default();
        assert_eq!(tokens.classify("degraded"), Status::Pass);
        assert_eq!(tokens.aggregate(["degraded", "unknown"]), Status::Pass);
    }

    #[test]
    fn remapped_tokens_keep_the_ordering() {
        let tokens = StatusTokens::new("ok", "warn", "error");
        assert_eq!(tokens.aggregate(["ok", "error", "warn"]), Status::Fail);
        assert_eq!(tokens.aggregate(["ok", "warn"]), Status::Warn);
        assert_eq!(tokens.aggregate(["ok", "ok"]), Status::Pass);
        // The old fail literal is no longer recognized.
        assert_eq!(tokens.aggregate(["fail"]), Status::Pass);
    }

    fn status_strategy() -> impl Strategy<Value = Status> {
        prop_oneof![
            Just(Status::Pass),
            Just(Status::Warn),
            Just(Status::Fail),
        ]
    }

    proptest! {
        #[test]
        fn aggregate_is_order_independent(statuses in proptest::collection::vec(status_strategy(), 0..16)) {
            let merged = Status::aggregate(statuses.clone());
            let mut reversed = statuses.clone();
            reversed.reverse();
            prop_assert_eq!(merged, Status::aggregate(reversed));

            if statuses.contains(&Status::Fail) {
                prop_assert_eq!(merged, Status::Fail);
            } else if statuses.contains(&Status::Warn) {
                prop_assert_eq!(merged, Status::Warn);
            } else {
                prop_assert_eq!(merged, Status::Pass);
            }
        }

        #[test]
        fn literal_round_trip_survives_remapping(statuses in proptest::collection::vec(status_strategy(), 0..16)) {
            let default_tokens = StatusTokens::default();
            let custom = StatusTokens::new("up", "shaky", "down");

            let default_literals: Vec<&str> =
                statuses.iter().map(|s| default_tokens.literal(*s)).collect();
            let custom_literals: Vec<&str> =
                statuses.iter().map(|s| custom.literal(*s)).collect();

            prop_assert_eq!(
                default_tokens.aggregate(default_literals),
                custom.aggregate(custom_literals)
            );
        }
    }
}
