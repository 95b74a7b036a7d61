// SPDX-License-Identifier: MPL-2.0
//! Tearing signals dispatched by the simulation.
//!
//! Signals are consumed for display only: each one becomes exactly one
//! notification, with no filtering or deduplication.

use crate::notifications::Notification;
use serde::de::{self, Deserializer};
use serde::Deserialize;

/// Partial progress of a tearing run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TearingUpdate {
    /// Fraction complete, in `[0, 1]`.
    pub progress: f64,
    #[serde(deserialize_with = "whole_count")]
    pub tears: i64,
}

/// End of a tearing run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TearingComplete {
    pub reason: String,
    /// Final fraction complete, in `[0, 1]`.
    pub progress: f64,
}

/// A named event with its detail payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", content = "detail", rename_all = "kebab-case")]
pub enum TearingSignal {
    TearingUpdate(TearingUpdate),
    TearingComplete(TearingComplete),
}

/// Accepts a count written either as an integer or as a whole float.
fn whole_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Int(i64),
        Float(f64),
    }

    match Count::deserialize(deserializer)? {
        Count::Int(count) => Ok(count),
        Count::Float(count)
            if count.fract() == 0.0 && (i64::MIN as f64..=i64::MAX as f64).contains(&count) =>
        {
            Ok(count as i64)
        }
        Count::Float(count) => Err(de::Error::custom(format!(
            "expected a whole tear count, got {count}"
        ))),
    }
}

impl TearingSignal {
    /// Parses one line of the inbound signal stream.
    pub fn parse(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }

    /// Translates the signal into its status notification.
    #[must_use]
    pub fn to_notification(&self) -> Notification {
        tracing::debug!(signal = ?self, "tearing signal");
        match self {
            TearingSignal::TearingUpdate(update) => Notification::info(format!(
                "📊 Progress: {}%, Tears: {}",
                percent(update.progress),
                update.tears
            )),
            TearingSignal::TearingComplete(complete) => Notification::success(format!(
                "✅ Complete! Reason: {}, Progress: {}%",
                complete.reason,
                percent(complete.progress)
            )),
        }
    }
}

/// Formats a fraction as a percentage with one decimal, rounding ties up.
fn percent(fraction: f64) -> String {
    format!("{:.1}", (fraction * 1000.0).round() / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::Severity;

    #[test]
    fn parses_update_signal() {
        let signal =
            TearingSignal::parse(r#"{"event":"tearing-update","detail":{"progress":0.42,"tears":3}}"#)
                .unwrap();
        assert_eq!(
            signal,
            TearingSignal::TearingUpdate(TearingUpdate {
                progress: 0.42,
                tears: 3
            })
        );
    }

    #[test]
    fn parses_complete_signal() {
        let signal = TearingSignal::parse(
            r#"{"event":"tearing-complete","detail":{"reason":"max-tears","progress":1.0}}"#,
        )
        .unwrap();
        assert!(matches!(
            signal,
            TearingSignal::TearingComplete(TearingComplete { ref reason, .. }) if reason == "max-tears"
        ));
    }

    #[test]
    fn whole_float_tear_count_is_accepted() {
        let signal =
            TearingSignal::parse(r#"{"event":"tearing-update","detail":{"progress":0.1,"tears":3.0}}"#)
                .unwrap();
        assert_eq!(
            signal,
            TearingSignal::TearingUpdate(TearingUpdate {
                progress: 0.1,
                tears: 3
            })
        );
    }

    #[test]
    fn fractional_tear_count_is_rejected() {
        let err =
            TearingSignal::parse(r#"{"event":"tearing-update","detail":{"progress":0.1,"tears":3.5}}"#)
                .unwrap_err();
        assert!(err.to_string().contains("whole tear count"));
    }

    #[test]
    fn rejects_unknown_event() {
        assert!(TearingSignal::parse(r#"{"event":"tearing-reset","detail":{}}"#).is_err());
        assert!(TearingSignal::parse("not json").is_err());
    }

    #[test]
    fn update_becomes_info_notification() {
        let notification = TearingSignal::TearingUpdate(TearingUpdate {
            progress: 0.4567,
            tears: 2,
        })
        .to_notification();

        assert_eq!(notification.severity(), Severity::Info);
        assert_eq!(notification.message(), "📊 Progress: 45.7%, Tears: 2");
    }

    #[test]
    fn percentage_ties_round_up() {
        let notification = TearingSignal::TearingUpdate(TearingUpdate {
            progress: 0.0025,
            tears: 1,
        })
        .to_notification();
        assert_eq!(notification.message(), "📊 Progress: 0.3%, Tears: 1");
        assert_eq!(percent(0.5), "50.0");
        assert_eq!(percent(0.0), "0.0");
    }

    #[test]
    fn completion_becomes_success_notification() {
        let notification = TearingSignal::TearingComplete(TearingComplete {
            reason: "threshold".into(),
            progress: 1.0,
        })
        .to_notification();

        assert_eq!(notification.severity(), Severity::Success);
        assert_eq!(
            notification.message(),
            "✅ Complete! Reason: threshold, Progress: 100.0%"
        );
    }

    #[test]
    fn repeated_signals_are_not_deduplicated() {
        let signal = TearingSignal::TearingUpdate(TearingUpdate {
            progress: 0.5,
            tears: 1,
        });
        let first = signal.to_notification();
        let second = signal.to_notification();
        assert_eq!(first.message(), second.message());
        assert_ne!(first.id(), second.id());
    }
}
