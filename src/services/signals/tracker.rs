//! Signal transition tracking and outcome scoring.

use crate::types::{Signal, SignalEvent, TrackerStats};
use dashmap::DashMap;
use std::sync::Arc;

/// Bounded view of one tracker, as handed to report builders.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerSnapshot {
    /// Newest-first, capped at the requested limit.
    pub history: Vec<SignalEvent>,
    pub stats: TrackerStats,
}

/// Per-instrument transition state machine.
///
/// Idle until the first BUY/SELL arrives, then holding that signal until a
/// different directional signal replaces it. NONE is never held.
#[derive(Debug, Default)]
pub struct SignalTracker {
    last_signal: Option<Signal>,
    /// Newest-first; grows without bound, consumers read a bounded slice.
    history: Vec<SignalEvent>,
    win_count: u32,
    loss_count: u32,
}

impl SignalTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume a candidate signal for the latest bar.
    ///
    /// NONE and repeats of the held signal leave the state untouched. A
    /// real transition first scores the outgoing signal against the two
    /// most recent closes (BUY wins on a rising close, SELL on a falling
    /// one); the very first transition out of idle has nothing to score.
    pub fn update(
        &mut self,
        candidate: Signal,
        previous_close: f64,
        latest_close: f64,
        timestamp: i64,
    ) {
        if !candidate.is_directional() || Some(candidate) == self.last_signal {
            return;
        }

        if let Some(outgoing) = self.last_signal {
            let won = match outgoing {
                Signal::Buy => latest_close > previous_close,
                Signal::Sell => latest_close < previous_close,
                Signal::None => false, // never held
            };
            if won {
                self.win_count += 1;
            } else {
                self.loss_count += 1;
            }
        }

        self.last_signal = Some(candidate);
        self.history.insert(
            0,
            SignalEvent {
                time: timestamp,
                signal: candidate,
            },
        );
    }

    pub fn last_signal(&self) -> Option<Signal> {
        self.last_signal
    }

    /// Newest-first history, at most `limit` entries.
    pub fn recent_history(&self, limit: usize) -> Vec<SignalEvent> {
        self.history.iter().take(limit).copied().collect()
    }

    /// Accuracy over scored transitions, 0 when nothing has been scored.
    pub fn accuracy_pct(&self) -> f64 {
        let scored = self.win_count + self.loss_count;
        if scored > 0 {
            self.win_count as f64 / scored as f64 * 100.0
        } else {
            0.0
        }
    }

    pub fn stats(&self) -> TrackerStats {
        TrackerStats {
            win: self.win_count,
            loss: self.loss_count,
            accuracy: format!("{:.2}%", self.accuracy_pct()),
        }
    }

    fn snapshot(&self, history_limit: usize) -> TrackerSnapshot {
        TrackerSnapshot {
            history: self.recent_history(history_limit),
            stats: self.stats(),
        }
    }
}

/// Tracker map keyed by instrument.
///
/// One tracker per asset removes cross-instrument contamination of the
/// win/loss counters. Each entry's read-evaluate-write runs under the map's
/// entry lock, so concurrent callers cannot lose or double-count outcomes.
pub struct TrackerStore {
    trackers: DashMap<String, SignalTracker>,
}

impl TrackerStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            trackers: DashMap::new(),
        })
    }

    /// Apply a candidate signal for `asset` and return the resulting view.
    pub fn update(
        &self,
        asset: &str,
        candidate: Signal,
        previous_close: f64,
        latest_close: f64,
        timestamp: i64,
        history_limit: usize,
    ) -> TrackerSnapshot {
        let mut entry = self.trackers.entry(asset.to_string()).or_default();
        entry.update(candidate, previous_close, latest_close, timestamp);
        entry.snapshot(history_limit)
    }

    /// Current view without mutating; an untracked asset reads as fresh.
    pub fn snapshot(&self, asset: &str, history_limit: usize) -> TrackerSnapshot {
        match self.trackers.get(asset) {
            Some(entry) => entry.snapshot(history_limit),
            None => SignalTracker::new().snapshot(history_limit),
        }
    }
}

impl Default for TrackerStore {
    fn default() -> Self {
        Self {
            trackers: DashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_transition_scores_nothing() {
        let mut tracker = SignalTracker::new();
        tracker.update(Signal::Buy, 1.0, 1.1, 1000);
        let stats = tracker.stats();
        assert_eq!(stats.win, 0);
        assert_eq!(stats.loss, 0);
        assert_eq!(tracker.last_signal(), Some(Signal::Buy));
        assert_eq!(tracker.recent_history(10).len(), 1);
    }

    #[test]
    fn test_none_candidate_is_a_no_op() {
        let mut tracker = SignalTracker::new();
        tracker.update(Signal::Buy, 1.0, 1.1, 1000);
        tracker.update(Signal::None, 1.1, 1.0, 2000);
        assert_eq!(tracker.last_signal(), Some(Signal::Buy));
        assert_eq!(tracker.recent_history(10).len(), 1);
        assert_eq!(tracker.stats().win + tracker.stats().loss, 0);
    }

    #[test]
    fn test_repeated_signal_is_a_no_op() {
        let mut tracker = SignalTracker::new();
        tracker.update(Signal::Buy, 1.0, 1.1, 1000);
        tracker.update(Signal::Buy, 1.1, 1.2, 2000);
        assert_eq!(tracker.recent_history(10).len(), 1);
        assert_eq!(tracker.stats().win + tracker.stats().loss, 0);
    }

    #[test]
    fn test_buy_buy_sell_buy_scores_two_transitions() {
        let mut tracker = SignalTracker::new();
        tracker.update(Signal::Buy, 1.00, 1.01, 1000); // idle -> BUY, unscored
        tracker.update(Signal::Buy, 1.01, 1.02, 2000); // repeat, no-op
        tracker.update(Signal::Sell, 1.02, 1.03, 3000); // BUY scored: close rose, win
        tracker.update(Signal::Buy, 1.03, 1.02, 4000); // SELL scored: close fell, win

        let stats = tracker.stats();
        assert_eq!(stats.win + stats.loss, 2);
        assert_eq!(stats.win, 2);
        assert_eq!(tracker.recent_history(10).len(), 3);
    }

    #[test]
    fn test_buy_scored_as_loss_on_falling_close() {
        let mut tracker = SignalTracker::new();
        tracker.update(Signal::Buy, 1.00, 1.01, 1000);
        tracker.update(Signal::Sell, 1.01, 0.99, 2000);
        let stats = tracker.stats();
        assert_eq!(stats.win, 0);
        assert_eq!(stats.loss, 1);
    }

    #[test]
    fn test_sell_scored_as_loss_on_rising_close() {
        let mut tracker = SignalTracker::new();
        tracker.update(Signal::Sell, 1.00, 0.99, 1000);
        tracker.update(Signal::Buy, 0.99, 1.02, 2000);
        let stats = tracker.stats();
        assert_eq!(stats.win, 0);
        assert_eq!(stats.loss, 1);
    }

    #[test]
    fn test_flat_close_scores_as_loss() {
        // An unchanged close is not a win for either side.
        let mut tracker = SignalTracker::new();
        tracker.update(Signal::Buy, 1.00, 1.00, 1000);
        tracker.update(Signal::Sell, 1.00, 1.00, 2000);
        assert_eq!(tracker.stats().loss, 1);
    }

    #[test]
    fn test_accuracy_format_two_decimals() {
        let mut tracker = SignalTracker::new();
        assert_eq!(tracker.stats().accuracy, "0.00%");

        // One win, then two losses: 1/3.
        tracker.update(Signal::Buy, 1.00, 1.01, 1000);
        tracker.update(Signal::Sell, 1.01, 1.02, 2000); // win
        tracker.update(Signal::Buy, 1.02, 1.03, 3000); // SELL lost
        tracker.update(Signal::Sell, 1.03, 1.02, 4000); // BUY lost
        assert_eq!(tracker.stats().accuracy, "33.33%");
    }

    #[test]
    fn test_history_is_newest_first_and_capped() {
        let mut tracker = SignalTracker::new();
        for i in 0..15 {
            let candidate = if i % 2 == 0 { Signal::Buy } else { Signal::Sell };
            tracker.update(candidate, 1.0, 1.1, 1000 + i);
        }

        let history = tracker.recent_history(10);
        assert_eq!(history.len(), 10);
        for pair in history.windows(2) {
            assert!(pair[0].time > pair[1].time);
        }
        assert_eq!(history[0].time, 1014);
    }

    #[test]
    fn test_store_isolates_instruments() {
        let store = TrackerStore::new();
        store.update("EUR/USD", Signal::Buy, 1.00, 1.01, 1000, 10);
        store.update("EUR/USD", Signal::Sell, 1.01, 1.02, 2000, 10);
        store.update("GBP/USD", Signal::Buy, 1.20, 1.21, 1000, 10);

        let eur = store.snapshot("EUR/USD", 10);
        let gbp = store.snapshot("GBP/USD", 10);
        assert_eq!(eur.stats.win, 1);
        assert_eq!(eur.history.len(), 2);
        assert_eq!(gbp.stats.win + gbp.stats.loss, 0);
        assert_eq!(gbp.history.len(), 1);
    }

    #[test]
    fn test_store_snapshot_of_unknown_asset_is_fresh() {
        let store = TrackerStore::new();
        let snapshot = store.snapshot("USD/JPY", 10);
        assert!(snapshot.history.is_empty());
        assert_eq!(snapshot.stats.accuracy, "0.00%");
    }
}
