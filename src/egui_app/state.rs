//! View state owned by the tab controller.

use std::time::{Duration, Instant};

/// Dashboard tabs, in strip order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Overview,
    AtRisk,
    Model,
    Cohorts,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Overview, Tab::AtRisk, Tab::Model, Tab::Cohorts];

    /// Stable identifier, e.g. `"at-risk"`.
    pub const fn id(self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::AtRisk => "at-risk",
            Tab::Model => "model",
            Tab::Cohorts => "cohorts",
        }
    }

    /// Caption shown in the tab strip.
    pub const fn title(self) -> &'static str {
        match self {
            Tab::Overview => "OVERVIEW",
            Tab::AtRisk => "AT RISK",
            Tab::Model => "MODEL",
            Tab::Cohorts => "COHORTS",
        }
    }

    pub fn index(self) -> usize {
        Tab::ALL
            .iter()
            .position(|tab| *tab == self)
            .unwrap_or_default()
    }

    /// Next tab in strip order, wrapping around.
    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    /// Previous tab in strip order, wrapping around.
    pub fn previous(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// One-shot deferred flip of the entrance flag.
///
/// The task is a deadline polled from the frame loop, so dropping or
/// cancelling it leaves nothing behind that could fire later.
#[derive(Clone, Debug)]
pub struct DeferredFlag {
    deadline: Option<Instant>,
    value: bool,
}

impl DeferredFlag {
    /// Schedule the flip `delay` after `now`.
    pub fn schedule(now: Instant, delay: Duration) -> Self {
        Self {
            deadline: Some(now + delay),
            value: false,
        }
    }

    pub fn value(&self) -> bool {
        self.value
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fire the flip if due. Returns `true` only on the call that flipped it.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.value = true;
                true
            }
            _ => false,
        }
    }

    /// Time left until the flip, if still pending.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Drop the pending flip without firing it.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

/// The dashboard's only mutable state.
#[derive(Clone, Debug)]
pub struct ViewState {
    pub active_tab: Tab,
    pub animated_in: DeferredFlag,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_ids_and_titles() {
        let ids = Tab::ALL.map(Tab::id);
        assert_eq!(ids, ["overview", "at-risk", "model", "cohorts"]);
        assert_eq!(Tab::AtRisk.title(), "AT RISK");
        assert_eq!(Tab::default(), Tab::Overview);
    }

    #[test]
    fn tab_cycling_wraps() {
        assert_eq!(Tab::Cohorts.next(), Tab::Overview);
        assert_eq!(Tab::Overview.previous(), Tab::Cohorts);
        assert_eq!(Tab::AtRisk.next(), Tab::Model);
    }

    #[test]
    fn deferred_flag_fires_once_after_deadline() {
        let start = Instant::now();
        let mut flag = DeferredFlag::schedule(start, Duration::from_millis(100));
        assert!(!flag.poll(start + Duration::from_millis(50)));
        assert!(!flag.value());
        assert_eq!(
            flag.remaining(start + Duration::from_millis(50)),
            Some(Duration::from_millis(50))
        );

        assert!(flag.poll(start + Duration::from_millis(100)));
        assert!(flag.value());
        assert!(!flag.poll(start + Duration::from_millis(200)));
        assert!(flag.value());
        assert_eq!(flag.remaining(start + Duration::from_millis(200)), None);
    }

    #[test]
    fn cancelled_flag_never_fires() {
        let start = Instant::now();
        let mut flag = DeferredFlag::schedule(start, Duration::from_millis(100));
        flag.cancel();
        assert!(!flag.is_pending());
        assert!(!flag.poll(start + Duration::from_secs(1)));
        assert!(!flag.value());
    }
}
