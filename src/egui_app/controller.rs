//! Tab controller: the single writer of [`ViewState`].

use std::time::{Duration, Instant};

use crate::dashboard::Dataset;
use crate::egui_app::state::{DeferredFlag, Tab, ViewState};
use crate::egui_app::view_model::DashboardView;

/// Keyboard command understood by the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabCommand {
    Select(Tab),
    Next,
    Previous,
}

/// Owns the active tab and the entrance flag, and composes the visible view.
pub struct TabController {
    state: ViewState,
    dataset: Dataset,
}

impl TabController {
    /// Mount on the overview tab and schedule the entrance flip.
    pub fn mount(dataset: Dataset, now: Instant, fade_in_delay: Duration) -> Self {
        Self {
            state: ViewState {
                active_tab: Tab::Overview,
                animated_in: DeferredFlag::schedule(now, fade_in_delay),
            },
            dataset,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.state.active_tab
    }

    pub fn animated_in(&self) -> bool {
        self.state.animated_in.value()
    }

    pub fn select_tab(&mut self, tab: Tab) {
        if self.state.active_tab == tab {
            return;
        }
        tracing::debug!(from = self.state.active_tab.id(), to = tab.id(), "Tab selected");
        self.state.active_tab = tab;
    }

    pub fn apply(&mut self, command: TabCommand) {
        let tab = match command {
            TabCommand::Select(tab) => tab,
            TabCommand::Next => self.state.active_tab.next(),
            TabCommand::Previous => self.state.active_tab.previous(),
        };
        self.select_tab(tab);
    }

    /// Advance the deferred entrance flip.
    ///
    /// Returns the delay until it is due while still pending, so the caller can
    /// ask for a repaint at that point.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        if self.state.animated_in.poll(now) {
            tracing::debug!("Entrance animation started");
        }
        self.state.animated_in.remaining(now)
    }

    /// Drop the pending entrance flip; used on teardown.
    pub fn cancel_pending(&mut self) {
        if self.state.animated_in.is_pending() {
            tracing::debug!("Cancelled pending entrance animation");
        }
        self.state.animated_in.cancel();
    }

    /// Compose the view for the active tab.
    pub fn current_view(&self) -> DashboardView {
        DashboardView::compose(self.state.active_tab, &self.dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn controller(now: Instant) -> TabController {
        let dataset = Dataset::load(&mut StdRng::seed_from_u64(1), 10);
        TabController::mount(dataset, now, Duration::from_millis(100))
    }

    #[test]
    fn starts_on_overview_before_entrance() {
        let now = Instant::now();
        let controller = controller(now);
        assert_eq!(controller.active_tab(), Tab::Overview);
        assert!(!controller.animated_in());
    }

    #[test]
    fn entrance_flips_exactly_once() {
        let start = Instant::now();
        let mut controller = controller(start);

        assert_eq!(
            controller.tick(start + Duration::from_millis(40)),
            Some(Duration::from_millis(60))
        );
        assert!(!controller.animated_in());

        assert_eq!(controller.tick(start + Duration::from_millis(120)), None);
        assert!(controller.animated_in());

        for step in 2..10 {
            assert_eq!(controller.tick(start + Duration::from_millis(100 * step)), None);
            assert!(controller.animated_in());
        }
    }

    #[test]
    fn cancel_before_deadline_keeps_flag_down() {
        let start = Instant::now();
        let mut controller = controller(start);
        controller.cancel_pending();
        assert_eq!(controller.tick(start + Duration::from_secs(5)), None);
        assert!(!controller.animated_in());
    }

    #[test]
    fn commands_move_between_tabs() {
        let mut controller = controller(Instant::now());
        controller.apply(TabCommand::Next);
        assert_eq!(controller.active_tab(), Tab::AtRisk);
        controller.apply(TabCommand::Select(Tab::Cohorts));
        assert_eq!(controller.active_tab(), Tab::Cohorts);
        controller.apply(TabCommand::Next);
        assert_eq!(controller.active_tab(), Tab::Overview);
        controller.apply(TabCommand::Previous);
        assert_eq!(controller.active_tab(), Tab::Cohorts);
    }

    #[test]
    fn tab_switch_does_not_touch_entrance_flag() {
        let start = Instant::now();
        let mut controller = controller(start);
        controller.select_tab(Tab::Model);
        assert!(!controller.animated_in());
        controller.tick(start + Duration::from_millis(100));
        controller.select_tab(Tab::Overview);
        assert!(controller.animated_in());
    }
}
