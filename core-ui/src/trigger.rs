//! One-shot triggers for view sync routines.
//!
//! A view's sync routine runs every time its model changes, which makes it the
//! wrong place to, say, show a snackbar: it would show again on every sync.
//! [`SyncTrigger`] remembers whether its threshold was already reached and
//! only fires the action on the transition from "not reached" to "reached".
//!
//! ```
//! use core_ui::{ResetRule, SyncTrigger};
//! use std::cell::Cell;
//!
//! let errors = Cell::new(0);
//! let shown = Cell::new(0);
//!
//! let mut trigger = SyncTrigger::new(
//!     || shown.set(shown.get() + 1),
//!     || errors.get() > 0,
//!     ResetRule::OnlyAfterReversion,
//! );
//!
//! errors.set(1);
//! trigger.check();
//! trigger.check();
//! assert_eq!(shown.get(), 1);
//! ```

/// When a fired trigger is re-armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetRule {
    /// Re-armed after every check, so it fires on every check that reaches
    /// the threshold.
    Immediately,
    /// Re-armed once a later check finds the threshold no longer reached.
    #[default]
    OnlyAfterReversion,
    /// Never re-armed: fires at most once per instance.
    ///
    /// Triggers usually live in views, which may be rebuilt (on rotation, for
    /// example). Each rebuild brings a new instance that can fire again;
    /// [`SyncTrigger::check_lazy`] helps there.
    Never,
}

/// Fires `on_triggered` once when `threshold_reached` turns true.
pub struct SyncTrigger<A, C>
where
    A: FnMut(),
    C: FnMut() -> bool,
{
    on_triggered: A,
    threshold_reached: C,
    reset_rule: ResetRule,
    over_threshold: bool,
    first_check: bool,
}

impl<A, C> SyncTrigger<A, C>
where
    A: FnMut(),
    C: FnMut() -> bool,
{
    pub fn new(on_triggered: A, threshold_reached: C, reset_rule: ResetRule) -> Self {
        Self {
            on_triggered,
            threshold_reached,
            reset_rule,
            over_threshold: false,
            first_check: true,
        }
    }

    /// Checks the threshold and fires if it has just been reached.
    ///
    /// A trigger rebuilt along with its view (after a rotation, say) will fire
    /// again on its first check if the threshold is still met. Use
    /// [`check_lazy`](Self::check_lazy) to avoid that.
    pub fn check(&mut self) {
        self.run_check(false);
    }

    /// Like [`check`](Self::check), but a firing on the very first check of
    /// this instance is swallowed.
    ///
    /// The trigger still counts as over the threshold afterwards, so with
    /// [`ResetRule::OnlyAfterReversion`] it will not fire until the threshold
    /// has first reverted.
    pub fn check_lazy(&mut self) {
        self.run_check(true);
    }

    pub fn reset_rule(&self) -> ResetRule {
        self.reset_rule
    }

    pub fn is_over_threshold(&self) -> bool {
        self.over_threshold
    }

    fn run_check(&mut self, swallow_first: bool) {
        let reached = (self.threshold_reached)();

        if !self.over_threshold && reached {
            self.over_threshold = true;
            if swallow_first && self.first_check {
                tracing::trace!("sync trigger reached on first check, swallowed");
            } else {
                tracing::trace!("sync trigger fired");
                (self.on_triggered)();
            }
        }

        self.first_check = false;

        match self.reset_rule {
            ResetRule::Immediately => self.over_threshold = false,
            ResetRule::OnlyAfterReversion => {
                if !reached {
                    self.over_threshold = false;
                }
            }
            ResetRule::Never => {}
        }
    }
}

impl<A, C> std::fmt::Debug for SyncTrigger<A, C>
where
    A: FnMut(),
    C: FnMut() -> bool,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncTrigger")
            .field("reset_rule", &self.reset_rule)
            .field("over_threshold", &self.over_threshold)
            .field("first_check", &self.first_check)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Runs `check` once per threshold value and returns how often it fired.
    fn fire_count(rule: ResetRule, lazy: bool, thresholds: &[bool]) -> usize {
        let fired = Cell::new(0);
        let reached = Cell::new(false);
        let mut trigger = SyncTrigger::new(|| fired.set(fired.get() + 1), || reached.get(), rule);

        for &value in thresholds {
            reached.set(value);
            if lazy {
                trigger.check_lazy();
            } else {
                trigger.check();
            }
        }

        drop(trigger);
        fired.get()
    }

    #[test]
    fn test_does_not_fire_below_threshold() {
        assert_eq!(fire_count(ResetRule::OnlyAfterReversion, false, &[false, false]), 0);
    }

    #[test]
    fn test_fires_once_while_threshold_holds() {
        assert_eq!(fire_count(ResetRule::OnlyAfterReversion, false, &[true, true, true]), 1);
    }

    #[test]
    fn test_only_after_reversion_rearms_on_false() {
        assert_eq!(
            fire_count(ResetRule::OnlyAfterReversion, false, &[true, true, false, true]),
            2
        );
    }

    #[test]
    fn test_immediately_fires_on_every_reached_check() {
        assert_eq!(fire_count(ResetRule::Immediately, false, &[true, true, false, true]), 3);
    }

    #[test]
    fn test_never_fires_at_most_once() {
        assert_eq!(fire_count(ResetRule::Never, false, &[true, false, true, false, true]), 1);
    }

    #[test]
    fn test_lazy_swallows_first_check_only() {
        // Reached on first check: swallowed, and still latched until it reverts
        assert_eq!(fire_count(ResetRule::OnlyAfterReversion, true, &[true, true]), 0);
        assert_eq!(
            fire_count(ResetRule::OnlyAfterReversion, true, &[true, false, true]),
            1
        );
        // Not reached on first check: nothing to swallow
        assert_eq!(fire_count(ResetRule::OnlyAfterReversion, true, &[false, true]), 1);
    }

    #[test]
    fn test_lazy_with_immediately_fires_from_second_check() {
        assert_eq!(fire_count(ResetRule::Immediately, true, &[true, true]), 1);
    }

    #[test]
    fn test_lazy_with_never_swallows_the_only_firing() {
        assert_eq!(fire_count(ResetRule::Never, true, &[true, false, true]), 0);
    }

    #[test]
    fn test_over_threshold_state() {
        let reached = Cell::new(true);
        let mut trigger = SyncTrigger::new(|| {}, || reached.get(), ResetRule::default());
        assert_eq!(trigger.reset_rule(), ResetRule::OnlyAfterReversion);
        assert!(!trigger.is_over_threshold());

        trigger.check();
        assert!(trigger.is_over_threshold());

        reached.set(false);
        trigger.check();
        assert!(!trigger.is_over_threshold());
    }
}
