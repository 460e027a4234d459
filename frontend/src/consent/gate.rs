use std::rc::Rc;

use yew::functional::Reducible;

use super::record::{ConsentChoice, ConsentRecord};

/// Delay between page load and the banner entering the DOM.
pub const MOUNT_DELAY_MS: u32 = 2000;
/// Delay between entering the DOM and applying the visible classes, so the
/// entrance transition has a rendered starting frame.
pub const REVEAL_DELAY_MS: u32 = 50;
/// Matches the exit transition before the banner leaves the DOM.
pub const UNMOUNT_DELAY_MS: u32 = 400;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GatePhase {
    /// No record yet, waiting for the mount timer.
    Hidden,
    /// In the DOM with the hidden classes, waiting for the reveal timer.
    Mounted,
    Shown,
    /// Choice recorded, exit transition running.
    Dismissing,
    Dismissed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateTimer {
    Mount,
    Reveal,
    Unmount,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BannerState {
    pub mounted: bool,
    pub visible: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateAction {
    Fire(GateTimer),
    Choose(ConsentChoice),
    OpenSettings,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConsentGate {
    phase: GatePhase,
}

impl ConsentGate {
    pub fn new(record: ConsentRecord) -> Self {
        let phase = if record.is_set() {
            GatePhase::Dismissed
        } else {
            GatePhase::Hidden
        };
        Self { phase }
    }

    #[cfg(test)]
    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    pub fn banner(&self) -> BannerState {
        match self.phase {
            GatePhase::Hidden | GatePhase::Dismissed => BannerState::default(),
            GatePhase::Mounted | GatePhase::Dismissing => BannerState { mounted: true, visible: false },
            GatePhase::Shown => BannerState { mounted: true, visible: true },
        }
    }

    /// The one timer the current phase waits on, with its delay.
    pub fn pending_timer(&self) -> Option<(GateTimer, u32)> {
        match self.phase {
            GatePhase::Hidden => Some((GateTimer::Mount, MOUNT_DELAY_MS)),
            GatePhase::Mounted => Some((GateTimer::Reveal, REVEAL_DELAY_MS)),
            GatePhase::Dismissing => Some((GateTimer::Unmount, UNMOUNT_DELAY_MS)),
            GatePhase::Shown | GatePhase::Dismissed => None,
        }
    }

    pub fn accepts_choice(&self) -> bool {
        matches!(self.phase, GatePhase::Mounted | GatePhase::Shown)
    }

    /// Advances on `timer`. A timer that does not belong to the current
    /// phase leaves the gate untouched.
    pub fn fire(&self, timer: GateTimer) -> Self {
        let phase = match (self.phase, timer) {
            (GatePhase::Hidden, GateTimer::Mount) => GatePhase::Mounted,
            (GatePhase::Mounted, GateTimer::Reveal) => GatePhase::Shown,
            (GatePhase::Dismissing, GateTimer::Unmount) => GatePhase::Dismissed,
            (phase, _) => phase,
        };
        Self { phase }
    }

    /// Applies a button press. Returns the record the caller must persist,
    /// or `None` when the press is ignored.
    pub fn choose(&self, choice: ConsentChoice) -> (Self, Option<ConsentRecord>) {
        if self.accepts_choice() {
            (Self { phase: GatePhase::Dismissing }, Some(choice.record()))
        } else {
            (*self, None)
        }
    }

    /// "Consent Settings" has no granular panel behind it.
    pub fn open_settings(&self) -> Self {
        *self
    }
}

impl Reducible for ConsentGate {
    type Action = GateAction;

    fn reduce(self: Rc<Self>, action: GateAction) -> Rc<Self> {
        let next = match action {
            GateAction::Fire(timer) => self.fire(timer),
            GateAction::Choose(choice) => self.choose(choice).0,
            GateAction::OpenSettings => self.open_settings(),
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_record_starts_dismissed() {
        for record in [ConsentRecord::All, ConsentRecord::Essential] {
            let gate = ConsentGate::new(record);
            assert_eq!(gate.phase(), GatePhase::Dismissed);
            assert_eq!(gate.pending_timer(), None);
            assert_eq!(gate.banner(), BannerState::default());
        }
    }

    #[test]
    fn walks_through_every_phase() {
        let gate = ConsentGate::new(ConsentRecord::Unset);
        assert_eq!(gate.pending_timer(), Some((GateTimer::Mount, 2000)));

        let gate = gate.fire(GateTimer::Mount);
        assert_eq!(gate.banner(), BannerState { mounted: true, visible: false });
        assert_eq!(gate.pending_timer(), Some((GateTimer::Reveal, 50)));

        let gate = gate.fire(GateTimer::Reveal);
        assert_eq!(gate.banner(), BannerState { mounted: true, visible: true });
        assert_eq!(gate.pending_timer(), None);

        let (gate, record) = gate.choose(ConsentChoice::AcceptAll);
        assert_eq!(record, Some(ConsentRecord::All));
        assert_eq!(gate.banner(), BannerState { mounted: true, visible: false });
        assert_eq!(gate.pending_timer(), Some((GateTimer::Unmount, 400)));

        let gate = gate.fire(GateTimer::Unmount);
        assert_eq!(gate.phase(), GatePhase::Dismissed);
        assert_eq!(gate.banner(), BannerState::default());
    }

    #[test]
    fn stale_timers_are_ignored() {
        let hidden = ConsentGate::new(ConsentRecord::Unset);
        assert_eq!(hidden.fire(GateTimer::Reveal), hidden);
        assert_eq!(hidden.fire(GateTimer::Unmount), hidden);

        let shown = hidden.fire(GateTimer::Mount).fire(GateTimer::Reveal);
        assert_eq!(shown.fire(GateTimer::Mount), shown);
    }

    #[test]
    fn choices_only_count_while_the_banner_is_mounted() {
        let hidden = ConsentGate::new(ConsentRecord::Unset);
        assert_eq!(hidden.choose(ConsentChoice::AcceptAll), (hidden, None));

        let mounted = hidden.fire(GateTimer::Mount);
        let (dismissing, record) = mounted.choose(ConsentChoice::AcceptEssential);
        assert_eq!(record, Some(ConsentRecord::Essential));
        assert_eq!(dismissing.phase(), GatePhase::Dismissing);

        assert_eq!(dismissing.choose(ConsentChoice::AcceptAll), (dismissing, None));
    }

    #[test]
    fn settings_button_changes_nothing() {
        let shown = ConsentGate::new(ConsentRecord::Unset)
            .fire(GateTimer::Mount)
            .fire(GateTimer::Reveal);
        assert_eq!(shown.open_settings(), shown);

        let gate = Rc::new(shown);
        let reduced = gate.clone().reduce(GateAction::OpenSettings);
        assert!(Rc::ptr_eq(&gate, &reduced));
    }
}
