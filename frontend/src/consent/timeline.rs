//! Runs the gate the way the banner component does, against a virtual clock.

use std::rc::Rc;

use yew::functional::Reducible;

use super::gate::{BannerState, ConsentGate, GateAction, GateTimer};
use super::record::{load_consent, ConsentChoice, CONSENT_KEY};
use super::record_choice;
use crate::storage::{KeyValueStore, MemoryStorage};

struct Armed {
    due_ms: u64,
    timer: GateTimer,
}

struct Timeline {
    store: MemoryStorage,
    gate: Rc<ConsentGate>,
    now_ms: u64,
    armed: Option<Armed>,
}

impl Timeline {
    fn mount(store: MemoryStorage) -> Self {
        let gate = Rc::new(ConsentGate::new(load_consent(&store)));
        let mut timeline = Self { store, gate, now_ms: 0, armed: None };
        timeline.rearm();
        timeline
    }

    /// Same as the component effect: one timeout per phase, replaced on
    /// every phase change.
    fn rearm(&mut self) {
        self.armed = self.gate.pending_timer().map(|(timer, delay)| Armed {
            due_ms: self.now_ms + u64::from(delay),
            timer,
        });
    }

    fn dispatch(&mut self, action: GateAction) {
        let before = self.gate.phase();
        self.gate = self.gate.clone().reduce(action);
        if self.gate.phase() != before {
            self.rearm();
        }
    }

    fn advance(&mut self, ms: u64) {
        let until = self.now_ms + ms;
        while let Some(armed) = self.armed.as_ref().filter(|a| a.due_ms <= until) {
            self.now_ms = armed.due_ms;
            let timer = armed.timer;
            self.armed = None;
            self.dispatch(GateAction::Fire(timer));
        }
        self.now_ms = until;
    }

    fn choose(&mut self, choice: ConsentChoice) {
        let action = record_choice(&self.store, &self.gate, choice);
        self.dispatch(action);
    }

    fn unmount(&mut self) {
        self.armed = None;
    }

    fn banner(&self) -> BannerState {
        self.gate.banner()
    }

    fn stored(&self) -> Option<String> {
        self.store.get(CONSENT_KEY)
    }
}

fn shown_timeline() -> Timeline {
    let mut timeline = Timeline::mount(MemoryStorage::new());
    timeline.advance(2050);
    assert!(timeline.banner().visible);
    timeline
}

#[test]
fn fresh_visitor_sees_banner_at_2050ms() {
    let mut timeline = Timeline::mount(MemoryStorage::new());

    timeline.advance(2049);
    assert!(!timeline.banner().visible);

    timeline.advance(1);
    assert_eq!(timeline.banner(), BannerState { mounted: true, visible: true });
}

#[test]
fn recorded_consent_never_shows_banner() {
    for value in ["all", "essential"] {
        let mut timeline = Timeline::mount(MemoryStorage::with_item(CONSENT_KEY, value));
        for _ in 0..100 {
            timeline.advance(100);
            assert_eq!(timeline.banner(), BannerState::default());
        }
    }
}

#[test]
fn accept_all_persists_then_unmounts_after_400ms() {
    let mut timeline = shown_timeline();

    timeline.choose(ConsentChoice::AcceptAll);
    assert_eq!(timeline.stored().as_deref(), Some("all"));
    assert_eq!(timeline.banner(), BannerState { mounted: true, visible: false });

    timeline.advance(399);
    assert!(timeline.banner().mounted);

    timeline.advance(1);
    assert_eq!(timeline.banner(), BannerState::default());
}

#[test]
fn accept_essential_persists_then_unmounts_after_400ms() {
    let mut timeline = shown_timeline();

    timeline.choose(ConsentChoice::AcceptEssential);
    assert_eq!(timeline.stored().as_deref(), Some("essential"));
    assert!(!timeline.banner().visible);

    timeline.advance(400);
    assert!(!timeline.banner().mounted);
}

#[test]
fn double_click_writes_once_and_stays_hidden() {
    let mut timeline = shown_timeline();

    timeline.choose(ConsentChoice::AcceptAll);
    timeline.choose(ConsentChoice::AcceptAll);
    assert_eq!(timeline.stored().as_deref(), Some("all"));
    assert_eq!(timeline.store.write_count(), 1);

    for _ in 0..10 {
        timeline.advance(100);
        assert!(!timeline.banner().visible);
    }
    assert!(!timeline.banner().mounted);
}

#[test]
fn mount_and_reveal_are_separate_steps() {
    let mut timeline = Timeline::mount(MemoryStorage::new());

    timeline.advance(1999);
    assert!(!timeline.banner().mounted);

    timeline.advance(1);
    assert_eq!(timeline.banner(), BannerState { mounted: true, visible: false });

    timeline.advance(50);
    assert!(timeline.banner().visible);
}

#[test]
fn essential_record_keeps_banner_unmounted_for_ten_seconds() {
    let mut timeline = Timeline::mount(MemoryStorage::with_item(CONSENT_KEY, "essential"));
    for _ in 0..=10_000 {
        assert!(!timeline.banner().mounted);
        timeline.advance(1);
    }
}

#[test]
fn unmounting_early_cancels_the_mount_timer() {
    let mut timeline = Timeline::mount(MemoryStorage::new());
    timeline.advance(1000);
    timeline.unmount();

    timeline.advance(5000);
    assert_eq!(timeline.banner(), BannerState::default());
    assert_eq!(timeline.stored(), None);
}

#[test]
fn reload_after_choice_skips_the_banner() {
    let mut first = shown_timeline();
    first.choose(ConsentChoice::AcceptEssential);
    first.advance(400);

    let mut reloaded = Timeline::mount(first.store);
    reloaded.advance(10_000);
    assert!(!reloaded.banner().mounted);
}
