use std::cell::{Cell, RefCell};
use std::rc::Rc;

use app::content::{Section, SKILLS};
use app::effects::{observe_regions, OnVisibilityChange};
use app::host::RegionObserver;
use app::state::VisibilityTracker;
use leptos::prelude::*;

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

struct FakeObserver {
    on_page: Vec<&'static str>,
    observed: RefCell<Vec<String>>,
}

impl FakeObserver {
    fn new(on_page: Vec<&'static str>) -> Self {
        Self {
            on_page,
            observed: RefCell::new(vec![]),
        }
    }
}

impl RegionObserver for FakeObserver {
    fn observe(&self, id: &str) -> bool {
        if !self.on_page.iter().any(|on_page| *on_page == id) {
            return false;
        }
        self.observed.borrow_mut().push(String::from(id));
        true
    }

    fn disconnect(&self) {}
}

/// Observer whose disconnection stays visible to the test after it is handed
/// over to the page.
struct SharedObserver {
    disconnected: Rc<Cell<bool>>,
}

impl RegionObserver for SharedObserver {
    fn observe(&self, _id: &str) -> bool {
        true
    }

    fn disconnect(&self) {
        self.disconnected.set(true);
    }
}

#[test]
fn watches_every_section() {
    setup();

    let ids = Section::ALL.map(Section::id);
    let observer = FakeObserver::new(ids.to_vec());
    assert_eq!(5, VisibilityTracker::watch(&observer, ids));
    assert_eq!(ids.to_vec(), *observer.observed.borrow());
}

#[test]
fn only_counts_sections_on_the_page() {
    setup();

    let observer = FakeObserver::new(vec!["home", "skills"]);
    let watched = VisibilityTracker::watch(&observer, Section::ALL.map(Section::id));
    assert_eq!(2, watched);
    assert_eq!(vec![String::from("home"), String::from("skills")], *observer.observed.borrow());
}

#[test]
fn records_intersections() {
    setup();

    let mut tracker = VisibilityTracker::default();
    assert!(!tracker.is_visible("skills"));
    tracker.record("skills", true);
    assert!(tracker.is_visible("skills"));
    assert!(!tracker.is_visible("about"));
    tracker.record("skills", false);
    assert!(!tracker.is_visible("skills"));
}

#[test]
fn skill_bars_fill_once_visible() {
    setup();

    let mut tracker = VisibilityTracker::default();
    let skill = &SKILLS[0];
    let width = |tracker: &VisibilityTracker| skill.bar_width(tracker.is_visible(Section::Skills.id()));

    assert_eq!(0, width(&tracker));
    tracker.record(Section::About.id(), true);
    assert_eq!(0, width(&tracker));
    tracker.record(Section::Skills.id(), true);
    assert_eq!(skill.level, width(&tracker));
}

#[test]
fn observer_is_disconnected_when_the_page_goes_away() {
    setup();

    let disconnected = Rc::new(Cell::new(false));
    let on_change: Rc<RefCell<Option<OnVisibilityChange>>> = Rc::default();
    let owner = Owner::new();
    let visibility = owner.with(|| {
        let visibility = RwSignal::new(VisibilityTracker::default());
        let observer = SharedObserver { disconnected: Rc::clone(&disconnected) };
        let watched = observe_regions(visibility, |callback| {
            *on_change.borrow_mut() = Some(callback);
            Ok(observer)
        });
        assert_eq!(Ok(5), watched);
        visibility
    });

    let callback = on_change.borrow_mut().take().expect("the observer was built");
    callback(Section::Skills.id(), true);
    assert!(visibility.with_untracked(|tracker| tracker.is_visible(Section::Skills.id())));
    assert!(!disconnected.get());

    owner.cleanup();
    assert!(disconnected.get());
}

#[test]
fn observer_errors_are_returned() {
    setup();

    let owner = Owner::new();
    owner.with(|| {
        let visibility = RwSignal::new(VisibilityTracker::default());
        let watched = observe_regions(visibility, |_| {
            Err::<SharedObserver, _>(app::errors::Error::host("observe", "unsupported"))
        });
        assert!(watched.is_err());
    });
}
