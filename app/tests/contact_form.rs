use std::cell::RefCell;

use app::host::Notifier;
use app::state::contact::CONFIRMATION;
use app::state::{ContactForm, Field};

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Default)]
struct FakeNotifier {
    messages: RefCell<Vec<String>>,
}

impl Notifier for FakeNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(String::from(message));
    }
}

#[test]
fn fields_are_replaced_on_input() {
    setup();

    let mut form = ContactForm::default();
    form.set(Field::Name, String::from("Al"));
    form.set(Field::Name, String::from("Alice"));
    form.set(Field::Message, String::from("hi"));
    assert_eq!("Alice", form.get(Field::Name));
    assert_eq!("", form.get(Field::Email));
    assert_eq!("hi", form.get(Field::Message));
}

#[test]
fn submitting_confirms_and_clears() {
    setup();

    let notifier = FakeNotifier::default();
    let mut form = ContactForm::default();
    form.set(Field::Name, String::from("Alice"));
    form.set(Field::Email, String::from("a@x.com"));
    form.set(Field::Message, String::from("hi"));

    let submission = form.submit(&notifier);

    assert_eq!(vec![String::from(CONFIRMATION)], *notifier.messages.borrow());
    assert_eq!(ContactForm::default(), form);
    assert_eq!("", form.name);
    assert_eq!("", form.email);
    assert_eq!("", form.message);
    assert_eq!("Alice", submission.name);
    assert_eq!("a@x.com", submission.email);
    assert_eq!("hi", submission.message);
}

#[test]
fn an_empty_form_can_be_submitted() {
    setup();

    let notifier = FakeNotifier::default();
    let mut form = ContactForm::default();
    let submission = form.submit(&notifier);
    assert_eq!(ContactForm::default(), submission);
    assert_eq!(1, notifier.messages.borrow().len());
}
