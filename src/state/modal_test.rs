use std::cell::RefCell;
use std::rc::Rc;

use gate::access::login_required_prompt;
use gate::modal::ModalAction;
use leptos::reactive::owner::Owner;

use super::*;
use crate::util::navigation::RouterNavigator;

fn notice(title: &str) -> ModalContent {
    ModalContent::alert(title, "body text", ModalAction::dismiss("ok"))
}

fn recording_navigator() -> (RouterNavigator, Rc<RefCell<Vec<String>>>) {
    let visited = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&visited);
    (RouterNavigator::new(move |p| sink.borrow_mut().push(p.to_owned())), visited)
}

// =============================================================
// ModalView
// =============================================================

#[test]
fn empty_stack_has_no_view() {
    assert_eq!(ModalView::from_stack(&ModalStack::new()), None);
}

#[test]
fn view_projects_top_overlay() {
    let mut stack = ModalStack::new();
    stack.open(ModalContent::confirm(
        "login required",
        "please log in",
        ModalAction::dismiss("cancel"),
        ModalAction::navigate("go to login", "/auth/login"),
    ));
    let view = ModalView::from_stack(&stack).unwrap();
    assert_eq!(view.title, "login required");
    assert_eq!(view.body, "please log in");
    assert_eq!(view.labels, vec!["cancel".to_owned(), "go to login".to_owned()]);
    assert!(view.open);
    assert_eq!(view.backdrop_class(), "modal-backdrop modal-backdrop--open");
}

#[test]
fn closing_overlay_still_projects_for_animation() {
    let mut stack = ModalStack::new();
    stack.open(notice("bye"));
    stack.close();
    let view = ModalView::from_stack(&stack).unwrap();
    assert!(!view.open);
    assert_eq!(view.backdrop_class(), "modal-backdrop modal-backdrop--closing");
}

#[test]
fn nested_overlay_projects_child_only() {
    let mut stack = ModalStack::new();
    stack.open(notice("parent"));
    stack.push(notice("child"));
    let view = ModalView::from_stack(&stack).unwrap();
    assert_eq!(view.title, "child");
    assert!(view.nested);
    assert_eq!(view.dialog_class(), "modal modal--nested");
}

#[test]
fn single_overlay_is_not_nested() {
    let mut stack = ModalStack::new();
    stack.open(notice("only"));
    let view = ModalView::from_stack(&stack).unwrap();
    assert!(!view.nested);
    assert_eq!(view.dialog_class(), "modal");
}

// =============================================================
// ModalController (native timers fire immediately)
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn close_clears_the_view_after_the_delay() {
    Owner::new().with(|| {
        let modals = ModalController::new(&GateConfig::default());
        modals.open(notice("bye"));
        assert!(modals.is_open());

        modals.close();
        assert!(!modals.is_open());
        assert_eq!(modals.view(), None);
    });
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn close_on_nested_overlay_reveals_parent() {
    Owner::new().with(|| {
        let modals = ModalController::new(&GateConfig::default());
        modals.open(notice("parent"));
        modals.push(notice("child"));

        modals.close();
        assert!(modals.is_open());
        assert_eq!(modals.view().map(|v| v.title), Some("parent".to_owned()));
    });
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn activating_navigate_action_routes_and_closes() {
    Owner::new().with(|| {
        let modals = ModalController::new(&GateConfig::default());
        let (navigator, visited) = recording_navigator();
        modals.open(login_required_prompt("/auth/login"));

        modals.activate(0, &navigator);
        assert_eq!(*visited.borrow(), vec!["/auth/login".to_owned()]);
        assert!(!modals.is_open());
        assert_eq!(modals.view(), None);
    });
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn activating_dismiss_action_only_closes() {
    Owner::new().with(|| {
        let modals = ModalController::new(&GateConfig::default());
        let (navigator, visited) = recording_navigator();
        modals.open(notice("bye"));

        modals.activate(0, &navigator);
        assert!(visited.borrow().is_empty());
        assert_eq!(modals.view(), None);
    });
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn run_callback_that_reopens_leaves_new_overlay_open() {
    Owner::new().with(|| {
        let modals = ModalController::new(&GateConfig::default());
        let (navigator, _) = recording_navigator();
        modals.open(ModalContent::alert(
            "first",
            "body",
            ModalAction::run("next", move || modals.open(notice("second"))),
        ));

        modals.activate(0, &navigator);
        assert!(modals.is_open());
        assert_eq!(modals.view().map(|v| v.title), Some("second".to_owned()));
    });
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn activate_out_of_range_keeps_overlay() {
    Owner::new().with(|| {
        let modals = ModalController::new(&GateConfig::default());
        let (navigator, visited) = recording_navigator();
        modals.open(notice("stay"));

        modals.activate(3, &navigator);
        assert!(modals.is_open());
        assert!(visited.borrow().is_empty());
    });
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn cancel_pending_leaves_open_overlay_alone() {
    Owner::new().with(|| {
        let modals = ModalController::new(&GateConfig::default());
        modals.open(notice("first"));
        modals.close();
        modals.open(notice("second"));

        modals.cancel_pending();
        assert!(modals.is_open());
        assert_eq!(modals.view().map(|v| v.title), Some("second".to_owned()));
    });
}
