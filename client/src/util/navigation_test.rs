use std::cell::RefCell;
use std::rc::Rc;

use super::*;

#[test]
fn replace_mode_replaces_history() {
    assert!(navigate_options(NavigateMode::REPLACE).replace);
    assert!(!navigate_options(NavigateMode::PUSH).replace);
}

#[test]
fn navigator_forwards_target_and_mode() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_in = Rc::clone(&seen);
    let navigator = router_navigator(move |to: &str, options: NavigateOptions| {
        seen_in.borrow_mut().push((to.to_owned(), options.replace));
    });

    navigator("/unauthorized", NavigateMode::REPLACE);

    assert_eq!(*seen.borrow(), vec![("/unauthorized".to_owned(), true)]);
}
