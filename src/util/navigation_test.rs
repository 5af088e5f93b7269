use std::cell::RefCell;

use super::*;

#[test]
fn navigate_forwards_path_to_closure() {
    let visited = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&visited);
    let nav = RouterNavigator::new(move |path| sink.borrow_mut().push(path.to_owned()));
    nav.navigate("/auth/login");
    nav.clone().navigate("/diaries");
    assert_eq!(*visited.borrow(), vec!["/auth/login".to_owned(), "/diaries".to_owned()]);
}
