#![cfg(not(feature = "hydrate"))]

use std::cell::Cell;
use std::rc::Rc;

use super::*;

#[test]
fn native_timer_fires_immediately() {
    let fired = Rc::new(Cell::new(false));
    let sink = Rc::clone(&fired);
    let timer = Timer::after(300, move || sink.set(true));
    assert!(fired.get());
    drop(timer);
}

#[test]
fn zero_delay_timer_fires() {
    let hits = Rc::new(Cell::new(0));
    let sink = Rc::clone(&hits);
    let _timer = Timer::after(0, move || sink.set(sink.get() + 1));
    assert_eq!(hits.get(), 1);
}
