mod common;

use common::*;
use core_actions::{Action, EditSession};
use core_text::{Document, Position};
use pretty_assertions::assert_eq;

#[test]
fn undo_then_redo_restores_exact_state() {
    let mut s = session(&["one", "two"]);
    at(&mut s, 0, 3);
    run(&mut s, Action::InsertChar('!'));
    run(&mut s, Action::Newline);
    run(&mut s, Action::InsertChar('x'));
    let before_lines = lines(&s);
    let before_cursor = cursor(&s);
    run(&mut s, Action::Undo);
    assert_eq!(lines(&s), vec!["one!", "", "two"]);
    run(&mut s, Action::Redo);
    assert_eq!(lines(&s), before_lines);
    assert_eq!(cursor(&s), before_cursor);
}

#[test]
fn extra_undos_stop_at_baseline() {
    let mut s = session(&["abc"]);
    at(&mut s, 0, 3);
    run(&mut s, Action::Backspace);
    run(&mut s, Action::Backspace);
    for _ in 0..10 {
        run(&mut s, Action::Undo);
    }
    assert_eq!(lines(&s), vec!["abc"]);
    assert_eq!(cursor(&s), Position::new(0, 3));
    let r = run(&mut s, Action::Undo);
    assert!(!r.dirty);
}

#[test]
fn undo_marks_modified_even_after_save_state() {
    let mut s = session(&["a"]);
    at(&mut s, 0, 1);
    run(&mut s, Action::InsertChar('b'));
    s.model_mut().state_mut().document.set_modified(false);
    run(&mut s, Action::Undo);
    assert!(s.model().state().document.is_modified());
}

#[test]
fn new_edit_discards_redo() {
    let mut s = session(&[""]);
    run(&mut s, Action::InsertChar('a'));
    run(&mut s, Action::Undo);
    assert_eq!(s.model().state().redo_depth(), 1);
    run(&mut s, Action::InsertChar('b'));
    assert_eq!(s.model().state().redo_depth(), 0);
    let r = run(&mut s, Action::Redo);
    assert!(!r.dirty);
    assert_eq!(lines(&s), vec!["b"]);
}

#[test]
fn undo_of_newline_restores_cursor() {
    let mut s = session(&["hello", "world"]);
    at(&mut s, 0, 5);
    run(&mut s, Action::Newline);
    run(&mut s, Action::Undo);
    assert_eq!(lines(&s), vec!["hello", "world"]);
    assert_eq!(cursor(&s), Position::new(0, 5));
}

#[test]
fn small_configured_capacity_reaches_oldest_retained_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scribe.toml");
    std::fs::write(&path, "[history]\ncapacity = 3\n").unwrap();
    let config = core_config::load_from(Some(path)).unwrap();
    let mut s = EditSession::from_document(Document::from_lines([""]), None, &config);
    assert_eq!(s.model().state().history_capacity(), 3);

    for c in "abcde".chars() {
        run(&mut s, Action::InsertChar(c));
    }
    assert_eq!(s.model().state().undo_depth(), 3);

    let mut undos = 0;
    while run(&mut s, Action::Undo).dirty {
        undos += 1;
    }
    // Retained: the states before inserting 'c', 'd' and 'e'.
    assert_eq!(undos, 3);
    assert_eq!(lines(&s), vec!["ab"]);
    assert_eq!(cursor(&s), Position::new(0, 2));

    assert!(run(&mut s, Action::Redo).dirty);
    assert_eq!(lines(&s), vec!["abc"]);
    assert!(!run(&mut s, Action::Redo).dirty);
}
