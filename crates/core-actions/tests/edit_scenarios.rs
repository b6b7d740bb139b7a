mod common;

use common::*;
use core_actions::{Action, Direction};
use core_text::Position;
use pretty_assertions::assert_eq;

#[test]
fn newline_at_end_of_line_opens_empty_line() {
    let mut s = session(&["hello", "world"]);
    at(&mut s, 0, 5);
    run(&mut s, Action::Newline);
    assert_eq!(lines(&s), vec!["hello", "", "world"]);
    assert_eq!(cursor(&s), Position::new(1, 0));
    assert!(s.model().state().document.is_modified());
}

#[test]
fn backspace_twice_from_end_of_line() {
    let mut s = session(&["abc"]);
    at(&mut s, 0, 3);
    run(&mut s, Action::Backspace);
    run(&mut s, Action::Backspace);
    assert_eq!(lines(&s), vec!["a"]);
    assert_eq!(cursor(&s), Position::new(0, 1));
}

#[test]
fn backspace_at_origin_is_noop_without_snapshot() {
    let mut s = session(&["abc"]);
    let depth = s.model().state().undo_depth();
    let r = run(&mut s, Action::Backspace);
    assert!(!r.dirty);
    assert_eq!(lines(&s), vec!["abc"]);
    assert_eq!(s.model().state().undo_depth(), depth);
    assert!(!s.model().state().document.is_modified());
}

#[test]
fn backspace_at_line_start_joins() {
    let mut s = session(&["ab", "cd"]);
    at(&mut s, 1, 0);
    run(&mut s, Action::Backspace);
    assert_eq!(lines(&s), vec!["abcd"]);
    assert_eq!(cursor(&s), Position::new(0, 2));
}

#[test]
fn deleting_only_character_keeps_one_line() {
    let mut s = session(&["x"]);
    at(&mut s, 0, 1);
    run(&mut s, Action::Backspace);
    assert_eq!(lines(&s), vec![""]);
    assert_eq!(cursor(&s), Position::origin());
    // Nothing left to delete.
    let r = run(&mut s, Action::Backspace);
    assert!(!r.dirty);
}

#[test]
fn insert_advances_cursor() {
    let mut s = session(&[""]);
    for c in "héllo".chars() {
        run(&mut s, Action::InsertChar(c));
    }
    assert_eq!(lines(&s), vec!["héllo"]);
    assert_eq!(cursor(&s), Position::new(0, 5));
}

#[test]
fn moves_never_wrap_and_record_nothing() {
    let mut s = session(&["ab", "c"]);
    let depth = s.model().state().undo_depth();
    at(&mut s, 1, 0);
    run(&mut s, Action::Move(Direction::Left));
    assert_eq!(cursor(&s), Position::new(1, 0));
    at(&mut s, 0, 2);
    run(&mut s, Action::Move(Direction::Right));
    assert_eq!(cursor(&s), Position::new(0, 2));
    run(&mut s, Action::Move(Direction::Down));
    assert_eq!(cursor(&s), Position::new(1, 1));
    assert_eq!(s.model().state().undo_depth(), depth);
}

#[test]
fn click_places_cursor_past_gutter() {
    // 12 lines -> gutter of 4 cells.
    let text: Vec<String> = (0..12).map(|i| format!("line{i}")).collect();
    let refs: Vec<&str> = text.iter().map(String::as_str).collect();
    let mut s = session(&refs);
    run(&mut s, Action::Click { row: 3, col: 6 });
    assert_eq!(cursor(&s), Position::new(3, 2));
    // Gutter click ignored.
    let r = run(&mut s, Action::Click { row: 5, col: 1 });
    assert!(!r.dirty);
    assert_eq!(cursor(&s), Position::new(3, 2));
    // Status row (text height 20) ignored.
    run(&mut s, Action::Click { row: 20, col: 10 });
    assert_eq!(cursor(&s), Position::new(3, 2));
    // Past the end clamps to the last line and its length.
    run(&mut s, Action::Click { row: 15, col: 70 });
    assert_eq!(cursor(&s), Position::new(11, 6));
}

#[test]
fn typing_scrolls_viewport_with_cursor() {
    let mut s = session(&[""]);
    s.set_text_height(3);
    for _ in 0..5 {
        run(&mut s, Action::Newline);
    }
    assert_eq!(cursor(&s).line, 5);
    assert_eq!(s.model().view().viewport_first_line, 3);
}
