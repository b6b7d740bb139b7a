mod common;

use common::*;
use core_actions::{Action, Direction};
use core_text::Document;
use proptest::prelude::*;

fn edit_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        prop::char::range('a', 'e').prop_map(Action::InsertChar),
        Just(Action::InsertChar('é')),
        Just(Action::Newline),
        Just(Action::Backspace),
        Just(Action::Move(Direction::Up)),
        Just(Action::Move(Direction::Down)),
        Just(Action::Move(Direction::Left)),
        Just(Action::Move(Direction::Right)),
        Just(Action::Replace {
            pattern: "a".into(),
            replacement: "bb".into()
        }),
    ]
}

fn any_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => edit_action(),
        1 => Just(Action::Undo),
        1 => Just(Action::Redo),
        1 => (0u16..30, 0u16..30).prop_map(|(row, col)| Action::Click { row, col }),
    ]
}

proptest! {
    #[test]
    fn cursor_and_lines_stay_valid(actions in prop::collection::vec(any_action(), 0..80)) {
        let mut s = session(&["start", "of", "text"]);
        s.set_text_height(4);
        for a in actions {
            run(&mut s, a);
            let doc = &s.model().state().document;
            let view = s.model().view();
            prop_assert!(doc.line_count() >= 1);
            prop_assert!(doc.lines().iter().all(|l| !l.contains('\n')));
            prop_assert!(view.cursor.line < doc.line_count());
            prop_assert!(view.cursor.col <= doc.line_len(view.cursor.line));
            prop_assert!(view.viewport_first_line <= view.cursor.line);
            prop_assert!(view.cursor.line < view.viewport_first_line + 4);
        }
    }

    #[test]
    fn undo_then_redo_is_identity(
        actions in prop::collection::vec(any_action(), 1..60),
    ) {
        let mut s = session(&["alpha", "beta"]);
        for a in actions {
            run(&mut s, a);
        }
        let lines_before = lines(&s);
        let cursor_before = cursor(&s);
        prop_assume!(s.model().state().undo_depth() >= 2);
        run(&mut s, Action::Undo);
        run(&mut s, Action::Redo);
        prop_assert_eq!(lines(&s), lines_before);
        prop_assert_eq!(cursor(&s), cursor_before);
    }

    #[test]
    fn undoing_everything_returns_to_start(
        actions in prop::collection::vec(edit_action(), 0..40),
    ) {
        let mut s = session(&["alpha", "beta"]);
        for a in actions {
            run(&mut s, a);
        }
        while s.model().state().undo_depth() >= 2 {
            run(&mut s, Action::Undo);
        }
        prop_assert_eq!(lines(&s), vec!["alpha".to_string(), "beta".to_string()]);
    }

    #[test]
    fn serialize_round_trips(lines in prop::collection::vec("[a-z \\t\\r]{0,8}", 1..8)) {
        let text: String = lines.iter().map(|l| format!("{l}\n")).collect();
        prop_assert_eq!(Document::load(Some(&text)).serialize(), text);
    }
}
