// Keypad sessions driven end to end through evaluation and history
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tally::{format_number, History, Key, Keypad, TallyError};
use tally_eval::{evaluate, EvaluationError, Operator};

fn typed(keys: &str) -> Keypad {
    let mut keypad = Keypad::new();
    for ch in keys.chars() {
        keypad.press_char(ch);
    }
    keypad
}

#[test]
fn test_implicit_multiplication_session() {
    let mut history = History::new();
    let mut keypad = typed("2(3+4)");
    assert_eq!(keypad.expression(), "2*(3+4)");
    assert_eq!(keypad.preview(), "14");
    assert_eq!(keypad.equals(&mut history).unwrap(), "14");
    assert_eq!(history.get(0).unwrap().expression, "2*(3+4)");
    assert_eq!(keypad.expression(), "14");
}

#[test]
fn test_percent_session() {
    let mut history = History::new();
    let mut keypad = typed("50+10%");
    assert_eq!(keypad.equals(&mut history).unwrap(), "50.1");
}

#[test]
fn test_keys_and_chars_agree() {
    let mut keypad = Keypad::new();
    keypad.press(Key::Digit(7));
    keypad.press(Key::Operator(Operator::Mul));
    keypad.press(Key::LeftParen);
    keypad.press(Key::Digit(1));
    keypad.press(Key::Dot);
    keypad.press(Key::Digit(5));
    keypad.press(Key::RightParen);
    keypad.percent();
    assert_eq!(keypad, typed("7×(1.5)%"));
    assert_eq!(keypad.preview(), "0.105");
}

#[test]
fn test_empty_equals_is_zero() {
    let mut history = History::new();
    let mut keypad = Keypad::new();
    assert_eq!(keypad.display(), "0");
    assert_eq!(keypad.equals(&mut history).unwrap(), "0");
    assert_eq!(history.get(0).unwrap().expression, "0");
}

#[test]
fn test_failed_equals_leaves_state_alone() {
    let mut history = History::new();
    let mut keypad = typed("(1+2");
    assert!(matches!(
        keypad.equals(&mut history),
        Err(TallyError::Evaluation(EvaluationError::MismatchedParentheses))
    ));
    assert_eq!(keypad.preview(), "Error");
    assert_eq!(keypad.expression(), "(1+2");
    assert!(history.is_empty());

    keypad.press_char(')');
    assert_eq!(keypad.equals(&mut history).unwrap(), "3");
}

#[test]
fn test_history_is_capped_after_many_results() {
    let mut history = History::new();
    let mut keypad = Keypad::new();
    for n in 1..=55 {
        keypad.clear();
        for ch in format!("{n}*2").chars() {
            keypad.press_char(ch);
        }
        keypad.equals(&mut history).unwrap();
    }
    assert_eq!(history.len(), 50);
    assert_eq!(history.get(0).unwrap().result, "110");
    assert_eq!(history.get(49).unwrap().expression, "6*2");
}

#[test]
fn test_recall_and_continue() {
    let mut history = History::new();
    let mut keypad = typed("1/4");
    keypad.equals(&mut history).unwrap();
    keypad.clear();
    for ch in "9-1".chars() {
        keypad.press_char(ch);
    }
    keypad.equals(&mut history).unwrap();

    let first = history.get(1).cloned().unwrap();
    keypad.recall(&first);
    assert_eq!(keypad.expression(), "0.25");
    keypad.press_char('×');
    keypad.press_char('8');
    assert_eq!(keypad.equals(&mut history).unwrap(), "2");
    assert_eq!(history.len(), 3);
}

#[test]
fn test_continue_from_negative_result() {
    let mut history = History::new();
    let mut keypad = typed("2-5");
    assert_eq!(keypad.equals(&mut history).unwrap(), "-3");
    keypad.press_char('*');
    keypad.press_char('2');
    assert_eq!(keypad.equals(&mut history).unwrap(), "-6");
}

proptest! {
    #[test]
    fn prop_plain_results_evaluate_to_themselves(
        a in 1u32..100_000,
        b in 1u32..1_000,
        negative in any::<bool>(),
    ) {
        let sign = if negative { "-" } else { "" };
        let shown = format_number(evaluate(&format!("{sign}{a}/{b}")).unwrap());
        prop_assume!(!shown.contains('e'));
        prop_assert_eq!(format_number(evaluate(&shown).unwrap()), shown);
    }

    #[test]
    fn prop_keypad_never_panics(keys in "[0-9.+*/()%=×÷−a-]{0,24}") {
        let mut history = History::new();
        let mut keypad = typed(&keys);
        let _ = keypad.preview();
        let _ = keypad.equals(&mut history);
        prop_assert!(history.len() <= 1);
    }
}
