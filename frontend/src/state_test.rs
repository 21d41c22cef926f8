use super::*;

#[test]
fn next_and_previous_wrap_modulo_len() {
    let state = CarouselState::new(5);
    assert_eq!(state.next().index, 1);
    assert_eq!(state.previous().index, 4);

    let single = CarouselState::new(1);
    assert_eq!(single.next().index, 0);
    assert_eq!(single.previous().index, 0);
}

#[test]
fn index_stays_in_range_under_any_sequence() {
    for len in 1..=6 {
        let mut state = CarouselState::new(len);
        for step in 0..100 {
            state = if step % 3 == 0 {
                state.previous()
            } else {
                state.next()
            };
            assert!(state.index < len, "index {} out of range for len {}", state.index, len);
        }
    }
}

#[test]
fn len_nexts_return_to_start() {
    for len in 1..=7 {
        let mut state = CarouselState::new(len);
        state = state.go_to(len / 2);
        let start = state.index;
        for _ in 0..len {
            state = state.next();
        }
        assert_eq!(state.index, start);
    }
}

#[test]
fn go_to_out_of_range_is_a_noop() {
    let state = CarouselState::new(5).go_to(3);
    assert_eq!(state.index, 3);
    assert_eq!(state.go_to(5).index, 3);
    assert_eq!(state.go_to(42).index, 3);
}

#[test]
fn testimonial_window_is_three_wide_and_wraps() {
    let state = CarouselState::new(5).go_to(3);
    assert_eq!(state.window(3), vec![3, 4, 0]);

    let state = CarouselState::new(5);
    assert_eq!(state.window(3), vec![0, 1, 2]);
}

#[test]
fn reducer_matches_the_pure_transitions() {
    let state = Rc::new(CarouselState::new(5));
    let state = state.reduce(CarouselAction::Next);
    assert_eq!(state.index, 1);
    let state = state.reduce(CarouselAction::GoTo(4));
    assert_eq!(state.index, 4);
    let state = state.reduce(CarouselAction::Next);
    assert_eq!(state.index, 0);
    let state = state.reduce(CarouselAction::Previous);
    assert_eq!(state.index, 4);
}

#[test]
fn accordion_starts_closed_and_toggles_exclusively() {
    let state = AccordionState::default();
    assert_eq!(state.open, None);

    let state = state.toggled(2);
    assert!(state.is_open(2));

    // Toggling another entry switches which one is open.
    let state = state.toggled(0);
    assert!(state.is_open(0));
    assert!(!state.is_open(2));

    // Toggling the open entry closes the accordion.
    let state = state.toggled(0);
    assert_eq!(state.open, None);
}

#[test]
fn submission_status_only_pending_blocks() {
    assert!(SubmissionStatus::Pending.is_pending());
    assert!(!SubmissionStatus::Idle.is_pending());
    assert!(!SubmissionStatus::Succeeded.is_pending());
    assert!(!SubmissionStatus::Failed.is_pending());
}
