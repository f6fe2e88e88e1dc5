use translate_core::{
    update, Effect, ModelSummary, Msg, PageState, TimerKind, TranslationOutcome, COPY_RESET_DELAY,
};

fn with_result(result: &str) -> PageState {
    let state = PageState::new().with_model(Some(ModelSummary {
        name: "gpt-4o-mini".to_string(),
        provider: "openai".to_string(),
    }));
    let (state, _) = update(state, Msg::TextChanged("hello".to_string()));
    let (state, _) = update(state, Msg::SubmitClicked);
    update(
        state,
        Msg::TranslationFinished {
            generation: 1,
            outcome: TranslationOutcome::Completed(result.to_string()),
        },
    )
    .0
}

fn copy_reset(generation: u64) -> Msg {
    Msg::TimerElapsed {
        timer: TimerKind::CopyReset,
        generation,
    }
}

#[test]
fn copy_sets_flag_and_schedules_reset() {
    let state = with_result("bonjour");

    let (state, effects) = update(state, Msg::CopyClicked);

    assert!(state.view().copied);
    assert_eq!(
        effects,
        vec![
            Effect::CopyToClipboard {
                text: "bonjour".to_string()
            },
            Effect::StartTimer {
                timer: TimerKind::CopyReset,
                generation: 1,
                after: COPY_RESET_DELAY,
            },
        ]
    );
    assert_eq!(COPY_RESET_DELAY.as_millis(), 2000);

    let (state, _) = update(state, copy_reset(1));
    assert!(!state.view().copied);
}

#[test]
fn second_copy_restarts_the_timer() {
    let state = with_result("bonjour");
    let (state, _) = update(state, Msg::CopyClicked);
    let (state, effects) = update(state, Msg::CopyClicked);
    assert!(matches!(
        effects.as_slice(),
        [
            Effect::CopyToClipboard { .. },
            Effect::StartTimer { generation: 2, .. }
        ]
    ));

    // The first timer fires but belongs to the superseded click.
    let (state, _) = update(state, copy_reset(1));
    assert!(state.view().copied);

    let (state, _) = update(state, copy_reset(2));
    assert!(!state.view().copied);
}

#[test]
fn copy_without_result_is_noop() {
    let (state, effects) = update(PageState::new(), Msg::CopyClicked);

    assert!(effects.is_empty());
    assert!(!state.view().copied);
}
