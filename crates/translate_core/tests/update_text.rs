use translate_core::{update, ModelSummary, Msg, PageState, TranslationOutcome};

fn translated(text: &str, result: &str) -> PageState {
    let state = PageState::new().with_model(Some(ModelSummary {
        name: "gpt-4o-mini".to_string(),
        provider: "openai".to_string(),
    }));
    let (state, _) = update(state, Msg::TextChanged(text.to_string()));
    let (state, _) = update(state, Msg::SubmitClicked);
    let (state, _) = update(
        state,
        Msg::TranslationFinished {
            generation: 1,
            outcome: TranslationOutcome::Completed(result.to_string()),
        },
    );
    state
}

#[test]
fn emptying_text_clears_result_in_the_same_update() {
    let state = translated("hello", "bonjour");
    assert_eq!(state.view().result, "bonjour");

    let (state, effects) = update(state, Msg::TextChanged(String::new()));

    assert!(effects.is_empty());
    assert_eq!(state.view().text, "");
    assert_eq!(state.view().result, "");
    assert!(!state.view().can_copy);
}

#[test]
fn clear_control_clears_text_and_result() {
    let state = translated("hello", "bonjour");

    let (mut state, _) = update(state, Msg::TextCleared);

    assert_eq!(state.view().text, "");
    assert_eq!(state.view().result, "");
    assert!(state.consume_dirty());
}

#[test]
fn editing_text_keeps_previous_result() {
    let state = translated("hello", "bonjour");

    let (state, _) = update(state, Msg::TextChanged("hello there".to_string()));

    assert_eq!(state.view().result, "bonjour");
}

#[test]
fn whitespace_text_is_not_empty() {
    let state = translated("hello", "bonjour");

    let (state, _) = update(state, Msg::TextChanged("  ".to_string()));

    assert_eq!(state.view().result, "bonjour");
    assert!(!state.view().can_submit);
}

#[test]
fn edits_are_ignored_while_loading() {
    let state = PageState::new().with_model(Some(ModelSummary {
        name: "gpt-4o-mini".to_string(),
        provider: "openai".to_string(),
    }));
    let (state, _) = update(state, Msg::TextChanged("hello".to_string()));
    let (state, _) = update(state, Msg::SubmitClicked);

    let (state, _) = update(state, Msg::TextChanged(String::new()));
    assert_eq!(state.view().text, "hello");

    let (state, _) = update(state, Msg::TextCleared);
    assert_eq!(state.view().text, "hello");
}

#[test]
fn unchanged_text_does_not_mark_dirty() {
    let (mut state, _) = update(PageState::new(), Msg::TextChanged("hi".to_string()));
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::TextChanged("hi".to_string()));
    assert!(!state.consume_dirty());
}
