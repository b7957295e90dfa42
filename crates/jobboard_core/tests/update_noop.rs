use jobboard_core::{update, ApiReply, AppState, Field, Msg};
use serde_json::json;

#[test]
fn messages_with_no_target_leave_state_untouched() {
    let state = AppState::new();
    let unrelated = [
        Msg::NoOp,
        Msg::InputChanged {
            field: Field::Salary,
            value: "50000".into(),
        },
        Msg::CardClicked { index: 0 },
        Msg::ApplyConfirmed,
        Msg::SearchSubmitted,
        Msg::ResponseReceived {
            id: 99,
            result: Ok(ApiReply::new(200, json!([]))),
        },
    ];

    for msg in unrelated {
        let (next, effects) = update(state.clone(), msg.clone());
        assert_eq!(state, next, "{msg:?} changed the login page");
        assert!(effects.is_empty(), "{msg:?} produced effects");
    }
}
