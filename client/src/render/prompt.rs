use schafkopf_protocol::{Message, StateSnapshot};

use crate::scene::{ChoiceButton, PromptRegion};

/// `Visible` only for a question that offers at least one choice; a
/// question with an empty or missing choice list is hidden like no
/// question at all.
pub fn render(snapshot: &StateSnapshot) -> PromptRegion {
    match &snapshot.message {
        Message::Ask(prompt) if !prompt.choices.is_empty() => PromptRegion::Visible {
            question: prompt.question.clone(),
            choices: prompt
                .choices
                .iter()
                .map(|choice| ChoiceButton {
                    caption: choice.caption.clone(),
                    action: choice.action.clone(),
                })
                .collect(),
        },
        Message::Ask(_) | Message::Info(_) => PromptRegion::Hidden,
    }
}

/// The informational line, if the server sent one instead of a question.
pub fn render_status(snapshot: &StateSnapshot) -> Option<String> {
    match &snapshot.message {
        Message::Info(text) if !text.is_empty() => Some(text.clone()),
        Message::Info(_) | Message::Ask(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::empty_snapshot;
    use schafkopf_protocol::{ActionToken, Choice, Prompt};
    use serde_json::json;

    fn ask(choices: Vec<Choice>) -> Message {
        Message::Ask(Prompt { question: "Doppeln?".into(), choices })
    }

    #[test]
    fn test_info_hides_prompt() {
        let mut snapshot = empty_snapshot();
        snapshot.message = Message::Info("Asking EPI2 for card".into());
        assert_eq!(render(&snapshot), PromptRegion::Hidden);
        assert_eq!(render_status(&snapshot).as_deref(), Some("Asking EPI2 for card"));
    }

    #[test]
    fn test_empty_choice_list_hides_prompt() {
        let mut snapshot = empty_snapshot();
        snapshot.message = ask(vec![]);
        assert_eq!(render(&snapshot), PromptRegion::Hidden);
        assert_eq!(render_status(&snapshot), None);
    }

    #[test]
    fn test_choices_become_buttons() {
        let mut snapshot = empty_snapshot();
        snapshot.message = ask(vec![
            Choice { caption: "Doppeln".into(), action: ActionToken::from(json!({"DealCards": true})) },
            Choice { caption: "Nicht doppeln".into(), action: ActionToken::from(json!({"DealCards": false})) },
        ]);
        match render(&snapshot) {
            PromptRegion::Visible { question, choices } => {
                assert_eq!(question, "Doppeln?");
                assert_eq!(choices.len(), 2);
                assert_eq!(choices[1].caption, "Nicht doppeln");
                assert_eq!(choices[1].action, ActionToken::from(json!({"DealCards": false})));
            }
            PromptRegion::Hidden => panic!("prompt should be visible"),
        }
    }

    #[test]
    fn test_empty_info_has_no_status() {
        assert_eq!(render_status(&empty_snapshot()), None);
    }
}
