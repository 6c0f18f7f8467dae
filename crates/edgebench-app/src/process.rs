//! Message processing through the TEA update loop

use std::collections::VecDeque;

use edgebench_client::AnalysisService;

use crate::actions::{handle_action, ActionContext};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message and everything it triggers
///
/// Follow-up messages from `update` and from synchronous actions are fed
/// back in order until the queue drains.
pub fn process_message<S>(state: &mut AppState, message: Message, ctx: &mut ActionContext<S>)
where
    S: AnalysisService + Send + Sync + 'static,
{
    let mut pending = VecDeque::from([message]);
    while let Some(msg) = pending.pop_front() {
        let result = handler::update(state, msg);

        if let Some(action) = result.action {
            if let Some(follow_up) = handle_action(action, ctx) {
                pending.push_back(follow_up);
            }
        }

        if let Some(next) = result.message {
            pending.push_back(next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::Osc52Clipboard;
    use crate::editor::ExternalEditor;
    use crate::notifications::BannerLevel;
    use crate::report::{CardId, COPIED_LABEL};
    use edgebench_client::test_utils::FakeAnalysisService;
    use edgebench_core::{AnalysisResponse, EdgeCase, FunctionReport, MetricsReport};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::mpsc;

    fn response() -> AnalysisResponse {
        AnalysisResponse {
            metrics: MetricsReport {
                total_complexity: 1,
                h1: Some(2.0),
                h2: Some(2.0),
                n1: Some(3.0),
                n2: Some(3.0),
                total_lines: None,
                complexity_rank: None,
            },
            functions: vec![FunctionReport {
                name: "f".into(),
                suggestions: None,
                edge_cases: vec![EdgeCase {
                    description: "zero".into(),
                    category: "boundary".into(),
                    code: "f('0')".into(),
                }],
                complexity: Some(1),
                args: Vec::new(),
                returns: None,
            }],
        }
    }

    fn context(
        service: FakeAnalysisService,
    ) -> (ActionContext<FakeAnalysisService>, mpsc::Receiver<Message>) {
        let (tx, rx) = mpsc::channel(16);
        let ctx = ActionContext::new(
            Arc::new(service),
            tx,
            Box::new(Osc52Clipboard::new(std::io::sink())),
            Box::new(ExternalEditor::new("true")),
            std::env::temp_dir(),
        );
        (ctx, rx)
    }

    async fn next_message(rx: &mut mpsc::Receiver<Message>) -> Message {
        tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("timed out waiting for message")
            .expect("channel closed")
    }

    #[tokio::test]
    async fn test_analyze_then_render_end_to_end() {
        let service = FakeAnalysisService::new();
        service.push_analysis(Ok(response()));
        let (mut ctx, mut rx) = context(service);
        let mut state = AppState::new();
        state.session.editor.set_value("def f(x): return x");

        process_message(&mut state, Message::Analyze, &mut ctx);
        let completed = next_message(&mut rx).await;
        process_message(&mut state, completed, &mut ctx);

        assert_eq!(state.report.cards().len(), 1);
        assert_eq!(state.report.cards()[0].name, "f");
    }

    #[tokio::test]
    async fn test_empty_input_banner_without_service_call() {
        let service = FakeAnalysisService::new();
        let (mut ctx, _rx) = context(service.clone());
        let mut state = AppState::new();
        state.session.editor.set_value("   ");

        process_message(&mut state, Message::Analyze, &mut ctx);

        assert!(service.analyze_calls().is_empty());
        let banner = state.notifications.latest().unwrap();
        assert_eq!(banner.level, BannerLevel::Error);
        assert_eq!(banner.message, "Please enter some Python code");
    }

    #[tokio::test]
    async fn test_copy_flows_through_clipboard_to_label() {
        let (mut ctx, _rx) = context(FakeAnalysisService::new());
        let mut state = AppState::new();
        let request = state.session.requests.issue();
        process_message(
            &mut state,
            Message::AnalysisCompleted {
                request,
                response: response(),
            },
            &mut ctx,
        );
        process_message(&mut state, Message::ToggleCard(CardId(0)), &mut ctx);
        process_message(&mut state, Message::CursorDown, &mut ctx);

        process_message(&mut state, Message::CopyAtCursor, &mut ctx);

        let card = &state.report.cards()[0];
        assert_eq!(card.cases[0].copy_label().text(), COPIED_LABEL);
    }
}
