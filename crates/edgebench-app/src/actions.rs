//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Network calls and timers run on tokio tasks and report back through the
//! message channel. Clipboard writes and the external editor run inline and
//! return their outcome as a follow-up message.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use edgebench_client::AnalysisService;
use edgebench_core::prelude::*;

use crate::clipboard::ClipboardSink;
use crate::editor::EditorLauncher;
use crate::export::save_download;
use crate::message::Message;
use crate::UpdateAction;

/// Everything actions need from the outside world
pub struct ActionContext<S> {
    pub service: Arc<S>,
    pub msg_tx: mpsc::Sender<Message>,
    pub clipboard: Box<dyn ClipboardSink>,
    pub editor: Box<dyn EditorLauncher>,
    pub export_dir: PathBuf,
}

impl<S> ActionContext<S> {
    pub fn new(
        service: Arc<S>,
        msg_tx: mpsc::Sender<Message>,
        clipboard: Box<dyn ClipboardSink>,
        editor: Box<dyn EditorLauncher>,
        export_dir: PathBuf,
    ) -> Self {
        Self {
            service,
            msg_tx,
            clipboard,
            editor,
            export_dir,
        }
    }
}

/// Execute an action. Returns a follow-up message for actions that complete
/// synchronously.
pub fn handle_action<S>(action: UpdateAction, ctx: &mut ActionContext<S>) -> Option<Message>
where
    S: AnalysisService + Send + Sync + 'static,
{
    match action {
        UpdateAction::AnalyzeCode { request, code } => {
            let service = Arc::clone(&ctx.service);
            let msg_tx = ctx.msg_tx.clone();
            tokio::spawn(async move {
                let msg = match service.analyze(&code).await {
                    Ok(response) => Message::AnalysisCompleted { request, response },
                    Err(e) => {
                        debug!("Analysis request #{} failed: {:?}", request.value(), e);
                        Message::AnalysisFailed {
                            request,
                            message: e.to_string(),
                        }
                    }
                };
                if let Err(e) = deliver(&msg_tx, msg).await {
                    warn!("Analysis result dropped: {}", e);
                }
            });
            None
        }

        UpdateAction::ExportTests { code, format } => {
            let service = Arc::clone(&ctx.service);
            let msg_tx = ctx.msg_tx.clone();
            let dir = ctx.export_dir.clone();
            tokio::spawn(async move {
                let result = match service.export_tests(&code, format).await {
                    Ok(blob) => save_download(&dir, &blob),
                    Err(e) => Err(e),
                };
                let msg = match result {
                    Ok(path) => Message::ExportCompleted { path },
                    Err(e) => Message::ExportFailed {
                        message: e.to_string(),
                    },
                };
                if let Err(e) = deliver(&msg_tx, msg).await {
                    warn!("Export result dropped: {}", e);
                }
            });
            None
        }

        UpdateAction::CopyToClipboard { case, snippet } => {
            match ctx.clipboard.write_text(&snippet) {
                Ok(()) => Some(Message::CopyCompleted { case }),
                Err(e) => Some(Message::CopyFailed {
                    message: e.to_string(),
                }),
            }
        }

        UpdateAction::ScheduleCopyReset { case, token, after } => {
            post_after(&ctx.msg_tx, after, Message::CopyLabelExpired { case, token });
            None
        }

        UpdateAction::ScheduleBannerExpiry { id, after } => {
            post_after(&ctx.msg_tx, after, Message::BannerExpired(id));
            None
        }

        UpdateAction::OpenExternalEditor { text } => match ctx.editor.edit(&text) {
            Ok(text) => Some(Message::BufferEdited { text }),
            Err(e) if e.is_fatal() => {
                error!("Cannot continue after editing: {}", e);
                Some(Message::Quit)
            }
            Err(e) => Some(Message::EditFailed {
                message: e.to_string(),
            }),
        },
    }
}

async fn deliver(msg_tx: &mpsc::Sender<Message>, msg: Message) -> Result<()> {
    msg_tx.send(msg).await.map_err(|_| Error::ChannelClosed)
}

fn post_after(msg_tx: &mpsc::Sender<Message>, after: Duration, msg: Message) {
    let msg_tx = msg_tx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(after).await;
        // The receiver is gone during shutdown; nothing left to update
        let _ = msg_tx.send(msg).await;
    });
}
