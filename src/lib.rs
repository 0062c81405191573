//! AutoIt WinAPI language server.
//!
//! Serves hover, completion and signature help for the `_WinAPI_*` UDFs from a
//! static signature table.

use std::sync::OnceLock;

use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer, LspService};

mod document;
mod lsp;
pub mod settings;
pub mod signatures;

pub use document::{DocumentState, DocumentStore, LineIndex};
pub use lsp::{completion_at_position, describe, hover_at_position, signature_help_at_position};
pub use settings::{discover_settings, load_settings, Settings};
pub use signatures::{completions, hovers, signatures, Param, Signature, SignatureTable, INCLUDE};

pub struct Backend {
    client: Client,
    documents: DocumentStore,
    settings: OnceLock<Settings>,
}

impl Backend {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
            documents: DocumentStore::new(),
            settings: OnceLock::new(),
        }
    }

    fn settings(&self) -> &Settings {
        self.settings.get_or_init(Settings::default)
    }

    fn on_document_change(&self, uri: Url, text: String, version: i32) {
        self.documents.open(uri.clone(), text, version);
        tracing::debug!(%uri, version, open = self.documents.len(), "document updated");
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        let workspace_root = params
            .workspace_folders
            .as_ref()
            .and_then(|folders| folders.first())
            .and_then(|f| f.uri.to_file_path().ok())
            .or_else(|| {
                #[allow(deprecated)]
                params.root_uri.as_ref()?.to_file_path().ok()
            });

        if let Some(root) = workspace_root {
            let (settings, settings_dir) = settings::discover_settings(&root);
            tracing::info!(
                root = %root.display(),
                settings_dir = %settings_dir.display(),
                "workspace opened"
            );
            let _ = self.settings.set(settings);
        }

        let settings = self.settings();
        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                hover_provider: settings
                    .hover
                    .enabled
                    .then_some(HoverProviderCapability::Simple(true)),
                completion_provider: settings.completion.enabled.then(|| CompletionOptions {
                    trigger_characters: Some(vec!["_".to_string()]),
                    resolve_provider: Some(false),
                    ..Default::default()
                }),
                signature_help_provider: settings.signature_help.enabled.then(|| {
                    SignatureHelpOptions {
                        trigger_characters: Some(vec!["(".to_string(), ",".to_string()]),
                        retrigger_characters: None,
                        work_done_progress_options: WorkDoneProgressOptions::default(),
                    }
                }),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        let count = signatures().len();
        tracing::info!(signatures = count, "initialized");
        self.client
            .log_message(
                MessageType::INFO,
                format!("AutoIt WinAPI language server initialized ({count} signatures)"),
            )
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        if self.documents.is_empty() {
            tracing::info!("shutdown requested");
        } else {
            tracing::info!(open = self.documents.len(), "shutdown with open documents");
        }
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        self.on_document_change(
            params.text_document.uri,
            params.text_document.text,
            params.text_document.version,
        );
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        // FULL sync: the single change carries the whole text
        if let Some(change) = params.content_changes.into_iter().next() {
            self.on_document_change(
                params.text_document.uri,
                change.text,
                params.text_document.version,
            );
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        self.documents.close(&uri);
        tracing::debug!(%uri, open = self.documents.len(), "document closed");
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let settings = &self.settings().hover;
        if !settings.enabled {
            return Ok(None);
        }
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        let Some(doc) = self.documents.get(uri) else {
            tracing::debug!(%uri, "hover on unknown document");
            return Ok(None);
        };
        Ok(lsp::hover_at_position(&doc, position, settings))
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        if !self.settings().completion.enabled {
            return Ok(None);
        }
        let uri = &params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;

        let Some(doc) = self.documents.get(uri) else {
            tracing::debug!(%uri, "completion on unknown document");
            return Ok(None);
        };
        Ok(lsp::completion_at_position(&doc, position))
    }

    async fn signature_help(&self, params: SignatureHelpParams) -> Result<Option<SignatureHelp>> {
        if !self.settings().signature_help.enabled {
            return Ok(None);
        }
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        let Some(doc) = self.documents.get(uri) else {
            tracing::debug!(%uri, "signature help on unknown document");
            return Ok(None);
        };
        Ok(lsp::signature_help_at_position(&doc, position))
    }
}

pub fn create_service() -> (LspService<Backend>, tower_lsp::ClientSocket) {
    LspService::new(Backend::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_can_be_created() {
        let (_service, _socket) = create_service();
    }
}
