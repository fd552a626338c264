//! Session - Everything one editor connection needs.
//!
//! A [`Session`] owns the document cache, the compiler and the notification
//! gate, and reports results through an [`EventBus`]. The editor host drives
//! it with document lifecycle calls and consumes [`SessionEvent`]s from a
//! [`Subscription`].
//!
//! ```ignore
//! let session = Session::new(parser, Config::default());
//! let mut events = session.subscribe();
//!
//! session.did_open("file:///a.pomsky", "let x = 'a'; x+");
//! session.validate("file:///a.pomsky").await;
//! while let Some(event) = events.try_recv() { /* publish */ }
//! ```

mod events;

use std::sync::Arc;

use tracing::debug;

use crate::compiler::{
    CompilerError, Compiler, Config, Flavor, NotificationGate, PreviewResult, to_diagnostics,
};
use crate::ide::{Analysis, AnalysisHost};
use crate::syntax::RuleParser;

pub use events::{EventBus, SessionEvent, Subscription};

/// Log target for session operations.
const SESSION_TARGET: &str = "pomsky_ide::session";

/// State of one editor connection.
pub struct Session {
    host: AnalysisHost,
    compiler: Compiler,
    gate: NotificationGate,
    events: EventBus<SessionEvent>,
}

impl Session {
    pub fn new(parser: impl RuleParser + 'static, config: Config) -> Self {
        Self::with_compiler(parser, Compiler::new(config))
    }

    pub fn with_compiler(parser: impl RuleParser + 'static, compiler: Compiler) -> Self {
        Self {
            host: AnalysisHost::new(parser),
            compiler,
            gate: NotificationGate::new(),
            events: EventBus::new(),
        }
    }

    pub fn subscribe(&self) -> Subscription<SessionEvent> {
        self.events.subscribe()
    }

    pub fn host(&self) -> &AnalysisHost {
        &self.host
    }

    pub fn compiler(&self) -> &Compiler {
        &self.compiler
    }

    pub fn config(&self) -> Arc<Config> {
        self.compiler.config()
    }

    // ==================== Document lifecycle ====================

    pub fn did_open(&self, key: &str, text: &str) {
        debug!(target: SESSION_TARGET, key, "document opened");
        self.host.set_file_content(key, text);
    }

    pub fn did_change(&self, key: &str, text: &str) {
        self.host.set_file_content(key, text);
    }

    /// Forget a document and kill its compile.
    pub fn did_close(&self, key: &str) {
        debug!(target: SESSION_TARGET, key, "document closed");
        self.compiler.cancel(key);
        self.host.remove_file(key);
        self.gate.reset(key);
    }

    /// Snapshot of an open document.
    pub fn analysis(&self, key: &str) -> Option<Analysis> {
        self.host.analysis(key)
    }

    // ==================== Compilation ====================

    /// Compile an open document and publish the outcome.
    ///
    /// Publishes [`SessionEvent::Diagnostics`], followed by a
    /// [`SessionEvent::Notification`] when the failure is worth reporting.
    /// Nothing is published when a newer compile supersedes this one.
    pub async fn validate(&self, key: &str) {
        let Some(analysis) = self.host.analysis(key) else {
            return;
        };
        let text = analysis.text();

        match self.compiler.compile(key, text).await {
            Ok(response) => {
                self.gate.reset(key);
                let diagnostics = to_diagnostics(text, &response);
                debug!(target: SESSION_TARGET, key, count = diagnostics.len(), "publishing diagnostics");
                self.events.publish(SessionEvent::Diagnostics {
                    key: key.into(),
                    diagnostics,
                });
            }
            Err(error) if error.is_superseded() => {
                debug!(target: SESSION_TARGET, key, "compile superseded");
            }
            Err(error) => self.report_failure(key, &error),
        }
    }

    /// Validate every open document.
    pub async fn validate_all(&self) {
        for key in self.host.files() {
            self.validate(&key).await;
        }
    }

    /// Compile `source` for the preview panel.
    pub async fn preview(
        &self,
        uri: &str,
        source: &str,
        flavor: Option<Flavor>,
    ) -> Result<PreviewResult, CompilerError> {
        self.compiler.compile_preview(uri, source, flavor).await
    }

    /// Apply new settings and revalidate every open document.
    pub async fn configuration_changed(&self, config: Config) {
        debug!(target: SESSION_TARGET, "configuration changed");
        self.compiler.set_config(config);
        self.gate.clear();
        self.validate_all().await;
    }

    fn report_failure(&self, key: &str, error: &CompilerError) {
        self.events.publish(SessionEvent::Diagnostics {
            key: key.into(),
            diagnostics: Vec::new(),
        });

        let config = self.compiler.config();
        if let Some(notification) = self
            .gate
            .notification(key, error, &config.executable.path)
        {
            self.events.publish(SessionEvent::Notification {
                key: key.into(),
                notification,
            });
        }
    }
}
