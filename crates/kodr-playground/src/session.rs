//! The playground session.
//!
//! [`Playground`] wires the overlay editor to the explanation panel: every text change schedules
//! a debounced classification pass, [`Playground::tick`] collects finished passes, and clicks on
//! explanation rows highlight the matching line in the code view.

use crate::config::PlaygroundConfig;
use crate::notice::Notice;
use kodr_editor::{ClickGeometry, CommandResult, Editor, EditorCommand, RenderedLine};
use kodr_explain::{AnalysisScheduler, Annotation, Classifier, ReportStamp, render_report};
use kodr_lang::Language;
use std::collections::BTreeSet;
use std::time::Instant;

/// Success message after an explanation report was exported.
pub const EXPORT_SUCCESS_MESSAGE: &str = "Explanation downloaded!";

/// A file produced for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    /// Suggested file name.
    pub file_name: String,
    /// File contents.
    pub contents: String,
}

/// One playground session.
#[derive(Debug)]
pub struct Playground {
    config: PlaygroundConfig,
    geometry: ClickGeometry,
    language: Language,
    editor: Editor,
    classifier: Classifier,
    scheduler: AnalysisScheduler,
    annotations: Vec<Annotation>,
    /// Indices into `annotations` of expanded rows.
    expanded: BTreeSet<usize>,
    highlighted_line: Option<usize>,
    notices: Vec<Notice>,
}

impl Playground {
    /// Start a session on the configured language's sample; its first analysis is scheduled at
    /// `now`.
    pub fn new(config: PlaygroundConfig, now: Instant) -> Self {
        let language = config.initial_language;
        let mut playground = Self {
            geometry: config.click_geometry(),
            language,
            editor: Editor::new(language.sample()),
            classifier: Classifier::with_options(config.classifier_options()),
            scheduler: AnalysisScheduler::new(config.analysis_delay()),
            annotations: Vec::new(),
            expanded: BTreeSet::new(),
            highlighted_line: None,
            notices: Vec::new(),
            config,
        };
        playground.text_changed(now);
        playground
    }

    /// Session configuration.
    pub fn config(&self) -> &PlaygroundConfig {
        &self.config
    }

    /// Current language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// The editor state.
    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Click geometry of the code view.
    pub fn geometry(&self) -> ClickGeometry {
        self.geometry
    }

    /// Current buffer text.
    pub fn code(&self) -> String {
        self.editor.text()
    }

    /// Switch language, replacing the buffer with that language's sample.
    ///
    /// Unsaved edits are discarded and the highlighted line is cleared.
    pub fn select_language(&mut self, language: Language, now: Instant) {
        tracing::info!(from = %self.language, to = %language, "language switched");
        self.language = language;
        self.highlighted_line = None;
        self.editor.set_text(language.sample());
        self.text_changed(now);
    }

    /// Restore the current language's sample.
    pub fn reset_code(&mut self, now: Instant) {
        self.editor.set_text(self.language.sample());
        self.text_changed(now);
    }

    /// Empty the buffer.
    pub fn clear_code(&mut self, now: Instant) {
        self.editor.set_text("");
        self.text_changed(now);
    }

    /// Forward an editor command; text changes schedule a new analysis pass.
    pub fn edit(&mut self, command: EditorCommand, now: Instant) -> CommandResult {
        let result = self.editor.execute(command);
        if result.text_delta().is_some() {
            self.text_changed(now);
        }
        result
    }

    /// Move the caret under a pointer coordinate in the code view.
    pub fn click_code(&mut self, x: f32, y: f32) -> usize {
        self.editor.click_at(x, y, &self.geometry)
    }

    fn text_changed(&mut self, now: Instant) {
        let text = self.editor.text();
        if text.trim().is_empty() {
            self.scheduler.cancel();
            self.annotations.clear();
            self.expanded.clear();
            return;
        }
        self.scheduler.schedule(text, now);
    }

    /// Collect a finished analysis pass. Returns `true` when the annotations were replaced.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(annotations) = self.scheduler.poll(now, &self.classifier) else {
            return false;
        };
        let expand = self.config.auto_expand.min(annotations.len());
        self.expanded = (0..expand).collect();
        self.annotations = annotations;
        true
    }

    /// Returns `true` while an analysis pass is waiting or running.
    pub fn is_analyzing(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// When the waiting analysis pass becomes due.
    pub fn next_analysis_at(&self) -> Option<Instant> {
        self.scheduler.due_at()
    }

    /// Annotations of the last completed pass.
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Number of annotations shown in the panel header.
    pub fn insight_count(&self) -> usize {
        self.annotations.len()
    }

    /// Highlight the line of the annotation at `index`. Returns that line number.
    pub fn click_annotation(&mut self, index: usize) -> Option<usize> {
        let line_number = self.annotations.get(index)?.line_number;
        self.highlighted_line = Some(line_number);
        Some(line_number)
    }

    /// Set or clear the highlighted (1-based) line.
    pub fn set_highlighted_line(&mut self, line_number: Option<usize>) {
        self.highlighted_line = line_number;
    }

    /// The highlighted (1-based) line.
    pub fn highlighted_line(&self) -> Option<usize> {
        self.highlighted_line
    }

    /// Expand or collapse the row at `index`. Returns the new expanded state.
    pub fn toggle_expanded(&mut self, index: usize) -> bool {
        if index >= self.annotations.len() {
            return false;
        }
        if self.expanded.remove(&index) {
            false
        } else {
            self.expanded.insert(index);
            true
        }
    }

    /// Returns `true` if the row at `index` is expanded.
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    /// Rows of the code view with the highlight flag applied.
    pub fn rendered_lines(&self) -> Vec<RenderedLine> {
        self.editor.rendered_lines(self.highlighted_line)
    }

    /// Export the explanation report, queueing a success or error notice.
    pub fn export_explanations(&mut self, stamp: &ReportStamp) -> Option<ExportedFile> {
        match render_report(self.language, &self.annotations, stamp) {
            Ok(contents) => {
                let file_name = stamp.file_name();
                tracing::info!(
                    file = %file_name,
                    annotations = self.annotations.len(),
                    "explanations exported"
                );
                self.notices.push(Notice::success(EXPORT_SUCCESS_MESSAGE));
                Some(ExportedFile {
                    file_name,
                    contents,
                })
            }
            Err(err) => {
                tracing::warn!(error = %err, "explanation export rejected");
                self.notices.push(Notice::error(err.to_string()));
                None
            }
        }
    }

    /// The buffer as a `code.<ext>` download.
    pub fn download_code(&self) -> ExportedFile {
        ExportedFile {
            file_name: format!("code.{}", self.language.file_extension()),
            contents: self.editor.text(),
        }
    }

    /// Text for the clipboard.
    pub fn copy_code(&self) -> String {
        self.editor.text()
    }

    /// Drain queued notices.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn playground(now: Instant) -> Playground {
        Playground::new(PlaygroundConfig::default(), now)
    }

    #[test]
    fn test_first_pass_runs_after_delay() {
        let t0 = Instant::now();
        let mut session = playground(t0);

        assert!(session.is_analyzing());
        assert!(!session.tick(t0 + Duration::from_millis(1499)));
        assert!(session.annotations().is_empty());

        assert!(session.tick(t0 + Duration::from_millis(1500)));
        assert_eq!(session.insight_count(), 13);
        assert!(!session.is_analyzing());
    }

    #[test]
    fn test_toggle_out_of_range_is_ignored() {
        let t0 = Instant::now();
        let mut session = playground(t0);
        session.tick(t0 + Duration::from_secs(2));

        assert!(!session.toggle_expanded(999));
        assert!(!session.is_expanded(999));
        assert!(session.is_expanded(2));
        assert!(!session.toggle_expanded(2));
        assert!(session.toggle_expanded(2));
    }

    #[test]
    fn test_click_annotation_out_of_range() {
        let t0 = Instant::now();
        let mut session = playground(t0);
        assert_eq!(session.click_annotation(0), None);
        assert_eq!(session.highlighted_line(), None);
    }
}
