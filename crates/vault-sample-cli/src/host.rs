//! A host runtime without a UI. Notices and modal content are collected so the
//! CLI can print them, and the editor is a plain text buffer.

use std::ops::Range;
use std::time::Duration;

use vault_sample_config::{DataStore, MemoryStore};
use vault_sample_plugin::{
    ActiveEditor, Editor, Element, FileRef, Host, MarkdownView, Modal, Registry, Workspace,
};

/// Text buffer with a single byte-range selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferEditor {
    text: String,
    selection: Range<usize>,
}

impl BufferEditor {
    pub fn new(text: impl Into<String>, selection: Range<usize>) -> Self {
        let text = text.into();
        let end = selection.end.min(text.len());
        let start = selection.start.min(end);
        Self {
            text,
            selection: start..end,
        }
    }

    /// Buffer with everything selected.
    pub fn selecting_all(text: impl Into<String>) -> Self {
        let text = text.into();
        let len = text.len();
        Self::new(text, 0..len)
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Editor for BufferEditor {
    fn selection(&self) -> String {
        self.text
            .get(self.selection.clone())
            .unwrap_or_default()
            .to_string()
    }

    fn replace_selection(&mut self, replacement: &str) {
        if self.text.get(self.selection.clone()).is_none() {
            log::warn!("Selection {:?} is not on a char boundary", self.selection);
            return;
        }
        self.text.replace_range(self.selection.clone(), replacement);
        let start = self.selection.start;
        self.selection = start..start + replacement.len();
    }
}

pub struct HeadlessHost<S: DataStore = MemoryStore> {
    store: S,
    notices: Vec<String>,
    modal_contents: Vec<String>,
    view: Option<MarkdownView>,
    editor: Option<BufferEditor>,
    interval_elapsed: Vec<Duration>,
}

#[cfg(test)]
impl HeadlessHost<MemoryStore> {
    pub fn in_memory() -> Self {
        Self::with_store(MemoryStore::new())
    }
}

impl<S: DataStore> HeadlessHost<S> {
    pub fn with_store(store: S) -> Self {
        Self {
            store,
            notices: Vec::new(),
            modal_contents: Vec::new(),
            view: None,
            editor: None,
            interval_elapsed: Vec::new(),
        }
    }

    /// Open a Markdown view, optionally backed by a file, with the given editor.
    pub fn open_view(&mut self, file: Option<FileRef>, editor: BufferEditor) {
        self.view = Some(MarkdownView { file });
        self.editor = Some(editor);
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    pub fn modal_contents(&self) -> &[String] {
        &self.modal_contents
    }

    pub fn editor(&self) -> Option<&BufferEditor> {
        self.editor.as_ref()
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Let `elapsed` pass on the host clock and fire every interval that came
    /// due. Returns the number of handler calls.
    pub fn advance(&mut self, registry: &Registry, elapsed: Duration) -> usize {
        let intervals = registry.intervals();
        self.interval_elapsed.resize(intervals.len(), Duration::ZERO);

        let mut fired = 0;
        for (interval, pending) in intervals.iter().zip(self.interval_elapsed.iter_mut()) {
            if interval.every.is_zero() {
                continue;
            }
            *pending += elapsed;
            while *pending >= interval.every {
                *pending -= interval.every;
                (interval.handler)();
                fired += 1;
            }
        }
        fired
    }
}

impl<S: DataStore> Host for HeadlessHost<S> {
    fn data_store(&self) -> &dyn DataStore {
        &self.store
    }

    fn data_store_mut(&mut self) -> &mut dyn DataStore {
        &mut self.store
    }
}

impl<S: DataStore> Workspace for HeadlessHost<S> {
    fn notice(&mut self, message: &str) {
        log::info!("Notice: {message}");
        self.notices.push(message.to_string());
    }

    fn open_modal(&mut self, mut modal: Box<dyn Modal>) {
        let mut content = Element::new("div");
        content.add_class("modal-content");
        modal.on_open(&mut content);
        self.modal_contents.push(content.to_html());
        modal.on_close(&mut content);
    }

    fn active_markdown_view(&self) -> Option<&MarkdownView> {
        self.view.as_ref()
    }

    fn active_editor(&mut self) -> Option<ActiveEditor<'_>> {
        let view = self.view.as_ref()?;
        let editor = self.editor.as_mut()?;
        Some(ActiveEditor { editor, view })
    }
}
