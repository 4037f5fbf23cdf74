//! Test doubles for the host side of the plugin API.

use std::ops::Range;

use vault_sample_config::{DataStore, MemoryStore};

use crate::dom::Element;
use crate::host::{ActiveEditor, Editor, FileRef, Host, MarkdownView, Modal, Workspace};

#[derive(Debug, Default)]
pub struct FakeHost {
    pub store: MemoryStore,
}

impl FakeHost {
    pub fn with_data(content: &str) -> Self {
        Self {
            store: MemoryStore::with_data(content),
        }
    }
}

impl Host for FakeHost {
    fn data_store(&self) -> &dyn DataStore {
        &self.store
    }

    fn data_store_mut(&mut self) -> &mut dyn DataStore {
        &mut self.store
    }
}

#[derive(Debug)]
pub struct FakeEditor {
    pub text: String,
    pub selection: Range<usize>,
}

impl Editor for FakeEditor {
    fn selection(&self) -> String {
        self.text[self.selection.clone()].to_string()
    }

    fn replace_selection(&mut self, replacement: &str) {
        self.text.replace_range(self.selection.clone(), replacement);
        let start = self.selection.start;
        self.selection = start..start + replacement.len();
    }
}

/// Records notices and the content each opened modal rendered.
#[derive(Debug, Default)]
pub struct FakeWorkspace {
    pub notices: Vec<String>,
    pub modals: Vec<String>,
    pub view: Option<MarkdownView>,
    pub editor: Option<FakeEditor>,
}

impl FakeWorkspace {
    pub fn with_editor(text: &str, selection: Range<usize>) -> Self {
        Self {
            view: Some(MarkdownView::for_file(FileRef::from("test.md"))),
            editor: Some(FakeEditor {
                text: text.to_string(),
                selection,
            }),
            ..Self::default()
        }
    }

    pub fn editor_text(&self) -> Option<&str> {
        self.editor.as_ref().map(|e| e.text.as_str())
    }
}

impl Workspace for FakeWorkspace {
    fn notice(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }

    fn open_modal(&mut self, mut modal: Box<dyn Modal>) {
        let mut content = Element::new("div");
        modal.on_open(&mut content);
        self.modals
            .push(content.text().unwrap_or_default().to_string());
        modal.on_close(&mut content);
    }

    fn active_markdown_view(&self) -> Option<&MarkdownView> {
        self.view.as_ref()
    }

    fn active_editor(&mut self) -> Option<ActiveEditor<'_>> {
        match (self.editor.as_mut(), self.view.as_ref()) {
            (Some(editor), Some(view)) => Some(ActiveEditor { editor, view }),
            _ => None,
        }
    }
}
