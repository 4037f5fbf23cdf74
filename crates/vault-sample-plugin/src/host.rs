//! The surface a host runtime exposes to a plugin.
//!
//! [`Host`] is what a plugin sees while starting. [`Workspace`] and
//! [`Editor`] are what handlers see when the user triggers them.

use relative_path::RelativePathBuf;
use vault_sample_config::DataStore;

use crate::dom::Element;
use crate::registry::Registry;
use crate::PluginError;

/// Setup and teardown hooks called by the host.
///
/// `start` returns every registration the plugin makes. The host keeps the
/// [`Registry`] alive until `stop` and drops it afterwards, which
/// unregisters everything at once.
pub trait Lifecycle {
    fn start(&mut self, host: &mut dyn Host) -> Result<Registry, PluginError>;

    fn stop(&mut self);
}

/// Services available to a plugin while it starts.
pub trait Host {
    fn data_store(&self) -> &dyn DataStore;

    fn data_store_mut(&mut self) -> &mut dyn DataStore;
}

/// Services available to command, ribbon and menu handlers.
pub trait Workspace {
    fn notice(&mut self, message: &str);

    fn open_modal(&mut self, modal: Box<dyn Modal>);

    fn active_markdown_view(&self) -> Option<&MarkdownView>;

    /// The focused editor together with the view it belongs to.
    fn active_editor(&mut self) -> Option<ActiveEditor<'_>>;
}

pub struct ActiveEditor<'a> {
    pub editor: &'a mut dyn Editor,
    pub view: &'a MarkdownView,
}

pub trait Editor {
    fn selection(&self) -> String;

    fn replace_selection(&mut self, replacement: &str);
}

/// A dialog the host shows on behalf of a plugin.
pub trait Modal {
    fn on_open(&mut self, content: &mut Element);

    fn on_close(&mut self, content: &mut Element);
}

/// A file in the vault, addressed relative to the vault root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef {
    pub path: RelativePathBuf,
}

impl FileRef {
    pub fn new(path: impl Into<RelativePathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl From<&str> for FileRef {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// An open Markdown view. Views over unsaved buffers have no file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownView {
    pub file: Option<FileRef>,
}

impl MarkdownView {
    pub fn for_file(file: FileRef) -> Self {
        Self { file: Some(file) }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MouseEvent {
    pub client_x: f64,
    pub client_y: f64,
    pub button: u16,
}
