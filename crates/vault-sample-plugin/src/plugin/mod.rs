//! The sample plugin's root object.

pub mod commands;
pub mod events;
pub mod modal;
pub mod settings_tab;

use vault_sample_config::{DataStore, Settings, StoreError};

use crate::csv_table::CsvBlockProcessor;
use crate::dom::Element;
use crate::host::{Host, Lifecycle, MouseEvent, Workspace};
use crate::registry::{Registry, RibbonIcon, StatusBarItem};

pub use modal::SampleModal;
pub use settings_tab::SampleSettingTab;

#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    #[error("Settings error: {0}")]
    Settings(#[from] StoreError),
    #[error("Plugin is already started")]
    AlreadyStarted,
    #[error("Unknown setting: {0}")]
    UnknownSetting(String),
}

#[derive(Debug, Default)]
pub struct SamplePlugin {
    settings: Settings,
    started: bool,
}

impl SamplePlugin {
    pub const ID: &'static str = "sample-plugin";
    pub const NAME: &'static str = "Sample Plugin";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Apply a value from the settings panel and persist it.
    pub fn change_setting(
        &mut self,
        key: &str,
        value: String,
        store: &mut dyn DataStore,
    ) -> Result<(), PluginError> {
        match key {
            settings_tab::MY_SETTING_KEY => self.settings.my_setting = value,
            other => return Err(PluginError::UnknownSetting(other.to_string())),
        }
        self.save_settings(store)
    }

    pub fn save_settings(&self, store: &mut dyn DataStore) -> Result<(), PluginError> {
        self.settings.save(store)?;
        Ok(())
    }

    fn build_registry() -> Registry {
        let mut registry = Registry::new();

        registry.add_ribbon_icon(RibbonIcon {
            icon: "bird",
            title: Self::NAME,
            class: Some("my-plugin-ribbon-class"),
            on_click: show_ribbon_notice,
        });
        registry.add_status_bar_item(status_bar_item());

        for command in commands::sample_commands() {
            registry.add_command(command);
        }
        for subscription in events::sample_subscriptions() {
            registry.register_event(subscription);
        }

        registry.register_code_block_processor(
            CsvBlockProcessor::LANGUAGE,
            Box::new(CsvBlockProcessor),
        );
        registry.add_setting_tab(Box::new(SampleSettingTab));
        registry.register_dom_event(events::document_click_listener());
        registry.register_interval(events::heartbeat_interval());

        registry
    }
}

impl Lifecycle for SamplePlugin {
    fn start(&mut self, host: &mut dyn Host) -> Result<Registry, PluginError> {
        if self.started {
            return Err(PluginError::AlreadyStarted);
        }
        self.settings = Settings::load(host.data_store())?;
        let registry = Self::build_registry();
        self.started = true;
        log::info!(
            "{} loaded with {} commands",
            Self::ID,
            registry.commands().len()
        );
        Ok(registry)
    }

    fn stop(&mut self) {
        self.started = false;
        log::info!("{} unloaded", Self::ID);
    }
}

fn show_ribbon_notice(workspace: &mut dyn Workspace, _event: &MouseEvent) {
    workspace.notice("This is a notice!");
}

fn status_bar_item() -> StatusBarItem {
    let mut element = Element::new("div");
    element.add_class("status-bar-item");
    for text in ["🍎", "🍌", "🥦", "🥬"] {
        element.create_el_with_text("span", text);
    }
    StatusBarItem { element }
}
