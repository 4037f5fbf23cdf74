use vault_sample_config::Settings;

use crate::registry::{SettingControl, SettingTab};

pub const MY_SETTING_KEY: &str = "my_setting";

/// Settings panel with a single secret text field.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleSettingTab;

impl SettingTab for SampleSettingTab {
    fn display(&self, settings: &Settings) -> Vec<SettingControl> {
        vec![SettingControl::Text {
            key: MY_SETTING_KEY,
            name: "Setting #1",
            description: "It's a secret",
            placeholder: "Enter your secret",
            value: settings.my_setting.clone(),
        }]
    }
}
