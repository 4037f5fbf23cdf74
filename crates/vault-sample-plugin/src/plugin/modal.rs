use crate::dom::Element;
use crate::host::Modal;

#[derive(Debug, Clone, Copy, Default)]
pub struct SampleModal;

impl Modal for SampleModal {
    fn on_open(&mut self, content: &mut Element) {
        content.set_text("Woah!");
    }

    fn on_close(&mut self, content: &mut Element) {
        content.empty();
    }
}
