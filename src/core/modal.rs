// Visibility and text of the single clue dialog.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    visible: bool,
    text: String,
}

impl ModalState {
    pub fn open(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.visible = true;
    }

    /// Hide the dialog. Safe to call when already hidden.
    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[inline]
pub fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}
