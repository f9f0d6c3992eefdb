/// Owner of the text field the controller is attached to
///
/// The controller holds no text of its own; it reports every change here and
/// is handed the current query on each sync.
pub trait InputHost {
    fn on_change(&mut self, text: &str);
}

/// Plain string host
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    pub text: String,
}

impl TextInput {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl InputHost for TextInput {
    fn on_change(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }
}
