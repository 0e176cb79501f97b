pub mod ids;
pub mod memory;

pub use memory::InMemoryDocument;

/// Lookup of page elements by identifier. An absent element is `None`, never an error;
/// controllers treat absence as "this page doesn't have that feature".
pub trait Document: Clone + Send + Sync {
    type Element: Element;

    fn element(&self, id: &str) -> Option<Self::Element>;
}

/// The handful of element properties the controllers read and write.
pub trait Element: Clone + Send + Sync {
    fn is_disabled(&self) -> bool;

    fn set_disabled(&self, disabled: bool);

    fn text(&self) -> String;

    fn set_text(&self, text: &str);

    fn inner_html(&self) -> String;

    fn set_inner_html(&self, html: &str);

    /// Current value of an input element, empty for anything else.
    fn value(&self) -> String;

    /// First file picked in a file input.
    fn selected_file(&self) -> Option<SelectedFile>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}
