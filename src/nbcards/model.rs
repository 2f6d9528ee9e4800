use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Kernel identifier for Python cards.
pub const PYTHON_KERNEL: &str = "python3";
/// Kernel identifier for R cards.
pub const R_KERNEL: &str = "ir";

/// A single card in the deck.
///
/// Field names serialize in camelCase so decks written by the editor that
/// produces cards can be loaded as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: i64,
    pub title: String,
    pub kernel: String,
    #[serde(default)]
    pub source_code: String,
    #[serde(default)]
    pub jupyter_data: Value,
    #[serde(default)]
    pub is_custom_markdown: bool,
    #[serde(default)]
    pub code_collapsed: bool,
    #[serde(default)]
    pub output_collapsed: bool,
    #[serde(default)]
    pub collapsed: bool,
}

impl Card {
    /// Builds an ordinary card around an externally produced notebook cell.
    pub fn new(
        id: i64,
        title: impl Into<String>,
        kernel: impl Into<String>,
        source_code: impl Into<String>,
        jupyter_data: Value,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            kernel: kernel.into(),
            source_code: source_code.into(),
            jupyter_data,
            is_custom_markdown: false,
            code_collapsed: false,
            output_collapsed: false,
            collapsed: false,
        }
    }

    /// Builds an ordinary card whose cell is an unexecuted code cell holding
    /// `source_code`.
    pub fn code(
        id: i64,
        title: impl Into<String>,
        kernel: impl Into<String>,
        source_code: impl Into<String>,
    ) -> Self {
        let source_code = source_code.into();
        let cell = code_cell(&source_code);
        Self::new(id, title, kernel, source_code, cell)
    }

    /// Builds a custom markdown card. The cell is derived once here and again
    /// whenever the card passes through the store's custom insert or edit.
    pub fn markdown(id: i64, title: impl Into<String>, source_code: impl Into<String>) -> Self {
        let mut card = Self::new(id, title, PYTHON_KERNEL, source_code, Value::Null);
        card.is_custom_markdown = true;
        card.normalize();
        card
    }

    /// Re-derives kernel and cell for custom markdown cards. Ordinary cards are
    /// left untouched.
    pub fn normalize(&mut self) {
        if self.is_custom_markdown {
            self.kernel = PYTHON_KERNEL.to_string();
            self.jupyter_data = markdown_cell(&self.source_code);
        }
    }
}

/// The canonical markdown cell for a custom card.
pub fn markdown_cell(source: &str) -> Value {
    json!({
        "cell_type": "markdown",
        "metadata": {},
        "source": source,
    })
}

/// An unexecuted code cell in nbformat 4 shape.
pub fn code_cell(source: &str) -> Value {
    json!({
        "cell_type": "code",
        "execution_count": null,
        "metadata": {},
        "outputs": [],
        "source": source,
    })
}
