//! Structured appeal form parsing

/// Category used when the form omits one
pub const DEFAULT_CATEGORY: &str = "общее";

const FULL_NAME: &str = "ФИО:";
const PHONE: &str = "Телефон:";
const CATEGORY: &str = "Тип обращения:";
const MESSAGE: &str = "Текст обращения:";

/// Fields of a submitted appeal form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppealForm {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub category: String,
    pub message: String,
}

/// Parse `Label: value` lines.
///
/// When no line carries a known label the whole text becomes the message.
pub fn parse(text: &str) -> AppealForm {
    let mut form = AppealForm {
        full_name: None,
        phone: None,
        category: DEFAULT_CATEGORY.to_string(),
        message: String::new(),
    };
    let mut matched = false;

    for line in text.lines().map(str::trim) {
        if let Some(value) = field(line, FULL_NAME) {
            form.full_name = non_empty(value);
        } else if let Some(value) = field(line, PHONE) {
            form.phone = non_empty(value);
        } else if let Some(value) = field(line, CATEGORY) {
            if let Some(category) = non_empty(value) {
                form.category = category;
            }
        } else if let Some(value) = field(line, MESSAGE) {
            form.message = value.to_string();
        } else {
            continue;
        }
        matched = true;
    }

    if !matched {
        form.message = text.trim().to_string();
    }
    form
}

fn field<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    line.strip_prefix(label).map(str::trim)
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
