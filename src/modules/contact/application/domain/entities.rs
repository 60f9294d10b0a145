use regex::Regex;
use std::sync::LazyLock;

static PHONE_CHARS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9 .()\-]+$").ok());

/// A validated, trimmed contact form submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactMessage {
    pub fn subject(&self) -> String {
        format!("New contact message from {}", self.name)
    }

    pub fn body(&self) -> String {
        format!(
            "New contact form submission\n\nName: {}\nEmail: {}\nPhone: {}\n\n{}\n",
            self.name, self.email, self.phone, self.message
        )
    }
}

/// 7 to 15 digits; an optional leading `+` and the usual separators are allowed.
pub fn is_valid_phone(phone: &str) -> bool {
    let Some(pattern) = PHONE_CHARS.as_ref() else {
        return false;
    };

    if !pattern.is_match(phone) {
        return false;
    }

    let digits = phone.chars().filter(char::is_ascii_digit).count();
    (7..=15).contains(&digits)
}
