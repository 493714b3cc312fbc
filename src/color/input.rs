//! Cleaning of free-form hex text typed into the custom color field.

/// The result of cleaning one keystroke's worth of hex text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HexInput {
    /// Up to six hex digits, case preserved, no `#`.
    pub digits: String,
}

impl HexInput {
    pub fn is_complete(&self) -> bool {
        self.digits.len() == 6
    }

    /// `#` + digits once all six are present.
    pub fn color(&self) -> Option<String> {
        self.is_complete().then(|| format!("#{}", self.digits))
    }
}

/// Drop every non-hex character and keep at most the first six digits.
///
/// `"#ff-00 88zz"` cleans to `ff0088`, which is complete.
pub fn clean_hex_input(text: &str) -> HexInput {
    let digits = text
        .chars()
        .filter(char::is_ascii_hexdigit)
        .take(6)
        .collect();
    HexInput { digits }
}
