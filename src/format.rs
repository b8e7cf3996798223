use std::fmt;

use crate::label::Label;

/// Renders a label as a postal address block without a trailing newline.
///
/// The secondary line is emitted only when present; the last line is always
/// `City, State Zip`. Callers are expected to have validated the label.
pub fn format_label(label: &Label) -> String {
    label.to_string()
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.names)?;
        writeln!(f, "{}", self.line1)?;
        if !self.line2.is_empty() {
            writeln!(f, "{}", self.line2)?;
        }
        write!(f, "{}, {} {}", self.city, self.state, self.zip)
    }
}
