use std::fmt;

use serde::Serialize;

/// One labelled line of a plan summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub label: String,
    pub value: String,
}

/// Human-readable plan derived from the answers, recomputed on every change
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DerivedSummary {
    pub title: String,
    pub lines: Vec<SummaryLine>,
}

impl DerivedSummary {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn push(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.lines.push(SummaryLine {
            label: label.into(),
            value: value.into(),
        });
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.label == label)
            .map(|line| line.value.as_str())
    }

    /// `Label: value` lines, one per entry, without the title
    pub fn text_lines(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| format!("{}: {}", line.label, line.value))
            .collect()
    }
}

impl fmt::Display for DerivedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        write!(f, "{}", self.text_lines().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_title_then_lines() {
        let mut summary = DerivedSummary::new("Relocation plan");
        summary.push("Household", "Family");
        summary.push("Children", "-");

        assert_eq!(summary.get("Household"), Some("Family"));
        assert_eq!(summary.get("Budget"), None);
        assert_eq!(
            summary.to_string(),
            "Relocation plan\nHousehold: Family\nChildren: -"
        );
    }
}
