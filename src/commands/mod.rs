//! Operator-facing layer: login prompt, interactive console, one-shot CLI.
//!
//! Nothing here touches the database directly; every action goes through
//! [`crate::app::ExamRegistry`].

pub mod cli;
pub mod console;
pub mod login;
pub mod table;

/// Match operator input against the subject selector.
///
/// Accepts a 1-based position or a subject name (case-insensitive).
pub fn resolve_subject(choices: &[String], input: &str) -> Option<String> {
    let input = input.trim();
    if let Ok(n) = input.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| choices.get(i)).cloned();
    }
    choices
        .iter()
        .find(|c| c.eq_ignore_ascii_case(input))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices() -> Vec<String> {
        vec!["JAVA".into(), "PYTHON".into(), "Data Mining".into()]
    }

    #[test]
    fn resolves_by_position() {
        assert_eq!(resolve_subject(&choices(), "1").as_deref(), Some("JAVA"));
        assert_eq!(resolve_subject(&choices(), " 3 ").as_deref(), Some("Data Mining"));
        assert_eq!(resolve_subject(&choices(), "0"), None);
        assert_eq!(resolve_subject(&choices(), "4"), None);
    }

    #[test]
    fn resolves_by_name_ignoring_case() {
        assert_eq!(resolve_subject(&choices(), "python").as_deref(), Some("PYTHON"));
        assert_eq!(resolve_subject(&choices(), "DATA MINING").as_deref(), Some("Data Mining"));
        assert_eq!(resolve_subject(&choices(), "COBOL"), None);
    }
}
