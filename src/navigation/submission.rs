/// Pick the keyword a form submission searches for.
///
/// While a suggestion is highlighted the displayed text wins; otherwise the committed
/// keyword does. An empty field or a blank selection submits nothing.
pub fn resolve_submission(displayed: &str, keyword: &str, auto_search: bool) -> Option<String> {
    if displayed.is_empty() {
        return None;
    }

    let selected = if auto_search { displayed } else { keyword };
    if selected.trim().is_empty() {
        None
    } else {
        Some(selected.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlighted_suggestion_wins_while_browsing() {
        assert_eq!(
            resolve_submission("Influenza", "flu", true).as_deref(),
            Some("Influenza")
        );
    }

    #[test]
    fn test_committed_keyword_wins_otherwise() {
        assert_eq!(resolve_submission("flu", "flu", false).as_deref(), Some("flu"));
        assert_eq!(
            resolve_submission("Influenza", "flu", false).as_deref(),
            Some("flu")
        );
    }

    #[test]
    fn test_empty_field_submits_nothing() {
        assert_eq!(resolve_submission("", "flu", false), None);
        assert_eq!(resolve_submission("", "", true), None);
    }

    #[test]
    fn test_blank_selection_submits_nothing() {
        assert_eq!(resolve_submission("   ", "   ", false), None);
    }
}
