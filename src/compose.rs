use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog;
use crate::session::SelectionState;

static OPENING_FENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^```(json|yaml)?\n").expect("valid opening fence regex"));
static CLOSING_FENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n```$").expect("valid closing fence regex"));

/// Serializes the active selections into the single modifier string handed
/// to the refinement call.
///
/// Output is deterministic: the custom free-text field comes first, then
/// each non-empty category in catalog order as `"<Label>: <v1>, <v2>"`,
/// segments joined with `". "`. Values keep their selection order. With
/// nothing selected and no custom text the result is the empty string.
pub fn compose(selections: &SelectionState, custom_text: &str) -> String {
    let mut segments = Vec::new();

    let custom = custom_text.trim();
    if !custom.is_empty() {
        segments.push(format!("Custom Details: {custom}"));
    }

    for category in catalog::CATEGORIES {
        let values = selections.get(category.key);
        if values.is_empty() {
            continue;
        }
        segments.push(format!("{}: {}", category.label, values.join(", ")));
    }

    segments.join(". ")
}

/// Removes the enclosing markdown code fence the refinement collaborator
/// sometimes wraps around JSON or YAML output, then trims. Fenceless text
/// passes through untouched.
pub fn strip_code_fences(text: &str) -> String {
    let stripped = OPENING_FENCE_RE.replace(text, "");
    let stripped = CLOSING_FENCE_RE.replace(&stripped, "");
    stripped.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::session::Session;
    use crate::store::StateStore;
    use crate::types::new_record_id;

    fn scratch_session() -> Session {
        let dir = std::env::temp_dir().join(format!("prism-compose-test-{}", new_record_id()));
        Session::load(StateStore::at(dir))
    }

    #[test]
    fn empty_selections_and_no_custom_text_compose_to_nothing() {
        let session = scratch_session();
        assert_eq!(compose(&session.selections, ""), "");
        assert_eq!(compose(&session.selections, "   "), "");
    }

    #[test]
    fn single_category_composes_exactly() {
        let mut session = scratch_session();
        let category = catalog::find("perspective").unwrap();
        session.toggle_selection(category, "Front view");
        session.toggle_selection(category, "Close-up (CU)");

        assert_eq!(
            compose(&session.selections, ""),
            "Perspective: Front view, Close-up (CU)"
        );
    }

    #[test]
    fn custom_details_come_first_and_categories_follow_catalog_order() {
        let mut session = scratch_session();
        // selected in reverse of catalog order on purpose
        session.toggle_selection(catalog::find("lighting").unwrap(), "Rim lighting (edge highlight)");
        session.toggle_selection(catalog::find("camera").unwrap(), "Rangefinder");
        session.toggle_selection(catalog::find("art-style").unwrap(), "Film Noir");

        assert_eq!(
            compose(&session.selections, "smoke in the air"),
            "Custom Details: smoke in the air. \
             Art Style: Film Noir. \
             Camera: Rangefinder. \
             Lighting: Rim lighting (edge highlight)"
        );
    }

    #[test]
    fn composing_twice_is_byte_identical() {
        let mut session = scratch_session();
        session.toggle_selection(catalog::find("mood").unwrap(), "Mysterious/Enigmatic");
        session.toggle_selection(catalog::find("season").unwrap(), "Autumn/Fall");

        let first = compose(&session.selections, "wide margins");
        let second = compose(&session.selections, "wide margins");
        assert_eq!(first, second);
    }

    #[test]
    fn empty_categories_contribute_no_separator_artifacts() {
        let mut session = scratch_session();
        session.toggle_selection(catalog::find("nails").unwrap(), "Chrome/Mirror nails");

        let composed = compose(&session.selections, "");
        assert_eq!(composed, "Nails: Chrome/Mirror nails");
        assert!(!composed.contains(". ."));
        assert!(!composed.ends_with('.'));
    }

    #[test]
    fn strips_tagged_and_untagged_fences() {
        assert_eq!(
            strip_code_fences("```json\n{\"subject\": \"fox\"}\n```"),
            "{\"subject\": \"fox\"}"
        );
        assert_eq!(
            strip_code_fences("```yaml\nsubject: fox\n```"),
            "subject: fox"
        );
        assert_eq!(strip_code_fences("```\nplain\n```"), "plain");
    }

    #[test]
    fn fenceless_text_passes_through_trimmed() {
        assert_eq!(
            strip_code_fences("  a quiet street after rain \n"),
            "a quiet street after rain"
        );
        assert_eq!(
            strip_code_fences("uses ``` inline but not fenced"),
            "uses ``` inline but not fenced"
        );
    }
}
