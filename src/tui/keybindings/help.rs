//! Auto-generate help text from the keybindings registry.

use super::registry::BINDINGS;
use super::{Category, KeyPattern, Mode};

/// Generate compact footer hints for a given mode.
/// Returns a string like "j/k/↑/↓: navigate | Enter: select | /: search"
pub fn generate_footer_hints(mode: Mode) -> String {
    BINDINGS
        .iter()
        .filter(|b| b.modes.contains(&mode))
        .filter_map(|b| b.footer)
        .map(|(keys, label)| format!("{}: {}", keys, label))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Format a binding's keys for display (primary + alternatives).
fn format_binding_keys(pattern: &KeyPattern, alternatives: &[KeyPattern]) -> String {
    let mut parts = vec![pattern.display()];
    for alt in alternatives {
        parts.push(alt.display());
    }
    parts.join(", ")
}

/// Help screen lines, grouped by category.
///
/// Normal-mode bindings come first, then the search editing keys.
pub fn generate_help_lines() -> Vec<String> {
    let mut lines = vec!["Keyboard shortcuts".to_string()];

    for mode in [Mode::Normal, Mode::Search] {
        let mut current_category: Option<Category> = None;

        if mode == Mode::Search {
            lines.push(String::new());
            lines.push("While searching".to_string());
        }

        let mut bindings: Vec<_> = BINDINGS.iter().filter(|b| b.modes.contains(&mode)).collect();
        // Global bindings are listed once, under Normal mode
        if mode == Mode::Search {
            bindings.retain(|b| !b.modes.contains(&Mode::Normal));
        }

        for binding in bindings {
            if current_category != Some(binding.category) {
                lines.push(String::new());
                lines.push(format!("  {}", binding.category.label()));
                lines.push(format!("  {}", "─".repeat(binding.category.label().len())));
                current_category = Some(binding.category);
            }

            let keys = format_binding_keys(&binding.pattern, binding.alternatives);
            lines.push(format!("  {:14}{}", keys, binding.description));
        }
    }

    lines.push(String::new());
    lines.push("  Other characters are typed into the search bar".to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_footer() {
        assert_eq!(
            generate_footer_hints(Mode::Normal),
            "j/k/↑/↓: navigate | Enter: select | [/]: switch view | a: my issues | /: search | r: refresh | h: help | Ctrl+C: quit"
        );
    }

    #[test]
    fn test_search_footer() {
        assert_eq!(
            generate_footer_hints(Mode::Search),
            "Enter: apply | Esc: cancel | Ctrl+C: quit"
        );
    }

    #[test]
    fn test_help_mentions_every_binding() {
        let text = generate_help_lines().join("\n");
        for binding in BINDINGS {
            assert!(text.contains(binding.description), "{}", binding.description);
        }
        assert!(text.contains("h, ?"));
        assert!(text.contains("Esc, Ctrl+q"));
    }
}
