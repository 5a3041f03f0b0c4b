/// Convert a PascalCase (or camelCase) identifier to kebab-case.
///
/// A hyphen is inserted before every uppercase letter that starts a new
/// word. An uppercase letter starts a word when it is not the first
/// character and either follows a non-uppercase character or is followed
/// by a lowercase one, so acronym runs stay together and only split at
/// their trailing boundary: `HTMLInput` becomes `html-input`.
///
/// `UI` is folded to `Ui` beforehand so `UIButton` becomes `ui-button`.
///
/// The output never contains uppercase letters, which makes the function
/// idempotent.
pub fn to_kebab(identifier: &str) -> String {
    if identifier.is_empty() {
        return String::new();
    }

    let normalized = identifier.replace("UI", "Ui");
    let chars: Vec<char> = normalized.chars().collect();
    let mut result = String::with_capacity(normalized.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 && starts_word(&chars, i) {
            result.push('-');
        }
        result.extend(c.to_lowercase());
    }

    result
}

fn starts_word(chars: &[char], i: usize) -> bool {
    let prev = chars[i - 1];
    // Already separated
    if prev == '-' || prev == '_' {
        return false;
    }
    let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
    !prev.is_uppercase() || next_is_lower
}

/// True when the identifier is already in kebab-case form, i.e.
/// converting it again would not change it.
pub fn is_kebab(identifier: &str) -> bool {
    !identifier.chars().any(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_to_kebab_examples() {
        let cases = [
            ("", ""),
            ("Button", "button"),
            ("ButtonGroup", "button-group"),
            ("UIButton", "ui-button"),
            ("Button2Group", "button2-group"),
            ("HTMLInput", "html-input"),
            ("button-group", "button-group"),
            ("DialogContentPanel", "dialog-content-panel"),
            ("AlertDialog", "alert-dialog"),
        ];

        for (input, expected) in cases {
            assert_eq!(to_kebab(input), expected, "to_kebab({input:?})");
        }
    }

    #[test]
    fn test_trailing_acronym_stays_together() {
        assert_eq!(to_kebab("InputOTP"), "input-otp");
        assert_eq!(to_kebab("SidebarUI"), "sidebar-ui");
    }

    #[test]
    fn test_camel_case_input() {
        assert_eq!(to_kebab("buttonGroup"), "button-group");
    }

    #[test]
    fn test_existing_separator_is_not_doubled() {
        assert_eq!(to_kebab("Button-Group"), "button-group");
    }

    #[test]
    fn test_is_kebab() {
        assert!(is_kebab("button-group"));
        assert!(is_kebab(""));
        assert!(!is_kebab("ButtonGroup"));
    }

    proptest! {
        #[test]
        fn prop_to_kebab_is_idempotent(s in "[A-Za-z0-9]{0,24}") {
            let once = to_kebab(&s);
            prop_assert_eq!(to_kebab(&once), once.clone());
            prop_assert!(is_kebab(&once));
        }

        #[test]
        fn prop_to_kebab_only_adds_hyphens(s in "[A-Z][a-z0-9]{0,6}([A-Z][a-z0-9]{0,6}){0,4}") {
            let kebab = to_kebab(&s);
            prop_assert_eq!(kebab.replace('-', ""), s.replace("UI", "Ui").to_lowercase());
        }
    }
}
