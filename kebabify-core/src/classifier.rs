use serde::{Deserialize, Serialize};

/// Component families recognised by the allowlist policy.
pub const DEFAULT_PREFIXES: &[&str] = &[
    "Accordion", "Alert", "AlertDialog", "AspectRatio", "Avatar", "Badge", "Breadcrumb",
    "Button", "Calendar", "Card", "Carousel", "Chart", "Checkbox", "Collapsible", "Combobox",
    "Command", "ContextMenu", "Dialog", "Drawer", "DropdownMenu", "Form", "HoverCard", "Input",
    "Label", "Menubar", "NavigationMenu", "NumberField", "Pagination", "PinInput", "Popover",
    "Progress", "RadioGroup", "RangeCalendar", "Resizable", "ScrollArea", "Select", "Separator",
    "Sheet", "Sidebar", "Skeleton", "Slider", "Sonner", "Stepper", "Switch", "Table", "Tabs",
    "TagsInput", "Textarea", "Toast", "Toggle", "ToggleGroup", "Tooltip",
];

/// Type-level suffixes that never name a component file.
pub const DEFAULT_EXCLUDED_SUFFIXES: &[&str] = &["Props", "Emits", "Context"];

/// Fragments marking helper types, primitives re-exported from headless
/// libraries, and acronym-led utility types.
pub const DEFAULT_EXCLUDED_SUBSTRINGS: &[&str] = &[
    "Provider", "Portal", "Primitive", "Root", "HTML", "Attributes", "Variants",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierPolicy {
    /// Known component-family prefix, minus reserved suffixes and fragments
    #[default]
    Allowlist,
    /// Any identifier with a leading capital and at least one more capital
    Structural,
}

/// Classifier settings as they appear in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    #[serde(default)]
    pub policy: ClassifierPolicy,

    /// Replaces the built-in prefix list when set
    #[serde(default = "default_prefixes")]
    pub prefixes: Vec<String>,

    /// Appended to `prefixes`
    #[serde(default)]
    pub extra_prefixes: Vec<String>,

    #[serde(default = "default_excluded_suffixes")]
    pub excluded_suffixes: Vec<String>,

    #[serde(default = "default_excluded_substrings")]
    pub excluded_substrings: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            policy: ClassifierPolicy::default(),
            prefixes: default_prefixes(),
            extra_prefixes: Vec::new(),
            excluded_suffixes: default_excluded_suffixes(),
            excluded_substrings: default_excluded_substrings(),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn default_prefixes() -> Vec<String> {
    to_strings(DEFAULT_PREFIXES)
}

fn default_excluded_suffixes() -> Vec<String> {
    to_strings(DEFAULT_EXCLUDED_SUFFIXES)
}

fn default_excluded_substrings() -> Vec<String> {
    to_strings(DEFAULT_EXCLUDED_SUBSTRINGS)
}

/// Decides whether an identifier names a renamable component.
#[derive(Debug, Clone)]
pub struct Classifier {
    policy: ClassifierPolicy,
    prefixes: Vec<String>,
    excluded_suffixes: Vec<String>,
    excluded_substrings: Vec<String>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(&ClassifierConfig::default())
    }
}

impl Classifier {
    pub fn new(config: &ClassifierConfig) -> Self {
        let mut prefixes = config.prefixes.clone();
        for extra in &config.extra_prefixes {
            if !prefixes.contains(extra) {
                prefixes.push(extra.clone());
            }
        }

        Self {
            policy: config.policy,
            prefixes,
            excluded_suffixes: config.excluded_suffixes.clone(),
            excluded_substrings: config.excluded_substrings.clone(),
        }
    }

    /// Classifier using the structural policy and no lists.
    pub fn structural() -> Self {
        Self::new(&ClassifierConfig {
            policy: ClassifierPolicy::Structural,
            ..ClassifierConfig::default()
        })
    }

    pub fn policy(&self) -> ClassifierPolicy {
        self.policy
    }

    pub fn is_component(&self, name: &str) -> bool {
        if !is_capitalized_identifier(name) {
            return false;
        }

        match self.policy {
            ClassifierPolicy::Structural => name.chars().skip(1).any(|c| c.is_ascii_uppercase()),
            ClassifierPolicy::Allowlist => self.allowed(name),
        }
    }

    fn allowed(&self, name: &str) -> bool {
        if is_constant(name) {
            return false;
        }
        if self.excluded_suffixes.iter().any(|s| name.ends_with(s.as_str())) {
            return false;
        }
        if self
            .excluded_substrings
            .iter()
            .any(|s| name.contains(s.as_str()))
        {
            return false;
        }

        self.prefixes.iter().any(|prefix| has_word_prefix(name, prefix))
    }
}

/// Leading ASCII capital followed only by ASCII alphanumerics.
fn is_capitalized_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}

fn is_constant(name: &str) -> bool {
    name.len() > 1 && !name.chars().any(|c| c.is_ascii_lowercase())
}

/// `prefix` matches a whole leading word group: `Tabs` matches `TabsList`
/// but `Tab` does not match `Table`.
fn has_word_prefix(name: &str, prefix: &str) -> bool {
    match name.strip_prefix(prefix) {
        Some(rest) => rest
            .chars()
            .next()
            .map_or(true, |c| c.is_ascii_uppercase() || c.is_ascii_digit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowlist_policy() {
        let classifier = Classifier::default();
        let cases = [
            ("", false),
            ("Button", true),
            ("ButtonGroup", true),
            ("ButtonProps", false),
            ("ButtonEmits", false),
            ("ButtonContext", false),
            ("HTMLAttributes", false),
            ("SOURCE", false),
            ("ChevronRight", false),
            ("ButtonProvider", false),
            ("ButtonPortal", false),
            ("AccordionTrigger", true),
            ("MyClass", false),
            ("button-group", false),
            ("buttonGroup", false),
        ];

        for (input, expected) in cases {
            assert_eq!(
                classifier.is_component(input),
                expected,
                "is_component({input:?})"
            );
        }
    }

    #[test]
    fn test_structural_policy() {
        let classifier = Classifier::structural();
        assert!(classifier.is_component("MyClass"));
        assert!(classifier.is_component("ButtonProvider"));
        assert!(classifier.is_component("SOURCE"));
        assert!(!classifier.is_component("Button"));
        assert!(!classifier.is_component(""));
        assert!(!classifier.is_component("buttonGroup"));
        assert!(!classifier.is_component("Button-Group"));
    }

    #[test]
    fn test_prefix_requires_word_boundary() {
        let classifier = Classifier::default();
        assert!(classifier.is_component("TabsList"));
        assert!(classifier.is_component("Table"));
        assert!(!classifier.is_component("Buttonish"));
        assert!(classifier.is_component("Button2"));
    }

    #[test]
    fn test_headless_primitives_rejected() {
        let classifier = Classifier::default();
        assert!(!classifier.is_component("DialogRoot"));
        assert!(!classifier.is_component("TooltipProvider"));
        assert!(classifier.is_component("DialogContent"));
    }

    #[test]
    fn test_extra_prefixes_extend_defaults() {
        let config = ClassifierConfig {
            extra_prefixes: vec!["Kbd".to_string()],
            ..ClassifierConfig::default()
        };
        let classifier = Classifier::new(&config);
        assert!(classifier.is_component("KbdGroup"));
        assert!(classifier.is_component("Button"));
    }

    #[test]
    fn test_replaced_prefixes() {
        let config = ClassifierConfig {
            prefixes: vec!["Widget".to_string()],
            ..ClassifierConfig::default()
        };
        let classifier = Classifier::new(&config);
        assert!(classifier.is_component("WidgetHeader"));
        assert!(!classifier.is_component("Button"));
    }
}
