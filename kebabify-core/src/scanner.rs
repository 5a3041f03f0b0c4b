use crate::classifier::Classifier;
use crate::pattern::{identifier_regex, specifier_regex, statement_regex, strip_comments};
use crate::specifier::SpecifierRules;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A component identifier found in a file, with the byte offset of its
/// first occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
    pub offset: usize,
}

/// Extract component identifiers referenced by import/export statements.
///
/// Comments are stripped first. Only statements whose specifier is local
/// (relative or under an alias) count. Their bindings (default, named,
/// namespace, re-exported) and every renamable segment of the specifier are
/// offered to the classifier. The result is deduplicated and ordered by
/// first occurrence.
pub fn scan(text: &str, classifier: &Classifier) -> Vec<Identifier> {
    scan_with_rules(text, classifier, &SpecifierRules::default())
}

pub fn scan_with_rules(text: &str, classifier: &Classifier, rules: &SpecifierRules) -> Vec<Identifier> {
    let stripped = strip_comments(text);
    let mut candidates: Vec<(usize, &str)> = Vec::new();

    for caps in statement_regex().captures_iter(&stripped) {
        if !rules.is_local(&caps["spec"]) {
            continue;
        }
        if let Some(clause) = caps.name("clause") {
            collect_bindings(clause.as_str(), clause.start(), &mut candidates);
        }
    }

    for caps in specifier_regex().captures_iter(&stripped) {
        if let Some(spec) = caps.name("spec").filter(|spec| rules.is_local(spec.as_str())) {
            collect_segments(spec.as_str(), spec.start(), rules, &mut candidates);
        }
    }

    candidates.sort_by_key(|(offset, _)| *offset);

    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|(_, name)| classifier.is_component(name))
        .filter(|(_, name)| seen.insert(*name))
        .map(|(offset, name)| Identifier {
            name: name.to_string(),
            offset,
        })
        .collect()
}

/// Names only, in first-seen order.
pub fn scan_names(text: &str, classifier: &Classifier) -> Vec<String> {
    scan(text, classifier).into_iter().map(|id| id.name).collect()
}

/// Bound names in an import/export clause.
///
/// For `A as B` list items the original name `A` counts, except that
/// `default as B` yields `B`. For `* as Ns` the namespace name counts.
fn collect_bindings<'a>(clause: &'a str, base: usize, out: &mut Vec<(usize, &'a str)>) {
    let mut rest = clause;
    let mut offset = base;

    // Leading default binding: `Button` or `Button, { ... }`
    if !rest.starts_with('{') && !rest.starts_with('*') {
        let end = rest.find(',').unwrap_or(rest.len());
        push_first_identifier(&rest[..end], offset, out);
        if end == rest.len() {
            return;
        }
        let skip = end + 1;
        let trimmed = rest[skip..].trim_start();
        offset += skip + (rest[skip..].len() - trimmed.len());
        rest = trimmed;
    }

    if let Some(namespace) = rest.strip_prefix('*') {
        let ns = namespace.trim_start();
        if let Some(after_as) = ns.strip_prefix("as") {
            let name_offset = offset + 1 + (namespace.len() - after_as.len());
            push_first_identifier(after_as, name_offset, out);
        }
        return;
    }

    if let Some(list) = rest.strip_prefix('{') {
        let list = list.strip_suffix('}').unwrap_or(list);
        let mut item_offset = offset + 1;
        for item in list.split(',') {
            collect_list_item(item, item_offset, out);
            item_offset += item.len() + 1;
        }
    }
}

fn collect_list_item<'a>(item: &'a str, base: usize, out: &mut Vec<(usize, &'a str)>) {
    let words: Vec<regex::Match<'a>> = identifier_regex().find_iter(item).collect();
    let words: Vec<regex::Match<'a>> = match words.first() {
        Some(first) if first.as_str() == "type" && words.len() > 1 => words[1..].to_vec(),
        _ => words,
    };

    let chosen = match words.as_slice() {
        [original, alias_kw, alias, ..] if alias_kw.as_str() == "as" => {
            if original.as_str() == "default" {
                alias
            } else {
                original
            }
        },
        [name, ..] => name,
        [] => return,
    };

    out.push((base + chosen.start(), chosen.as_str()));
}

fn push_first_identifier<'a>(text: &'a str, base: usize, out: &mut Vec<(usize, &'a str)>) {
    if let Some(m) = identifier_regex().find(text) {
        out.push((base + m.start(), m.as_str()));
    }
}

/// Stems of the `/`-separated segments of a module specifier that the
/// tree walk could rename.
fn collect_segments<'a>(
    spec: &'a str,
    base: usize,
    rules: &SpecifierRules,
    out: &mut Vec<(usize, &'a str)>,
) {
    let count = spec.split('/').count();
    let mut offset = base;
    for (index, segment) in spec.split('/').enumerate() {
        if let Some((stem, _)) = rules.renamable(segment, index + 1 == count) {
            out.push((offset, stem));
        }
        offset += segment.len() + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(text: &str) -> Vec<String> {
        scan_names(text, &Classifier::default())
    }

    #[test]
    fn test_no_imports() {
        assert!(names("const x = 1\nexport default {}").is_empty());
    }

    #[test]
    fn test_same_component_imported_twice() {
        let text = "import Button from './Button.vue'\nimport { Button } from '@/components/ui/Button'";
        assert_eq!(names(text), vec!["Button"]);
    }

    #[test]
    fn test_namespace_and_aliased_imports() {
        let text = "import * as Components from './Button'\nimport { Button as CustomButton } from './Button'";
        assert_eq!(names(text), vec!["Button"]);
    }

    #[test]
    fn test_multiline_named_imports() {
        let text = "import {\n  Button,\n  ButtonGroup\n} from '@/components/ui/Button'";
        assert_eq!(names(text), vec!["Button", "ButtonGroup"]);
    }

    #[test]
    fn test_commented_imports_are_ignored() {
        let text = "// import Button from './Button.vue'\n/* import Dialog from './Dialog.vue' */";
        assert!(names(text).is_empty());
    }

    #[test]
    fn test_default_reexport_counts_alias() {
        let text = "export { default as AccordionItem } from './AccordionItem.vue'";
        assert_eq!(names(text), vec!["AccordionItem"]);
    }

    #[test]
    fn test_named_reexport_counts_original() {
        let text = "export { Tabs as TabsRoot2, TabsList } from './tabs'";
        assert_eq!(names(text), vec!["Tabs", "TabsList"]);
    }

    #[test]
    fn test_type_modifiers_are_skipped() {
        let text = "import { type ButtonVariants, type ButtonProps, Button } from './Button'";
        assert_eq!(names(text), vec!["Button"]);
    }

    #[test]
    fn test_directory_segments_are_candidates() {
        let text = "import { DialogContent } from '@/components/ui/Dialog/DialogContent'";
        assert_eq!(names(text), vec!["DialogContent", "Dialog"]);
    }

    #[test]
    fn test_default_plus_named_clause() {
        let text = "import Select, { SelectItem } from './select'";
        assert_eq!(names(text), vec!["Select", "SelectItem"]);
    }

    #[test]
    fn test_template_usage_is_not_a_reference() {
        let text = "<template>\n  <Button>Click</Button>\n  <Dialog />\n</template>";
        assert!(names(text).is_empty());
    }

    #[test]
    fn test_plain_code_is_not_a_reference() {
        let text = "const template = '<Button>Click me</Button>'\nconst card = new Card()";
        assert!(names(text).is_empty());
    }

    #[test]
    fn test_offsets_point_at_identifier() {
        let text = "import { Card } from './x'";
        let found = scan(text, &Classifier::default());
        assert_eq!(found.len(), 1);
        assert_eq!(&text[found[0].offset..found[0].offset + 4], "Card");
    }

    #[test]
    fn test_namespace_offset() {
        let text = "import * as Command from './lib'";
        let found = scan(text, &Classifier::default());
        assert_eq!(found[0].name, "Command");
        assert_eq!(&text[found[0].offset..found[0].offset + 7], "Command");
    }

    #[test]
    fn test_structural_policy_scan() {
        let text = "import { MyClass } from './MyClass'";
        assert_eq!(scan_names(text, &Classifier::structural()), vec!["MyClass"]);
        assert!(names(text).is_empty());
    }

    #[test]
    fn test_package_imports_are_not_references() {
        let text = "import { Carousel } from 'vue3-carousel/Carousel'\nimport { DialogRoot } from 'radix-vue'";
        assert!(names(text).is_empty());
    }

    #[test]
    fn test_configured_alias_counts_as_local() {
        let rules = SpecifierRules::new(&["#ui/".to_string()], &["vue".to_string()]);
        let text = "import Card from '#ui/Card.vue'\nimport Tabs from '@/components/ui/Tabs.vue'";
        assert_eq!(
            scan_with_rules(text, &Classifier::default(), &rules)
                .into_iter()
                .map(|id| id.name)
                .collect::<Vec<_>>(),
            vec!["Card"]
        );
    }

    #[test]
    fn test_import_after_glob_pattern_is_found() {
        let text = "const pages = import.meta.glob('./pages/*.vue')\nimport Card from './Card.vue'\n";
        assert_eq!(names(text), vec!["Card"]);
    }

    #[test]
    fn test_stylesheet_segment_is_not_a_candidate() {
        let text = "import './Button.css'\nimport './Dialog/styles.css'";
        assert_eq!(names(text), vec!["Dialog"]);
    }

    #[test]
    fn test_prose_in_template_is_not_a_reference() {
        let text = "<template>\n  <p>Pick a layout from './Card.vue' or './Table.vue'</p>\n</template>";
        assert!(names(text).is_empty());
    }
}
