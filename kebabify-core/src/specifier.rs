use crate::pattern::split_stem;
use crate::walk::DEFAULT_EXTENSIONS;

pub const DEFAULT_ALIASES: &[&str] = &["@/", "~/"];

/// Decides which module specifiers point into the project and which of
/// their segments name something the tree walk will rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecifierRules {
    aliases: Vec<String>,
    extensions: Vec<String>,
}

impl Default for SpecifierRules {
    fn default() -> Self {
        Self {
            aliases: DEFAULT_ALIASES.iter().map(|s| (*s).to_string()).collect(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl SpecifierRules {
    /// `aliases` are path prefixes such as `@/`; `extensions` are the
    /// renamable file extensions, without the dot.
    pub fn new(aliases: &[String], extensions: &[String]) -> Self {
        Self {
            aliases: aliases.to_vec(),
            extensions: extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_string())
                .collect(),
        }
    }

    /// Relative, absolute, or under a configured alias. Bare package
    /// specifiers (`vue3-carousel/Carousel`) are not local.
    pub fn is_local(&self, spec: &str) -> bool {
        spec.starts_with('.')
            || spec.starts_with('/')
            || self.aliases.iter().any(|alias| spec.starts_with(alias.as_str()))
    }

    /// Stem and extension of a segment the tree walk can rename.
    ///
    /// Directory segments always qualify. The last segment qualifies when it
    /// has no extension or its final extension is a renamable one, so
    /// `Button.css` next to `Button.vue` is left alone.
    pub fn renamable<'a>(&self, segment: &'a str, last: bool) -> Option<(&'a str, &'a str)> {
        let (stem, ext) = split_stem(segment);
        if stem.is_empty() || stem.starts_with('.') {
            return None;
        }
        if last && !ext.is_empty() {
            let final_ext = ext.rsplit('.').next().unwrap_or_default();
            if !self.extensions.iter().any(|e| e == final_ext) {
                return None;
            }
        }
        Some((stem, ext))
    }
}
