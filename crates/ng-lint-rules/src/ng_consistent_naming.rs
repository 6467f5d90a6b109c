//! Rule to keep Angular class, file, selector, and pipe names consistent.
//!
//! # Rationale
//!
//! The Angular style guide ties a decorated class's name to its file name
//! (`user-profile.service.ts` / `UserProfileService`) and, for components,
//! directives, and pipes, to the metadata it declares (selector, template
//! file, pipe name). Divergence makes symbols hard to locate.
//!
//! # Configuration
//!
//! - `vendor_prefixes`: selector prefixes that may be stripped before the
//!   comparison (default: empty, meaning no prefix is stripped)

use ng_lint_core::{walk, Node, Rule, Severity, SourceDocument, Violation};

use crate::decorators::{class_decorators, decorator_call, marker_args, MarkerArgs};

/// Rule code for ng-consistent-naming.
pub const CODE: &str = "NG001";

/// Rule name for ng-consistent-naming.
pub const NAME: &str = "ng-consistent-naming";

const STYLEGUIDE_URL: &str = "https://angular.io/guide/styleguide#symbols-and-file-names";

/// Checks naming consistency of decorated Angular classes.
#[derive(Debug, Clone, Default)]
pub struct NgConsistentNaming {
    /// Accepted selector vendor prefixes (e.g., `app-`).
    pub vendor_prefixes: Vec<String>,
}

impl NgConsistentNaming {
    /// Creates a new rule with no vendor prefixes configured.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the accepted vendor prefixes.
    #[must_use]
    pub fn vendor_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vendor_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    fn check_class(&self, doc: &SourceDocument, class: Node<'_>, violations: &mut Vec<Violation>) {
        // A class with no identifiable name is malformed; skip it rather
        // than fail the traversal.
        let Some(name_node) = class.child_by_field_name("name") else {
            return;
        };
        let class_name = doc.node_text(name_node).to_string();

        for decorator in class_decorators(class) {
            let Some((marker, call)) = decorator_call(doc, decorator) else {
                continue;
            };
            let args = marker_args(doc, call);

            match marker.as_str() {
                "NgModule" => self.check_module(doc, class, &class_name, violations),
                "Injectable" => self.check_service(doc, class, &class_name, violations),
                "Component" => self.check_component(doc, class, &class_name, &args, violations),
                "Directive" => self.check_directive(doc, class, &class_name, &args, violations),
                "Pipe" => self.check_pipe(doc, class, &class_name, &args, violations),
                _ => {}
            }
        }
    }

    fn check_module(
        &self,
        doc: &SourceDocument,
        class: Node<'_>,
        class_name: &str,
        violations: &mut Vec<Violation>,
    ) {
        let file = doc.path().to_string_lossy();
        if !file_name_matches(&file, class_name, "Module", ".module.ts") {
            violations.push(self.failure(doc, class, "Inconsistent Angular module naming"));
        }
    }

    fn check_service(
        &self,
        doc: &SourceDocument,
        class: Node<'_>,
        class_name: &str,
        violations: &mut Vec<Violation>,
    ) {
        let file = doc.path().to_string_lossy();
        if !file_name_matches(&file, class_name, "Service", ".service.ts") {
            violations.push(self.failure(doc, class, "Inconsistent Angular service naming"));
        }
    }

    fn check_component(
        &self,
        doc: &SourceDocument,
        class: Node<'_>,
        class_name: &str,
        args: &MarkerArgs,
        violations: &mut Vec<Violation>,
    ) {
        let file = doc.path().to_string_lossy();
        if !file_name_matches(&file, class_name, "Component", ".component.ts") {
            violations.push(self.failure(doc, class, "Inconsistent Angular component naming"));
        }

        if let Some(template_url) = &args.template_url {
            if !file_name_matches(template_url, class_name, "Component", ".component.html") {
                violations.push(self.failure(
                    doc,
                    class,
                    "Inconsistent Angular component template naming",
                ));
            }
        }

        if let Some(selector) = &args.selector {
            let stripped = strip_class_suffix(class_name, "Component");
            if !self.component_selector_matches(selector, stripped) {
                violations.push(self.failure(
                    doc,
                    class,
                    "Selector does not match the Angular component class name",
                ));
            }
        }
    }

    fn check_directive(
        &self,
        doc: &SourceDocument,
        class: Node<'_>,
        class_name: &str,
        args: &MarkerArgs,
        violations: &mut Vec<Violation>,
    ) {
        let file = doc.path().to_string_lossy();
        if !file_name_matches(&file, class_name, "Directive", ".directive.ts") {
            violations.push(self.failure(doc, class, "Inconsistent Angular directive naming"));
        }

        if let Some(selector) = &args.selector {
            let stripped = strip_class_suffix(class_name, "Directive");
            if !self.directive_selector_matches(selector, stripped) {
                violations.push(self.failure(
                    doc,
                    class,
                    "Selector does not match the Angular directive class name",
                ));
            }
        }
    }

    fn check_pipe(
        &self,
        doc: &SourceDocument,
        class: Node<'_>,
        class_name: &str,
        args: &MarkerArgs,
        violations: &mut Vec<Violation>,
    ) {
        let file = doc.path().to_string_lossy();
        if !file_name_matches(&file, class_name, "Pipe", ".pipe.ts") {
            violations.push(self.failure(doc, class, "Inconsistent Angular pipe naming"));
        }

        if let Some(name) = &args.name {
            let stripped = strip_class_suffix(class_name, "Pipe");
            if stripped != capitalize_first(name) {
                violations.push(self.failure(
                    doc,
                    class,
                    "Name does not match the Angular pipe class name",
                ));
            }
        }
    }

    /// Component selectors compare by stripping one vendor prefix, trimming
    /// leftover dashes, and converting the remainder to Pascal case, so that
    /// prefixes configured with or without a trailing dash both work.
    fn component_selector_matches(&self, selector: &str, stripped_class: &str) -> bool {
        let rest = self.strip_vendor_prefix(selector);
        let rest = rest.trim_start_matches('-');
        dash_to_pascal(rest) == stripped_class
    }

    /// Directive selectors must contain the bracketed attribute form
    /// `[<prefix><Name>]`; with no prefixes configured, plain `[<Name>]`.
    fn directive_selector_matches(&self, selector: &str, stripped_class: &str) -> bool {
        if self.vendor_prefixes.is_empty() {
            return selector.contains(&format!("[{stripped_class}]"));
        }
        self.vendor_prefixes
            .iter()
            .any(|prefix| selector.contains(&format!("[{prefix}{stripped_class}]")))
    }

    fn strip_vendor_prefix<'a>(&self, selector: &'a str) -> &'a str {
        for prefix in &self.vendor_prefixes {
            if prefix.is_empty() {
                continue;
            }
            if let Some(rest) = selector.strip_prefix(prefix.as_str()) {
                return rest;
            }
        }
        selector
    }

    fn failure(&self, doc: &SourceDocument, class: Node<'_>, message: &str) -> Violation {
        Violation::new(
            CODE,
            NAME,
            Severity::Error,
            doc.location_at_start(class),
            message,
        )
        .with_doc_ref(STYLEGUIDE_URL)
    }
}

impl Rule for NgConsistentNaming {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Keeps Angular class, file, selector, and pipe names consistent"
    }

    fn check(&self, doc: &SourceDocument) -> Vec<Violation> {
        let mut violations = Vec::new();
        walk(doc.root(), &mut |node| {
            if node.kind() == "class_declaration" {
                self.check_class(doc, node, &mut violations);
            }
        });
        violations
    }
}

/// Converts `my-name` to `myName`: the letter after each dash is uppercased
/// and the dash removed.
fn dash_to_camel(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut upper_next = false;
    for c in s.chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Converts `search-box` to `SearchBox` (camel case with the first letter
/// uppercased as well).
fn dash_to_pascal(s: &str) -> String {
    dash_to_camel(&format!("-{s}"))
}

fn strip_class_suffix<'a>(class_name: &'a str, suffix: &str) -> &'a str {
    class_name.strip_suffix(suffix).unwrap_or(class_name)
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn base_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Whether the dash-case base of `path` (minus `file_suffix`) names the same
/// symbol as `class_name` (minus `class_suffix`).
fn file_name_matches(path: &str, class_name: &str, class_suffix: &str, file_suffix: &str) -> bool {
    let base = base_name(path);
    let base = base.strip_suffix(file_suffix).unwrap_or(base);
    dash_to_pascal(base) == strip_class_suffix(class_name, class_suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(path: &str, src: &str) -> Vec<Violation> {
        let doc = SourceDocument::parse(path, src).expect("parse failed");
        NgConsistentNaming::new().check(&doc)
    }

    fn check_with_prefixes(path: &str, src: &str, prefixes: &[&str]) -> Vec<Violation> {
        let doc = SourceDocument::parse(path, src).expect("parse failed");
        NgConsistentNaming::new()
            .vendor_prefixes(prefixes.iter().copied())
            .check(&doc)
    }

    #[test]
    fn conversion_helpers() {
        assert_eq!(dash_to_camel("my-name"), "myName");
        assert_eq!(dash_to_pascal("search-box"), "SearchBox");
        assert_eq!(dash_to_pascal("user"), "User");
        assert_eq!(capitalize_first("currencyFormat"), "CurrencyFormat");
    }

    #[test]
    fn undecorated_classes_produce_nothing() {
        let violations = check("whatever.ts", "class UserProfileService {}\n");
        assert!(violations.is_empty());
    }

    #[test]
    fn consistent_service_passes() {
        let violations = check(
            "src/app/user-profile.service.ts",
            "@Injectable()\nexport class UserProfileService {}\n",
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn mismatched_service_file_fails() {
        let violations = check(
            "src/app/user.service.ts",
            "@Injectable()\nexport class UserProfileService {}\n",
        );
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("service naming"));
        assert_eq!(violations[0].location.line, 2);
    }

    #[test]
    fn consistent_module_passes() {
        let violations = check(
            "src/app/shared.module.ts",
            "@NgModule({})\nexport class SharedModule {}\n",
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn component_selector_with_vendor_prefix_passes() {
        let violations = check_with_prefixes(
            "src/app/search-box.component.ts",
            "@Component({selector: \"app-search-box\", templateUrl: \"./search-box.component.html\"})\nexport class SearchBoxComponent {}\n",
            &["app-"],
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn prefix_without_trailing_dash_also_passes() {
        let violations = check_with_prefixes(
            "src/app/search-box.component.ts",
            "@Component({selector: \"app-search-box\"})\nexport class SearchBoxComponent {}\n",
            &["app"],
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn wrong_selector_fails() {
        let violations = check_with_prefixes(
            "src/app/search-box.component.ts",
            "@Component({selector: \"wrong-name\"})\nexport class SearchBoxComponent {}\n",
            &["app-"],
        );
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("Selector"));
    }

    #[test]
    fn empty_prefix_set_strips_nothing() {
        let violations = check(
            "src/app/search-box.component.ts",
            "@Component({selector: \"app-search-box\"})\nexport class SearchBoxComponent {}\n",
        );
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn missing_metadata_skips_sub_checks() {
        let violations = check(
            "src/app/search-box.component.ts",
            "@Component({})\nexport class SearchBoxComponent {}\n",
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn template_url_mismatch_fails() {
        let violations = check(
            "src/app/search-box.component.ts",
            "@Component({templateUrl: \"./other.component.html\"})\nexport class SearchBoxComponent {}\n",
        );
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("template"));
    }

    #[test]
    fn directive_selector_passes_with_prefix() {
        let violations = check_with_prefixes(
            "src/app/highlight.directive.ts",
            "@Directive({selector: \"[appHighlight]\"})\nexport class HighlightDirective {}\n",
            &["app"],
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn directive_selector_without_bracket_form_fails() {
        let violations = check_with_prefixes(
            "src/app/highlight.directive.ts",
            "@Directive({selector: \"appHighlight\"})\nexport class HighlightDirective {}\n",
            &["app"],
        );
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn pipe_name_matches_class() {
        let violations = check(
            "src/app/currency-format.pipe.ts",
            "@Pipe({name: \"currencyFormat\"})\nexport class CurrencyFormatPipe {}\n",
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn pipe_name_mismatch_fails() {
        let violations = check(
            "src/app/currency-format.pipe.ts",
            "@Pipe({name: \"moneyFormat\"})\nexport class CurrencyFormatPipe {}\n",
        );
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("pipe class name"));
    }

    #[test]
    fn failures_carry_styleguide_ref() {
        let violations = check(
            "src/app/user.service.ts",
            "@Injectable()\nexport class UserProfileService {}\n",
        );
        assert_eq!(violations[0].doc_ref.as_deref(), Some(STYLEGUIDE_URL));
    }

    #[test]
    fn file_and_selector_failures_both_fire() {
        let violations = check_with_prefixes(
            "src/app/wrong.component.ts",
            "@Component({selector: \"also-wrong\"})\nexport class SearchBoxComponent {}\n",
            &["app-"],
        );
        assert_eq!(violations.len(), 2);
    }
}
