//! Rule presets for common configurations.

use crate::{DecoratorLayout, NgConsistentNaming, NoEmptyLinesNearBrackets};
use ng_lint_core::RuleBox;

/// Returns the default set of rules.
///
/// Includes:
/// - `ng-consistent-naming` (NG001) - Angular naming consistency
/// - `consistent-decorator-layout` (NG002) - Decorator placement
/// - `no-empty-lines-near-brackets` (NG004) - Bracket spacing
///
/// `require-license-banner` (NG005) is not part of any preset: it needs a
/// banner file, so the caller adds it when one is configured. NG003 is the
/// stricter historical variant of NG002 and is opt-in.
#[must_use]
pub fn default_rules() -> Vec<RuleBox> {
    vec![
        Box::new(NgConsistentNaming::new()),
        Box::new(DecoratorLayout::consistent()),
        Box::new(NoEmptyLinesNearBrackets::new()),
    ]
}

/// Returns every preset-capable rule, including the strict decorator
/// variant.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(NgConsistentNaming::new()),
        Box::new(DecoratorLayout::consistent()),
        Box::new(DecoratorLayout::own_line_only()),
        Box::new(NoEmptyLinesNearBrackets::new()),
    ]
}
