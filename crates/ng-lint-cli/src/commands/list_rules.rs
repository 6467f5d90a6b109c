//! List rules command implementation.

use ng_lint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<30} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in all_rules() {
        println!(
            "{:<10} {:<30} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    // NG005 needs a banner file, so it has no default instance to query.
    println!(
        "{:<10} {:<30} {}",
        "NG005",
        "require-license-banner",
        "Requires matched files to start with the license banner"
    );

    println!("\nNG001, NG002, and NG004 run by default. NG003 replaces NG002 for");
    println!("codebases that keep every decorator on its own line, and NG005 runs");
    println!("when [license-banner] is configured in ng-lint.toml.");
}
