//! Scenario: Scripting a role change from the shell
//!
//! Journey: A deploy script computes a role's next selection step by step,
//! feeding each result back through `--selected`.
//!
//! Success Criteria:
//! - Every step prints the full next selection
//! - The final permission list matches the selection

use crate::common::*;

fn selected_ids(result: &TestResult) -> String {
    let last = result.stdout.lines().last().unwrap_or_default();
    last.strip_prefix("Selected: ")
        .unwrap_or_else(|| panic!("unexpected output:\n{}", result.stdout))
        .replace("(none)", "")
}

/// SCENARIO: Chaining toggles through --selected
#[test]
fn scenario_chained_toggles() {
    let env = TestEnv::new();
    env.write("menus.json", ROLE_TREE_JSON);

    let result = env.run(&["toggle", "-t", "menus.json", "-n", "2"]);
    assert!(result.success, "toggle failed: {}", result.stderr);
    let selected = selected_ids(&result);
    assert_eq!(selected, "1,2,4,5");

    let result = env.run(&["toggle", "-t", "menus.json", "-s", &selected, "-n", "5", "--uncheck"]);
    assert!(result.success, "toggle failed: {}", result.stderr);
    let selected = selected_ids(&result);
    assert_eq!(selected, "1,2,4");

    let result = env.run(&["permissions", "-t", "menus.json", "-s", &selected]);
    assert!(result.success);
    assert_eq!(result.stdout.trim(), "system:role:add");

    let result = env.run(&["toggle", "-t", "menus.json", "-s", &selected, "-n", "4", "--uncheck"]);
    assert_eq!(selected_ids(&result), "");
}
