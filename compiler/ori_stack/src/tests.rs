use super::*;

/// Nesting depth far beyond what a default 2MB test thread survives.
const DEEP: u32 = 200_000;

#[test]
fn nested_recursion_grows_the_stack() {
    fn depth(n: u32) -> u32 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
    }

    assert_eq!(depth(DEEP), DEEP);
}

#[test]
fn passes_results_through() {
    let parsed: Result<u8, String> = ensure_sufficient_stack(|| Ok(7));
    assert_eq!(parsed, Ok(7));
    assert_eq!(ensure_sufficient_stack(|| "leaf"), "leaf");
}

