//! Stack growth for recursive descent.
//!
//! The parser, the AST dump and the visitor recurse once per nesting
//! level, so `((((x))))` or deeply nested blocks can exhaust a thread's
//! native stack. Recursive functions run under [`ensure_sufficient_stack`],
//! which moves onto a freshly allocated segment when the remaining stack
//! drops below a red zone.
//!
//! On `wasm32` the closure is called directly.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one is
/// nearly exhausted.
///
/// ```text
/// pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, expr: &'ast Expr) {
///     ensure_sufficient_stack(|| walk_expr_children(visitor, expr));
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
