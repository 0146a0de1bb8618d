/// Host-provided capability for dynamic grid state.
///
/// A query consults its `Context` for every candidate cell, so the host can
/// veto cells that are blocked only right now (moving units, closed doors)
/// and declare the goal reached before the exact end cell is stepped on.
///
/// Queries take an `Option<&dyn Context>`; `None` means "nothing is
/// dynamically blocked and only the exact end cell counts as the goal".
pub trait Context {
    /// Whether the cell at `(x, y)` is currently blocked.
    fn is_blocked(&self, x: i32, y: i32) -> bool;

    /// Whether `(x, y)` is close enough to the goal to count as reaching it.
    fn is_goal_reached(&self, x: i32, y: i32) -> bool;
}

/// [`Context`] built from two closures.
pub struct FnContext<B, G>
where
    B: Fn(i32, i32) -> bool,
    G: Fn(i32, i32) -> bool,
{
    is_blocked: B,
    is_goal_reached: G,
}

impl<B, G> FnContext<B, G>
where
    B: Fn(i32, i32) -> bool,
    G: Fn(i32, i32) -> bool,
{
    /// Wrap a blocking predicate and a goal predicate into a `Context`.
    pub fn new(is_blocked: B, is_goal_reached: G) -> Self {
        Self {
            is_blocked,
            is_goal_reached,
        }
    }
}

impl<B, G> Context for FnContext<B, G>
where
    B: Fn(i32, i32) -> bool,
    G: Fn(i32, i32) -> bool,
{
    fn is_blocked(&self, x: i32, y: i32) -> bool {
        (self.is_blocked)(x, y)
    }

    fn is_goal_reached(&self, x: i32, y: i32) -> bool {
        (self.is_goal_reached)(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fn_context_forwards_to_closures() {
        let ctx = FnContext::new(|x, _| x == 3, |_, y| y > 5);
        assert!(ctx.is_blocked(3, 0));
        assert!(!ctx.is_blocked(2, 0));
        assert!(ctx.is_goal_reached(0, 6));
        assert!(!ctx.is_goal_reached(0, 5));
    }
}
