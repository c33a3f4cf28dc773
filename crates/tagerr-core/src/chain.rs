//! Walking and rendering `Error::source()` chains.

use std::error::Error;
use std::fmt;

/// Iterator over an error and all of its causes, outer error first.
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Chain<'a> {
    pub fn new(head: &'a (dyn Error + 'static)) -> Self {
        Self { next: Some(head) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

/// The innermost cause of `err` (or `err` itself when it has none).
pub fn root_cause<'a>(err: &'a (dyn Error + 'static)) -> &'a (dyn Error + 'static) {
    Chain::new(err).last().unwrap_or(err)
}

/// Diagnostic trace of an error chain.
///
/// Renders the outer message, then one `Caused by:` line per cause.
#[derive(Clone, Copy)]
pub struct Trace<'a> {
    head: &'a (dyn Error + 'static),
}

impl<'a> Trace<'a> {
    pub fn new(head: &'a (dyn Error + 'static)) -> Self {
        Self { head }
    }

    /// Number of errors in the chain, including the outer one.
    pub fn depth(&self) -> usize {
        Chain::new(self.head).count()
    }
}

impl fmt::Display for Trace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut chain = Chain::new(self.head);
        if let Some(outer) = chain.next() {
            write!(f, "{outer}")?;
        }
        for cause in chain {
            write!(f, "\nCaused by: {cause}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Trace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(Chain::new(self.head).map(|e| e.to_string())).finish()
    }
}

/// Shorthand for [`Trace::new`].
pub fn trace<'a>(err: &'a (dyn Error + 'static)) -> Trace<'a> {
    Trace::new(err)
}
