//! Invariant checking for deterministic simulation testing.
//!
//! Invariants are properties that must always hold during system execution.
//! Unlike example-based tests that check specific scenarios, invariants
//! verify behavioral properties across all possible execution paths.
//!
//! # Architecture
//!
//! Every render captured by the simulation driver becomes a
//! [`RenderSnapshot`]; registered [`Invariant`] checks run against it and
//! violations surface as driver errors.
//!
//! # Usage
//!
//! ```ignore
//! let registry = InvariantRegistry::standard();
//! registry.check_all(&snapshot)?;
//! ```

mod checks;

pub use checks::{FrameMatchesStyle, StyleIndexInRange};
use tock_app::AppState;
use tock_core::{RenderedFrame, Style};

/// Invariant check result.
pub type InvariantResult = Result<(), Violation>;

/// Invariant violation with context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// Name of the violated invariant.
    pub invariant: &'static str,
    /// Description of what went wrong.
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.invariant, self.message)
    }
}

impl std::error::Error for Violation {}

/// What the surface was asked to draw on one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSnapshot {
    /// App state at render time.
    pub state: AppState,
    /// Frame handed to the surface.
    pub frame: RenderedFrame,
}

impl RenderSnapshot {
    /// Selected style at render time.
    pub fn style(&self) -> Style {
        self.state.style()
    }
}

/// An invariant that can be checked against a render.
///
/// Invariants are behavioral properties that must always hold.
/// They capture WHAT must be true, not specific test scenarios.
pub trait Invariant: Send + Sync {
    /// Invariant name for error reporting.
    fn name(&self) -> &'static str;

    /// Check the invariant against one render.
    ///
    /// Returns `Ok(())` if the invariant holds, or a [`Violation`]
    /// describing what went wrong.
    fn check(&self, snapshot: &RenderSnapshot) -> InvariantResult;
}

/// Registry of invariants to check.
///
/// Collects multiple invariants and runs them all against a render.
/// Use [`InvariantRegistry::standard()`] for the common set.
pub struct InvariantRegistry {
    invariants: Vec<Box<dyn Invariant>>,
}

impl Default for InvariantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InvariantRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { invariants: Vec::new() }
    }

    /// Create a registry with the standard invariants.
    ///
    /// Includes:
    /// - [`StyleIndexInRange`]: selected style index is a valid style
    /// - [`FrameMatchesStyle`]: frame has the line count of its style
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.add(StyleIndexInRange);
        registry.add(FrameMatchesStyle);
        registry
    }

    /// Add an invariant to the registry.
    pub fn add<I: Invariant + 'static>(&mut self, invariant: I) {
        self.invariants.push(Box::new(invariant));
    }

    /// Check all invariants against the given render.
    ///
    /// Returns `Ok(())` if all invariants hold, or all violations found.
    pub fn check_all(&self, snapshot: &RenderSnapshot) -> Result<(), Vec<Violation>> {
        let violations: Vec<_> =
            self.invariants.iter().filter_map(|inv| inv.check(snapshot).err()).collect();

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }

    /// Number of registered invariants.
    pub fn len(&self) -> usize {
        self.invariants.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.invariants.is_empty()
    }
}
