//! Propagation strategies.
//!
//! Each strategy implements [`Strategy`]: a single reduction rule that
//! sweeps the whole grid once, removing candidates or fixing cells, and
//! reports whether it changed anything. Strategies do not chase their own
//! consequences — a singleton created mid-pass is picked up by the next
//! pass of the reduction loop, not re-propagated inline.

use std::fmt::Debug;

use xdoku_core::{AssignmentSink, Grid, Topology};

pub use self::{
    eliminate::Eliminate, naked_tuple::NakedTuple, only_choice::OnlyChoice,
    subgroup::SubgroupExclusion,
};
use crate::Contradiction;

mod eliminate;
mod naked_tuple;
mod only_choice;
mod subgroup;

/// Returns the strategy sequence applied by the reduction loop, in order.
#[must_use]
pub fn all_strategies() -> Vec<BoxedStrategy> {
    vec![
        Box::new(Eliminate::new()),
        Box::new(OnlyChoice::new()),
        Box::new(NakedTuple::any()),
        Box::new(SubgroupExclusion::new()),
    ]
}

/// A single propagation rule over the candidate grid.
pub trait Strategy: Debug {
    /// Returns the name of the strategy.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the strategy.
    fn clone_box(&self) -> BoxedStrategy;

    /// Applies the strategy once across the grid.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - at least one candidate set changed
    /// * `Ok(false)` - the rule found nothing to do
    ///
    /// # Errors
    ///
    /// Returns [`Contradiction`] when a removal empties a candidate set;
    /// the grid must then be discarded by the caller.
    fn apply(
        &self,
        topology: &Topology,
        grid: &mut Grid,
        log: &mut dyn AssignmentSink,
    ) -> Result<bool, Contradiction>;
}

/// A boxed strategy.
pub type BoxedStrategy = Box<dyn Strategy>;

impl Clone for BoxedStrategy {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
