/*!
Targets for the [log](https://docs.rs/log) macros used throughout the crate.

No logger is installed by the library; the `sat` binary uses `env_logger`,
so e.g. `RUST_LOG=propagation=trace` narrows output to one component.
*/

pub mod targets {
    /// Unit propagation
    pub const PROPAGATION: &str = "propagation";

    /// Conflict analysis and learned clauses
    pub const ANALYSIS: &str = "analysis";

    /// Popping frames and flipping decisions
    pub const BACKJUMP: &str = "backjump";

    /// Branching heuristic
    pub const DECISION: &str = "decision";

    /// Assignment trail
    pub const TRAIL: &str = "trail";

    /// Reading DIMACS input
    pub const DIMACS: &str = "dimacs";

    /// The control loop
    pub const SOLVE: &str = "solve";
}
