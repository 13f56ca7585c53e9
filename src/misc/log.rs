/*!
Log targets, one per pipeline stage.

Every stage of the library tags its [log] calls with a constant from [targets], so output can be narrowed to the stage under scrutiny.
The library only writes to the [log] facade --- picking an implementation is left to the consumer.
Paired with [env_logger](https://docs.rs/env_logger/latest/env_logger/), for example, `RUST_LOG=scenarios …` shows model enumeration alone, and `RUST_LOG=rewrite=trace …` traces individual rule firings.
*/

/// The target constants, named for the pipeline stage they cover.
pub mod targets {
    /// Logs related to [rewriting](crate::rewrite)
    pub const REWRITE: &str = "rewrite";

    /// Logs related to [transcription](crate::transcription) between expressions and formulas
    pub const TRANSCRIPTION: &str = "transcription";

    /// Logs related to the [solver backends](crate::solver)
    pub const SOLVE: &str = "solve";

    /// Logs related to [scenario minimization](crate::analysis::scenarios)
    pub const SCENARIOS: &str = "scenarios";

    /// Logs related to [decision tree synthesis](crate::analysis::tree)
    pub const TREE: &str = "tree";

    /// Logs related to [assignment validation](crate::analysis::validate)
    pub const VALIDATION: &str = "validation";
}
