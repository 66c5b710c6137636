/*!
 * # Builder tree
 *
 * The form under construction is a list of top-level container blocks, each
 * holding field blocks. `BuilderState` owns that tree and is the only thing that
 * mutates it: views and editors describe edits as `BuilderCmd`s and hand them to
 * the owner, which applies them one at a time.
 *
 * Every command is applied as it arrives. Rapid successive updates from one text
 * field each produce a new version; nothing is coalesced here.
 */

pub mod commands;
pub mod patch;
pub mod state;

pub use commands::BuilderCmd;
pub use patch::Patch;
pub use state::{BuilderError, BuilderState};
