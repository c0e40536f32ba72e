mod engine;
mod font;
mod machine;
mod opcode;
mod runner;
mod state;
mod types;

pub use engine::*;
pub use font::*;
pub use machine::*;
pub use opcode::*;
pub use runner::*;
pub use state::*;
pub use types::*;
