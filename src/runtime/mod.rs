// Container runtime selection and process handoff.

pub mod engine;
pub mod exec;
pub mod types;

pub use engine::{find_executable, select};
pub use exec::exec;
pub use types::{RuntimeChoice, RuntimeCommand};
