mod bare;
mod logging;
mod traits;

pub use bare::BareConsoleBackend;
pub use traits::{LogBackend, LogToFileBackend, TerminalBackend};
