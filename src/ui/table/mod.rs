//! Table page-state machine (MVI pattern).

mod intent;
mod reducer;
mod state;

pub use intent::TableIntent;
pub use reducer::TableReducer;
pub use state::{LoadStatus, TableState};
