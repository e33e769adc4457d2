mod intent;
mod reducer;
mod state;

pub use intent::DashboardIntent;
pub use reducer::DashboardReducer;
pub use state::{DashboardState, ModalState, StatusKind, StatusLine};
