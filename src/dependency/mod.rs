mod activity_log;
mod clock;
mod console_logger;
mod grid_store;
mod history_log;

pub use activity_log::ActivityLog;
pub use clock::{epoch_millis, iso_timestamp};
pub use console_logger::init_logging;
pub use grid_store::GridStore;
pub use history_log::HistoryLog;
