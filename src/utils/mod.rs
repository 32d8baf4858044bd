pub mod time_utils;

pub use time_utils::{TimeUtils, epoch_secs_to_date, epoch_secs_to_datetime, now_epoch_secs};
