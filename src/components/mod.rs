pub mod recent_pad_list;

pub use recent_pad_list::{PadView, RecentPadList};
