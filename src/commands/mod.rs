pub mod diff_check;
pub mod merge_check;
pub mod select;
pub mod show;
pub mod status;

pub use diff_check::*;
pub use merge_check::*;
pub use select::*;
pub use show::*;
pub use status::*;
