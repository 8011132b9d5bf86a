pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{error, header, success, summary_row};
pub use table::{TableBuilder, icon_table};
pub use theme::{theme, Theme};
