//! Line-based terminal front-end: a numbered menu on stdout, answers read
//! from stdin. Input and output are generic so the whole loop can be driven
//! from in-memory buffers.

mod console;
mod helpers;
mod menu;

pub use console::{parse_date, Console};
pub use helpers::configure_colors;
pub use menu::{run_menu, run_session, MenuChoice};
