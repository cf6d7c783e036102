/*!
 * CLI
 * Interactive menu, input validation, and layout rendering
 */

mod menu;
mod render;

pub use menu::run;
pub use render::print_layout;
