/// UI components for the portal web interface
///
/// The navigation shell and the pieces it is built from.

pub mod shell;
pub mod app_bar;
pub mod drawer;
pub mod icons;
