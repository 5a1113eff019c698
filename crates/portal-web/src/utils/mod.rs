/// Utility functions for the web interface
///
/// Layout geometry for the shell's drawer, app bar and content area.

pub mod layout;
