//! Panel orchestration
//!
//! The controller owns the active-definition state machine and decides
//! when the layout engine runs, routing raw DOM events through the
//! rate-limiting gates.

pub mod controller;
pub mod options;

pub use controller::PanelController;
pub use options::PanelOptions;
