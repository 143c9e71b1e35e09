//! Card editor: controls panel on the left, live card preview on the right.

mod controls;
mod preview;
mod upload;
mod view;

pub use controls::ControlsPanel;
pub use preview::CardPreview;
pub use view::CardEditor;
