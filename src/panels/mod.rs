mod central_panel;
mod tools_panel;

pub use central_panel::central_panel;
pub use tools_panel::tools_panel;

/// Requests from the tools panel, applied after the surface has been laid out
/// for the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Undo,
    Redo,
    Reset,
    Export,
}
