pub mod overlay;
pub mod panel;
