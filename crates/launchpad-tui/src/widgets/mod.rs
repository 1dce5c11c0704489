//! Custom widgets for the project page

pub mod grid_header;
pub mod icons;
pub mod image_dialog;
pub mod modal_overlay;
pub mod page_tabs;

pub use grid_header::GridHeader;
pub use icons::{BigChevron, Star};
pub use image_dialog::ModalImageDialog;
pub use page_tabs::PageTabs;
