pub mod header;
pub mod about_panel;
pub mod upload_area;
pub mod loading_indicator;
pub mod result_grid;
pub mod image_viewer;
