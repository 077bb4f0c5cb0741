pub mod panels;
pub mod plot;
pub mod range_slider;
