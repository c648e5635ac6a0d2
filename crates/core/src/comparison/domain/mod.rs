pub mod frame_comparator;
pub mod neighbourhood_comparator;
pub mod pixel_metric;
