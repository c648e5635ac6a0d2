pub mod constants;
pub mod frame;
pub mod frame_rate;
pub mod options;
pub mod video_metadata;
