pub mod frame_linker;
pub mod image_writer;
pub mod video_reader;
