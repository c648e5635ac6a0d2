pub mod ffmpeg_reader;
pub mod hard_link_frame_linker;
pub mod image_file_writer;
