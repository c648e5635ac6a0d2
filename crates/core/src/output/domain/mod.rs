pub mod output_sequence;
pub mod splash_sequence;
