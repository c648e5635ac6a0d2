pub mod frame_slots;
pub mod retention_state_machine;
pub mod skipped_range;
