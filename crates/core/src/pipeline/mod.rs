pub mod excise_logger;
pub mod excise_use_case;
