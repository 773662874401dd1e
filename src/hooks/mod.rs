pub mod use_count_up;
pub mod use_profile;
pub mod use_usage;
