pub mod path;

pub use path::{expand_path, get_config_dir, get_config_path, get_home_dir, get_log_dir};
