pub mod files;
pub mod settings;

pub use files::{atomic_write, ensure_config_dir, get_config_dir, settings_file};
pub use settings::{
    delete_settings, load_settings, load_settings_from, save_settings, save_settings_to,
    SettingsError,
};
