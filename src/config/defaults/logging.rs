use std::path::PathBuf;

pub fn level() -> String {
    "info".to_string()
}

pub fn file() -> Option<PathBuf> {
    super::data_dir().map(|dir| dir.join("slashline.log"))
}
