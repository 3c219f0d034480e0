use directories::ProjectDirs;
use std::path::PathBuf;
pub mod commands;
pub mod keys;
pub mod logging;
pub mod ui;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "slashline")
}

pub fn config_path() -> Option<PathBuf> {
    project_dirs().map(|proj_dirs| {
        let config_dir = proj_dirs.config_dir();
        config_dir.join("config.toml")
    })
}

pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|proj_dirs| proj_dirs.data_dir().to_path_buf())
}
