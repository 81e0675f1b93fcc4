use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;

use crate::constants::FILE_PATHS;

pub fn get_data_dir() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "seedfall", "seedfall") {
        let data_dir = proj_dirs.data_dir().to_path_buf();
        fs::create_dir_all(&data_dir).ok();
        data_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn get_state_dir() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "seedfall", "seedfall") {
        if let Some(state_dir) = proj_dirs.state_dir() {
            let dir = state_dir.to_path_buf();
            fs::create_dir_all(&dir).ok();
            return dir;
        }
    }
    PathBuf::from(".")
}

pub fn get_log_path() -> PathBuf {
    get_state_dir().join(FILE_PATHS.log_file)
}

pub fn default_export_path(export_dir: Option<&Path>) -> PathBuf {
    match export_dir {
        Some(dir) => dir.join(FILE_PATHS.export_file),
        None => get_data_dir().join(FILE_PATHS.export_file),
    }
}

/// Writes through a sibling `.tmp` file so a failed write never truncates `path`.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<(), String> {
    let tmp_path = path.with_extension("tmp");
    let mut tmp_file = File::create(&tmp_path).map_err(|e| e.to_string())?;
    tmp_file.write_all(content).map_err(|e| e.to_string())?;
    tmp_file.sync_all().map_err(|e| e.to_string())?;
    fs::rename(&tmp_path, path).map_err(|e| e.to_string())?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn unique_path(prefix: &str, extension: &str) -> PathBuf {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    PathBuf::from(format!("/tmp/{}_{}.{}", prefix, now, extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atomic_write_creates_file() {
        let path = unique_path("seedfall_atomic_write", "txt");

        atomic_write(&path, b"hello").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
        assert!(!path.with_extension("tmp").exists());
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_atomic_write_replaces_previous_content() {
        let dir = unique_path("seedfall_overwrite_dir", "d");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("registros.csv");

        atomic_write(&path, b"first").unwrap();
        atomic_write(&path, b"second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        let entries: Vec<_> = fs::read_dir(&dir).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert!(!dir.join("backups").exists());

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_default_export_path_uses_given_dir() {
        let path = default_export_path(Some(Path::new("/tmp/seedfall")));
        assert_eq!(path, PathBuf::from("/tmp/seedfall/registros_agricolas.csv"));
    }
}
