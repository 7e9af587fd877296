#[cfg(test)]
mod tests {
    use upcheck::libs::data_storage::{DataStorage, DATA_DIR_ENV};

    // The data directory override is process-wide state, so this file keeps
    // a single test and every other test file stays on explicit paths.
    #[test]
    fn test_env_override_relocates_data_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::env::set_var(DATA_DIR_ENV, temp_dir.path());

        let path = DataStorage::new().get_path("state.json").unwrap();
        assert!(path.starts_with(temp_dir.path()));
        assert!(path.parent().unwrap().exists());

        std::env::remove_var(DATA_DIR_ENV);
    }
}
