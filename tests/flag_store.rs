#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use upcheck::libs::flag::{FlagFile, FlagState, FlagStore, FLAG_FILE_NAME};
    use upcheck::libs::version::Version;

    /// Test context providing a throwaway location for the flag file.
    struct FlagTestContext {
        _temp_dir: TempDir,
        flag_path: PathBuf,
    }

    impl TestContext for FlagTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let flag_path = temp_dir.path().join(FLAG_FILE_NAME);
            FlagTestContext {
                _temp_dir: temp_dir,
                flag_path,
            }
        }
    }

    #[test_context(FlagTestContext)]
    #[test]
    fn test_missing_file_reads_as_default(ctx: &mut FlagTestContext) {
        let store = FlagFile::at(&ctx.flag_path);
        let state = store.read().unwrap();

        assert!(!state.update_available);
        assert_eq!(state.latest_version, None);
        assert_eq!(state.discovered_at, None);
    }

    #[test_context(FlagTestContext)]
    #[test]
    fn test_flagged_state_round_trip(ctx: &mut FlagTestContext) {
        let mut store = FlagFile::at(&ctx.flag_path);
        let flagged = FlagState::flagged(Version::parse("1.1.0").unwrap());
        store.write(&flagged).unwrap();

        let state = store.read().unwrap();
        assert!(state.update_available);
        assert_eq!(state.latest_version, Some(Version::parse("1.1.0").unwrap()));
        assert!(state.discovered_at.is_some());
    }

    #[test_context(FlagTestContext)]
    #[test]
    fn test_flagged_constructor_pairs_flag_and_version(_ctx: &mut FlagTestContext) {
        let state = FlagState::flagged(Version::parse("2.0.0").unwrap());

        // The flag never travels without the version that justified it.
        assert!(state.update_available);
        assert!(state.latest_version.is_some());
        assert!(state.discovered_at.is_some());
    }

    #[test_context(FlagTestContext)]
    #[test]
    fn test_clearing_overwrites_previous_state(ctx: &mut FlagTestContext) {
        let mut store = FlagFile::at(&ctx.flag_path);
        store.write(&FlagState::flagged(Version::parse("1.1.0").unwrap())).unwrap();
        store.write(&FlagState::default()).unwrap();

        let state = store.read().unwrap();
        assert!(!state.update_available);
        assert_eq!(state.latest_version, None);
    }

    #[test_context(FlagTestContext)]
    #[test]
    fn test_stored_document_shape(ctx: &mut FlagTestContext) {
        let mut store = FlagFile::at(&ctx.flag_path);
        store.write(&FlagState::flagged(Version::parse("1.1.0").unwrap())).unwrap();

        let raw = fs::read_to_string(&ctx.flag_path).unwrap();
        let document: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(document["update_available"], serde_json::json!(true));
        assert_eq!(document["latest_version"], serde_json::json!([1, 1, 0]));
        assert!(document["discovered_at"].is_string());
    }

    #[test_context(FlagTestContext)]
    #[test]
    fn test_cleared_document_omits_optional_keys(ctx: &mut FlagTestContext) {
        let mut store = FlagFile::at(&ctx.flag_path);
        store.write(&FlagState::default()).unwrap();

        let raw = fs::read_to_string(&ctx.flag_path).unwrap();
        assert!(raw.contains("update_available"));
        assert!(!raw.contains("latest_version"));
        assert!(!raw.contains("discovered_at"));
    }

    #[test_context(FlagTestContext)]
    #[test]
    fn test_partial_document_fills_defaults(ctx: &mut FlagTestContext) {
        // A document written by an older build may carry only the flag key.
        fs::write(&ctx.flag_path, r#"{"update_available": false}"#).unwrap();

        let store = FlagFile::at(&ctx.flag_path);
        let state = store.read().unwrap();
        assert!(!state.update_available);
        assert_eq!(state.latest_version, None);
        assert_eq!(state.discovered_at, None);
    }

    #[test_context(FlagTestContext)]
    #[test]
    fn test_corrupted_file_is_an_error(ctx: &mut FlagTestContext) {
        fs::write(&ctx.flag_path, "{ not json").unwrap();

        let store = FlagFile::at(&ctx.flag_path);
        assert!(store.read().is_err());
    }

    #[test_context(FlagTestContext)]
    #[test]
    fn test_path_reports_backing_file(ctx: &mut FlagTestContext) {
        let store = FlagFile::at(&ctx.flag_path);
        assert_eq!(store.path(), ctx.flag_path.as_path());
    }
}
