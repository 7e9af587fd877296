#[cfg(test)]
mod tests {
    use upcheck::libs::version::Version;

    #[test]
    fn test_parse_dotted_version() {
        let version = Version::parse("1.2.3").unwrap();
        assert_eq!(version.components(), &[1, 2, 3]);
        assert_eq!(version.component_count(), 3);

        let version = Version::parse("0.10.0").unwrap();
        assert_eq!(version.components(), &[0, 10, 0]);
    }

    #[test]
    fn test_parse_single_component() {
        let version = Version::parse("7").unwrap();
        assert_eq!(version.components(), &[7]);
        assert_eq!(version.component_count(), 1);
    }

    #[test]
    fn test_parse_rejects_bad_components() {
        // One bad component rejects the whole string, nothing is skipped.
        assert!(Version::parse("").is_none());
        assert!(Version::parse("abc").is_none());
        assert!(Version::parse("1.x.3").is_none());
        assert!(Version::parse("1..2").is_none());
        assert!(Version::parse("1.2.").is_none());
        assert!(Version::parse(".1.2").is_none());
        assert!(Version::parse("1.2.3-rc1").is_none());
        assert!(Version::parse("-1.2.3").is_none());
    }

    #[test]
    fn test_from_tag_strips_one_prefix_char() {
        let version = Version::from_tag("v1.2.3").unwrap();
        assert_eq!(version.components(), &[1, 2, 3]);

        let version = Version::from_tag("r2.0").unwrap();
        assert_eq!(version.components(), &[2, 0]);
    }

    #[test]
    fn test_from_tag_passes_digit_leading_tags_through() {
        let version = Version::from_tag("1.2.3").unwrap();
        assert_eq!(version.components(), &[1, 2, 3]);
    }

    #[test]
    fn test_from_tag_never_strips_more_than_one_char() {
        // "vv1.2" loses one 'v' and still fails to parse.
        assert!(Version::from_tag("vv1.2").is_none());
        assert!(Version::from_tag("rel-1.2").is_none());
    }

    #[test]
    fn test_from_tag_rejects_prefix_only_tags() {
        assert!(Version::from_tag("v").is_none());
        assert!(Version::from_tag("").is_none());
    }

    #[test]
    fn test_newer_when_major_component_wins() {
        // The first decided component settles it, whatever follows.
        let latest = Version::parse("2.0.0").unwrap();
        let installed = Version::parse("1.9.9").unwrap();
        assert!(latest.is_newer_than(&installed));
        assert!(!installed.is_newer_than(&latest));
    }

    #[test]
    fn test_not_newer_when_equal() {
        let a = Version::parse("1.2.3").unwrap();
        let b = Version::parse("1.2.3").unwrap();
        assert!(!a.is_newer_than(&b));
        assert!(!b.is_newer_than(&a));
    }

    #[test]
    fn test_newer_on_last_component() {
        let latest = Version::parse("1.2.4").unwrap();
        let installed = Version::parse("1.2.3").unwrap();
        assert!(latest.is_newer_than(&installed));
        assert!(!installed.is_newer_than(&latest));
    }

    #[test]
    fn test_middle_component_decides_over_later_ones() {
        // 1.3.0 beats 1.2.3 even though its last component is smaller.
        let latest = Version::parse("1.3.0").unwrap();
        let installed = Version::parse("1.2.3").unwrap();
        assert!(latest.is_newer_than(&installed));
        assert!(!installed.is_newer_than(&latest));
    }

    #[test]
    fn test_components_compare_numerically_not_textually() {
        // As strings "1.10.0" < "1.9.0"; as versions it is the other way.
        let latest = Version::parse("1.10.0").unwrap();
        let installed = Version::parse("1.9.0").unwrap();
        assert!(latest.is_newer_than(&installed));
        assert!(!installed.is_newer_than(&latest));
    }

    #[test]
    fn test_display_round_trip() {
        let version = Version::parse("1.2.3").unwrap();
        assert_eq!(version.to_string(), "1.2.3");

        let version = Version::from_tag("v10.0.42").unwrap();
        assert_eq!(version.to_string(), "10.0.42");
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let version = Version::parse("1.2.3").unwrap();
        let json = serde_json::to_string(&version).unwrap();
        assert_eq!(json, "[1,2,3]");

        let back: Version = serde_json::from_str(&json).unwrap();
        assert_eq!(back, version);
    }
}
