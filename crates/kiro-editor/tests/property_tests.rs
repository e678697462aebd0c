use kiro_editor::discovery::discover_with_family;
use kiro_editor::version::classify;
use kiro_editor::{DiscoveryOutcome, EditorInstallation, PlatformFamily, RejectReason};
use kiro_test_utils::{Layout, MockInstallation};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_malformed_manifest_names_brand(content in "\\{[^}]{0,40}") {
        let mock = MockInstallation::builder(Layout::Linux).raw_manifest(&content).build();

        let found = discover_with_family(Some(mock.root()), PlatformFamily::Linux)
            .into_installation()
            .unwrap();

        prop_assert_eq!(found.name(), "Kiro");
        prop_assert!(!found.is_prerelease());
    }

    #[test]
    fn test_nonexistent_root_rejected(name in "[a-z]{1,12}") {
        let temp = tempfile::TempDir::new().unwrap();
        let missing = temp.path().join(&name);

        let outcome = discover_with_family(Some(&missing), PlatformFamily::Linux);

        prop_assert_eq!(outcome, DiscoveryOutcome::Rejected(RejectReason::Missing(missing)));
    }

    #[test]
    fn test_dash_marks_prerelease(
        major in 0u64..1000,
        minor in 0u64..1000,
        patch in 0u64..1000,
        tag in "[a-z]{1,8}",
    ) {
        let stable = classify(&format!("{major}.{minor}.{patch}"));
        prop_assert!(!stable.is_prerelease);
        prop_assert_eq!(stable.core, Some(semver::Version::new(major, minor, patch)));

        let pre = classify(&format!("{major}.{minor}.{patch}-{tag}"));
        prop_assert!(pre.is_prerelease);
        prop_assert_eq!(pre.core, Some(semver::Version::new(major, minor, patch)));
        prop_assert!(pre.channel_label.is_some());
    }

    #[test]
    fn test_manifest_version_appears_in_name(
        major in 0u64..100,
        minor in 0u64..100,
        patch in 0u64..100,
    ) {
        let version = format!("{major}.{minor}.{patch}");
        let mock = MockInstallation::builder(Layout::Linux).version(&version).build();

        let found = discover_with_family(Some(mock.root()), PlatformFamily::Linux)
            .into_installation()
            .unwrap();

        prop_assert_eq!(found.name(), format!("Kiro [{version}]"));
    }
}
