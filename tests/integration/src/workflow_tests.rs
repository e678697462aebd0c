//! End-to-end workflows across discovery, the registry, launching and
//! scaffolding.
//!
//! Each test walks the path a game-engine integration takes: find an
//! installation, prepare the project, then open a file in it.

use std::collections::HashSet;

use kiro_editor::{
    DiscoveryConfig, DiscoveryOutcome, EditorInstallation, InstallationRegistry,
    KiroInstallation, ScaffoldReport, enumerate_installations, try_discover_installation,
};
use kiro_test_utils::{Layout, MockInstallation, TestProject};
use pretty_assertions::assert_eq;

fn discover(mock: &MockInstallation) -> KiroInstallation {
    match try_discover_installation(Some(mock.root())) {
        DiscoveryOutcome::Found(installation) => installation,
        DiscoveryOutcome::Rejected(reason) => panic!("mock was rejected: {reason}"),
    }
}

fn scaffold(installation: &dyn EditorInstallation, project: &TestProject) -> ScaffoldReport {
    installation.create_extra_files(project.root())
}

#[test]
fn test_discover_then_scaffold() {
    let mock = MockInstallation::with_version("1.0.0");
    let project = TestProject::default();

    let installation = discover(&mock);
    assert_eq!(installation.name(), "Kiro [1.0.0]");

    let report = scaffold(&installation, &project);
    assert!(report.is_complete());
    assert_eq!(report.created.len(), 3);

    let settings: serde_json::Value =
        serde_json::from_str(&project.read(".vscode/settings.json")).unwrap();
    assert_eq!(settings["files.exclude"]["**/*.meta"], true);
    assert_eq!(settings["dotnet.defaultSolution"], "TestProject.sln");
}

#[test]
fn test_registry_over_several_installations() {
    let stable = MockInstallation::with_version("1.0.0");
    let insider = MockInstallation::with_version("1.1.0-insider");
    let broken = MockInstallation::builder(Layout::host())
        .corrupt_manifest()
        .build();

    let config = DiscoveryConfig::with_roots_only([
        stable.root().to_path_buf(),
        insider.root().to_path_buf(),
        broken.root().to_path_buf(),
        stable.root().to_path_buf(),
    ]);
    let mut registry = InstallationRegistry::new(config.clone());

    let names: Vec<String> = registry
        .installations()
        .iter()
        .map(|i| i.name().to_string())
        .collect();
    assert_eq!(names, vec!["Kiro [1.0.0]", "Kiro [1.1.0 - Insider]", "Kiro"]);

    let prerelease: Vec<bool> = registry
        .installations()
        .iter()
        .map(|i| i.is_prerelease())
        .collect();
    assert_eq!(prerelease, vec![false, true, false]);

    // The registry and a direct scan agree.
    let direct: HashSet<KiroInstallation> = enumerate_installations(&config).into_iter().collect();
    let cached: HashSet<KiroInstallation> = registry.installations().iter().cloned().collect();
    assert_eq!(direct, cached);
}

#[test]
fn test_registry_refresh_after_uninstall() {
    let first = MockInstallation::with_version("1.0.0");
    let second = MockInstallation::with_version("2.0.0");
    let config =
        DiscoveryConfig::with_roots_only([first.root().to_path_buf(), second.root().to_path_buf()]);
    let mut registry = InstallationRegistry::new(config);

    assert_eq!(registry.installations().len(), 2);

    first.remove_root();
    assert_eq!(registry.installations().len(), 2);
    assert_eq!(registry.refresh().len(), 1);
    assert_eq!(registry.preferred().unwrap().name(), "Kiro [2.0.0]");
}

#[test]
fn test_scaffold_keeps_user_edits_across_installations() {
    let first = discover(&MockInstallation::with_version("1.0.0"));
    let second = discover(&MockInstallation::with_version("2.0.0-beta"));
    let project = TestProject::default();

    scaffold(&first, &project);
    project.write_file(".vscode/launch.json", r#"{"version": "0.2.0", "configurations": []}"#);

    let report = scaffold(&second, &project);

    assert!(report.created.is_empty());
    assert_eq!(report.skipped.len(), 3);
    assert_eq!(
        project.read(".vscode/launch.json"),
        r#"{"version": "0.2.0", "configurations": []}"#
    );
}

#[test]
fn test_missing_installation_never_panics() {
    let temp = tempfile::TempDir::new().unwrap();
    let gone = temp.path().join("Kiro");

    assert!(!try_discover_installation(Some(&gone)).is_found());
    assert!(!try_discover_installation(None).is_found());

    let config = DiscoveryConfig::with_roots_only([gone]);
    assert!(enumerate_installations(&config).is_empty());
}

#[cfg(target_os = "linux")]
#[test]
fn test_full_workflow_open_file() {
    let mock = MockInstallation::with_version("1.0.0-insider");
    let project = TestProject::new("Game");
    let script = project.add_script("Player.cs");
    let installation = discover(&mock);

    assert!(scaffold(&installation, &project).is_complete());

    assert!(installation.open(Some(&script), 42, 8, project.solution()));
    assert!(installation.open(None, 1, 0, project.solution()));

    mock.remove_root();
    assert!(!installation.open(Some(&script), 1, 0, std::path::Path::new("/nonexistent/Game.sln")));
    assert!(std::fs::metadata(project.root().join(".vscode")).unwrap().is_dir());
}
