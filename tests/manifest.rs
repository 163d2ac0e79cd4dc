use kodegen_bundler_izpack::AppError;
use kodegen_bundler_izpack::izpack::*;
use kodegen_bundler_izpack::metadata::{IzPackConfig, load_manifest};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn test_package_metadata_fills_info_defaults() {
    let config = load_manifest(&fixture("Cargo.toml")).unwrap();
    let info = config.info.as_ref().unwrap();

    assert_eq!(info.app_name.as_deref(), Some("mock-app"));
    assert_eq!(info.app_version.as_deref(), Some("0.3.1"));
    assert_eq!(info.url.as_deref(), Some("https://example.com/mock-app"));
    assert_eq!(info.java_version.as_deref(), Some("17"));
    assert_eq!(info.authors.len(), 2);
    assert_eq!(config.locales, ["eng", "deu"]);
}

#[test]
fn test_install_dir_aliases_are_normalized() {
    let config = load_manifest(&fixture("Cargo.toml")).unwrap();
    let installation = config.into_installation().unwrap();

    let resources = installation.section::<Resources>().unwrap();
    let families: Vec<&str> = resources.install_dirs().keys().map(OsFamily::as_str).collect();
    assert_eq!(families, ["macosx", "unix"]);
}

#[tokio::test]
async fn test_cargo_manifest_generates_full_descriptor() {
    let temp = TempDir::new().unwrap();
    let installation = load_manifest(&fixture("Cargo.toml"))
        .unwrap()
        .into_installation()
        .unwrap();

    let settings = GeneratorSettingsBuilder::new()
        .output_dir(temp.path())
        .base_dir(fixture(""))
        .build()
        .unwrap();
    let report = Generator::new(installation, settings)
        .generate()
        .await
        .unwrap();

    let xml = std::fs::read_to_string(&report.descriptor).unwrap();
    assert!(xml.contains("<appname>mock-app</appname>"));
    assert!(xml.contains(r#"<author name="Jane Doe" email="jane@example.com"/>"#));
    assert!(xml.contains(r#"<author name="Build Bot"/>"#));
    assert!(xml.contains("<requiresjdk>no</requiresjdk>"));
    assert!(xml.contains(r#"<langpack iso3="deu"/>"#));
    assert!(xml.contains(r#"<guiprefs width="640" height="480" resizable="yes""#));
    assert!(xml.contains(r#"<depends packname="Core"/>"#));
    assert!(xml.contains(r#"preselected="no""#));
    assert_eq!(xml.matches("<file ").count(), 2);
    assert!(xml.contains(r#"override="update""#));
    assert_eq!(report.side_cars.len(), 2);
}

#[test]
fn test_standalone_manifest_is_read_whole() {
    let config = load_manifest(&fixture("installer.toml")).unwrap();
    let installation = config.into_installation().unwrap();

    assert_eq!(installation.locales(), ["fra"]);
    assert_eq!(
        installation.section::<Packaging>().unwrap().strategy(),
        PackagingStrategy::MultiVolume
    );
    assert_eq!(
        installation
            .section::<Variables>()
            .unwrap()
            .get("JDKPathPanel.minVersion"),
        Some("17")
    );

    let xml = installation
        .to_xml(&RenderContext::new(fixture("")), chrono::Local::now().naive_local())
        .unwrap();
    assert!(xml.contains("<run-privileged/>"));
    assert!(xml.contains(r#"<uninstaller name="remove.jar" write="no"/>"#));
    assert!(xml.contains("<pack200/>"));
    assert!(xml.contains(r#"volumesize="1048576""#));
}

#[test]
fn test_info_is_validated_before_packs() {
    let installation = load_manifest(&fixture("broken.toml"))
        .unwrap()
        .into_installation()
        .unwrap();

    // The dangling pack dependency is never reached.
    let err = installation
        .to_xml(&RenderContext::default(), chrono::Local::now().naive_local())
        .unwrap_err();
    assert!(matches!(err, Error::MissingField { ref field, .. } if field == "appname"));
}

#[test]
fn test_unknown_keys_are_rejected() {
    let err = toml::from_str::<IzPackConfig>("[info]\nappname = \"typo\"\n").unwrap_err();
    assert!(err.to_string().contains("appname"));

    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bad.toml");
    std::fs::write(&path, "[packaging]\nstrategy = \"triple-volume\"\n").unwrap();
    assert!(matches!(load_manifest(&path), Err(AppError::Toml(_))));
}

#[test]
fn test_invalid_os_family_is_rejected() {
    let config = toml::from_str::<IzPackConfig>(
        "[resources.install_dirs]\n\"Win 95\" = \"C:\\\\App\"\n",
    )
    .unwrap();
    let err = config.into_installation().unwrap_err();
    assert!(matches!(err, Error::InvalidOsFamily(ref token) if token == "Win 95"));
}

#[test]
fn test_install_dir_alias_collision_is_rejected() {
    let config = toml::from_str::<IzPackConfig>(
        "[resources.install_dirs]\ndarwin = \"/Applications/A\"\nmacosx = \"/Applications/B\"\n",
    )
    .unwrap();
    let err = config.into_installation().unwrap_err();
    assert!(matches!(err, Error::DuplicateInstallDir { ref os } if os == "macosx"));
}
