use chrono::NaiveDate;
use kodegen_bundler_izpack::izpack::*;
use tempfile::TempDir;

fn settings(output: &TempDir) -> GeneratorSettings {
    GeneratorSettingsBuilder::new()
        .output_dir(output.path())
        .base_dir(output.path())
        .timestamp(
            NaiveDate::from_ymd_opt(2024, 6, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        )
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_generate_writes_descriptor_and_side_cars() {
    let temp = TempDir::new().unwrap();

    let mut resources = Resources::new();
    resources
        .add(Resource::new("LicencePanel.licence", "LICENSE"))
        .set_install_dir(OsFamily::unix(), "/opt/demo")
        .set_install_dir(OsFamily::windows(), "C:\\Program Files\\Demo");

    let mut installation = Installation::new();
    installation.attach(Info::new("Demo")).unwrap();
    installation.attach(resources).unwrap();

    let report = Generator::new(installation, settings(&temp))
        .generate()
        .await
        .unwrap();

    let generated = temp.path().join(GENERATED_DIR);
    assert_eq!(report.descriptor, generated.join(DESCRIPTOR_FILE));
    assert_eq!(report.side_cars.len(), 2);
    assert_eq!(report.sha256.len(), 64);

    let unix = std::fs::read_to_string(generated.join("TargetPanel.dir.unix")).unwrap();
    assert_eq!(unix, "/opt/demo\n");
    let windows = std::fs::read_to_string(generated.join("TargetPanel.dir.windows")).unwrap();
    assert_eq!(windows.lines().count(), 1);

    let xml = std::fs::read_to_string(&report.descriptor).unwrap();
    assert!(xml.ends_with("</installation>\n"));
    assert!(xml.contains(r#"<res id="LicencePanel.licence" src="LICENSE"/>"#));
    assert!(xml.contains(r#"id="TargetPanel.dir.unix""#));
    assert!(xml.contains("<!-- Generated at 2024/06/01 12:00:00 -->"));
    for side_car in &report.side_cars {
        assert!(side_car.is_absolute());
        assert!(xml.contains(&side_car.display().to_string()));
    }
}

#[tokio::test]
async fn test_failed_render_writes_nothing() {
    let temp = TempDir::new().unwrap();

    let mut resources = Resources::new();
    resources.set_install_dir(OsFamily::unix(), "/opt/demo");

    let mut installation = Installation::new();
    installation.attach(Info::default()).unwrap();
    installation.attach(resources).unwrap();

    let err = Generator::new(installation, settings(&temp))
        .generate()
        .await
        .unwrap_err();

    assert!(matches!(err, Error::MissingField { .. }));
    assert!(!temp.path().join(GENERATED_DIR).exists());
}

#[tokio::test]
async fn test_regenerating_overwrites_descriptor() {
    let temp = TempDir::new().unwrap();

    let mut first = Installation::new();
    first.attach(Info::new("First")).unwrap();
    Generator::new(first, settings(&temp)).generate().await.unwrap();

    let mut second = Installation::new();
    second.attach(Info::new("Second")).unwrap();
    let report = Generator::new(second, settings(&temp))
        .generate()
        .await
        .unwrap();

    let xml = std::fs::read_to_string(&report.descriptor).unwrap();
    assert!(xml.contains("<appname>Second</appname>"));
    assert!(!xml.contains("First"));
}

#[test]
fn test_render_is_deterministic_for_fixed_timestamp() {
    let temp = TempDir::new().unwrap();
    let mut installation = Installation::new();
    installation.attach(Info::new("Demo")).unwrap();

    let generator = Generator::new(installation, settings(&temp));
    let first = generator.render().unwrap();
    let second = generator.render().unwrap();

    assert_eq!(first.xml, second.xml);
    assert!(!temp.path().join(GENERATED_DIR).exists());
}

#[tokio::test]
async fn test_multi_line_install_dir_is_rejected() {
    let temp = TempDir::new().unwrap();

    let mut resources = Resources::new();
    resources.set_install_dir(OsFamily::unix(), "/opt/app\n/etc/other");

    let mut installation = Installation::new();
    installation.attach(Info::new("Demo")).unwrap();
    installation.attach(resources).unwrap();

    let err = Generator::new(installation, settings(&temp))
        .generate()
        .await
        .unwrap_err();

    assert!(matches!(err, Error::MultiLineInstallDir { ref os } if os == "unix"));
    assert!(!temp.path().join(GENERATED_DIR).exists());
}

#[tokio::test]
async fn test_descriptor_write_failure_removes_side_cars() {
    let temp = TempDir::new().unwrap();
    let generated = temp.path().join(GENERATED_DIR);
    // A directory in the descriptor's place makes the write fail.
    std::fs::create_dir_all(generated.join(DESCRIPTOR_FILE)).unwrap();

    let mut resources = Resources::new();
    resources.set_install_dir(OsFamily::unix(), "/opt/demo");

    let mut installation = Installation::new();
    installation.attach(Info::new("Demo")).unwrap();
    installation.attach(resources).unwrap();

    let err = Generator::new(installation, settings(&temp))
        .generate()
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Fs { .. }));
    assert!(!generated.join("TargetPanel.dir.unix").exists());
}
