use chrono::{NaiveDate, NaiveDateTime};
use kodegen_bundler_izpack::izpack::*;

fn stamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_opt(3, 4, 5)
        .unwrap()
}

fn render(installation: &Installation) -> String {
    installation
        .to_xml(&RenderContext::default(), stamp())
        .unwrap()
}

#[test]
fn test_minimal_document_has_placeholders_for_absent_sections() {
    let mut installation = Installation::new();
    installation.attach(Info::new("Demo")).unwrap();

    let xml = render(&installation);

    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes" ?>"#));
    assert!(xml.contains(r#"<installation version="5.0">"#));
    assert!(xml.contains("<!-- Generated at 2024/01/02 03:04:05 -->"));
    assert!(xml.contains("<appname>Demo</appname>"));
    assert!(xml.contains("<!-- no appversion -->"));
    assert!(xml.contains("<!-- no authors -->"));
    assert!(xml.contains(r#"<langpack iso3="eng"/>"#));
    for kind in ["resources", "packaging", "variables", "guiprefs", "panels", "packs"] {
        assert!(
            xml.contains(&format!("<!-- no {kind} section -->")),
            "missing placeholder for {kind}"
        );
    }
    assert!(xml.trim_end().ends_with("</installation>"));
}

#[test]
fn test_sections_render_in_fixed_order() {
    let mut installation = Installation::new();
    // Attach order differs from render order.
    installation.attach(Packs::new()).unwrap();
    installation.attach(Variables::new()).unwrap();
    installation.attach(Info::new("Demo")).unwrap();
    installation.attach(Panels::new()).unwrap();

    let root = installation
        .render(&RenderContext::default(), stamp())
        .unwrap();
    let names: Vec<&str> = root.elements().map(Element::name).collect();

    assert_eq!(names, ["info", "locale", "variables", "panels", "packs"]);
}

#[test]
fn test_missing_info_fails() {
    let installation = Installation::new();
    let err = installation
        .to_xml(&RenderContext::default(), stamp())
        .unwrap_err();

    assert!(matches!(
        err,
        Error::MissingField { ref section, ref field } if section == "installation" && field == "info"
    ));
}

#[test]
fn test_missing_app_name_fails() {
    let mut installation = Installation::new();
    installation.attach(Info::default()).unwrap();

    let err = installation
        .to_xml(&RenderContext::default(), stamp())
        .unwrap_err();

    assert!(matches!(
        err,
        Error::MissingField { ref section, ref field } if section == "info" && field == "appname"
    ));
}

#[test]
fn test_duplicate_attach_is_rejected() {
    let mut installation = Installation::new();
    installation
        .attach(Packaging::new(PackagingStrategy::SingleVolume))
        .unwrap();

    let err = installation
        .attach(Packaging::new(PackagingStrategy::MultiVolume))
        .unwrap_err();
    assert!(matches!(err, Error::DuplicateSection { kind: "packaging" }));

    // The first section is kept.
    assert_eq!(
        installation.section::<Packaging>().unwrap().strategy(),
        PackagingStrategy::SingleVolume
    );
}

#[test]
fn test_clear_then_attach_replaces_section() {
    let mut installation = Installation::new();
    installation.attach(Info::new("First")).unwrap();
    installation.clear::<Info>();
    assert!(installation.section::<Info>().is_none());

    installation.attach(Info::new("Second")).unwrap();
    assert!(render(&installation).contains("<appname>Second</appname>"));

    installation.attach::<Info>(None).unwrap();
    assert!(installation.section::<Info>().is_none());
}

#[test]
fn test_blank_field_is_absent() {
    let mut info = Info::new("Demo");
    info.set_app_version("1.0").set_app_version("   ");

    let mut installation = Installation::new();
    installation.attach(info).unwrap();
    let xml = render(&installation);

    assert!(!xml.contains("<appversion>"));
    assert!(xml.contains("<!-- no appversion -->"));
}

#[test]
fn test_extensions_follow_section_children() {
    let mut info = Info::new("Demo");
    info.extend_with(Node::raw(r#"<pack200/>"#))
        .extend_with(Element::with_text("custom", "a < b"));

    let element = info.render(&RenderContext::default()).unwrap();
    let children = element.children();
    let len = children.len();

    assert!(matches!(&children[len - 2], Node::Raw(raw) if raw == "<pack200/>"));
    assert_eq!(
        children[len - 1].as_element().and_then(Element::text),
        Some("a < b")
    );

    let xml = element.to_string();
    assert!(xml.contains("<pack200/>"));
    assert!(xml.contains("<custom>a &lt; b</custom>"));
}

#[test]
fn test_multi_line_extension_is_written_unchanged() {
    let fragment = "<variable name=\"motd\" value=\"line1\nline2\"/>";
    let cdata = "<script><![CDATA[echo hi   \n  done]]></script>";

    let mut variables = Variables::new();
    variables.set("app", "demo");
    variables
        .extend_with(Node::raw(fragment))
        .extend_with(Node::raw(cdata));

    let mut installation = Installation::new();
    installation.attach(Info::new("Demo")).unwrap();
    installation.attach(variables).unwrap();
    let xml = render(&installation);

    assert!(xml.contains(fragment), "fragment altered:\n{xml}");
    assert!(xml.contains(cdata), "fragment altered:\n{xml}");
    assert!(xml.find(r#"<variable name="app""#).unwrap() < xml.find(fragment).unwrap());
}

#[test]
fn test_blank_author_name_fails() {
    let mut info = Info::new("Demo");
    info.add_author(Author::new("  ").with_email("a@b"));

    let mut installation = Installation::new();
    installation.attach(info).unwrap();
    let err = installation
        .to_xml(&RenderContext::default(), stamp())
        .unwrap_err();

    assert!(matches!(
        err,
        Error::MissingField { ref section, ref field } if section == "author" && field == "name"
    ));
}

#[test]
fn test_booleans_render_as_yes_no() {
    let mut info = Info::new("Demo");
    info.set_requires_jdk(false);

    let mut gui_prefs = GuiPrefs::new();
    gui_prefs.set_resizable(true);

    let mut pack = Pack::new("Core");
    pack.set_required(true).set_hidden(false);
    let mut packs = Packs::new();
    packs.add(pack);

    let mut installation = Installation::new();
    installation.attach(info).unwrap();
    installation.attach(gui_prefs).unwrap();
    installation.attach(packs).unwrap();
    let xml = render(&installation);

    assert!(xml.contains("<requiresjdk>no</requiresjdk>"));
    assert!(xml.contains(r#"resizable="yes""#));
    assert!(xml.contains(r#"required="yes""#));
    assert!(xml.contains(r#"preselected="yes""#));
    assert!(xml.contains(r#"hidden="no""#));
    assert!(!xml.contains("true"));
    assert!(!xml.contains("false"));
}

#[test]
fn test_panel_without_id_has_no_id_attribute() {
    let mut panels = Panels::new();
    panels
        .add(Panel::new("HelloPanel"))
        .add(Panel::new("TargetPanel").with_id("target"));

    let element = panels.render(&RenderContext::default()).unwrap();
    let rendered: Vec<&Element> = element.find_all("panel").collect();

    assert_eq!(rendered[0].attribute("classname"), Some("HelloPanel"));
    assert_eq!(rendered[0].attribute("id"), None);
    assert_eq!(rendered[1].attribute("id"), Some("target"));
}

#[test]
fn test_locales_are_listed_in_order_without_duplicates() {
    let mut installation = Installation::new();
    installation.attach(Info::new("Demo")).unwrap();
    installation
        .add_locale("deu")
        .add_locale("eng")
        .add_locale("deu")
        .add_locale(" ");

    assert_eq!(installation.locales(), ["deu", "eng"]);
}

#[test]
fn test_pack_dependency_errors() {
    let dangling = {
        let mut pack = Pack::new("Docs");
        pack.add_dependency("Core");
        let mut packs = Packs::new();
        packs.add(pack);
        packs
    };
    assert!(matches!(
        dangling.render(&RenderContext::default()),
        Err(Error::DanglingDependency { ref pack, ref dependency }) if pack == "Docs" && dependency == "Core"
    ));

    let duplicate = {
        let mut packs = Packs::new();
        packs.add(Pack::new("Core")).add(Pack::new("Core"));
        packs
    };
    assert!(matches!(
        duplicate.render(&RenderContext::default()),
        Err(Error::DuplicatePack { ref name }) if name == "Core"
    ));

    let cycle = {
        let mut a = Pack::new("A");
        a.add_dependency("B");
        let mut b = Pack::new("B");
        b.add_dependency("A");
        let mut packs = Packs::new();
        packs.add(a).add(b);
        packs
    };
    assert!(matches!(
        cycle.render(&RenderContext::default()),
        Err(Error::DependencyCycle { .. })
    ));
}

#[test]
fn test_install_dir_requires_prepared_side_car() {
    let mut resources = Resources::new();
    resources.set_install_dir(OsFamily::unix(), "/opt/demo");

    let err = resources.render(&RenderContext::default()).unwrap_err();
    assert!(matches!(err, Error::UnresolvedInstallDir { ref os } if os == "unix"));
}
