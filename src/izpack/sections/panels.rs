//! Installer panels (`<panels>`).

use super::os::OsConstraints;
use crate::izpack::{
    error::{Error, Result},
    markup::{Element, WithAttributes},
    section::{Extensions, FieldStore, RenderContext, Section},
};

/// When a panel action runs.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStage {
    /// Before the panel is constructed.
    PreConstruct,
    /// Before the panel is shown.
    PreActivate,
    /// Before the panel validates its input.
    PreValidate,
    /// After the panel validated its input.
    PostValidate,
}

impl ActionStage {
    /// Descriptor token.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PreConstruct => "preconstruct",
            Self::PreActivate => "preactivate",
            Self::PreValidate => "prevalidate",
            Self::PostValidate => "postvalidate",
        }
    }
}

/// A single installer panel.
///
/// # Examples
///
/// ```
/// use kodegen_bundler_izpack::izpack::Panel;
///
/// let panel = Panel::new("TargetPanel").with_id("target");
/// assert_eq!(panel.classname(), "TargetPanel");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Panel {
    classname: String,
    id: Option<String>,
    jar: Option<String>,
    condition: Option<String>,
    os: OsConstraints,
    help: Vec<(String, String)>,
    validators: Vec<String>,
    actions: Vec<(ActionStage, String)>,
}

impl Panel {
    /// Panel implemented by `classname`.
    pub fn new(classname: impl Into<String>) -> Self {
        Self {
            classname: classname.into(),
            id: None,
            jar: None,
            condition: None,
            os: OsConstraints::new(),
            help: Vec::new(),
            validators: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Panel id referenced by conditions and user input specs.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Jar holding a custom panel class.
    pub fn with_jar(mut self, jar: impl Into<String>) -> Self {
        self.jar = Some(jar.into());
        self
    }

    /// Condition id gating the panel.
    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    /// Restricts the panel to `os`.
    pub fn with_os(mut self, os: OsConstraints) -> Self {
        self.os = os;
        self
    }

    /// Adds a help page for language `iso3`.
    pub fn with_help(mut self, iso3: impl Into<String>, src: impl Into<String>) -> Self {
        self.help.push((iso3.into(), src.into()));
        self
    }

    /// Adds a data validator class.
    pub fn with_validator(mut self, classname: impl Into<String>) -> Self {
        self.validators.push(classname.into());
        self
    }

    /// Adds a panel action class run at `stage`.
    pub fn with_action(mut self, stage: ActionStage, classname: impl Into<String>) -> Self {
        self.actions.push((stage, classname.into()));
        self
    }

    /// Panel class name.
    pub fn classname(&self) -> &str {
        &self.classname
    }

    /// Panel id.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Renders the `<panel>` element.
    pub fn render(&self) -> Result<Element> {
        if self.classname.trim().is_empty() {
            return Err(Error::MissingField {
                section: "panel".into(),
                field: "classname".into(),
            });
        }

        let mut panel = Element::new("panel")
            .with_attr("classname", &self.classname)
            .with_attr("id", self.id.as_deref())
            .with_attr("jar", self.jar.as_deref())
            .with_attr("condition", self.condition.as_deref());

        self.os.render_into(&mut panel);
        panel.extend(self.help.iter().map(|(iso3, src)| {
            Element::new("help")
                .with_attr("iso3", iso3)
                .with_attr("src", src)
        }));
        panel.extend(
            self.validators
                .iter()
                .map(|classname| Element::new("validator").with_attr("classname", classname)),
        );
        if !self.actions.is_empty() {
            let mut actions = Element::new("actions");
            actions.extend(self.actions.iter().map(|(stage, classname)| {
                Element::new("action")
                    .with_attr("stage", stage.as_str())
                    .with_attr("classname", classname)
            }));
            panel.push(actions);
        }

        Ok(panel)
    }
}

/// The `<panels>` section: panels in the order the installer shows them.
#[derive(Clone, Debug)]
pub struct Panels {
    fields: FieldStore,
    extensions: Extensions,
    panels: Vec<Panel>,
}

impl Default for Panels {
    fn default() -> Self {
        Self {
            fields: FieldStore::new(Self::KIND),
            extensions: Extensions::new(),
            panels: Vec::new(),
        }
    }
}

impl Panels {
    /// Creates an empty panels section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a panel.
    pub fn add(&mut self, panel: Panel) -> &mut Self {
        self.panels.push(panel);
        self
    }

    /// Panels in display order.
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }
}

impl Section for Panels {
    const KIND: &'static str = "panels";

    fn fields(&self) -> &FieldStore {
        &self.fields
    }

    fn fields_mut(&mut self) -> &mut FieldStore {
        &mut self.fields
    }

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    fn extensions_mut(&mut self) -> &mut Extensions {
        &mut self.extensions
    }

    fn render_body(&self, _ctx: &RenderContext) -> Result<Element> {
        let mut panels = Element::new(Self::KIND);
        for panel in &self.panels {
            panels.push(panel.render()?);
        }
        Ok(panels)
    }
}
