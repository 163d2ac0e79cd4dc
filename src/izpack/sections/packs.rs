//! Installable packs (`<packs>`).

use super::{
    fileset::{FileSet, PackFile},
    os::OsConstraints,
};
use crate::izpack::{
    error::{Error, Result},
    markup::{Element, WithAttributes},
    section::{Extensions, FieldStore, RenderContext, Section},
};
use petgraph::{algo::toposort, graphmap::DiGraphMap};
use std::collections::BTreeSet;

/// Variable substitution syntax of a parsable file.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseType {
    /// `${var}` anywhere.
    Plain,
    /// Java properties escaping.
    JavaProp,
    /// XML escaping.
    Xml,
    /// Shell escaping.
    Shell,
    /// `@var@` style.
    At,
    /// Ant style.
    Ant,
    /// Java source escaping.
    Java,
}

impl ParseType {
    /// Descriptor token.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::JavaProp => "javaprop",
            Self::Xml => "xml",
            Self::Shell => "shell",
            Self::At => "at",
            Self::Ant => "ant",
            Self::Java => "java",
        }
    }
}

/// When an executable runs.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutableStage {
    /// After files are installed.
    PostInstall,
    /// Only marked executable, never run.
    Never,
    /// During uninstallation.
    Uninstall,
}

impl ExecutableStage {
    /// Descriptor token.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PostInstall => "postinstall",
            Self::Never => "never",
            Self::Uninstall => "uninstall",
        }
    }
}

/// Reaction to a failing executable.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureAction {
    /// Abort the installation.
    Abort,
    /// Ask the user.
    Ask,
    /// Warn and continue.
    Warn,
}

impl FailureAction {
    /// Descriptor token.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Abort => "abort",
            Self::Ask => "ask",
            Self::Warn => "warn",
        }
    }
}

/// Whether an executable is a native binary or a jar.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutableKind {
    /// Native binary or script.
    Bin,
    /// Jar launched with the installer's JVM.
    Jar,
}

impl ExecutableKind {
    /// Descriptor token.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bin => "bin",
            Self::Jar => "jar",
        }
    }
}

/// An installed file whose variables are substituted at install time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parsable {
    target_file: String,
    parse_type: Option<ParseType>,
    encoding: Option<String>,
    os: OsConstraints,
}

impl Parsable {
    /// Substitutes variables in `target_file`.
    pub fn new(target_file: impl Into<String>) -> Self {
        Self {
            target_file: target_file.into(),
            parse_type: None,
            encoding: None,
            os: OsConstraints::new(),
        }
    }

    /// Substitution syntax.
    pub fn with_type(mut self, parse_type: ParseType) -> Self {
        self.parse_type = Some(parse_type);
        self
    }

    /// File encoding.
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }

    /// Restricts substitution to `os`.
    pub fn with_os(mut self, os: OsConstraints) -> Self {
        self.os = os;
        self
    }

    fn render(&self) -> Result<Element> {
        require("parsable", "targetfile", &self.target_file)?;
        let mut parsable = Element::new("parsable")
            .with_attr("targetfile", &self.target_file)
            .with_attr("type", self.parse_type.map(ParseType::as_str))
            .with_attr("encoding", self.encoding.as_deref());
        self.os.render_into(&mut parsable);
        Ok(parsable)
    }
}

/// An installed file that is marked executable and optionally run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Executable {
    target_file: String,
    stage: Option<ExecutableStage>,
    keep: Option<bool>,
    failure: Option<FailureAction>,
    kind: Option<ExecutableKind>,
    class: Option<String>,
    args: Vec<String>,
    os: OsConstraints,
}

impl Executable {
    /// Marks `target_file` executable.
    pub fn new(target_file: impl Into<String>) -> Self {
        Self {
            target_file: target_file.into(),
            stage: None,
            keep: None,
            failure: None,
            kind: None,
            class: None,
            args: Vec::new(),
            os: OsConstraints::new(),
        }
    }

    /// When the executable runs.
    pub fn with_stage(mut self, stage: ExecutableStage) -> Self {
        self.stage = Some(stage);
        self
    }

    /// Keep the file after running it.
    pub fn with_keep(mut self, keep: bool) -> Self {
        self.keep = Some(keep);
        self
    }

    /// Reaction to a non-zero exit.
    pub fn with_failure(mut self, failure: FailureAction) -> Self {
        self.failure = Some(failure);
        self
    }

    /// Binary or jar.
    pub fn with_kind(mut self, kind: ExecutableKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Main class for jar executables.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Appends a command line argument.
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Restricts the executable to `os`.
    pub fn with_os(mut self, os: OsConstraints) -> Self {
        self.os = os;
        self
    }

    fn render(&self) -> Result<Element> {
        require("executable", "targetfile", &self.target_file)?;
        let mut executable = Element::new("executable")
            .with_attr("targetfile", &self.target_file)
            .with_attr("stage", self.stage.map(ExecutableStage::as_str))
            .with_attr("keep", self.keep)
            .with_attr("failure", self.failure.map(FailureAction::as_str))
            .with_attr("type", self.kind.map(ExecutableKind::as_str))
            .with_attr("class", self.class.as_deref());
        self.os.render_into(&mut executable);
        if !self.args.is_empty() {
            let mut args = Element::new("args");
            args.extend(
                self.args
                    .iter()
                    .map(|arg| Element::new("arg").with_attr("value", arg)),
            );
            executable.push(args);
        }
        Ok(executable)
    }
}

/// An installable unit.
///
/// # Examples
///
/// ```
/// use kodegen_bundler_izpack::izpack::{Pack, PackFile, OsConstraints, OsFamily};
///
/// let mut core = Pack::new("Core");
/// core.set_required(true)
///     .add_file(PackFile::new("bin/demo", "$INSTALL_PATH/bin"))
///     .set_os(OsConstraints::new().with(OsFamily::unix()));
/// assert_eq!(core.description(), "Core");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pack {
    name: String,
    description: Option<String>,
    id: Option<String>,
    condition: Option<String>,
    required: bool,
    preselected: bool,
    hidden: bool,
    os: OsConstraints,
    depends: Vec<String>,
    files: Vec<PackFile>,
    file_sets: Vec<FileSet>,
    parsables: Vec<Parsable>,
    executables: Vec<Executable>,
}

impl Pack {
    /// Optional, preselected, visible pack named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            id: None,
            condition: None,
            required: false,
            preselected: true,
            hidden: false,
            os: OsConstraints::new(),
            depends: Vec::new(),
            files: Vec::new(),
            file_sets: Vec::new(),
            parsables: Vec::new(),
            executables: Vec::new(),
        }
    }

    /// Pack identity.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Description, falling back to the name.
    pub fn description(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(&self.name)
    }

    /// Names of packs this pack depends on.
    pub fn depends(&self) -> &[String] {
        &self.depends
    }

    /// Sets the description.
    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the pack id used for translations.
    pub fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the condition gating the pack.
    pub fn set_condition(&mut self, condition: impl Into<String>) -> &mut Self {
        self.condition = Some(condition.into());
        self
    }

    /// Required packs cannot be deselected.
    pub fn set_required(&mut self, required: bool) -> &mut Self {
        self.required = required;
        self
    }

    /// Selected by default.
    pub fn set_preselected(&mut self, preselected: bool) -> &mut Self {
        self.preselected = preselected;
        self
    }

    /// Hidden from the pack selection panel.
    pub fn set_hidden(&mut self, hidden: bool) -> &mut Self {
        self.hidden = hidden;
        self
    }

    /// Restricts the pack to `os`.
    pub fn set_os(&mut self, os: OsConstraints) -> &mut Self {
        self.os = os;
        self
    }

    /// Adds a dependency on the pack named `name`.
    pub fn add_dependency(&mut self, name: impl Into<String>) -> &mut Self {
        self.depends.push(name.into());
        self
    }

    /// Appends a file entry.
    pub fn add_file(&mut self, file: PackFile) -> &mut Self {
        self.files.push(file);
        self
    }

    /// Appends a file-set, expanded when the pack is rendered.
    pub fn add_file_set(&mut self, file_set: FileSet) -> &mut Self {
        self.file_sets.push(file_set);
        self
    }

    /// Appends a parsable entry.
    pub fn add_parsable(&mut self, parsable: Parsable) -> &mut Self {
        self.parsables.push(parsable);
        self
    }

    /// Appends an executable entry.
    pub fn add_executable(&mut self, executable: Executable) -> &mut Self {
        self.executables.push(executable);
        self
    }

    /// Renders the `<pack>` element.
    ///
    /// Children always come in this order: description, OS constraints,
    /// dependencies, files, file-set expansions, parsables, executables.
    pub fn render(&self, ctx: &RenderContext) -> Result<Element> {
        require("pack", "name", &self.name)?;

        let mut pack = Element::new("pack")
            .with_attr("name", &self.name)
            .with_attr("id", self.id.as_deref())
            .with_attr("required", self.required)
            .with_attr("preselected", self.preselected)
            .with_attr("hidden", self.hidden)
            .with_attr("condition", self.condition.as_deref());

        pack.push(Element::with_text("description", self.description()));
        self.os.render_into(&mut pack);
        pack.extend(
            self.depends
                .iter()
                .map(|name| Element::new("depends").with_attr("packname", name)),
        );
        for file in &self.files {
            pack.push(file.render()?);
        }
        for file_set in &self.file_sets {
            for file in file_set.expand(ctx)? {
                pack.push(file.render()?);
            }
        }
        for parsable in &self.parsables {
            pack.push(parsable.render()?);
        }
        for executable in &self.executables {
            pack.push(executable.render()?);
        }

        Ok(pack)
    }
}

/// The `<packs>` section.
#[derive(Clone, Debug)]
pub struct Packs {
    fields: FieldStore,
    extensions: Extensions,
    packs: Vec<Pack>,
}

impl Default for Packs {
    fn default() -> Self {
        Self {
            fields: FieldStore::new(Self::KIND),
            extensions: Extensions::new(),
            packs: Vec::new(),
        }
    }
}

impl Packs {
    /// Creates an empty packs section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pack.
    pub fn add(&mut self, pack: Pack) -> &mut Self {
        self.packs.push(pack);
        self
    }

    /// Packs in declaration order.
    pub fn packs(&self) -> &[Pack] {
        &self.packs
    }

    /// Pack by name.
    pub fn get(&self, name: &str) -> Option<&Pack> {
        self.packs.iter().find(|pack| pack.name == name)
    }

    /// Checks identities are unique, dependencies resolve, and the
    /// dependency graph has no cycle.
    fn check_dependencies(&self) -> Result<()> {
        let mut names = BTreeSet::new();
        for pack in &self.packs {
            require("pack", "name", &pack.name)?;
            if !names.insert(pack.name.as_str()) {
                return Err(Error::DuplicatePack {
                    name: pack.name.clone(),
                });
            }
        }

        let mut graph = DiGraphMap::<&str, ()>::new();
        for &name in &names {
            graph.add_node(name);
        }
        for pack in &self.packs {
            for dependency in &pack.depends {
                if !names.contains(dependency.as_str()) {
                    return Err(Error::DanglingDependency {
                        pack: pack.name.clone(),
                        dependency: dependency.clone(),
                    });
                }
                graph.add_edge(dependency.as_str(), pack.name.as_str(), ());
            }
        }

        toposort(&graph, None)
            .map(|_| ())
            .map_err(|cycle| Error::DependencyCycle {
                pack: cycle.node_id().to_string(),
            })
    }
}

impl Section for Packs {
    const KIND: &'static str = "packs";

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

    fn validate(&self) -> Result<()> {
        self.check_dependencies()
    }

    fn render_body(&self, ctx: &RenderContext) -> Result<Element> {
        let mut packs = Element::new(Self::KIND);
        for pack in &self.packs {
            packs.push(pack.render(ctx)?);
        }
        Ok(packs)
    }
}

fn require(entity: &str, field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::MissingField {
            section: entity.into(),
            field: field.into(),
        });
    }
    Ok(())
}
