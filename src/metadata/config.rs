//! Installer configuration as read from TOML.
//!
//! These types mirror the descriptor sections one to one. They carry no
//! behavior of their own; [`IzPackConfig::into_installation`] builds the
//! model through the same attach API library users call.

use crate::izpack::{
    ActionStage, Author, Error, Executable, ExecutableKind, ExecutableStage, FailureAction,
    FileSet, GuiPrefs, Info, Installation, LookAndFeel, Node, OsConstraints, OsFamily, Overwrite,
    Pack, PackFile, Packaging, PackagingStrategy, Packs, Panel, Panels, ParseType, Parsable,
    Resource, Resources, Result, Section, Uninstaller, Variables,
};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Root of the installer configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IzPackConfig {
    pub info: Option<InfoConfig>,
    pub locales: Vec<String>,
    pub resources: Option<ResourcesConfig>,
    pub packaging: Option<PackagingConfig>,
    pub variables: Option<VariablesConfig>,
    pub gui_prefs: Option<GuiPrefsConfig>,
    pub panels: Option<PanelsConfig>,
    pub packs: Option<PacksConfig>,
}

/// `[info]`
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InfoConfig {
    pub app_name: Option<String>,
    pub app_version: Option<String>,
    pub app_subpath: Option<String>,
    pub url: Option<String>,
    pub java_version: Option<String>,
    pub requires_jdk: Option<bool>,
    pub web_dir: Option<String>,
    pub summary_log_file_path: Option<String>,
    /// `"Name <email>"` entries.
    pub authors: Vec<String>,
    /// Adds `<run-privileged/>` when true.
    pub run_privileged: bool,
    /// Condition on `<run-privileged>`; implies `run_privileged`.
    pub run_privileged_condition: Option<String>,
    pub uninstaller: Option<UninstallerConfig>,
    pub extensions: Vec<String>,
}

/// `[info.uninstaller]`
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UninstallerConfig {
    pub name: Option<String>,
    pub path: Option<String>,
    #[serde(default = "default_true")]
    pub write: bool,
}

/// `[resources]`
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResourcesConfig {
    pub res: Vec<ResourceConfig>,
    /// Default install path per OS family token; aliases must not collide.
    pub install_dirs: BTreeMap<String, String>,
    pub extensions: Vec<String>,
}

/// `[[resources.res]]`
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceConfig {
    pub id: String,
    pub src: String,
    pub parse: Option<bool>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub encoding: Option<String>,
}

/// `[packaging]`
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackagingConfig {
    pub strategy: PackagingStrategy,
    pub volume_size: Option<u64>,
    pub first_volume_free_space: Option<u64>,
    pub extensions: Vec<String>,
}

/// `[variables]`
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VariablesConfig {
    pub variable: Vec<NameValue>,
    pub extensions: Vec<String>,
}

/// A `name = ..., value = ...` pair.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NameValue {
    pub name: String,
    pub value: String,
}

/// `[gui_prefs]`
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GuiPrefsConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub resizable: Option<bool>,
    pub modifiers: BTreeMap<String, String>,
    pub laf: Vec<LookAndFeelConfig>,
    pub extensions: Vec<String>,
}

/// `[[gui_prefs.laf]]`
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LookAndFeelConfig {
    pub name: String,
    #[serde(default)]
    pub os: OsConstraints,
    #[serde(default)]
    pub params: Vec<NameValue>,
}

/// `[panels]`
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PanelsConfig {
    pub panel: Vec<PanelConfig>,
    pub extensions: Vec<String>,
}

/// `[[panels.panel]]`
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PanelConfig {
    pub classname: String,
    pub id: Option<String>,
    pub jar: Option<String>,
    pub condition: Option<String>,
    pub os: OsConstraints,
    /// ISO3 language code to help page source.
    pub help: BTreeMap<String, String>,
    pub validators: Vec<String>,
    pub actions: Vec<PanelActionConfig>,
}

/// `[[panels.panel.actions]]`
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PanelActionConfig {
    pub stage: ActionStage,
    pub classname: String,
}

/// `[packs]`
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PacksConfig {
    pub pack: Vec<PackConfig>,
    pub extensions: Vec<String>,
}

/// `[[packs.pack]]`
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackConfig {
    pub name: String,
    pub description: Option<String>,
    pub id: Option<String>,
    pub condition: Option<String>,
    pub required: Option<bool>,
    pub preselected: Option<bool>,
    pub hidden: Option<bool>,
    pub os: OsConstraints,
    pub depends: Vec<String>,
    pub files: Vec<FileConfig>,
    pub file_sets: Vec<FileSetConfig>,
    pub parsables: Vec<ParsableConfig>,
    pub executables: Vec<ExecutableConfig>,
}

/// `[[packs.pack.files]]`
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub src: String,
    pub target_dir: String,
    pub overwrite: Option<Overwrite>,
    pub unpack: Option<bool>,
    #[serde(default)]
    pub os: OsConstraints,
}

/// `[[packs.pack.file_sets]]`
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSetConfig {
    pub pattern: String,
    pub target_dir: String,
    pub overwrite: Option<Overwrite>,
    pub unpack: Option<bool>,
    #[serde(default)]
    pub os: OsConstraints,
}

/// `[[packs.pack.parsables]]`
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParsableConfig {
    pub target_file: String,
    #[serde(rename = "type")]
    pub parse_type: Option<ParseType>,
    pub encoding: Option<String>,
    #[serde(default)]
    pub os: OsConstraints,
}

/// `[[packs.pack.executables]]`
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExecutableConfig {
    pub target_file: String,
    pub stage: Option<ExecutableStage>,
    pub keep: Option<bool>,
    pub failure: Option<FailureAction>,
    #[serde(rename = "type")]
    pub kind: Option<ExecutableKind>,
    pub class: Option<String>,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub os: OsConstraints,
}

fn default_true() -> bool {
    true
}

fn extend<S: Section>(section: &mut S, fragments: Vec<String>) {
    for fragment in fragments {
        section.extend_with(Node::raw(fragment));
    }
}

impl IzPackConfig {
    /// Builds an [`Installation`] with every configured section attached.
    pub fn into_installation(self) -> Result<Installation> {
        let mut installation = Installation::new();

        if let Some(info) = self.info {
            installation.attach(info.into_section())?;
        }
        for locale in self.locales {
            installation.add_locale(locale);
        }
        if let Some(resources) = self.resources {
            installation.attach(resources.into_section()?)?;
        }
        if let Some(packaging) = self.packaging {
            installation.attach(packaging.into_section())?;
        }
        if let Some(variables) = self.variables {
            installation.attach(variables.into_section())?;
        }
        if let Some(gui_prefs) = self.gui_prefs {
            installation.attach(gui_prefs.into_section())?;
        }
        if let Some(panels) = self.panels {
            installation.attach(panels.into_section())?;
        }
        if let Some(packs) = self.packs {
            installation.attach(packs.into_section())?;
        }

        Ok(installation)
    }
}

impl InfoConfig {
    fn into_section(self) -> Info {
        let mut info = Info::default();
        if let Some(value) = self.app_name {
            info.set_app_name(value);
        }
        if let Some(value) = self.app_version {
            info.set_app_version(value);
        }
        if let Some(value) = self.app_subpath {
            info.set_app_subpath(value);
        }
        if let Some(value) = self.url {
            info.set_url(value);
        }
        if let Some(value) = self.java_version {
            info.set_java_version(value);
        }
        if let Some(value) = self.requires_jdk {
            info.set_requires_jdk(value);
        }
        if let Some(value) = self.web_dir {
            info.set_web_dir(value);
        }
        if let Some(value) = self.summary_log_file_path {
            info.set_summary_log_file_path(value);
        }
        for author in &self.authors {
            info.add_author(Author::parse(author));
        }
        if self.run_privileged || self.run_privileged_condition.is_some() {
            info.set_run_privileged(self.run_privileged_condition);
        }
        if let Some(uninstaller) = self.uninstaller {
            info.set_uninstaller(Uninstaller {
                name: uninstaller.name,
                path: uninstaller.path,
                write: uninstaller.write,
            });
        }
        extend(&mut info, self.extensions);
        info
    }
}

impl ResourcesConfig {
    fn into_section(self) -> Result<Resources> {
        let mut resources = Resources::new();
        for res in self.res {
            let mut resource = Resource::new(res.id, res.src);
            if let Some(parse) = res.parse {
                resource = resource.with_parse(parse);
            }
            if let Some(kind) = res.kind {
                resource = resource.with_type(kind);
            }
            if let Some(encoding) = res.encoding {
                resource = resource.with_encoding(encoding);
            }
            resources.add(resource);
        }
        for (token, path) in self.install_dirs {
            let os = OsFamily::new(&token)?;
            if resources.install_dirs().contains_key(&os) {
                return Err(Error::DuplicateInstallDir { os: os.to_string() });
            }
            resources.set_install_dir(os, path);
        }
        extend(&mut resources, self.extensions);
        Ok(resources)
    }
}

impl PackagingConfig {
    fn into_section(self) -> Packaging {
        let mut packaging = Packaging::new(self.strategy);
        if let Some(bytes) = self.volume_size {
            packaging.set_volume_size(bytes);
        }
        if let Some(bytes) = self.first_volume_free_space {
            packaging.set_first_volume_free_space(bytes);
        }
        extend(&mut packaging, self.extensions);
        packaging
    }
}

impl VariablesConfig {
    fn into_section(self) -> Variables {
        let mut variables = Variables::new();
        for NameValue { name, value } in self.variable {
            variables.set(name, value);
        }
        extend(&mut variables, self.extensions);
        variables
    }
}

impl GuiPrefsConfig {
    fn into_section(self) -> GuiPrefs {
        let mut gui_prefs = GuiPrefs::new();
        let (default_width, default_height) = gui_prefs.size();
        gui_prefs.set_size(
            self.width.unwrap_or(default_width),
            self.height.unwrap_or(default_height),
        );
        if let Some(resizable) = self.resizable {
            gui_prefs.set_resizable(resizable);
        }
        for (key, value) in self.modifiers {
            gui_prefs.add_modifier(key, value);
        }
        for laf in self.laf {
            let look_and_feel = laf
                .params
                .into_iter()
                .fold(LookAndFeel::new(laf.name).with_os(laf.os), |look_and_feel, param| {
                    look_and_feel.with_param(param.name, param.value)
                });
            gui_prefs.add_look_and_feel(look_and_feel);
        }
        extend(&mut gui_prefs, self.extensions);
        gui_prefs
    }
}

impl PanelsConfig {
    fn into_section(self) -> Panels {
        let mut panels = Panels::new();
        for config in self.panel {
            panels.add(config.into_panel());
        }
        extend(&mut panels, self.extensions);
        panels
    }
}

impl PanelConfig {
    fn into_panel(self) -> Panel {
        let mut panel = Panel::new(self.classname).with_os(self.os);
        if let Some(id) = self.id {
            panel = panel.with_id(id);
        }
        if let Some(jar) = self.jar {
            panel = panel.with_jar(jar);
        }
        if let Some(condition) = self.condition {
            panel = panel.with_condition(condition);
        }
        for (iso3, src) in self.help {
            panel = panel.with_help(iso3, src);
        }
        for validator in self.validators {
            panel = panel.with_validator(validator);
        }
        for action in self.actions {
            panel = panel.with_action(action.stage, action.classname);
        }
        panel
    }
}

impl PacksConfig {
    fn into_section(self) -> Packs {
        let mut packs = Packs::new();
        for config in self.pack {
            packs.add(config.into_pack());
        }
        extend(&mut packs, self.extensions);
        packs
    }
}

impl PackConfig {
    fn into_pack(self) -> Pack {
        let mut pack = Pack::new(self.name);
        if let Some(description) = self.description {
            pack.set_description(description);
        }
        if let Some(id) = self.id {
            pack.set_id(id);
        }
        if let Some(condition) = self.condition {
            pack.set_condition(condition);
        }
        if let Some(required) = self.required {
            pack.set_required(required);
        }
        if let Some(preselected) = self.preselected {
            pack.set_preselected(preselected);
        }
        if let Some(hidden) = self.hidden {
            pack.set_hidden(hidden);
        }
        pack.set_os(self.os);
        for dependency in self.depends {
            pack.add_dependency(dependency);
        }

        for file in self.files {
            let mut entry = PackFile::new(file.src, file.target_dir).with_os(file.os);
            if let Some(overwrite) = file.overwrite {
                entry = entry.with_overwrite(overwrite);
            }
            if let Some(unpack) = file.unpack {
                entry = entry.with_unpack(unpack);
            }
            pack.add_file(entry);
        }

        for set in self.file_sets {
            let mut file_set = FileSet::new(set.pattern, set.target_dir).with_os(set.os);
            if let Some(overwrite) = set.overwrite {
                file_set = file_set.with_overwrite(overwrite);
            }
            if let Some(unpack) = set.unpack {
                file_set = file_set.with_unpack(unpack);
            }
            pack.add_file_set(file_set);
        }

        for config in self.parsables {
            let mut parsable = Parsable::new(config.target_file).with_os(config.os);
            if let Some(parse_type) = config.parse_type {
                parsable = parsable.with_type(parse_type);
            }
            if let Some(encoding) = config.encoding {
                parsable = parsable.with_encoding(encoding);
            }
            pack.add_parsable(parsable);
        }

        for config in self.executables {
            let mut executable = Executable::new(config.target_file).with_os(config.os);
            if let Some(stage) = config.stage {
                executable = executable.with_stage(stage);
            }
            if let Some(keep) = config.keep {
                executable = executable.with_keep(keep);
            }
            if let Some(failure) = config.failure {
                executable = executable.with_failure(failure);
            }
            if let Some(kind) = config.kind {
                executable = executable.with_kind(kind);
            }
            if let Some(class) = config.class {
                executable = executable.with_class(class);
            }
            for arg in config.args {
                executable = executable.with_arg(arg);
            }
            pack.add_executable(executable);
        }

        pack
    }
}
