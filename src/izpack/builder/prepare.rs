//! Side-car planning for per-OS install directories.
//!
//! The installer's target panel reads its default install path from a
//! resource file, one per OS family. Planning is pure: it only decides
//! where each file goes and what it holds. Files are written by
//! [`PreparedResources::write_all`] once the descriptor rendered cleanly.

use crate::izpack::{
    error::{Error, ErrorExt, Result},
    sections::{OsFamily, Resources, install_dir_resource_id},
    utils::fs::write_text_file,
};
use path_absolutize::Absolutize;
use serde::Serialize;
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

/// A single planned side-car file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SideCar {
    /// OS family the install path applies to.
    pub os: OsFamily,

    /// Absolute location of the file.
    pub path: PathBuf,

    /// Install path written as the file's only line.
    pub content: String,
}

/// Side-car files planned for one generation run.
#[derive(Clone, Debug, Default)]
pub struct PreparedResources {
    side_cars: Vec<SideCar>,
}

impl PreparedResources {
    /// Returns the planned files in OS family order.
    pub fn side_cars(&self) -> &[SideCar] {
        &self.side_cars
    }

    /// Returns side-car paths keyed by OS family, for the render context.
    pub fn install_dir_sources(&self) -> BTreeMap<OsFamily, PathBuf> {
        self.side_cars
            .iter()
            .map(|side_car| (side_car.os.clone(), side_car.path.clone()))
            .collect()
    }

    /// Writes every planned file.
    pub async fn write_all(&self) -> Result<()> {
        for side_car in &self.side_cars {
            write_text_file(&side_car.path, &side_car.content).await?;
            log::info!(
                "Wrote install directory for {} to {}",
                side_car.os,
                side_car.path.display()
            );
        }
        Ok(())
    }

    /// Removes previously written side-cars. Failures are logged, not returned.
    pub async fn remove_all(&self) {
        for side_car in &self.side_cars {
            match tokio::fs::remove_file(&side_car.path).await {
                Ok(()) => log::debug!("Removed {}", side_car.path.display()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => log::warn!("Failed to remove {}: {}", side_car.path.display(), e),
            }
        }
    }
}

/// Plans side-car files for every install directory declared on `resources`.
///
/// Returns an empty plan when no resources section is attached.
///
/// # Errors
///
/// [`Error::MultiLineInstallDir`] when a path contains a line break.
pub fn prepare_install_dirs(
    resources: Option<&Resources>,
    generated_dir: &Path,
) -> Result<PreparedResources> {
    let Some(resources) = resources else {
        return Ok(PreparedResources::default());
    };

    let mut side_cars = Vec::with_capacity(resources.install_dirs().len());
    for (os, install_path) in resources.install_dirs() {
        if install_path.contains(['\n', '\r']) {
            return Err(Error::MultiLineInstallDir { os: os.to_string() });
        }

        let path = generated_dir.join(install_dir_resource_id(os));
        let path = path
            .absolutize()
            .fs_context("resolving side-car path", &path)?
            .into_owned();

        log::debug!("Planned install directory side-car for {}: {}", os, path.display());
        side_cars.push(SideCar {
            os: os.clone(),
            path,
            content: install_path.clone(),
        });
    }

    Ok(PreparedResources { side_cars })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_resources_plans_nothing() {
        let prepared = prepare_install_dirs(None, Path::new("out")).expect("plan");
        assert!(prepared.side_cars().is_empty());
        assert!(prepared.install_dir_sources().is_empty());
    }

    #[test]
    fn plans_one_absolute_file_per_os() {
        let mut resources = Resources::new();
        resources
            .set_install_dir(OsFamily::unix(), "/opt/app")
            .set_install_dir(OsFamily::windows(), "C:\\Program Files\\App");

        let prepared = prepare_install_dirs(Some(&resources), Path::new("out/izpack")).expect("plan");
        let side_cars = prepared.side_cars();

        assert_eq!(side_cars.len(), 2);
        assert!(side_cars.iter().all(|s| s.path.is_absolute()));
        assert!(side_cars[0].path.ends_with("out/izpack/TargetPanel.dir.unix"));
        assert_eq!(side_cars[0].content, "/opt/app");
        assert!(side_cars[1].path.ends_with("out/izpack/TargetPanel.dir.windows"));
    }

    #[test]
    fn line_breaks_in_install_path_are_rejected() {
        for path in ["/opt/app\n/etc/other", "/opt/app\r"] {
            let mut resources = Resources::new();
            resources.set_install_dir(OsFamily::unix(), path);

            let err = prepare_install_dirs(Some(&resources), Path::new("out")).unwrap_err();
            assert!(matches!(err, Error::MultiLineInstallDir { ref os } if os == "unix"));
        }
    }
}
