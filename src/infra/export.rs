//! Writes the current plan to disk as `crop_plan.json`.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use dioxus_logger::tracing::info;
use thiserror::Error;

use crate::domain::PlanExport;

pub const EXPORT_FILENAME: &str = "crop_plan.json";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export: no crops selected")]
    EmptyPlan,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

/// Downloads folder when the platform has one, else the working directory.
pub fn default_export_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn export_plan(plan: &PlanExport) -> Result<PathBuf, ExportError> {
    export_plan_to(plan, &default_export_dir())
}

pub fn export_plan_to(plan: &PlanExport, dir: &Path) -> Result<PathBuf, ExportError> {
    if plan.crops.is_empty() {
        return Err(ExportError::EmptyPlan);
    }

    fs::create_dir_all(dir)?;
    let path = dir.join(EXPORT_FILENAME);
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(&path, json)?;
    info!(
        "[export] Wrote plan for {} ({} crops) to {}",
        plan.season,
        plan.crops.len(),
        path.display()
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{IrrigationType, SoilType};

    fn plan(crops: &[&str]) -> PlanExport {
        PlanExport {
            season: "Summer".to_string(),
            crops: crops.iter().map(|c| c.to_string()).collect(),
            field_size: 2.5,
            soil_type: SoilType::Sandy,
            irrigation_type: IrrigationType::Sprinkler,
        }
    }

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("crop-planner-{name}-{}", std::process::id()))
    }

    #[test]
    fn empty_plan_is_rejected() {
        let dir = scratch_dir("empty");
        assert!(matches!(
            export_plan_to(&plan(&[]), &dir),
            Err(ExportError::EmptyPlan)
        ));
        assert!(!dir.join(EXPORT_FILENAME).exists());
    }

    #[test]
    fn written_plan_reads_back() {
        let dir = scratch_dir("roundtrip");
        let original = plan(&["Corn", "Peppers"]);
        let path = export_plan_to(&original, &dir).unwrap();
        let restored: PlanExport =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(restored, original);
        let _ = fs::remove_dir_all(dir);
    }
}
