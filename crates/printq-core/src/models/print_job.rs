use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Color mode for a print job. Serializes to the wire values the
/// upload endpoint expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorMode {
    #[serde(rename = "bw")]
    Bw,
    #[serde(rename = "color")]
    Color,
}

impl ColorMode {
    /// Wire value sent in the `color` form field.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Bw => "bw",
            ColorMode::Color => "color",
        }
    }
}

impl FromStr for ColorMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bw" => Ok(ColorMode::Bw),
            "color" => Ok(ColorMode::Color),
            other => Err(AppError::InvalidInput(format!(
                "Color mode must be bw or color, got: {}",
                other
            ))),
        }
    }
}

/// Whether a job prints on both sides of the paper. Wire values are
/// `"Yes"` / `"No"` in the `bothSides` form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Duplex {
    #[serde(rename = "Yes")]
    Yes,
    #[serde(rename = "No")]
    No,
}

impl Duplex {
    /// Wire value sent in the `bothSides` form field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Duplex::Yes => "Yes",
            Duplex::No => "No",
        }
    }
}

impl FromStr for Duplex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yes" => Ok(Duplex::Yes),
            "no" => Ok(Duplex::No),
            other => Err(AppError::InvalidInput(format!(
                "Duplex must be yes or no, got: {}",
                other
            ))),
        }
    }
}

/// One user-selected file plus its print settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrintJob {
    pub id: Uuid,
    pub path: PathBuf,
    pub filename: String,
    pub color: ColorMode,
    pub copies: u32,
    pub duplex: Duplex,
}

impl PrintJob {
    /// New job for the given file with default settings: black and
    /// white, one copy, duplex on.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload.bin")
            .to_string();

        PrintJob {
            id: Uuid::new_v4(),
            path,
            filename,
            color: ColorMode::Bw,
            copies: 1,
            duplex: Duplex::Yes,
        }
    }
}

/// Partial update applied to a queued job. `None` fields are left
/// untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct JobUpdate {
    pub color: Option<ColorMode>,
    pub copies: Option<u32>,
    pub duplex: Option<Duplex>,
}

impl JobUpdate {
    pub fn color(mode: ColorMode) -> Self {
        JobUpdate {
            color: Some(mode),
            ..Default::default()
        }
    }

    pub fn copies(count: u32) -> Self {
        JobUpdate {
            copies: Some(count),
            ..Default::default()
        }
    }

    pub fn duplex(duplex: Duplex) -> Self {
        JobUpdate {
            duplex: Some(duplex),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_job_has_default_settings() {
        let job = PrintJob::new("/tmp/report.pdf");

        assert_eq!(job.filename, "report.pdf");
        assert_eq!(job.color, ColorMode::Bw);
        assert_eq!(job.copies, 1);
        assert_eq!(job.duplex, Duplex::Yes);
    }

    #[test]
    fn test_new_jobs_get_unique_ids() {
        let a = PrintJob::new("/tmp/a.pdf");
        let b = PrintJob::new("/tmp/a.pdf");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_wire_values() {
        assert_eq!(ColorMode::Bw.as_str(), "bw");
        assert_eq!(ColorMode::Color.as_str(), "color");
        assert_eq!(Duplex::Yes.as_str(), "Yes");
        assert_eq!(Duplex::No.as_str(), "No");
    }

    #[test]
    fn test_color_mode_from_str() {
        assert_eq!("bw".parse::<ColorMode>().unwrap(), ColorMode::Bw);
        assert_eq!("COLOR".parse::<ColorMode>().unwrap(), ColorMode::Color);
        assert!("grayscale".parse::<ColorMode>().is_err());
    }

    #[test]
    fn test_duplex_from_str() {
        assert_eq!("yes".parse::<Duplex>().unwrap(), Duplex::Yes);
        assert_eq!("No".parse::<Duplex>().unwrap(), Duplex::No);
        assert!("maybe".parse::<Duplex>().is_err());
    }

    #[test]
    fn test_filename_fallback_for_pathless_input() {
        // A path with no final component still yields a usable filename.
        let job = PrintJob::new("/");
        assert_eq!(job.filename, "upload.bin");
    }
}
