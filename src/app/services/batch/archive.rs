//! Output naming and packaging
//!
//! A batch that produces one report is written as a bare CSV file; several
//! reports are packaged into a deflated ZIP archive. File and archive names
//! follow the archive service's convention: municipality, station key and
//! report slug joined by underscores, spaces replaced throughout.

use super::{BatchRequest, BatchResult, ReportFile};
use crate::app::models::{ReportType, Station};
use crate::constants::UNKNOWN_MUNICIPALITY;
use crate::{Error, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;
use zip::CompressionMethod;
use zip::write::{ExtendedFileOptions, FileOptions};

/// Output file name for one converted report: `MUNICIPIO_CLAVE_tipo.csv`
pub fn report_file_name(station: &Station, report_type: ReportType) -> String {
    let municipality = if station.municipality.trim().is_empty() {
        UNKNOWN_MUNICIPALITY.to_string()
    } else {
        station.municipality.replace(' ', "_")
    };
    format!("{}_{}_{}.csv", municipality, station.key, report_type.slug())
}

/// Base name for the batch output, derived from the request's filter
///
/// Unset criteria fall back to the "all" placeholders, mirroring the names
/// the archive service hands out.
pub fn output_base_name(request: &BatchRequest) -> String {
    let part = |criterion: &Option<String>, fallback: &str| {
        criterion
            .as_deref()
            .unwrap_or(fallback)
            .replace(' ', "_")
            .to_uppercase()
    };

    [
        part(&request.filter.state, "ESTADOS_TODOS"),
        part(&request.filter.municipality, "MUNICIPIOS_TODOS"),
        part(&request.filter.key, "ESTACIONES_TODAS"),
        request.selector.replace(' ', "_").to_uppercase(),
    ]
    .join("_")
}

/// Write a batch result to disk and return the written path
///
/// One file becomes `<base>.csv`; several become `<base>.zip` with one entry
/// per report. The output directory is created if needed.
pub fn write_output(result: &BatchResult, base_name: &str, out_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(out_dir).map_err(|e| {
        Error::io(
            format!("Failed to create output directory {}", out_dir.display()),
            e,
        )
    })?;

    let path = if let [only] = result.files.as_slice() {
        write_csv(only, base_name, out_dir)?
    } else {
        write_zip(&result.files, base_name, out_dir)?
    };

    info!("Wrote {}", path.display());
    Ok(path)
}

fn write_csv(file: &ReportFile, base_name: &str, out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join(format!("{}.csv", base_name));
    std::fs::write(&path, file.csv.as_bytes())
        .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))?;
    Ok(path)
}

fn write_zip(files: &[ReportFile], base_name: &str, out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join(format!("{}.zip", base_name));
    let out = File::create(&path)
        .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;

    let mut zip = zip::ZipWriter::new(out);
    let options =
        FileOptions::<ExtendedFileOptions>::default().compression_method(CompressionMethod::Deflated);

    for file in files {
        zip.start_file(file.name.as_str(), options.clone())?;
        zip.write_all(file.csv.as_bytes())
            .map_err(|e| Error::io(format!("Failed to write entry {}", file.name), e))?;
    }
    zip.finish()?;

    Ok(path)
}
