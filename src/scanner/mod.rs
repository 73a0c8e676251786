mod plan;

pub use plan::{validate_plan, PlanInfo};

use crate::error::{BimTrackError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub file_name: String,
}

impl ImageInfo {
    fn from_path(path: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Self {
            path: path.to_path_buf(),
            file_name,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match extension_lowercase(&self.path).as_deref() {
            Some("png") => "image/png",
            _ => "image/jpeg",
        }
    }
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

fn extension_lowercase(path: &Path) -> Option<String> {
    path.extension().map(|ext| ext.to_string_lossy().to_lowercase())
}

fn is_image_path(path: &Path) -> bool {
    extension_lowercase(path).is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

pub fn scan_folder(folder: &Path) -> Result<Vec<ImageInfo>> {
    if !folder.exists() {
        return Err(BimTrackError::FolderNotFound(folder.display().to_string()));
    }

    let mut images: Vec<ImageInfo> = WalkDir::new(folder)
        .max_depth(1)  // só o nível da pasta
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file() && is_image_path(e.path()))
        .map(|e| ImageInfo::from_path(e.path()))
        .collect();

    // ordem por nome de arquivo (dia 1, dia 2, ...)
    images.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(images)
}

/// Junta as fotos informadas: arquivos soltos e/ou pastas
pub fn collect_images(inputs: &[PathBuf]) -> Result<Vec<ImageInfo>> {
    let mut images = Vec::new();

    for input in inputs {
        if input.is_dir() {
            let found = scan_folder(input)?;
            if found.is_empty() {
                tracing::warn!(folder = %input.display(), "pasta sem imagens");
            }
            images.extend(found);
        } else if input.is_file() {
            if !is_image_path(input) {
                return Err(BimTrackError::Validation(format!(
                    "Formato de imagem não suportado (use .png, .jpg): {}",
                    input.display()
                )));
            }
            images.push(ImageInfo::from_path(input));
        } else {
            return Err(BimTrackError::FileNotFound(input.display().to_string()));
        }
    }

    Ok(images)
}
