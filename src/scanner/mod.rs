//! 送信対象の画像収集
//!
//! 引数のファイル/フォルダから受付ルールを満たす画像だけを集める。
//! ファイルは指定順、フォルダ内は直下のみをファイル名順で並べる。

use crate::error::{ObjDetectError, Result};
use objdetect_common::{is_accepted, mime_type_for};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: String,
}

/// multipart の1パート分
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageInfo {
    /// 受付ルールを満たさない場合は None
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_string_lossy().to_string();
        let mime_type = mime_type_for(&file_name)?;
        if !is_accepted(&file_name, mime_type) {
            return None;
        }

        Some(Self {
            path: path.to_path_buf(),
            file_name,
            mime_type: mime_type.to_string(),
        })
    }

    pub fn load(&self) -> Result<UploadFile> {
        let bytes = std::fs::read(&self.path)?;
        Ok(UploadFile {
            file_name: self.file_name.clone(),
            mime_type: self.mime_type.clone(),
            bytes,
        })
    }
}

pub fn scan_folder(folder: &Path) -> Result<Vec<ImageInfo>> {
    if !folder.exists() {
        return Err(ObjDetectError::FolderNotFound(folder.display().to_string()));
    }

    let mut images = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        match ImageInfo::from_path(path) {
            Some(image) => images.push(image),
            None => tracing::debug!("skipped unsupported file: {}", path.display()),
        }
    }

    // ファイル名でソート
    images.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(images)
}

/// ファイル/フォルダの混在した引数から画像を集める
pub fn collect_images(paths: &[PathBuf]) -> Result<Vec<ImageInfo>> {
    let mut images = Vec::new();

    for path in paths {
        if path.is_dir() {
            images.extend(scan_folder(path)?);
        } else if path.is_file() {
            match ImageInfo::from_path(path) {
                Some(image) => images.push(image),
                None => tracing::debug!("skipped unsupported file: {}", path.display()),
            }
        } else {
            return Err(ObjDetectError::FileNotFound(path.display().to_string()));
        }
    }

    Ok(images)
}
