use std::path::Path;

use anyhow::Context;

use crate::client::models::analysis::ImageAttachment;

/// Reads the selected receipt image. The file type is not validated; the
/// extension only feeds the content-type hint.
pub async fn load_image(path: &Path) -> anyhow::Result<ImageAttachment> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("cannot read '{}'", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("receipt")
        .to_string();
    Ok(ImageAttachment::new(file_name, bytes))
}
