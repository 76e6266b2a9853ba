//! Native save and error dialogs

use std::path::PathBuf;

use rfd::{AsyncFileDialog, AsyncMessageDialog, MessageButtons, MessageLevel};

use crate::export::ExportFormat;

/// Ask where to save an export. `None` when the user cancels.
pub async fn choose_save_path(format: ExportFormat, suggested_name: String) -> Option<PathBuf> {
    let mut dialog = AsyncFileDialog::new()
        .set_title(format!("Save as {}", format))
        .add_filter(format.filter_name(), &[format.extension()])
        .set_file_name(suggested_name);

    if let Some(dir) = dirs::document_dir() {
        dialog = dialog.set_directory(dir);
    }

    dialog
        .save_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

/// Modal error box.
pub async fn show_error(message: String) {
    AsyncMessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("Error")
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show()
        .await;
}
