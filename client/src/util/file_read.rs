//! Browser file access for the upload workflow.
//!
//! Turns drag-and-drop / file-picker `FileList`s into [`PickedFile`]s and
//! reads a file into a `data:` URL. The read is callback-based in the
//! browser; here it is exposed as a future resolved from the reader's
//! `loadend` event. Requires a browser environment; other builds only see
//! the metadata half.

#[cfg(test)]
#[path = "file_read_test.rs"]
mod file_read_test;

use crate::state::upload::FileMeta;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FileReadError {
    #[error("file reader unavailable")]
    ReaderUnavailable,
    #[error("failed to read {0}")]
    ReadFailed(String),
    #[error("read of {0} was abandoned")]
    Abandoned(String),
}

/// A file chosen by the user.
#[derive(Clone, Debug)]
pub struct PickedFile {
    pub meta: FileMeta,
    #[cfg(feature = "hydrate")]
    pub handle: web_sys::File,
}

impl PickedFile {
    #[cfg(feature = "hydrate")]
    pub fn from_web(handle: web_sys::File) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let size = handle.size().max(0.0) as u64;
        Self { meta: FileMeta::new(handle.name(), handle.type_(), size), handle }
    }
}

/// Metadata of each picked file, in selection order.
pub fn metas(files: &[PickedFile]) -> Vec<FileMeta> {
    files.iter().map(|f| f.meta.clone()).collect()
}

/// Collect the entries of a browser `FileList`.
#[cfg(feature = "hydrate")]
pub fn from_file_list(list: Option<web_sys::FileList>) -> Vec<PickedFile> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).map(PickedFile::from_web).collect()
}

/// Read `file` into a `data:` URL.
///
/// # Errors
///
/// Fails when no `FileReader` can be created, the browser refuses the read,
/// or the reader finishes without a string result.
#[cfg(feature = "hydrate")]
pub async fn read_data_url(file: &PickedFile) -> Result<String, FileReadError> {
    use wasm_bindgen::JsCast as _;
    use wasm_bindgen::closure::Closure;

    let name = file.meta.name.clone();
    let reader = web_sys::FileReader::new().map_err(|_| FileReadError::ReaderUnavailable)?;
    let (tx, rx) = futures::channel::oneshot::channel::<Result<String, FileReadError>>();

    let reader_done = reader.clone();
    let done_name = name.clone();
    let on_load_end = Closure::<dyn FnMut(web_sys::ProgressEvent)>::once(move |_ev: web_sys::ProgressEvent| {
        let outcome = reader_done
            .result()
            .ok()
            .and_then(|value| value.as_string())
            .ok_or(FileReadError::ReadFailed(done_name));
        let _ = tx.send(outcome);
    });
    reader.set_onloadend(Some(on_load_end.as_ref().unchecked_ref()));
    reader
        .read_as_data_url(&file.handle)
        .map_err(|_| FileReadError::ReadFailed(name.clone()))?;

    let outcome = rx.await.map_err(|_| FileReadError::Abandoned(name));
    reader.set_onloadend(None);
    drop(on_load_end);
    outcome?
}
