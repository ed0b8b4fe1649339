use super::super::api;
use crate::shared::download;
use contracts::usecases::u101_process_pdf::{selection, ArtifactKind, ProcessedArtifacts};
use leptos::prelude::*;

/// ViewModel for the PDF processing workflow
///
/// Uses the simplified MVVM pattern:
/// - Session state lives in signals owned by this struct
/// - Commands for the three operations (select, upload, retrieve)
/// - No rendering dependencies; views subscribe to the signals
///
/// All state is written on the single browser event loop: artifacts are
/// installed only when an upload completes and read only when a retrieval
/// starts, so a retriever can never observe a half-written record.
#[derive(Clone, Copy)]
pub struct ProcessPdfViewModel {
    /// The admitted file itself; `web_sys::File` is not Send, store locally
    selected_file: StoredValue<Option<web_sys::File>, LocalStorage>,
    /// Name of the admitted file, for display and button gating
    pub selected_file_name: RwSignal<Option<String>>,
    /// Artifact identifiers from the last successful upload
    pub artifacts: RwSignal<ProcessedArtifacts>,
    /// Single user-visible message slot, overwritten by the latest outcome
    pub error: RwSignal<Option<String>>,
    /// Busy flag for the upload transaction; retrievals ignore it
    pub is_uploading: RwSignal<bool>,
}

impl ProcessPdfViewModel {
    pub fn new() -> Self {
        Self {
            selected_file: StoredValue::new_local(None),
            selected_file_name: RwSignal::new(None),
            artifacts: RwSignal::new(ProcessedArtifacts::default()),
            error: RwSignal::new(None),
            is_uploading: RwSignal::new(false),
        }
    }

    /// Admit or reject a file chosen in the picker.
    ///
    /// Only `application/pdf` passes the gate; anything else, including a
    /// cancelled picker, clears the selection and surfaces the fixed
    /// rejection message.
    pub fn select_file(&self, file: Option<web_sys::File>) {
        match file {
            Some(file) if selection::validate_file_type(&file.type_()).is_ok() => {
                self.selected_file_name.set(Some(file.name()));
                self.selected_file.set_value(Some(file));
                self.error.set(None);
            }
            _ => {
                self.selected_file.set_value(None);
                self.selected_file_name.set(None);
                self.error
                    .set(Some(selection::INVALID_FILE_MESSAGE.to_string()));
            }
        }
    }

    /// Submit the admitted file to the processing service.
    ///
    /// One upload at a time: triggers while in flight are ignored. On
    /// success all three artifact slots are replaced together and the
    /// selection is released; on failure the previous artifacts stay
    /// untouched and the user may re-trigger.
    pub fn upload(&self) {
        if self.is_uploading.get() {
            return;
        }

        let Some(file) = self.selected_file.get_value() else {
            self.error.set(Some(selection::NO_FILE_MESSAGE.to_string()));
            return;
        };

        self.is_uploading.set(true);

        let selected_file = self.selected_file;
        let selected_file_name = self.selected_file_name;
        let artifacts = self.artifacts;
        let error = self.error;
        let is_uploading = self.is_uploading;

        wasm_bindgen_futures::spawn_local(async move {
            match api::upload_pdf(file).await {
                Ok(response) => {
                    artifacts.set(ProcessedArtifacts::from_response(&response));
                    selected_file.set_value(None);
                    selected_file_name.set(None);
                    error.set(None);
                }
                Err(e) => {
                    log::error!("Upload failed: {}", e);
                    error.set(Some(format!("Failed to upload file: {}", e)));
                }
            }
            is_uploading.set(false);
        });
    }

    /// Fetch one artifact and deliver it: Excel and JSON are saved to disk
    /// under their identifier, the graph opens in a new tab.
    ///
    /// Kinds are independent: overlapping retrievals are allowed and the
    /// message slot reflects whichever finishes last.
    pub fn retrieve(&self, kind: ArtifactKind) {
        let Some(filename) = self.artifacts.get().filename(kind).map(str::to_string) else {
            self.error.set(Some(kind.missing_message().to_string()));
            return;
        };

        let error = self.error;

        wasm_bindgen_futures::spawn_local(async move {
            let delivered =
                api::fetch_artifact(kind, &filename)
                    .await
                    .and_then(|bytes| match kind {
                        ArtifactKind::Excel | ArtifactKind::Json => {
                            download::save_bytes(&bytes, kind.mime_type(), &filename)
                        }
                        ArtifactKind::Graph => {
                            download::open_bytes_in_new_tab(&bytes, kind.mime_type())
                        }
                    });

            if let Err(e) = delivered {
                log::error!("Artifact retrieval failed: {}", e);
                error.set(Some(kind.failure_message(&e)));
            }
        });
    }
}
