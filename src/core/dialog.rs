// ─── File Picker Capability ───
// The UI asks the backend to open native file dialogs. Which host
// actually shows them is a startup decision: desktop sessions get the
// native picker, headless environments get the stub.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Options forwarded from the UI's picker request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DialogRequest {
    pub title: Option<String>,
    pub default_path: Option<String>,
    pub filters: Vec<DialogFilter>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogFilter {
    pub name: String,
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OpenDialogResponse {
    pub canceled: bool,
    pub file_paths: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaveDialogResponse {
    pub canceled: bool,
    pub file_path: Option<String>,
}

/// A host capable of showing file pickers.
#[async_trait]
pub trait DialogHost: Send + Sync {
    async fn pick_open(&self, request: DialogRequest) -> OpenDialogResponse;
    async fn pick_save(&self, request: DialogRequest) -> SaveDialogResponse;
}

/// Native OS picker.
pub struct NativeDialogHost;

impl NativeDialogHost {
    fn dialog(request: &DialogRequest) -> rfd::AsyncFileDialog {
        let mut dialog = rfd::AsyncFileDialog::new();
        if let Some(title) = &request.title {
            dialog = dialog.set_title(title.as_str());
        }
        if let Some(dir) = &request.default_path {
            dialog = dialog.set_directory(dir);
        }
        for filter in &request.filters {
            let extensions: Vec<&str> = filter.extensions.iter().map(String::as_str).collect();
            dialog = dialog.add_filter(filter.name.as_str(), &extensions);
        }
        dialog
    }
}

#[async_trait]
impl DialogHost for NativeDialogHost {
    async fn pick_open(&self, request: DialogRequest) -> OpenDialogResponse {
        let picked = Self::dialog(&request).pick_files().await;
        match picked {
            Some(handles) if !handles.is_empty() => OpenDialogResponse {
                canceled: false,
                file_paths: handles
                    .iter()
                    .map(|h| h.path().to_string_lossy().into_owned())
                    .collect(),
            },
            _ => OpenDialogResponse {
                canceled: true,
                file_paths: Vec::new(),
            },
        }
    }

    async fn pick_save(&self, request: DialogRequest) -> SaveDialogResponse {
        match Self::dialog(&request).save_file().await {
            Some(handle) => SaveDialogResponse {
                canceled: false,
                file_path: Some(handle.path().to_string_lossy().into_owned()),
            },
            None => SaveDialogResponse {
                canceled: true,
                file_path: None,
            },
        }
    }
}

/// Headless stand-in: every request reports a canceled dialog so callers
/// keep working without a display server.
pub struct StubDialogHost;

#[async_trait]
impl DialogHost for StubDialogHost {
    async fn pick_open(&self, _request: DialogRequest) -> OpenDialogResponse {
        OpenDialogResponse {
            canceled: true,
            file_paths: Vec::new(),
        }
    }

    async fn pick_save(&self, _request: DialogRequest) -> SaveDialogResponse {
        SaveDialogResponse {
            canceled: true,
            file_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stub_host_cancels_everything() {
        let host = StubDialogHost;

        let open = host.pick_open(DialogRequest::default()).await;
        assert!(open.canceled);
        assert!(open.file_paths.is_empty());

        let save = host.pick_save(DialogRequest::default()).await;
        assert!(save.canceled);
        assert_eq!(save.file_path, None);
    }
}
