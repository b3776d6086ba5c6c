// ─── Application State ───
// Wires the storage layout, the stores, and the dialog capability into
// one value the command layer borrows. No hidden globals: configuration
// is read from the settings store per request and passed along.

use crate::core::catalog::Catalog;
use crate::core::dialog::{DialogHost, StubDialogHost};
use crate::core::mods::ModStore;
use crate::core::paths::ConfigPaths;
use crate::core::settings::SettingsStore;
use crate::core::versions::VersionStore;

pub struct AppState {
    pub paths: ConfigPaths,
    pub mods: ModStore,
    pub versions: VersionStore,
    pub settings: SettingsStore,
    pub catalog: Catalog,
    pub dialog: Box<dyn DialogHost>,
}

impl AppState {
    /// State with the stub dialog host; headless surfaces (CLI, tests)
    /// use this directly.
    pub fn new(paths: ConfigPaths) -> Self {
        Self::with_dialog_host(paths, Box::new(StubDialogHost))
    }

    /// State with an explicit dialog host, chosen once at startup by the
    /// embedding surface (native picker on desktop, stub elsewhere).
    pub fn with_dialog_host(paths: ConfigPaths, dialog: Box<dyn DialogHost>) -> Self {
        Self {
            mods: ModStore::new(paths.clone()),
            versions: VersionStore::new(paths.clone()),
            settings: SettingsStore::new(paths.clone()),
            catalog: Catalog::new(paths.clone()),
            dialog,
            paths,
        }
    }
}
