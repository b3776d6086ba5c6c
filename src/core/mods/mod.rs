pub mod model;
pub mod store;

pub use model::{FileType, Mod, ModFile};
pub use store::ModStore;
