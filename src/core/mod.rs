// ─── MRDoom Core ───
// Backend for a desktop Doom mod launcher.
//
// Architecture:
//   core/
//     paths     — config directory layout
//     storage   — first-run initialization + seeded defaults
//     settings  — application settings (load-with-defaults, merge-write)
//     versions  — seeded base-game profiles
//     mods/     — Mod/ModFile model + per-mod JSON record store
//     catalog   — shared mod-file pool, deduplicated by path
//     launch/   — load-order resolver + argument builder + spawner
//     dialog    — file-picker capability (native host / stub host)
//     state     — wiring for the command layer

pub mod catalog;
pub mod dialog;
pub mod error;
pub mod launch;
pub mod mods;
pub mod paths;
pub mod settings;
pub mod state;
pub mod storage;
pub mod versions;
