#![forbid(unsafe_code)]
//! Edt — bibliothèque d'emplois du temps scolaires locale (sans BD).
//!
//! - Stockage fichiers (JSON/CSV).
//! - Affectation naïve puis résolution des conflits enseignants, au mieux
//!   et sans jamais échouer : ce qui reste se lit dans le bilan.
//! - Mono-passe par défaut ; multi-passes en opt-in explicite.
//! - Grilles hebdomadaires pour générer les créneaux.

pub mod grid;
pub mod io;
pub mod model;
pub mod report;
pub mod scheduler;
pub mod storage;

pub use grid::{export_grid_json, load_grid_from_file, Grid, GridInfo, GridStore};
pub use model::{Assignment, SubjectId, Teacher, TeacherId, TimeSlot, Timetable};
pub use report::{prepare_report, PlanReport, ReportRenderer, TextReport};
pub use scheduler::{ConflictEntry, ResolveOptions, SchedError, Scheduler, TeacherConflicts};
pub use storage::{JsonStorage, Storage};
