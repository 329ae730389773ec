use crate::model::{SubjectId, TeacherId, TimeSlot};
use thiserror::Error;

/// Options de résolution
#[derive(Debug, Clone, Copy)]
pub struct ResolveOptions {
    /// Nombre de balayages de résolution. 1 = comportement de référence
    /// (mono-passe, sans re-détection en cours de balayage).
    pub max_passes: u32,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self { max_passes: 1 }
    }
}

/// Conflit élémentaire : une matière et le créneau qu'elle partage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictEntry {
    pub subject: SubjectId,
    pub slot: TimeSlot,
}

/// Conflits d'un enseignant, dans l'ordre de détection. Un enseignant sans
/// conflit n'apparaît pas dans le résultat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherConflicts {
    pub teacher: TeacherId,
    pub entries: Vec<ConflictEntry>,
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("unknown subject: {0}")]
    UnknownSubject(String),
    #[error("duplicate subject: {0}")]
    DuplicateSubject(String),
    #[error("duplicate time slot: {0}")]
    DuplicateSlot(String),
    #[error("duplicate teacher: {0}")]
    DuplicateTeacher(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
