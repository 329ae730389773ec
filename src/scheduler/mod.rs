mod assignment;
mod conflicts;
mod mutate;
mod types;
mod util;

pub use types::{ConflictEntry, ResolveOptions, SchedError, TeacherConflicts};

use crate::model::{SubjectId, Teacher, TimeSlot, Timetable};

/// Scheduler : encapsule un Timetable en cours de construction.
///
/// Le pipeline contractuel est `initialize` → `resolve_conflicts` →
/// `finalize` (ou `plan`, qui enchaîne les trois). Chaque phase suppose
/// l'état laissé par la précédente ; un autre ordre n'est pas défini.
/// L'instance n'est pas prévue pour une mutation concurrente : un seul
/// propriétaire, aucun verrou interne.
#[derive(Debug, Default)]
pub struct Scheduler {
    timetable: Timetable,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            timetable: Timetable::default(),
        }
    }

    pub fn timetable(&self) -> &Timetable {
        &self.timetable
    }
    pub fn timetable_mut(&mut self) -> &mut Timetable {
        &mut self.timetable
    }

    /// Déclare une matière. L'ordre d'appel fixe l'ordre d'affectation.
    pub fn add_subject(&mut self, name: &str) -> Result<SubjectId, SchedError> {
        let id = SubjectId::new(name);
        if self.timetable.subjects.contains(&id) {
            return Err(SchedError::DuplicateSubject(name.to_string()));
        }
        self.timetable.subjects.push(id.clone());
        Ok(id)
    }

    pub fn add_subjects(&mut self, subjects: Vec<SubjectId>) {
        self.timetable.subjects.extend(subjects);
    }

    /// Déclare un créneau. L'ordre d'appel fixe l'ordre canonique utilisé
    /// par l'affectation et la recherche d'alternative.
    pub fn add_slot(&mut self, day: &str, hour: &str) -> Result<TimeSlot, SchedError> {
        let slot = TimeSlot::new(day, hour);
        if self.timetable.slots.contains(&slot) {
            return Err(SchedError::DuplicateSlot(slot.to_string()));
        }
        self.timetable.slots.push(slot.clone());
        Ok(slot)
    }

    pub fn add_slots(&mut self, slots: Vec<TimeSlot>) {
        self.timetable.slots.extend(slots);
    }

    /// Déclare un enseignant. Chaque matière de sa liste doit avoir été
    /// déclarée ; la liste peut être vide.
    pub fn add_teacher(&mut self, name: &str, subjects: Vec<SubjectId>) -> Result<(), SchedError> {
        if self.timetable.teachers.iter().any(|t| t.id.as_str() == name) {
            return Err(SchedError::DuplicateTeacher(name.to_string()));
        }
        for subject in &subjects {
            if !self.timetable.subjects.contains(subject) {
                return Err(SchedError::UnknownSubject(subject.as_str().to_string()));
            }
        }
        self.timetable.teachers.push(Teacher::new(name, subjects));
        Ok(())
    }

    /// Phase (a) : affectation naïve premier arrivé, premier servi.
    pub fn initialize(&mut self) {
        assignment::initialize(self);
    }

    /// Conflits enseignants de l'état courant, dans un ordre déterministe
    /// (enseignants puis matières, ordres d'entrée).
    pub fn find_teacher_conflicts(&self) -> Vec<TeacherConflicts> {
        conflicts::find_teacher_conflicts(self)
    }

    /// Phase (b) : résolution des conflits relevés en début de balayage.
    pub fn resolve_conflicts(&mut self, opts: ResolveOptions) {
        mutate::resolve_conflicts(self, opts);
    }

    /// Phase (c) : complétion des matières restées sans créneau.
    pub fn finalize(&mut self) {
        assignment::finalize(self);
    }

    /// Enchaîne les trois phases dans l'ordre contractuel.
    pub fn plan(&mut self, opts: ResolveOptions) {
        self.initialize();
        self.resolve_conflicts(opts);
        self.finalize();
    }
}
