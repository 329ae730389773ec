use super::{ConflictEntry, Scheduler, TeacherConflicts};
use crate::model::{SubjectId, TimeSlot};
use std::collections::HashMap;

pub(super) fn find_teacher_conflicts(scheduler: &Scheduler) -> Vec<TeacherConflicts> {
    let mut out = Vec::new();

    for teacher in scheduler.timetable.teachers.iter() {
        let mut occupied: HashMap<&TimeSlot, &SubjectId> = HashMap::new();
        let mut entries = Vec::new();

        for subject in teacher.subjects.iter() {
            for slot in scheduler.timetable.slots_of(subject) {
                if let Some(claimer) = occupied.get(slot) {
                    // Le créneau est déjà tenu par une matière vue plus tôt
                    // dans la liste de cet enseignant : les deux matières
                    // sont signalées, la nouvelle venue d'abord.
                    entries.push(ConflictEntry {
                        subject: subject.clone(),
                        slot: slot.clone(),
                    });
                    entries.push(ConflictEntry {
                        subject: (*claimer).clone(),
                        slot: slot.clone(),
                    });
                } else {
                    occupied.insert(slot, subject);
                }
            }
        }

        if !entries.is_empty() {
            out.push(TeacherConflicts {
                teacher: teacher.id.clone(),
                entries,
            });
        }
    }

    out
}
