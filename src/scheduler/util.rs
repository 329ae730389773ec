use crate::model::{Assignment, SubjectId, TimeSlot, Timetable};
use std::collections::HashSet;

/// Ensemble des créneaux tenus par au moins une matière, tout le planning
/// confondu.
pub(super) fn occupied_slots(timetable: &Timetable) -> HashSet<&TimeSlot> {
    timetable
        .schedule
        .iter()
        .flat_map(|a| a.slots.iter())
        .collect()
}

/// Premier créneau globalement libre, dans l'ordre canonique de la liste
/// de construction. La recherche n'exclut pas le créneau en cours de
/// libération : tout créneau libre convient.
pub(super) fn find_alternative_slot(timetable: &Timetable) -> Option<TimeSlot> {
    let occupied = occupied_slots(timetable);
    timetable
        .slots
        .iter()
        .find(|s| !occupied.contains(s))
        .cloned()
}

pub(super) fn find_assignment_index(schedule: &[Assignment], subject: &SubjectId) -> Option<usize> {
    schedule.iter().position(|a| &a.subject == subject)
}
