use super::{util, Scheduler};
use crate::model::Assignment;

/// Affectation naïve : chaque matière, dans l'ordre d'entrée, reçoit le
/// prochain créneau encore vierge. Les matières au-delà du stock restent
/// sans créneau. Aucune prise en compte des enseignants à ce stade.
pub(super) fn initialize(scheduler: &mut Scheduler) {
    let subjects = scheduler.timetable.subjects.clone();
    let mut available = scheduler.timetable.slots.clone().into_iter();

    scheduler.timetable.schedule.clear();
    for subject in subjects {
        let slots = match available.next() {
            Some(slot) => vec![slot],
            None => Vec::new(),
        };
        scheduler.timetable.schedule.push(Assignment { subject, slots });
    }
}

/// Complétion : les matières restées sans créneau puisent dans les créneaux
/// qu'aucune matière ne tient, consommés dans l'ordre canonique. Les
/// matières déjà placées ne sont jamais touchées.
pub(super) fn finalize(scheduler: &mut Scheduler) {
    let free: Vec<_> = {
        let occupied = util::occupied_slots(&scheduler.timetable);
        scheduler
            .timetable
            .slots
            .iter()
            .filter(|s| !occupied.contains(s))
            .cloned()
            .collect()
    };
    let mut free = free.into_iter();

    let subjects = scheduler.timetable.subjects.clone();
    for subject in subjects {
        if !scheduler.timetable.slots_of(&subject).is_empty() {
            continue;
        }
        let Some(slot) = free.next() else { break };
        match scheduler.timetable.find_assignment_mut(&subject) {
            Some(a) => a.slots.push(slot),
            None => scheduler.timetable.schedule.push(Assignment {
                subject,
                slots: vec![slot],
            }),
        }
    }
}
