use super::{util, ResolveOptions, Scheduler, TeacherConflicts};
use crate::model::{SubjectId, TimeSlot};

/// Résolution des conflits enseignants. Les conflits sont relevés une fois
/// en début de balayage ; ceux qu'un balayage laisse derrière lui ne sont
/// re-détectés qu'au balayage suivant (`max_passes` > 1) ou par un appel
/// ultérieur à `find_teacher_conflicts`.
pub(super) fn resolve_conflicts(scheduler: &mut Scheduler, opts: ResolveOptions) {
    for _ in 0..opts.max_passes.max(1) {
        let conflicts = scheduler.find_teacher_conflicts();
        if conflicts.is_empty() {
            break;
        }
        resolve_pass(scheduler, &conflicts);
    }
}

fn resolve_pass(scheduler: &mut Scheduler, conflicts: &[TeacherConflicts]) {
    for group in conflicts {
        for entry in &group.entries {
            resolve_entry(scheduler, &entry.subject, &entry.slot);
        }
    }
}

/// Traite un conflit (matière, créneau) : relogement vers un créneau libre
/// si possible, sinon bascule du créneau vers une autre matière qui le
/// tient. Ne produit jamais d'erreur ; l'échec se lit dans l'état final.
fn resolve_entry(scheduler: &mut Scheduler, subject: &SubjectId, slot: &TimeSlot) {
    // Entrée périmée : un collision à trois matières produit des entrées en
    // double, et la matière a pu être relogée plus tôt dans le balayage.
    let Some(idx) = util::find_assignment_index(&scheduler.timetable.schedule, subject) else {
        return;
    };
    let Some(pos) = scheduler.timetable.schedule[idx]
        .slots
        .iter()
        .position(|s| s == slot)
    else {
        return;
    };

    if let Some(alternative) = util::find_alternative_slot(&scheduler.timetable) {
        // Relogement pur : seule la matière en conflit bouge.
        let assignment = &mut scheduler.timetable.schedule[idx];
        assignment.slots.remove(pos);
        assignment.slots.push(alternative);
        return;
    }

    // Aucun créneau libre : la première autre matière tenant ce créneau le
    // cède et reçoit une alternative fraîchement calculée — ou le même
    // créneau à défaut, bascule blanche qui laisse le conflit observable.
    let swap_idx = scheduler
        .timetable
        .schedule
        .iter()
        .position(|a| &a.subject != subject && a.slots.contains(slot));
    if let Some(swap_idx) = swap_idx {
        if let Some(swap_pos) = scheduler.timetable.schedule[swap_idx]
            .slots
            .iter()
            .position(|s| s == slot)
        {
            scheduler.timetable.schedule[swap_idx].slots.remove(swap_pos);
            let replacement = util::find_alternative_slot(&scheduler.timetable)
                .unwrap_or_else(|| slot.clone());
            scheduler.timetable.schedule[swap_idx].slots.push(replacement);
        }
    }
}
