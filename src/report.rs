use crate::model::{SubjectId, Timetable};
use crate::scheduler::{Scheduler, TeacherConflicts};

/// Bilan d'une planification : ce qui reste à arbitrer une fois les trois
/// phases jouées.
#[derive(Debug, Clone)]
pub struct PlanReport {
    pub scheduled: usize,
    pub unscheduled: Vec<SubjectId>,
    pub residual_conflicts: Vec<TeacherConflicts>,
}

impl PlanReport {
    /// Vrai si chaque matière tient un créneau et qu'aucun conflit ne
    /// subsiste.
    pub fn is_clean(&self) -> bool {
        self.unscheduled.is_empty() && self.residual_conflicts.is_empty()
    }
}

/// Permet de customiser le rendu du bilan (texte, mail, etc.).
pub trait ReportRenderer {
    fn render(&self, timetable: &Timetable, report: &PlanReport) -> String;
}

/// Gabarit texte simple destiné à la console ou à un futur mail.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReport;

impl ReportRenderer for TextReport {
    fn render(&self, timetable: &Timetable, report: &PlanReport) -> String {
        let mut out = format!(
            "Planification : {}/{} matière(s) placée(s).\n",
            report.scheduled,
            timetable.subjects.len()
        );

        if report.unscheduled.is_empty() {
            out.push_str("Sans créneau : aucune\n");
        } else {
            let names: Vec<&str> = report.unscheduled.iter().map(|s| s.as_str()).collect();
            out.push_str(&format!("Sans créneau : {}\n", names.join(", ")));
        }

        if report.residual_conflicts.is_empty() {
            out.push_str("Conflits résiduels : aucun\n");
        } else {
            out.push_str("Conflits résiduels :\n");
            for group in &report.residual_conflicts {
                for entry in &group.entries {
                    out.push_str(&format!(
                        "  {} : {} @ {}\n",
                        group.teacher, entry.subject, entry.slot
                    ));
                }
            }
        }

        out
    }
}

/// Dresse le bilan de l'état courant du scheduler. L'échec d'une
/// planification n'est jamais une erreur : il se lit ici.
pub fn prepare_report(scheduler: &Scheduler) -> PlanReport {
    let timetable = scheduler.timetable();

    let unscheduled: Vec<SubjectId> = timetable
        .subjects
        .iter()
        .filter(|&s| timetable.slots_of(s).is_empty())
        .cloned()
        .collect();

    PlanReport {
        scheduled: timetable.subjects.len() - unscheduled.len(),
        unscheduled,
        residual_conflicts: scheduler.find_teacher_conflicts(),
    }
}
