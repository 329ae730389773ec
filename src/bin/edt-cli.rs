#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use edt::{
    grid::load_grid_from_file,
    io,
    model::SubjectId,
    report::{prepare_report, ReportRenderer, TextReport},
    scheduler::{ResolveOptions, Scheduler},
    storage::{JsonStorage, Storage},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste d'emploi du temps (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON d'emploi du temps
    #[arg(long, global = true, default_value = "timetable.json")]
    plan: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Déclarer une matière
    AddSubject {
        #[arg(long)]
        name: String,
    },

    /// Déclarer un créneau
    AddSlot {
        #[arg(long)]
        day: String,
        #[arg(long)]
        hour: String,
    },

    /// Déclarer un enseignant et ses matières
    AddTeacher {
        #[arg(long)]
        name: String,
        /// liste "Math;Physique;..."
        #[arg(long, default_value = "")]
        subjects: String,
    },

    /// Importer des matières depuis un CSV
    ImportSubjects {
        #[arg(long)]
        csv: String,
    },

    /// Importer des enseignants depuis un CSV
    ImportTeachers {
        #[arg(long)]
        csv: String,
    },

    /// Importer des créneaux depuis un CSV
    ImportSlots {
        #[arg(long)]
        csv: String,
    },

    /// Générer les créneaux depuis une grille hebdomadaire (JSON)
    GenerateSlots {
        #[arg(long)]
        grid: String,
        /// Remplace les créneaux existants au lieu de les compléter
        #[arg(long)]
        replace: bool,
    },

    /// Dérouler la planification (affectation, résolution, complétion)
    Plan {
        #[arg(long, default_value_t = 1)]
        max_passes: u32,
    },

    /// Lister et optionnellement exporter
    List {
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Vérifier les conflits enseignants
    Check {
        /// Export CSV des conflits (optionnel)
        #[arg(long)]
        report: Option<String>,
    },

    /// Écrire le bilan texte de la planification
    Report {
        /// Fichier de sortie (texte brut)
        #[arg(long)]
        out: String,
    },
}

fn parse_subject_list(raw: &str) -> Vec<SubjectId> {
    raw.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(SubjectId::new)
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.plan)?;
    let mut scheduler = match storage.load() {
        Ok(t) => {
            let mut s = Scheduler::new();
            *s.timetable_mut() = t;
            s
        }
        Err(_) => Scheduler::new(),
    };

    let code = match cli.cmd {
        Commands::AddSubject { name } => {
            scheduler.add_subject(&name)?;
            storage.save(scheduler.timetable())?;
            0
        }
        Commands::AddSlot { day, hour } => {
            scheduler.add_slot(&day, &hour)?;
            storage.save(scheduler.timetable())?;
            0
        }
        Commands::AddTeacher { name, subjects } => {
            scheduler.add_teacher(&name, parse_subject_list(&subjects))?;
            storage.save(scheduler.timetable())?;
            0
        }
        Commands::ImportSubjects { csv } => {
            let subjects = io::import_subjects_csv(csv)?;
            scheduler.add_subjects(subjects);
            storage.save(scheduler.timetable())?;
            0
        }
        Commands::ImportTeachers { csv } => {
            let teachers = io::import_teachers_csv(csv)?;
            scheduler.timetable_mut().teachers.extend(teachers);
            storage.save(scheduler.timetable())?;
            0
        }
        Commands::ImportSlots { csv } => {
            let slots = io::import_slots_csv(csv)?;
            scheduler.add_slots(slots);
            storage.save(scheduler.timetable())?;
            0
        }
        Commands::GenerateSlots { grid, replace } => {
            let grid = load_grid_from_file(grid)?;
            let slots = grid.expand()?;
            if replace {
                scheduler.timetable_mut().slots.clear();
            }
            println!("{} créneau(x) généré(s) depuis la grille {}", slots.len(), grid.id);
            scheduler.add_slots(slots);
            storage.save(scheduler.timetable())?;
            0
        }
        Commands::Plan { max_passes } => {
            if max_passes == 0 {
                bail!("max_passes doit être au moins 1");
            }
            scheduler.plan(ResolveOptions { max_passes });
            storage.save(scheduler.timetable())?;
            let report = prepare_report(&scheduler);
            print!("{}", TextReport.render(scheduler.timetable(), &report));
            0
        }
        Commands::List { out_json, out_csv } => {
            if let Some(path) = out_json {
                io::export_timetable_json(path, scheduler.timetable())?;
            }
            if let Some(path) = out_csv {
                io::export_schedule_csv(path, scheduler.timetable())?;
            }
            // impression compacte
            for subject in &scheduler.timetable().subjects {
                let slot = scheduler
                    .timetable()
                    .first_slot(subject)
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "-".to_string());
                let teacher = scheduler
                    .timetable()
                    .teacher_of(subject)
                    .map(|t| t.id.as_str())
                    .unwrap_or("-");
                println!("{} | {} | {}", subject.as_str(), slot, teacher);
            }
            0
        }
        Commands::Check { report } => {
            let conflicts = scheduler.find_teacher_conflicts();
            if conflicts.is_empty() {
                println!("OK: no conflicts");
                0
            } else {
                let total: usize = conflicts.iter().map(|c| c.entries.len()).sum();
                eprintln!("Found {total} conflict(s)");
                if let Some(path) = report {
                    // CSV simple
                    let mut w = csv::Writer::from_path(path)?;
                    w.write_record(["teacher", "subject", "day", "hour"])?;
                    for group in &conflicts {
                        for entry in &group.entries {
                            w.write_record([
                                group.teacher.as_str(),
                                entry.subject.as_str(),
                                entry.slot.day.as_str(),
                                entry.slot.hour.as_str(),
                            ])?;
                        }
                    }
                    w.flush()?;
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
        Commands::Report { out } => {
            let report = prepare_report(&scheduler);
            let rendered = TextReport.render(scheduler.timetable(), &report);
            std::fs::write(&out, rendered)?;
            println!(
                "Report written to {out} ({} unscheduled, {} conflict group(s))",
                report.unscheduled.len(),
                report.residual_conflicts.len()
            );
            0
        }
    };

    std::process::exit(code);
}
