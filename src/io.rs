use crate::model::{SubjectId, Teacher, TimeSlot, Timetable};
use anyhow::{bail, Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import de matières depuis CSV : header `name`
pub fn import_subjects_csv<P: AsRef<Path>>(path: P) -> Result<Vec<SubjectId>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        if name.is_empty() {
            bail!("invalid subject row (empty)");
        }
        out.push(SubjectId::new(name));
    }
    Ok(out)
}

/// Import d'enseignants depuis CSV : header `name,subjects`, matières
/// séparées par `;` (liste éventuellement vide)
pub fn import_teachers_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Teacher>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        if name.is_empty() {
            bail!("invalid teacher row (empty)");
        }
        let subjects = match rec.get(1) {
            Some(raw) => parse_subject_list(raw),
            None => Vec::new(),
        };
        out.push(Teacher::new(name, subjects));
    }
    Ok(out)
}

fn parse_subject_list(raw: &str) -> Vec<SubjectId> {
    raw.split(';')
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(SubjectId::new)
        .collect()
}

/// Import de créneaux depuis CSV : header `day,hour`
pub fn import_slots_csv<P: AsRef<Path>>(path: P) -> Result<Vec<TimeSlot>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let day = rec.get(0).context("missing day")?.trim();
        let hour = rec.get(1).context("missing hour")?.trim();
        if day.is_empty() || hour.is_empty() {
            bail!("invalid slot row (empty)");
        }
        out.push(TimeSlot::new(day, hour));
    }
    Ok(out)
}

/// Export JSON du timetable (jolie mise en forme)
pub fn export_timetable_json<P: AsRef<Path>>(path: P, timetable: &Timetable) -> Result<()> {
    let s = serde_json::to_string_pretty(timetable)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV du planning : header `subject,day,hour,teacher`. Une matière
/// sans créneau sort avec jour et heure vides ; une matière qu'aucun
/// enseignant n'assure sort avec la colonne enseignant vide.
pub fn export_schedule_csv<P: AsRef<Path>>(path: P, timetable: &Timetable) -> Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["subject", "day", "hour", "teacher"])?;
    for subject in &timetable.subjects {
        let (day, hour) = timetable
            .first_slot(subject)
            .map(|s| (s.day.as_str(), s.hour.as_str()))
            .unwrap_or(("", ""));
        let teacher = timetable
            .teacher_of(subject)
            .map(|t| t.id.as_str())
            .unwrap_or("");
        w.write_record([subject.as_str(), day, hour, teacher])?;
    }
    w.flush()?;
    Ok(())
}
