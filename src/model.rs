use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifiant fort pour Subject (matière)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubjectId(String);

impl SubjectId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifiant fort pour Teacher (enseignant)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeacherId(String);

impl TeacherId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeacherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Créneau horaire (jour, heure). Valeur opaque, comparable, tirée de la
/// liste ordonnée fournie à la construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeSlot {
    pub day: String,
    pub hour: String,
}

impl TimeSlot {
    pub fn new<D: Into<String>, H: Into<String>>(day: D, hour: H) -> Self {
        Self {
            day: day.into(),
            hour: hour.into(),
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.hour)
    }
}

/// Enseignant et la liste ordonnée des matières qu'il assure.
/// L'unicité matière→enseignant n'est pas imposée par le modèle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: TeacherId,
    #[serde(default)]
    pub subjects: Vec<SubjectId>,
}

impl Teacher {
    pub fn new<I: AsRef<str>>(id: I, subjects: Vec<SubjectId>) -> Self {
        Self {
            id: TeacherId::new(id),
            subjects,
        }
    }
}

/// Affectation d'une matière à ses créneaux.
///
/// En régime final une matière tient au plus un créneau ; la liste peut en
/// contenir davantage de façon transitoire pendant la résolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub subject: SubjectId,
    #[serde(default)]
    pub slots: Vec<TimeSlot>,
}

/// Emploi du temps complet : instance du problème + affectations courantes.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Timetable {
    pub subjects: Vec<SubjectId>,
    pub teachers: Vec<Teacher>,
    pub slots: Vec<TimeSlot>,
    #[serde(default)]
    pub schedule: Vec<Assignment>,
}

impl Timetable {
    pub fn find_teacher<'a>(&'a self, id: &TeacherId) -> Option<&'a Teacher> {
        self.teachers.iter().find(|t| &t.id == id)
    }
    pub fn find_assignment<'a>(&'a self, subject: &SubjectId) -> Option<&'a Assignment> {
        self.schedule.iter().find(|a| &a.subject == subject)
    }
    pub fn find_assignment_mut(&mut self, subject: &SubjectId) -> Option<&mut Assignment> {
        self.schedule.iter_mut().find(|a| &a.subject == subject)
    }

    /// Créneaux tenus par une matière ; vide si la matière est inconnue du
    /// planning ou restée sans créneau.
    pub fn slots_of<'a>(&'a self, subject: &SubjectId) -> &'a [TimeSlot] {
        self.find_assignment(subject)
            .map(|a| a.slots.as_slice())
            .unwrap_or(&[])
    }

    /// Premier créneau d'une matière (celui qu'affiche un appelant).
    pub fn first_slot<'a>(&'a self, subject: &SubjectId) -> Option<&'a TimeSlot> {
        self.slots_of(subject).first()
    }

    /// Premier enseignant (ordre d'entrée) dont la liste contient la matière.
    pub fn teacher_of<'a>(&'a self, subject: &SubjectId) -> Option<&'a Teacher> {
        self.teachers.iter().find(|t| t.subjects.contains(subject))
    }
}
