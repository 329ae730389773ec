use crate::model::TimeSlot;
use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Description complète d'une grille hebdomadaire de créneaux.
///
/// La grille est le produit jours × heures ; son dépliage fournit la liste
/// canonique de créneaux attendue par le scheduler, dans l'ordre des jours
/// puis des heures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub days: Vec<String>,
    pub hours: Vec<NaiveTime>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

impl Grid {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            bail!("grid id cannot be empty");
        }
        if self.name.trim().is_empty() {
            bail!("grid name cannot be empty");
        }
        if self.days.is_empty() {
            bail!("grid must define at least one day");
        }
        if self.hours.is_empty() {
            bail!("grid must define at least one hour");
        }
        let mut seen_days = HashSet::new();
        for day in &self.days {
            if day.trim().is_empty() {
                bail!("grid day cannot be empty");
            }
            if !seen_days.insert(day.as_str()) {
                bail!("duplicate day in grid: {day}");
            }
        }
        let mut seen_labels = HashSet::new();
        for hour in &self.hours {
            let label = hour_label(*hour);
            if !seen_labels.insert(label.clone()) {
                bail!("duplicate hour label in grid: {label}");
            }
        }
        Ok(())
    }

    /// Déplie la grille en liste canonique de créneaux.
    pub fn expand(&self) -> Result<Vec<TimeSlot>> {
        self.validate()?;
        let mut slots = Vec::with_capacity(self.days.len() * self.hours.len());
        for day in &self.days {
            for hour in &self.hours {
                slots.push(TimeSlot::new(day.clone(), hour_label(*hour)));
            }
        }
        Ok(slots)
    }
}

/// Étiquette d'heure au format `9AM` / `1:30PM`, alignée sur les créneaux
/// saisis à la main.
fn hour_label(t: NaiveTime) -> String {
    if t.minute() == 0 {
        t.format("%-I%p").to_string()
    } else {
        t.format("%-I:%M%p").to_string()
    }
}

#[derive(Debug, Clone)]
pub struct GridInfo {
    pub grid: Grid,
    pub path: PathBuf,
    pub modified: Option<DateTime<Utc>>,
}

/// Gestion simple des grilles persistées sur disque.
#[derive(Debug, Clone)]
pub struct GridStore {
    base_dir: PathBuf,
}

impl GridStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            base_dir: dir.as_ref().to_path_buf(),
        }
    }

    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.base_dir)
            .with_context(|| format!("creating grid directory {}", self.base_dir.display()))
    }

    pub fn save(&self, grid: &Grid) -> Result<PathBuf> {
        grid.validate()?;
        self.ensure_dir()?;
        let path = self.base_dir.join(format!("{}.json", grid.id));
        let json = serde_json::to_string_pretty(grid)?;
        fs::write(&path, json).with_context(|| format!("writing grid {}", path.display()))?;
        Ok(path)
    }

    pub fn load(&self, id: &str) -> Result<Grid> {
        let path = self.base_dir.join(format!("{}.json", id));
        let data = fs::read(&path).with_context(|| format!("reading grid {}", path.display()))?;
        let grid: Grid = serde_json::from_slice(&data)
            .with_context(|| format!("parsing grid {}", path.display()))?;
        grid.validate()?;
        Ok(grid)
    }

    pub fn list(&self) -> Result<Vec<GridInfo>> {
        if !self.base_dir.exists() {
            return Ok(Vec::new());
        }
        let mut infos = Vec::new();
        for entry in fs::read_dir(&self.base_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            let data = fs::read(&path)?;
            let grid: Grid = match serde_json::from_slice(&data) {
                Ok(g) => g,
                Err(err) => {
                    eprintln!("Warning: could not parse grid {}: {err}", path.display());
                    continue;
                }
            };
            let modified = entry
                .metadata()
                .and_then(|meta| meta.modified())
                .ok()
                .map(DateTime::<Utc>::from);
            infos.push(GridInfo {
                grid,
                path,
                modified,
            });
        }
        infos.sort_by(|a, b| a.grid.id.cmp(&b.grid.id));
        Ok(infos)
    }
}

pub fn export_grid_json<P: AsRef<Path>>(path: P, grid: &Grid) -> Result<()> {
    let json = serde_json::to_string_pretty(grid)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_grid_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let data = fs::read(&path)?;
    let grid: Grid = serde_json::from_slice(&data)?;
    grid.validate()?;
    Ok(grid)
}
