//! The diagram catalog. Each submodule builds one `Diagram` from fixed
//! content; `REGISTRY` lists them in the order the CLI emits them.

use std::fs;
use std::path::{Path, PathBuf};

use crate::fonts::TextMeasure;
use crate::raster::svg_to_png;
use crate::shape::Diagram;
use crate::style::Style;

mod communication_flow;
mod data_flow;
mod database_schema;
mod deployment;
mod evaluation;
mod file_structure;
mod lifecycle;
mod privilege_matrix;
mod security;
mod system_architecture;
mod system_flow;
mod ui_mockup;
mod user_manual;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
        }
    }
}

pub struct DiagramEntry {
    /// Output file stem, e.g. `system_architecture`.
    pub stem: &'static str,
    pub title: &'static str,
    pub build: fn(&Style) -> Diagram,
}

pub const REGISTRY: &[DiagramEntry] = &[
    DiagramEntry {
        stem: "system_architecture",
        title: "Logistics Management System Architecture",
        build: system_architecture::build,
    },
    DiagramEntry {
        stem: "database_schema",
        title: "Database Schema - Entity Relationship Diagram",
        build: database_schema::build,
    },
    DiagramEntry {
        stem: "security_architecture",
        title: "Security Architecture & Data Protection",
        build: security::build,
    },
    DiagramEntry {
        stem: "user_privilege_matrix",
        title: "User Privilege Matrix",
        build: privilege_matrix::build,
    },
    DiagramEntry {
        stem: "system_evaluation",
        title: "System Evaluation Dashboard",
        build: evaluation::build,
    },
    DiagramEntry {
        stem: "ui_mockup",
        title: "Mobile App UI Mockups",
        build: ui_mockup::build,
    },
    DiagramEntry {
        stem: "file_structure",
        title: "Project File Structure",
        build: file_structure::build,
    },
    DiagramEntry {
        stem: "system_flow_simple",
        title: "System Flow Diagram",
        build: system_flow::build,
    },
    DiagramEntry {
        stem: "data_flow_diagram",
        title: "Data Flow Diagram",
        build: data_flow::build,
    },
    DiagramEntry {
        stem: "deployment_architecture",
        title: "Deployment Architecture",
        build: deployment::build,
    },
    DiagramEntry {
        stem: "user_manual",
        title: "User Manual - Quick Start Guide",
        build: user_manual::build,
    },
    DiagramEntry {
        stem: "communication_flow",
        title: "Communication Flow Diagram",
        build: communication_flow::build,
    },
    DiagramEntry {
        stem: "system_lifecycle",
        title: "System Lifecycle Diagram",
        build: lifecycle::build,
    },
];

pub fn find(stem: &str) -> Option<&'static DiagramEntry> {
    REGISTRY.iter().find(|entry| entry.stem == stem)
}

/// Builds, renders, and writes one diagram. Returns the written path.
pub fn write_diagram(
    entry: &DiagramEntry,
    style: &Style,
    measure: &mut dyn TextMeasure,
    out_dir: &Path,
    format: OutputFormat,
    png_scale: f32,
) -> Result<PathBuf, String> {
    let diagram = (entry.build)(style);
    let svg = diagram.render(measure)?;

    let path = out_dir.join(format!("{}.{}", entry.stem, format.extension()));
    match format {
        OutputFormat::Svg => {
            fs::write(&path, &svg)
                .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
        }
        OutputFormat::Png => {
            let png = svg_to_png(&svg, png_scale)?;
            fs::write(&path, &png)
                .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
        }
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::CosmicTextMeasure;
    use std::collections::HashSet;

    #[test]
    fn registry_has_thirteen_diagrams() {
        assert_eq!(REGISTRY.len(), 13);
    }

    #[test]
    fn registry_stems_are_unique() {
        let stems: HashSet<&str> = REGISTRY.iter().map(|e| e.stem).collect();
        assert_eq!(stems.len(), REGISTRY.len());
    }

    #[test]
    fn every_diagram_builds_and_renders() {
        let style = Style::default();
        let mut measure = CosmicTextMeasure::new().expect("measure");
        for entry in REGISTRY {
            let diagram = (entry.build)(&style);
            assert!(!diagram.elements.is_empty(), "{} is empty", entry.stem);
            let svg = diagram
                .render(&mut measure)
                .unwrap_or_else(|e| panic!("{} failed to render: {}", entry.stem, e));
            assert!(svg.starts_with("<svg"), "{}", entry.stem);
        }
    }

    #[test]
    fn find_resolves_known_stems() {
        assert!(find("system_architecture").is_some());
        assert!(find("no_such_diagram").is_none());
    }

    #[test]
    fn write_diagram_is_idempotent() {
        let dir = std::env::temp_dir().join("logisketch_mod_test");
        fs::create_dir_all(&dir).expect("temp dir");
        let style = Style::default();
        let mut measure = CosmicTextMeasure::new().expect("measure");
        let entry = find("system_flow_simple").expect("entry");

        let first =
            write_diagram(entry, &style, &mut measure, &dir, OutputFormat::Svg, 1.0)
                .expect("first write");
        let second =
            write_diagram(entry, &style, &mut measure, &dir, OutputFormat::Svg, 1.0)
                .expect("second write");
        assert_eq!(first, second);
        assert_eq!(
            fs::read(&first).expect("read"),
            fs::read(&second).expect("read")
        );
        fs::remove_dir_all(&dir).ok();
    }
}
