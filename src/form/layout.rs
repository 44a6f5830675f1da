use crate::form::descriptor::{FieldDescriptor, FieldKind};
use serde::Serialize;

/// A run of fields under one (optional) heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub heading: Option<String>,
    /// Field labels, at most `columns` per row, filled row-major
    pub rows: Vec<Vec<String>>,
}

impl Section {
    fn new(heading: Option<String>) -> Self {
        Self {
            heading,
            rows: Vec::new(),
        }
    }

    fn is_empty(&self) -> bool {
        self.heading.is_none() && self.rows.is_empty()
    }

    fn push(&mut self, label: &str, columns: usize) {
        match self.rows.last_mut() {
            Some(row) if row.len() < columns => row.push(label.to_string()),
            _ => self.rows.push(vec![label.to_string()]),
        }
    }
}

/// Grid placement of a form's controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormLayout {
    pub columns: usize,
    pub sections: Vec<Section>,
}

impl FormLayout {
    /// Lay out `descriptors` in `columns` columns; every heading starts a new section
    pub fn build(descriptors: &[FieldDescriptor], columns: usize) -> Self {
        let columns = columns.max(1);
        let mut sections = Vec::new();
        let mut current = Section::new(None);

        for descriptor in descriptors {
            match descriptor.kind {
                FieldKind::Heading => {
                    let finished =
                        std::mem::replace(&mut current, Section::new(Some(descriptor.label.clone())));
                    if !finished.is_empty() {
                        sections.push(finished);
                    }
                }
                _ => current.push(&descriptor.label, columns),
            }
        }
        if !current.is_empty() {
            sections.push(current);
        }

        Self { columns, sections }
    }

    /// (section, row, column) of a field label
    pub fn position_of(&self, label: &str) -> Option<(usize, usize, usize)> {
        self.sections.iter().enumerate().find_map(|(s, section)| {
            section.rows.iter().enumerate().find_map(|(r, row)| {
                row.iter()
                    .position(|l| l == label)
                    .map(|c| (s, r, c))
            })
        })
    }
}
