use crate::form::component::{Axis, Form};
use crate::form::descriptor::FieldKind;

impl Form {
    /// One cell of the text rendering, as the control would show it
    fn render_cell(&self, label: &str) -> String {
        let Some(descriptor) = self.descriptor(label) else {
            return String::new();
        };
        let symbol = self.unit_symbol(label).unwrap_or_default();
        match descriptor.kind {
            FieldKind::Scalar(_) => {
                format!("{}: {} [{}]", label, self.text(label).unwrap_or_default(), symbol)
            }
            FieldKind::Position(_) => {
                let parts: Vec<&str> = Axis::ALL
                    .iter()
                    .map(|axis| self.axis_text(label, *axis).unwrap_or_default())
                    .collect();
                format!("{}: ({}) [{}]", label, parts.join(", "), symbol)
            }
            FieldKind::Boolean => {
                let mark = if self.is_checked(label).unwrap_or(false) { "x" } else { " " };
                format!("{}: [{}]", label, mark)
            }
            FieldKind::Heading => String::new(),
        }
    }

    /// Plain-text rendering of the form grid
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, section) in self.layout().sections.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            if let Some(heading) = &section.heading {
                out.push_str(&format!("== {} ==\n", heading));
            }

            let cells: Vec<Vec<String>> = section
                .rows
                .iter()
                .map(|row| row.iter().map(|label| self.render_cell(label)).collect())
                .collect();
            let mut widths = vec![0; self.columns()];
            for row in &cells {
                for (c, cell) in row.iter().enumerate() {
                    widths[c] = widths[c].max(cell.chars().count());
                }
            }

            for row in &cells {
                let line: Vec<String> = row
                    .iter()
                    .enumerate()
                    .map(|(c, cell)| format!("{:<width$}", cell, width = widths[c]))
                    .collect();
                out.push_str(line.join(" | ").trim_end());
                out.push('\n');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::form::{FieldDescriptor, Form};
    use crate::units::UnitCategory;

    #[test]
    fn test_render_grid() {
        let mut form = Form::new(vec![
            FieldDescriptor::heading("Wing"),
            FieldDescriptor::scalar("Span", UnitCategory::Length),
            FieldDescriptor::scalar("Sweep", UnitCategory::Angle),
            FieldDescriptor::position("Origin", UnitCategory::Length),
            FieldDescriptor::boolean("Symmetric"),
        ])
        .unwrap();
        form.set_text("Span", "35.8").unwrap();
        form.set_unit_index("Span", 5).unwrap();
        form.set_checked("Symmetric", true).unwrap();

        let expected = "\
== Wing ==
Span: 35.8 [ft]    | Sweep:  [rad]
Origin: (, , ) [m] | Symmetric: [x]
";
        assert_eq!(form.render(), expected);
    }
}
