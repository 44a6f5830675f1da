use crate::form::descriptor::{FieldDescriptor, FieldKind};
use crate::form::error::FormError;
use crate::form::layout::FormLayout;
use crate::form::value::{format_number, parse_number, FieldValue, FormValues};
use crate::units::{self, UnitChange, UnitSelector};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, warn};

pub const DEFAULT_COLUMNS: usize = 2;

/// Outcome of [`Form::check_round_trip`]
#[derive(Debug, Clone, PartialEq)]
pub struct RoundTripReport {
    /// Fields read back after loading
    pub fields: usize,
    /// `(label, saved, read)` for every field that read back differently
    pub changed: Vec<(String, FieldValue, FieldValue)>,
    /// Whether loading the read values again reproduced them
    pub stable: bool,
}

impl RoundTripReport {
    pub fn is_ok(&self) -> bool {
        self.changed.is_empty() && self.stable
    }
}

/// Component of a position field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(&self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }

    /// "x", "y" or "z", any case
    pub fn from_name(name: &str) -> Option<Axis> {
        Axis::ALL
            .into_iter()
            .find(|axis| axis.name().eq_ignore_ascii_case(name.trim()))
    }
}

enum Control {
    Scalar { text: String, selector: UnitSelector },
    Position { text: [String; 3], selector: UnitSelector },
    Boolean { checked: bool },
    Heading,
}

impl Control {
    fn for_kind(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Scalar(category) => Control::Scalar {
                text: String::new(),
                selector: UnitSelector::new(category),
            },
            FieldKind::Position(category) => Control::Position {
                text: Default::default(),
                selector: UnitSelector::new(category),
            },
            FieldKind::Boolean => Control::Boolean { checked: false },
            FieldKind::Heading => Control::Heading,
        }
    }

    fn selector(&self) -> Option<&UnitSelector> {
        match self {
            Control::Scalar { selector, .. } | Control::Position { selector, .. } => Some(selector),
            Control::Boolean { .. } | Control::Heading => None,
        }
    }

    fn selector_mut(&mut self) -> Option<&mut UnitSelector> {
        match self {
            Control::Scalar { selector, .. } | Control::Position { selector, .. } => Some(selector),
            Control::Boolean { .. } | Control::Heading => None,
        }
    }

    /// Raw value as typed, paired with the selected unit
    fn read(&self) -> Option<FieldValue> {
        match self {
            Control::Scalar { text, selector } => {
                Some(FieldValue::Scalar(parse_number(text), selector.current_index()))
            }
            Control::Position { text, selector } => Some(FieldValue::Position(
                [
                    parse_number(&text[0]),
                    parse_number(&text[1]),
                    parse_number(&text[2]),
                ],
                selector.current_index(),
            )),
            Control::Boolean { checked } => Some(FieldValue::Flag(*checked)),
            Control::Heading => None,
        }
    }

    fn read_si(&self) -> Option<FieldValue> {
        match (self.read()?, self.selector()) {
            (FieldValue::Scalar(value, index), Some(selector)) => {
                Some(FieldValue::Scalar(selector.to_si(value), index))
            }
            (FieldValue::Position(xyz, index), Some(selector)) => {
                Some(FieldValue::Position(xyz.map(|v| selector.to_si(v)), index))
            }
            (value, _) => Some(value),
        }
    }

    /// Check that `value` could be written into this control
    fn accepts(&self, label: &str, value: &FieldValue) -> Result<(), FormError> {
        match (self, value) {
            (Control::Scalar { selector, .. }, FieldValue::Scalar(_, index))
            | (Control::Position { selector, .. }, FieldValue::Position(_, index)) => selector
                .validate_index(*index)
                .map_err(|e| FormError::unit(label, e)),
            (Control::Boolean { .. }, FieldValue::Flag(_)) => Ok(()),
            _ => Err(FormError::KindMismatch {
                label: label.to_string(),
                expected: self.kind_name(),
            }),
        }
    }

    fn write(&mut self, label: &str, value: &FieldValue) -> Result<(), FormError> {
        match (self, value) {
            (Control::Scalar { text, selector }, FieldValue::Scalar(v, index)) => {
                *text = format_number(*v);
                selector
                    .set_index(*index)
                    .map_err(|e| FormError::unit(label, e))
            }
            (Control::Position { text, selector }, FieldValue::Position(xyz, index)) => {
                *text = (*xyz).map(format_number);
                selector
                    .set_index(*index)
                    .map_err(|e| FormError::unit(label, e))
            }
            (Control::Boolean { checked }, FieldValue::Flag(v)) => {
                *checked = *v;
                Ok(())
            }
            (control, _) => Err(FormError::KindMismatch {
                label: label.to_string(),
                expected: control.kind_name(),
            }),
        }
    }

    fn clear(&mut self) {
        match self {
            Control::Scalar { text, selector } => {
                text.clear();
                selector.reset();
            }
            Control::Position { text, selector } => {
                text.iter_mut().for_each(String::clear);
                selector.reset();
            }
            Control::Boolean { checked } => *checked = false,
            Control::Heading => {}
        }
    }

    fn kind_name(&self) -> &'static str {
        match self {
            Control::Scalar { .. } => "scalar",
            Control::Position { .. } => "position",
            Control::Boolean { .. } => "boolean",
            Control::Heading => "heading",
        }
    }
}

struct Field {
    descriptor: FieldDescriptor,
    control: Control,
}

/// A set of unit-aware fields with bulk read/write
///
/// Every value-carrying field is addressed by its label. Numeric fields hold the
/// text as typed; conversion to SI happens only when values are read with
/// [`Form::get_values_si`].
pub struct Form {
    fields: Vec<Field>,
    by_label: HashMap<String, usize>,
    layout: FormLayout,
}

impl Form {
    pub fn new(descriptors: Vec<FieldDescriptor>) -> Result<Self, FormError> {
        Self::with_columns(descriptors, DEFAULT_COLUMNS)
    }

    pub fn with_columns(
        descriptors: Vec<FieldDescriptor>,
        columns: usize,
    ) -> Result<Self, FormError> {
        if columns == 0 {
            warn!("form requested with 0 columns, using 1");
        }
        let layout = FormLayout::build(&descriptors, columns);

        let mut by_label = HashMap::new();
        let mut fields = Vec::with_capacity(descriptors.len());
        for descriptor in descriptors {
            if descriptor.kind.carries_value() {
                if by_label.contains_key(&descriptor.label) {
                    return Err(FormError::DuplicateLabel(descriptor.label));
                }
                by_label.insert(descriptor.label.clone(), fields.len());
            }
            fields.push(Field {
                control: Control::for_kind(descriptor.kind),
                descriptor,
            });
        }

        debug!(
            fields = by_label.len(),
            columns = layout.columns,
            sections = layout.sections.len(),
            "form constructed"
        );
        Ok(Self {
            fields,
            by_label,
            layout,
        })
    }

    pub fn layout(&self) -> &FormLayout {
        &self.layout
    }

    pub fn columns(&self) -> usize {
        self.layout.columns
    }

    /// Descriptors in construction order, headings included
    pub fn descriptors(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().map(|f| &f.descriptor)
    }

    pub fn descriptor(&self, label: &str) -> Option<&FieldDescriptor> {
        self.by_label
            .get(label)
            .map(|&i| &self.fields[i].descriptor)
    }

    /// Labels of the value-carrying fields, in construction order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|f| f.descriptor.kind.carries_value())
            .map(|f| f.descriptor.label.as_str())
    }

    /// Raw values as typed, each with its selected unit index
    pub fn get_values(&self) -> FormValues {
        self.read_with(Control::read)
    }

    /// Values converted to SI; unit indices are kept for display
    pub fn get_values_si(&self) -> FormValues {
        self.read_with(Control::read_si)
    }

    fn read_with(&self, read: fn(&Control) -> Option<FieldValue>) -> FormValues {
        self.fields
            .iter()
            .filter_map(|f| read(&f.control).map(|v| (f.descriptor.label.clone(), v)))
            .collect()
    }

    /// Write a mapping shaped like a previous `get_values()` result back into the form
    ///
    /// Every field must be present in `data` and shaped for its kind. The mapping is
    /// checked in full before anything is written, so a failed load changes nothing.
    /// Labels the form does not know are ignored.
    pub fn load_data(&mut self, data: &FormValues) -> Result<(), FormError> {
        for field in self.fields.iter().filter(|f| f.descriptor.kind.carries_value()) {
            let label = &field.descriptor.label;
            let value = data
                .get(label)
                .ok_or_else(|| FormError::MissingField(label.clone()))?;
            field.control.accepts(label, value)?;
        }

        for field in self.fields.iter_mut() {
            if let Some(value) = data.get(&field.descriptor.label) {
                if field.descriptor.kind.carries_value() {
                    field.control.write(&field.descriptor.label, value)?;
                }
            }
        }

        for label in data.labels().filter(|l| !self.by_label.contains_key(*l)) {
            debug!(label, "ignoring value for unknown field");
        }
        debug!(fields = self.by_label.len(), "form data loaded");
        Ok(())
    }

    /// Reset every field to its construction-time default
    pub fn clear_values(&mut self) {
        for field in self.fields.iter_mut() {
            field.control.clear();
        }
        debug!(fields = self.by_label.len(), "form values cleared");
    }

    /// Load `saved`, read it back, then load and read the result once more
    ///
    /// Values for labels the form does not know are left out of the comparison.
    /// The form keeps the loaded values afterwards.
    pub fn check_round_trip(&mut self, saved: &FormValues) -> Result<RoundTripReport, FormError> {
        self.load_data(saved)?;
        let first = self.get_values();
        self.load_data(&first)?;
        let second = self.get_values();

        let changed = saved
            .iter()
            .filter_map(|(label, value)| {
                let read = first.get(label)?;
                (read.display_text() != value.display_text())
                    .then(|| (label.clone(), *value, *read))
            })
            .collect();

        Ok(RoundTripReport {
            fields: first.len(),
            changed,
            stable: second.text_eq(&first),
        })
    }

    fn field(&self, label: &str) -> Result<&Field, FormError> {
        self.by_label
            .get(label)
            .map(|&i| &self.fields[i])
            .ok_or_else(|| FormError::UnknownField(label.to_string()))
    }

    fn field_mut(&mut self, label: &str) -> Result<&mut Field, FormError> {
        match self.by_label.get(label) {
            Some(&i) => Ok(&mut self.fields[i]),
            None => Err(FormError::UnknownField(label.to_string())),
        }
    }

    fn mismatch(label: &str, expected: &'static str) -> FormError {
        FormError::KindMismatch {
            label: label.to_string(),
            expected,
        }
    }

    /// Type into a scalar field's text entry
    pub fn set_text(&mut self, label: &str, value: impl Into<String>) -> Result<(), FormError> {
        match &mut self.field_mut(label)?.control {
            Control::Scalar { text, .. } => {
                *text = value.into();
                Ok(())
            }
            _ => Err(Self::mismatch(label, "scalar")),
        }
    }

    /// Type into one component of a position field
    pub fn set_axis_text(
        &mut self,
        label: &str,
        axis: Axis,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        match &mut self.field_mut(label)?.control {
            Control::Position { text, .. } => {
                text[axis.index()] = value.into();
                Ok(())
            }
            _ => Err(Self::mismatch(label, "position")),
        }
    }

    pub fn set_checked(&mut self, label: &str, value: bool) -> Result<(), FormError> {
        match &mut self.field_mut(label)?.control {
            Control::Boolean { checked } => {
                *checked = value;
                Ok(())
            }
            _ => Err(Self::mismatch(label, "boolean")),
        }
    }

    /// Pick a unit from a field's unit picker
    pub fn set_unit_index(&mut self, label: &str, index: usize) -> Result<(), FormError> {
        self.field_mut(label)?
            .control
            .selector_mut()
            .ok_or_else(|| Self::mismatch(label, "unit-bearing"))?
            .set_index(index)
            .map_err(|e| FormError::unit(label, e))
    }

    /// Enter a quantity such as "12 ft" into a scalar field
    ///
    /// The number goes into the text entry and the unit picker switches to the
    /// typed unit, which must belong to the field's category.
    pub fn enter_quantity(&mut self, label: &str, quantity: &str) -> Result<(), FormError> {
        let field = self.field_mut(label)?;
        let Control::Scalar { text, selector } = &mut field.control else {
            return Err(Self::mismatch(label, "scalar"));
        };
        let (value, index) = units::resolve_quantity(selector.category(), quantity)
            .map_err(|e| FormError::unit(label, e))?;
        selector
            .set_index(index)
            .map_err(|e| FormError::unit(label, e))?;
        *text = format_number(value);
        Ok(())
    }

    /// Text currently shown in a scalar field
    pub fn text(&self, label: &str) -> Result<&str, FormError> {
        match &self.field(label)?.control {
            Control::Scalar { text, .. } => Ok(text),
            _ => Err(Self::mismatch(label, "scalar")),
        }
    }

    pub fn axis_text(&self, label: &str, axis: Axis) -> Result<&str, FormError> {
        match &self.field(label)?.control {
            Control::Position { text, .. } => Ok(&text[axis.index()]),
            _ => Err(Self::mismatch(label, "position")),
        }
    }

    pub fn is_checked(&self, label: &str) -> Result<bool, FormError> {
        match &self.field(label)?.control {
            Control::Boolean { checked } => Ok(*checked),
            _ => Err(Self::mismatch(label, "boolean")),
        }
    }

    pub fn selector(&self, label: &str) -> Result<&UnitSelector, FormError> {
        self.field(label)?
            .control
            .selector()
            .ok_or_else(|| Self::mismatch(label, "unit-bearing"))
    }

    pub fn unit_index(&self, label: &str) -> Result<usize, FormError> {
        self.selector(label).map(UnitSelector::current_index)
    }

    pub fn unit_symbol(&self, label: &str) -> Result<&'static str, FormError> {
        self.selector(label).map(UnitSelector::symbol)
    }

    /// Observe unit changes of one field (e.g. to repaint its unit label)
    pub fn on_unit_change<F>(&mut self, label: &str, callback: F) -> Result<(), FormError>
    where
        F: FnMut(&UnitChange) + 'static,
    {
        self.field_mut(label)?
            .control
            .selector_mut()
            .ok_or_else(|| Self::mismatch(label, "unit-bearing"))?
            .on_change(callback);
        Ok(())
    }
}

impl fmt::Debug for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("columns", &self.layout.columns)
            .field("values", &self.get_values())
            .finish()
    }
}
