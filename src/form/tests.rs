#[cfg(test)]
mod tests {
    use super::super::component::Form;
    use super::super::descriptor::{FieldDescriptor, FieldKind};
    use super::super::value::{FieldValue, FormValues};
    use crate::units::{entries, find_unit, UnitCategory};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn aircraft_form() -> Form {
        Form::new(vec![
            FieldDescriptor::heading("Fuselage"),
            FieldDescriptor::scalar("Length", UnitCategory::Length),
            FieldDescriptor::scalar("Empty mass", UnitCategory::Mass),
            FieldDescriptor::position("Nose", UnitCategory::Length),
            FieldDescriptor::heading("Mission"),
            FieldDescriptor::scalar("Cruise temperature", UnitCategory::Temperature),
            FieldDescriptor::scalar("Climb angle", UnitCategory::Angle),
            FieldDescriptor::boolean("Pressurized"),
        ])
        .unwrap()
    }

    fn scalar_of(values: &FormValues, label: &str) -> (f64, usize) {
        match values.get(label) {
            Some(FieldValue::Scalar(value, index)) => (*value, *index),
            other => panic!("expected scalar for {}, got {:?}", label, other),
        }
    }

    #[test]
    fn test_default_state() {
        let form = aircraft_form();
        for (label, value) in &form.get_values() {
            match value {
                FieldValue::Scalar(v, i) => assert!(*v == 0.0 && *i == 0, "{}", label),
                FieldValue::Position(xyz, i) => assert!(*xyz == [0.0; 3] && *i == 0, "{}", label),
                FieldValue::Flag(checked) => assert!(!checked, "{}", label),
            }
        }
        assert_eq!(form.get_values().len(), 6);
    }

    #[test]
    fn test_reference_conversions_through_form() {
        let mut form = aircraft_form();
        let cm = find_unit(UnitCategory::Length, "cm").unwrap();
        let lb = find_unit(UnitCategory::Mass, "lb").unwrap();
        let celsius = find_unit(UnitCategory::Temperature, "°C").unwrap();
        let deg = find_unit(UnitCategory::Angle, "deg").unwrap();
        let ft = find_unit(UnitCategory::Length, "ft").unwrap();

        let mut data = form.get_values();
        data.insert("Length", FieldValue::Scalar(100.0, cm));
        data.insert("Empty mass", FieldValue::Scalar(1.0, lb));
        data.insert("Cruise temperature", FieldValue::Scalar(0.0, celsius));
        data.insert("Climb angle", FieldValue::Scalar(180.0, deg));
        data.insert("Nose", FieldValue::Position([1.0, 2.0, 3.0], ft));
        form.load_data(&data).unwrap();

        let si = form.get_values_si();
        let (length, index) = scalar_of(&si, "Length");
        assert_relative_eq!(length, 1.0);
        assert_eq!(index, cm);
        assert_relative_eq!(scalar_of(&si, "Empty mass").0, 0.453592, epsilon = 1e-6);
        assert_relative_eq!(scalar_of(&si, "Cruise temperature").0, 273.15);
        assert_relative_eq!(scalar_of(&si, "Climb angle").0, 3.14159265, epsilon = 1e-8);

        match si.get("Nose") {
            Some(FieldValue::Position([x, y, z], index)) => {
                assert_relative_eq!(*x, 0.3048, epsilon = 1e-12);
                assert_relative_eq!(*y, 0.6096, epsilon = 1e-12);
                assert_relative_eq!(*z, 0.9144, epsilon = 1e-12);
                assert_eq!(*index, ft);
            }
            other => panic!("expected position, got {:?}", other),
        }

        // reading SI does not touch the raw values
        assert_eq!(form.get_values(), data);
    }

    #[test]
    fn test_get_values_is_lenient_and_repeatable() {
        let mut form = aircraft_form();
        form.set_text("Length", "12 m").unwrap();
        form.set_text("Empty mass", "").unwrap();
        form.set_axis_text("Nose", crate::form::Axis::Z, "-").unwrap();

        let first = form.get_values();
        assert_eq!(scalar_of(&first, "Length"), (0.0, 0));
        assert_eq!(scalar_of(&first, "Empty mass"), (0.0, 0));
        assert_eq!(first.get("Nose"), Some(&FieldValue::Position([0.0; 3], 0)));
        assert_eq!(form.get_values(), first);
        // the typed text is kept as entered
        assert_eq!(form.text("Length").unwrap(), "12 m");
    }

    #[test]
    fn test_saved_values_json_round_trip() {
        let mut form = aircraft_form();
        form.enter_quantity("Length", "38.2 ft").unwrap();
        form.set_checked("Pressurized", true).unwrap();

        let saved = serde_json::to_string(&form.get_values()).unwrap();
        let mut restored = aircraft_form();
        restored.load_data(&serde_json::from_str(&saved).unwrap()).unwrap();
        assert_eq!(restored.get_values(), form.get_values());
        assert_eq!(restored.unit_symbol("Length").unwrap(), "ft");
    }

    #[test]
    fn test_check_round_trip_ignores_unknown_labels() {
        let mut form = aircraft_form();
        let ft = find_unit(UnitCategory::Length, "ft").unwrap();

        let mut saved = form.get_values();
        saved.insert("Length", FieldValue::Scalar(38.2, ft));
        saved.insert("Nose", FieldValue::Position([f64::NAN, -0.0, 1e300], ft));
        saved.insert("Pressurized", FieldValue::Flag(true));
        saved.insert("Wing count", FieldValue::Scalar(2.0, 0));

        let report = form.check_round_trip(&saved).unwrap();
        assert!(report.is_ok(), "{:?}", report);
        assert_eq!(report.fields, 6);
        assert!(report.changed.is_empty());
        assert!(report.stable);
        assert_eq!(form.unit_symbol("Length").unwrap(), "ft");
    }

    #[test]
    fn test_check_round_trip_propagates_load_errors() {
        let mut form = aircraft_form();
        form.set_text("Length", "4").unwrap();
        let mut saved = form.get_values();
        saved.remove("Empty mass");

        assert_eq!(
            form.check_round_trip(&saved),
            Err(crate::form::FormError::MissingField("Empty mass".to_string()))
        );
        assert_eq!(form.text("Length").unwrap(), "4");
    }

    fn kind_strategy() -> impl Strategy<Value = FieldKind> {
        let category = prop::sample::select(UnitCategory::ALL.to_vec());
        prop_oneof![
            category.clone().prop_map(FieldKind::Scalar),
            Just(FieldKind::Boolean),
            category.prop_map(FieldKind::Position),
            Just(FieldKind::Heading),
        ]
    }

    fn value_strategy(kind: FieldKind) -> BoxedStrategy<Option<FieldValue>> {
        match kind {
            FieldKind::Scalar(category) => (any::<f64>(), 0..entries(category).len())
                .prop_map(|(v, i)| Some(FieldValue::Scalar(v, i)))
                .boxed(),
            FieldKind::Position(category) => (any::<[f64; 3]>(), 0..entries(category).len())
                .prop_map(|(xyz, i)| Some(FieldValue::Position(xyz, i)))
                .boxed(),
            FieldKind::Boolean => any::<bool>().prop_map(|b| Some(FieldValue::Flag(b))).boxed(),
            FieldKind::Heading => Just(None).boxed(),
        }
    }

    /// A descriptor list and a value mapping shaped for it
    fn form_data_strategy() -> impl Strategy<Value = (Vec<FieldDescriptor>, FormValues)> {
        prop::collection::vec(kind_strategy(), 0..12).prop_flat_map(|kinds| {
            let descriptors: Vec<FieldDescriptor> = kinds
                .iter()
                .enumerate()
                .map(|(i, kind)| FieldDescriptor::new(format!("field {}", i), *kind))
                .collect();
            let values: Vec<_> = kinds.iter().map(|kind| value_strategy(*kind)).collect();
            (Just(descriptors), values).prop_map(|(descriptors, values)| {
                let data: FormValues = descriptors
                    .iter()
                    .zip(values)
                    .filter_map(|(d, v)| v.map(|v| (d.label.clone(), v)))
                    .collect();
                (descriptors, data)
            })
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        /// Loading a mapping and reading it back reproduces it
        #[test]
        fn load_then_get_round_trips((descriptors, data) in form_data_strategy()) {
            let mut form = Form::new(descriptors).unwrap();
            form.load_data(&data).unwrap();
            let read = form.get_values();
            prop_assert!(read.text_eq(&data), "{:?} != {:?}", read, data);

            form.load_data(&read).unwrap();
            prop_assert!(form.get_values().text_eq(&read));

            let report = form.check_round_trip(&data).unwrap();
            prop_assert!(report.is_ok(), "{:?}", report);
        }

        /// Clearing after any load equals a freshly constructed form
        #[test]
        fn clear_matches_fresh_form(
            (descriptors, data) in form_data_strategy(),
            columns in 0usize..4,
        ) {
            let fresh = Form::with_columns(descriptors.clone(), columns).unwrap();
            let mut form = Form::with_columns(descriptors, columns).unwrap();
            form.load_data(&data).unwrap();
            form.clear_values();
            prop_assert_eq!(form.get_values(), fresh.get_values());
        }

        /// Scalars in the SI unit read back unchanged by SI conversion
        #[test]
        fn si_unit_values_pass_through(
            category in prop::sample::select(UnitCategory::ALL.to_vec()),
            value in -1e12f64..1e12,
        ) {
            let mut form = Form::new(vec![FieldDescriptor::scalar("v", category)]).unwrap();
            let mut data = FormValues::new();
            data.insert("v", FieldValue::Scalar(value, 0));
            form.load_data(&data).unwrap();

            let raw = form.get_values();
            let si = form.get_values_si();
            prop_assert_eq!(si.get("v"), raw.get("v"));
        }
    }
}
