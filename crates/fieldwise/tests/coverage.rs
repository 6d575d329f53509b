//! Behavioural tests across the public API.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use fieldwise::{
    compare_values, dig, group_by, index_by, index_by_field, order_by, order_by_key,
    struct_fields, try_dig, try_index_by_field, try_order_by, try_struct_fields, Dir, Field,
    FieldwiseError, Key, Kind, Record, Reflect, Value,
};

#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: i32,
    code: u16,
    label: Option<String>,
    ratio: f64,
    active: bool,
    note: String,
}

impl Row {
    fn new(id: i32, label: Option<&str>) -> Self {
        Row {
            id,
            code: id.unsigned_abs() as u16,
            label: label.map(str::to_string),
            ratio: f64::from(id) / 2.0,
            active: id % 2 == 0,
            note: format!("note-{id}"),
        }
    }
}

impl Record for Row {
    fn type_name(&self) -> &'static str {
        "Row"
    }

    fn field_names(&self) -> &'static [&'static str] {
        &["ID", "Code", "Label", "Ratio", "Active", "note"]
    }

    fn field(&self, name: &str) -> Option<Field<'_>> {
        match name {
            "ID" => Some(Field::exported("ID", self.id.reflect())),
            "Code" => Some(Field::exported("Code", self.code.reflect())),
            "Label" => Some(Field::exported("Label", self.label.reflect())),
            "Ratio" => Some(Field::exported("Ratio", self.ratio.reflect())),
            "Active" => Some(Field::exported("Active", self.active.reflect())),
            "note" => Some(Field::private("note", self.note.reflect())),
            _ => None,
        }
    }
}

impl Reflect for Row {
    fn reflect(&self) -> Value<'_> {
        Value::Struct(self)
    }
}

fn ids(rows: &[Row]) -> Vec<i32> {
    rows.iter().map(|row| row.id).collect()
}

// ============================================================================
// Value and Kind coverage
// ============================================================================

#[test]
fn value_kinds() {
    assert_eq!(Value::Null.kind(), Kind::Null);
    assert_eq!(true.reflect().kind(), Kind::Bool);
    assert_eq!((-1i8).reflect().kind(), Kind::Int);
    assert_eq!(1usize.reflect().kind(), Kind::Uint);
    assert_eq!(1.0f32.reflect().kind(), Kind::Float);
    assert_eq!("s".reflect().kind(), Kind::Str);
    assert_eq!(vec![1].reflect().kind(), Kind::List);
    assert_eq!(BTreeMap::<u8, u8>::new().reflect().kind(), Kind::Map);
    assert_eq!(Row::new(1, None).reflect().kind(), Kind::Struct);
    assert_eq!('x'.reflect().kind(), Kind::Opaque);
}

#[test]
fn kind_display_and_orderability() {
    assert_eq!(Kind::Str.to_string(), "string");
    assert_eq!(Kind::Uint.to_string(), "uint");
    assert_eq!(Kind::Struct.to_string(), "struct");

    for kind in [Kind::Int, Kind::Uint, Kind::Float, Kind::Str] {
        assert!(kind.is_orderable(), "{kind} should be orderable");
    }
    for kind in [Kind::Null, Kind::Bool, Kind::List, Kind::Map, Kind::Struct, Kind::Opaque] {
        assert!(!kind.is_orderable(), "{kind} should not be orderable");
    }
}

#[test]
fn value_extractors() {
    assert_eq!(Value::Int(-3).as_i64(), Some(-3));
    assert_eq!(Value::Int(-3).as_u64(), None);
    assert_eq!(Value::Uint(3).as_u64(), Some(3));
    assert_eq!(Value::Float(0.5).as_f64(), Some(0.5));
    assert_eq!(Value::Str("x").as_str(), Some("x"));
    assert_eq!(Value::Bool(false).as_bool(), Some(false));
    assert!(Value::Null.is_null());
    assert!(Value::Str("x").as_list().is_none());

    let row = Row::new(4, None);
    assert_eq!(row.reflect().as_record().map(|r| r.type_name()), Some("Row"));
}

#[test]
fn compare_values_same_kind_only() {
    use std::cmp::Ordering;

    assert_eq!(
        compare_values(&Value::Int(1), &Value::Int(2)),
        Some(Ordering::Less)
    );
    assert_eq!(
        compare_values(&Value::Str("b"), &Value::Str("a")),
        Some(Ordering::Greater)
    );
    assert_eq!(
        compare_values(&Value::Float(f64::NAN), &Value::Float(1.0)),
        Some(Ordering::Greater)
    );
    assert_eq!(
        compare_values(&Value::Float(-0.0), &Value::Float(0.0)),
        Some(Ordering::Equal)
    );
    assert_eq!(
        compare_values(&Value::Float(f64::NAN), &Value::Float(-f64::NAN)),
        Some(Ordering::Equal)
    );
    assert_eq!(compare_values(&Value::Int(1), &Value::Uint(1)), None);
    assert_eq!(compare_values(&Value::Bool(true), &Value::Bool(false)), None);
}

#[test]
fn value_debug_shows_structure() {
    let row = Row::new(2, Some("two"));
    let rendered = format!("{:?}", row.reflect());
    assert!(rendered.starts_with("Row {"));
    assert!(rendered.contains("ID: Int(2)"));
    assert!(rendered.contains("note: Str(\"note-2\")"));

    assert_eq!(format!("{:?}", vec![1u8, 2].reflect()), "[Uint(1), Uint(2)]");
}

#[test]
fn smart_pointers_reflect_their_target() {
    let boxed: Box<i32> = Box::new(5);
    let rc = Rc::new("rc");
    let arc = Arc::new(vec![1.5f64]);

    assert_eq!(boxed.reflect(), Value::Int(5));
    assert_eq!(rc.reflect(), Value::Str("rc"));
    assert_eq!(dig(&arc, &[0.into()]), Some(Value::Float(1.5)));
}

// ============================================================================
// Key coverage
// ============================================================================

#[test]
fn key_conversions() {
    assert_eq!(Key::from(5u8), Key::Uint(5));
    assert_eq!(Key::from(-5i16), Key::Int(-5));
    assert_eq!(Key::from("a"), Key::Str("a".to_string()));
    assert_eq!(Key::from(String::from("a")), Key::Str("a".to_string()));
    assert_eq!(Key::from(true), Key::Bool(true));
    assert_eq!(Key::from(()), Key::Null);
}

#[test]
fn key_display() {
    assert_eq!(Key::Null.to_string(), "null");
    assert_eq!(Key::Int(-1).to_string(), "-1");
    assert_eq!(Key::Str("x".into()).to_string(), "\"x\"");
}

#[test]
fn key_index_and_matching() {
    assert_eq!(Key::Int(2).as_index(), Some(2));
    assert_eq!(Key::Int(-2).as_index(), None);
    assert_eq!(Key::Str("2".into()).as_index(), None);

    assert!(Key::Int(7).matches(&Value::Uint(7)));
    assert!(Key::Uint(7).matches(&Value::Int(7)));
    assert!(!Key::Int(-7).matches(&Value::Uint(7)));
    assert!(!Key::Str("7".into()).matches(&Value::Int(7)));
}

// ============================================================================
// index_by_field coverage
// ============================================================================

#[test]
fn index_by_field_groups_in_input_order() {
    let rows = vec![
        Row::new(1, Some("a")),
        Row::new(2, Some("b")),
        Row::new(3, Some("a")),
        Row::new(4, None),
    ];
    let by_label = index_by_field(&rows, "Label");

    assert_eq!(by_label.len(), 3);
    assert_eq!(by_label[&Key::from("a")], vec![&rows[0], &rows[2]]);
    assert_eq!(by_label[&Key::from("b")], vec![&rows[1]]);
    assert_eq!(by_label[&Key::Null], vec![&rows[3]]);
}

#[test]
fn index_by_field_keys_keep_their_kind() {
    let rows = vec![Row::new(1, None), Row::new(2, None)];

    let by_id = index_by_field(&rows, "ID");
    assert!(by_id.contains_key(&Key::Int(1)));

    let by_code = index_by_field(&rows, "Code");
    assert!(by_code.contains_key(&Key::Uint(2)));

    let by_active = index_by_field(&rows, "Active");
    assert_eq!(by_active[&Key::Bool(true)], vec![&rows[1]]);
}

#[test]
fn index_by_field_empty_input() {
    let rows: Vec<Row> = Vec::new();
    assert!(index_by_field(&rows, "ID").is_empty());
}

#[test]
fn index_by_field_errors() {
    let rows = vec![Row::new(1, None)];

    assert_eq!(
        try_index_by_field(&rows, "Missing").unwrap_err(),
        FieldwiseError::NoSuchField {
            field: "Missing".to_string(),
            type_name: "Row",
        }
    );
    assert_eq!(
        try_index_by_field(&rows, "note").unwrap_err().to_string(),
        "cannot take the value of unexported field note on Row"
    );
    assert_eq!(
        try_index_by_field(&rows, "Ratio").unwrap_err(),
        FieldwiseError::UnhashableField {
            field: "Ratio".to_string(),
            kind: Kind::Float,
        }
    );
}

#[test]
#[should_panic(expected = "no such field Missing on Row")]
fn index_by_field_panics_on_missing_field() {
    let rows = vec![Row::new(1, None)];
    index_by_field(&rows, "Missing");
}

#[test]
fn index_by_field_through_pointers() {
    let rows = vec![Row::new(1, Some("a")), Row::new(2, Some("a"))];
    let shared: Vec<Rc<Row>> = rows.iter().cloned().map(Rc::new).collect();

    let by_label = index_by_field(&shared, "Label");
    assert_eq!(by_label[&Key::from("a")], vec![&shared[0], &shared[1]]);

    // The element type decides struct-ness, so an empty slice of a record
    // type is fine while a slice of scalars does not compile
    let empty: Vec<Arc<Row>> = Vec::new();
    assert!(index_by_field(&empty, "Missing").is_empty());
}

// ============================================================================
// index_by / group_by coverage
// ============================================================================

#[test]
fn index_by_last_wins() {
    let rows = vec![
        Row::new(1, Some("a")),
        Row::new(2, Some("a")),
        Row::new(3, Some("b")),
    ];
    let by_label = index_by(&rows, |row| row.label.clone());

    assert_eq!(by_label.len(), 2);
    assert_eq!(by_label[&Some("a".to_string())].id, 2);
    assert_eq!(by_label[&Some("b".to_string())].id, 3);
}

#[test]
fn group_by_keeps_all() {
    let rows: Vec<Row> = (1..=6).map(|id| Row::new(id, None)).collect();
    let groups = group_by(&rows, |row| row.id % 3);

    assert_eq!(groups.len(), 3);
    assert_eq!(groups[&0].iter().map(|r| r.id).collect::<Vec<_>>(), [3, 6]);
    assert_eq!(groups[&1].iter().map(|r| r.id).collect::<Vec<_>>(), [1, 4]);
}

#[test]
fn key_functions_on_empty_input() {
    let rows: Vec<Row> = Vec::new();
    assert!(index_by(&rows, |row| row.id).is_empty());
    assert!(group_by(&rows, |row| row.id).is_empty());
}

// ============================================================================
// order_by coverage
// ============================================================================

#[test]
fn order_by_each_orderable_kind() {
    let mut rows = vec![Row::new(3, None), Row::new(-1, None), Row::new(2, None)];

    order_by(&mut rows, "ID", "asc");
    assert_eq!(ids(&rows), [-1, 2, 3]);

    order_by(&mut rows, "Code", "desc");
    assert_eq!(ids(&rows), [3, 2, -1]);

    order_by(&mut rows, "Ratio", "asc");
    assert_eq!(ids(&rows), [-1, 2, 3]);

    order_by(&mut rows, "note", "desc");
    assert_eq!(ids(&rows), [3, 2, -1]);
}

#[test]
fn order_by_returns_the_sorted_slice() {
    let mut rows = vec![Row::new(2, None), Row::new(1, None)];
    let sorted = order_by(&mut rows, "ID", "asc");
    assert_eq!(sorted[0].id, 1);
}

#[test]
fn order_by_stable_descending() {
    let rows = vec![
        Row::new(1, Some("x")),
        Row::new(2, Some("y")),
        Row::new(3, Some("x")),
        Row::new(4, Some("y")),
    ];
    // Labels tie in pairs; ties keep input order even when descending
    let mut by_name = rows.clone();
    order_by(&mut by_name, "Label", "desc");
    assert_eq!(ids(&by_name), [2, 4, 1, 3]);

    let mut by_key = rows;
    order_by_key(&mut by_key, Dir::Desc, |row| row.label.clone());
    assert_eq!(ids(&by_key), ids(&by_name));
}

#[test]
fn order_by_errors() {
    let mut rows = vec![Row::new(2, Some("b")), Row::new(1, None)];

    assert_eq!(
        try_order_by(&mut rows, "ID", "up").unwrap_err(),
        FieldwiseError::InvalidDirection("up".to_string())
    );
    assert_eq!(
        try_order_by(&mut rows, "Label", "asc").unwrap_err(),
        FieldwiseError::UnsupportedFieldType {
            field: "Label".to_string(),
            kind: Kind::Null,
        }
    );
    assert_eq!(
        try_order_by(&mut rows, "Nope", "asc").unwrap_err().to_string(),
        "no such field Nope on Row"
    );
    // Nothing moved
    assert_eq!(ids(&rows), [2, 1]);
}

#[test]
fn order_by_short_input_only_checks_direction() {
    let mut one = vec![Row::new(1, None)];
    assert!(try_order_by(&mut one, "Missing", "desc").is_ok());
    assert!(try_order_by(&mut one, "Missing", "sideways").is_err());

    let mut none: Vec<Row> = Vec::new();
    assert!(try_order_by(&mut none, "ID", "asc").is_ok());
}

#[test]
#[should_panic(expected = "unsupported field type bool for field Active")]
fn order_by_panics_on_bool() {
    let mut rows = vec![Row::new(1, None), Row::new(2, None)];
    order_by(&mut rows, "Active", "asc");
}

#[test]
#[should_panic(expected = "direction must be")]
fn order_by_panics_on_bad_direction() {
    let mut rows = vec![Row::new(1, None), Row::new(2, None)];
    order_by(&mut rows, "ID", "hoge");
}

#[test]
fn dir_parsing() {
    assert_eq!("asc".parse::<Dir>().unwrap(), Dir::Asc);
    assert_eq!("desc".parse::<Dir>().unwrap(), Dir::Desc);
    assert!("ASC".parse::<Dir>().is_err());
    assert!("".parse::<Dir>().is_err());
    assert_eq!(Dir::default(), Dir::Asc);
    assert_eq!(Dir::Desc.to_string(), "desc");
}

// ============================================================================
// dig coverage
// ============================================================================

#[test]
fn dig_through_containers() {
    let mut inner = HashMap::new();
    inner.insert("rows".to_string(), vec![Row::new(1, Some("first"))]);
    let deque: VecDeque<_> = [inner].into_iter().collect();

    assert_eq!(
        dig(&deque, &[0.into(), "rows".into(), 0.into(), "Label".into()]),
        Some(Value::Str("first"))
    );
    assert_eq!(dig(&deque, &[0.into(), "cols".into()]), None);
    assert_eq!(dig(&deque, &[(-1).into()]), None);
}

#[test]
fn dig_integer_map_keys() {
    let by_code: BTreeMap<u32, &str> = BTreeMap::from([(10, "ten"), (20, "twenty")]);
    assert_eq!(dig(&by_code, &[10.into()]), Some(Value::Str("ten")));
    assert_eq!(dig(&by_code, &["10".into()]), None);

    let flags: HashMap<bool, u8> = HashMap::from([(true, 1)]);
    assert_eq!(dig(&flags, &[true.into()]), Some(Value::Uint(1)));
}

#[test]
fn dig_stops_on_scalars() {
    let row = Row::new(5, None);
    assert_eq!(dig(&row, &["ID".into(), 0.into()]), None);
    assert_eq!(dig(&row, &[0.into()]), None);
    assert_eq!(dig(&"text", &[0.into()]), None);
}

#[test]
fn dig_empty_path_returns_root() {
    let numbers = [1u8, 2];
    assert_eq!(
        dig(&numbers, &[]),
        Some(Value::List(&numbers))
    );
}

#[test]
fn dig_unexported_field() {
    let rows = vec![Row::new(5, None)];
    assert_eq!(
        try_dig(&rows, &[0.into(), "note".into()]).unwrap_err(),
        FieldwiseError::UnexportedField {
            field: "note".to_string(),
            type_name: "Row",
        }
    );
    // A walk that stops later still reports not found
    assert_eq!(
        try_dig(&rows, &[0.into(), "note".into(), 0.into()]).unwrap(),
        None
    );
}

#[test]
#[should_panic(expected = "unexported field note on Row")]
fn dig_panics_on_unexported_result() {
    let row = Row::new(5, None);
    dig(&row, &["note".into()]);
}

// ============================================================================
// struct_fields coverage
// ============================================================================

#[test]
fn struct_fields_lists_everything() {
    let row = Row::new(1, None);
    assert_eq!(
        struct_fields(&row),
        ["ID", "Code", "Label", "Ratio", "Active", "note"]
    );
    assert_eq!(struct_fields(&&row).len(), 6);
}

#[test]
fn struct_fields_rejects_non_structs() {
    assert_eq!(
        try_struct_fields(&vec![Row::new(1, None)]).unwrap_err(),
        FieldwiseError::NotStruct { kind: Kind::List }
    );
    assert_eq!(
        try_struct_fields(&None::<Row>).unwrap_err(),
        FieldwiseError::NotStruct { kind: Kind::Null }
    );
}
