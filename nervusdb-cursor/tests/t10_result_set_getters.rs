use nervusdb_cursor::{Error, MemoryCursor, ResultSet, Value};

const MIXED_KEYS: [&str; 7] = [
    "columnInt",
    "columnString",
    "columnFloat",
    "columnShort",
    "columnDouble",
    "columnBoolean",
    "columnLong",
];

fn mixed() -> ResultSet {
    ResultSet::new(MemoryCursor::from_rows(
        MIXED_KEYS,
        vec![
            vec![
                Value::Int(1),
                Value::from("value1"),
                Value::Float(0.1),
                Value::Int(1),
                Value::Float(2.29),
                Value::Bool(true),
                Value::Int(2),
            ],
            vec![
                Value::Int(2),
                Value::from("value2"),
                Value::Float(0.2),
                Value::Int(2),
                Value::Float(20.16),
                Value::Bool(false),
                Value::Int(6),
            ],
        ],
    ))
}

fn positioned() -> ResultSet {
    let mut rs = mixed();
    assert!(rs.advance().unwrap());
    rs
}

fn closed() -> ResultSet {
    let mut rs = mixed();
    rs.close().unwrap();
    rs
}

#[test]
fn t10_find_column_returns_one_based_ordinals() {
    let rs = ResultSet::new(MemoryCursor::from_rows(
        ["columnA", "columnB"],
        vec![vec![Value::from("x"), Value::from("y")]],
    ));
    assert_eq!(rs.find_column("columnA").unwrap(), 1);
    assert_eq!(rs.find_column("columnB").unwrap(), 2);
    assert!(matches!(
        rs.find_column("columnZ"),
        Err(Error::UnknownColumn(label)) if label == "columnZ"
    ));
}

#[test]
fn t10_find_column_on_three_columns() {
    let rs = ResultSet::new(MemoryCursor::from_rows(
        ["columnA", "columnB", "columnC"],
        vec![],
    ));
    assert_eq!(rs.find_column("columnA").unwrap(), 1);
    assert_eq!(rs.find_column("columnB").unwrap(), 2);
    assert_eq!(rs.find_column("columnC").unwrap(), 3);
}

#[test]
fn t10_find_column_does_not_depend_on_position() {
    let mut rs = mixed();
    assert_eq!(rs.find_column("columnLong").unwrap(), 7);
    while rs.advance().unwrap() {}
    assert_eq!(rs.find_column("columnLong").unwrap(), 7);
}

#[test]
fn t10_get_string_by_label_and_index() {
    let mut rs = mixed();
    rs.advance().unwrap();
    assert_eq!(rs.get_string("columnString").unwrap().as_deref(), Some("value1"));
    rs.advance().unwrap();
    assert_eq!(rs.get_string(2).unwrap().as_deref(), Some("value2"));
}

#[test]
fn t10_get_int_by_label_and_index() {
    let mut rs = mixed();
    rs.advance().unwrap();
    assert_eq!(rs.get_int("columnInt").unwrap(), 1);
    assert_eq!(rs.get_int(1).unwrap(), 1);
    rs.advance().unwrap();
    assert_eq!(rs.get_int("columnInt").unwrap(), 2);
}

#[test]
fn t10_get_short_and_long() {
    let mut rs = mixed();
    rs.advance().unwrap();
    assert_eq!(rs.get_short("columnShort").unwrap(), 1);
    assert_eq!(rs.get_long(7).unwrap(), 2);
    rs.advance().unwrap();
    assert_eq!(rs.get_short(4).unwrap(), 2);
    assert_eq!(rs.get_long("columnLong").unwrap(), 6);
}

#[test]
fn t10_get_float_and_double() {
    let mut rs = mixed();
    rs.advance().unwrap();
    assert_eq!(rs.get_float("columnFloat").unwrap(), 0.1_f32);
    assert_eq!(rs.get_double(5).unwrap(), 2.29);
    rs.advance().unwrap();
    assert_eq!(rs.get_float(3).unwrap(), 0.2_f32);
    assert_eq!(rs.get_double("columnDouble").unwrap(), 20.16);
}

#[test]
fn t10_integers_widen_to_double() {
    let mut rs = positioned();
    assert_eq!(rs.get_double("columnLong").unwrap(), 2.0);
    assert_eq!(rs.get_float(1).unwrap(), 1.0_f32);
}

#[test]
fn t10_get_boolean() {
    let mut rs = mixed();
    rs.advance().unwrap();
    assert!(rs.get_boolean("columnBoolean").unwrap());
    rs.advance().unwrap();
    assert!(!rs.get_boolean(6).unwrap());
}

#[test]
fn t10_get_object_passes_scalars_through() {
    let mut rs = mixed();
    rs.advance().unwrap();
    assert_eq!(rs.get_object("columnString").unwrap().as_str(), Some("value1"));
    assert_eq!(rs.get_object("columnInt").unwrap().as_i64(), Some(1));
    assert_eq!(rs.get_object(6).unwrap().as_bool(), Some(true));
    rs.advance().unwrap();
    assert_eq!(rs.get_object("columnShort").unwrap().as_i64(), Some(2));
    assert_eq!(rs.get_object(5).unwrap().as_f64(), Some(20.16));
}

#[test]
fn t10_generic_get_accepts_any_target() {
    let mut rs = positioned();
    let long: i64 = rs.get("columnLong").unwrap();
    let text: Option<String> = rs.get(1).unwrap();
    assert_eq!(long, 2);
    assert_eq!(text.as_deref(), Some("1"));
}

#[test]
fn t10_unknown_label_fails_every_getter() {
    let mut rs = positioned();
    assert!(matches!(rs.get_string("columnZ"), Err(Error::UnknownColumn(_))));
    assert!(matches!(rs.get_int("columnZ"), Err(Error::UnknownColumn(_))));
    assert!(matches!(rs.get_float("columnZ"), Err(Error::UnknownColumn(_))));
    assert!(matches!(rs.get_short("columnZ"), Err(Error::UnknownColumn(_))));
    assert!(matches!(rs.get_double("columnZ"), Err(Error::UnknownColumn(_))));
    assert!(matches!(rs.get_object("columnZ"), Err(Error::UnknownColumn(_))));
    assert!(matches!(rs.get_boolean("columnZ"), Err(Error::UnknownColumn(_))));
    assert!(matches!(rs.get_long("columnZ"), Err(Error::UnknownColumn(_))));
    assert!(matches!(rs.get_array("columnZ"), Err(Error::UnknownColumn(_))));
}

#[test]
fn t10_out_of_range_and_zero_ordinals_fail() {
    let mut rs = positioned();
    for ordinal in [0, -1, 8, 99] {
        assert!(matches!(
            rs.get_string(ordinal),
            Err(Error::InvalidColumnIndex { index, count: 7 }) if index == i64::from(ordinal)
        ));
        assert!(matches!(rs.get_long(ordinal), Err(Error::InvalidColumnIndex { .. })));
        assert!(matches!(rs.get_object(ordinal), Err(Error::InvalidColumnIndex { .. })));
    }
}

#[test]
fn t10_invalid_ordinal_fails_even_before_first_row() {
    let mut rs = mixed();
    assert!(matches!(rs.get_int(0), Err(Error::InvalidColumnIndex { .. })));
    assert!(matches!(rs.get_int(1), Err(Error::NoCurrentRow)));
}

#[test]
fn t10_getters_fail_after_close() {
    let mut rs = closed();
    assert!(matches!(rs.find_column("columnInt"), Err(Error::CursorClosed)));
    assert!(matches!(rs.get_string("columnString"), Err(Error::CursorClosed)));
    assert!(matches!(rs.get_string(2), Err(Error::CursorClosed)));
    assert!(matches!(rs.get_int(1), Err(Error::CursorClosed)));
    assert!(matches!(rs.get_float("columnFloat"), Err(Error::CursorClosed)));
    assert!(matches!(rs.get_short(4), Err(Error::CursorClosed)));
    assert!(matches!(rs.get_double(5), Err(Error::CursorClosed)));
    assert!(matches!(rs.get_object(1), Err(Error::CursorClosed)));
    assert!(matches!(rs.get_boolean(6), Err(Error::CursorClosed)));
    assert!(matches!(rs.get_long(7), Err(Error::CursorClosed)));
    assert!(matches!(rs.get_array(1), Err(Error::CursorClosed)));
    assert!(matches!(rs.was_null(), Err(Error::CursorClosed)));
    assert!(matches!(rs.advance(), Err(Error::CursorClosed)));
}

#[test]
fn t10_closed_check_wins_over_column_resolution() {
    let mut rs = closed();
    assert!(matches!(rs.get_int(0), Err(Error::CursorClosed)));
    assert!(matches!(rs.get_int("columnZ"), Err(Error::CursorClosed)));
}

#[test]
fn t10_incompatible_targets_are_rejected() {
    let mut rs = positioned();
    assert!(matches!(
        rs.get_int("columnString"),
        Err(Error::UnsupportedConversion { from: "STRING", to: "i32" })
    ));
    assert!(matches!(
        rs.get_boolean("columnInt"),
        Err(Error::UnsupportedConversion { from: "INTEGER", to: "bool" })
    ));
    assert!(matches!(
        rs.get_long("columnFloat"),
        Err(Error::UnsupportedConversion { from: "FLOAT", to: "i64" })
    ));
    assert!(matches!(
        rs.get_array("columnInt"),
        Err(Error::UnsupportedConversion { from: "INTEGER", to: "ArrayValue" })
    ));
}

#[test]
fn t10_was_null_flips_between_reads() {
    let mut rs = ResultSet::new(MemoryCursor::from_rows(
        ["a", "b"],
        vec![vec![Value::Null, Value::Int(5)]],
    ));
    rs.advance().unwrap();

    assert_eq!(rs.get_int("a").unwrap(), 0);
    assert!(rs.was_null().unwrap());
    assert_eq!(rs.get_int("b").unwrap(), 5);
    assert!(!rs.was_null().unwrap());
    assert!(rs.get_object("a").unwrap().is_null());
    assert!(rs.was_null().unwrap());
    assert_eq!(rs.get_string("b").unwrap().as_deref(), Some("5"));
    assert!(!rs.was_null().unwrap());
}

#[test]
fn t10_null_cell_as_plain_string_fails() {
    let mut rs = ResultSet::new(MemoryCursor::from_rows(["a"], vec![vec![Value::Null]]));
    rs.advance().unwrap();

    let err = rs.get::<String>("a").unwrap_err();
    assert!(matches!(
        err,
        Error::UnsupportedConversion { from: "NULL", to: "String" }
    ));
    assert_eq!(rs.get::<Option<String>>("a").unwrap(), None);
    assert_eq!(rs.get_string(1).unwrap(), None);
    assert_eq!(rs.get::<i64>(1).unwrap(), 0);
}

#[test]
fn t10_large_doubles_read_as_text_keep_a_fraction() {
    let mut rs = ResultSet::new(MemoryCursor::from_rows(
        ["big", "whole"],
        vec![vec![Value::Float(1e300), Value::Float(2.0)]],
    ));
    rs.advance().unwrap();

    assert_eq!(rs.get_string("big").unwrap().as_deref(), Some("1.0e300"));
    assert_eq!(rs.get_string("whole").unwrap().as_deref(), Some("2.0"));
}
