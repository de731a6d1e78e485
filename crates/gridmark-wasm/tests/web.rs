//! Boundary tests for the JavaScript API. Run with `wasm-pack test --node`.
#![cfg(target_arch = "wasm32")]

use gridmark_wasm::{CellData, GridmarkEngine};
use serde_json::{json, Value};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

/// Read a thrown `{code, message}` object back into JSON
fn error_json(err: JsValue) -> Value {
    serde_wasm_bindgen::from_value(err).unwrap()
}

fn cell(engine: &GridmarkEngine, row: i32, col: i32) -> CellData {
    serde_wasm_bindgen::from_value(engine.get_cell(row, col).unwrap()).unwrap()
}

#[wasm_bindgen_test]
fn test_get_cell_returns_cell_data() {
    let mut engine = GridmarkEngine::new(9, 9).unwrap();
    engine.set_value(4, 5, "3").unwrap();
    engine.toggle_mark(4, 5, "corner", "7").unwrap();
    engine.select(4, 5);

    let data = cell(&engine, 4, 5);
    assert_eq!((data.row, data.col), (4, 5));
    assert_eq!(data.value, "3");
    assert!(data.modifiable);
    assert!(data.selected);
    assert_eq!(data.corner_marks, vec!["7"]);
}

#[wasm_bindgen_test]
fn test_get_cell_out_of_bounds_error_object() {
    let engine = GridmarkEngine::new(9, 9).unwrap();

    let err = error_json(engine.get_cell(9, 0).unwrap_err());
    assert_eq!(
        err,
        json!({
            "code": "OUT_OF_BOUNDS",
            "message": "position (9, 0) is outside the 9x9 grid"
        })
    );

    let err = error_json(engine.get_cell(0, -1).unwrap_err());
    assert_eq!(err["code"], "OUT_OF_BOUNDS");
}

#[wasm_bindgen_test]
fn test_cell_commands_reject_bad_input() {
    let mut engine = GridmarkEngine::default();

    let err = error_json(engine.set_value(-1, 0, "1").unwrap_err());
    assert_eq!(err["code"], "OUT_OF_BOUNDS");

    let err = error_json(engine.toggle_mark(0, 0, "diagonal", "1").unwrap_err());
    assert_eq!(err["code"], "UNKNOWN_MARK_KIND");
    assert_eq!(err["message"], "unknown mark kind: diagonal");

    let err = error_json(engine.clear_cell(0, 9).unwrap_err());
    assert_eq!(err["code"], "OUT_OF_BOUNDS");

    let err = error_json(engine.apply_to_selection("{\"type\": \"explode\"}").unwrap_err());
    assert_eq!(err["code"], "INVALID_ACTION");
}

#[wasm_bindgen_test]
fn test_constructor_rejects_bad_dimensions() {
    let err = error_json(GridmarkEngine::new(0, 9).err().unwrap());
    assert_eq!(err["code"], "CONFIG_DIMENSIONS");

    let err = error_json(GridmarkEngine::new(65536, 65536).err().unwrap());
    assert_eq!(err["code"], "CONFIG_DIMENSIONS");

    let err = error_json(GridmarkEngine::from_config("{").err().unwrap());
    assert_eq!(err["code"], "CONFIG_PARSE");

    let engine = GridmarkEngine::from_config(r#"{"width": 4, "height": 2}"#).unwrap();
    assert_eq!((engine.width(), engine.height()), (4, 2));
}

#[wasm_bindgen_test]
fn test_load_givens_from_js_array() {
    let mut engine = GridmarkEngine::new(2, 2).unwrap();
    let givens = serde_wasm_bindgen::to_value(&vec![Some("5"), None, Some("1")]).unwrap();

    engine.load_givens(givens).unwrap();

    let given = cell(&engine, 0, 0);
    assert_eq!(given.value, "5");
    assert!(!given.modifiable);
    assert!(cell(&engine, 0, 1).modifiable);
    assert_eq!(cell(&engine, 1, 0).value, "1");
    assert_eq!(cell(&engine, 1, 1).value, "");
    assert!(!engine.set_value(0, 0, "9").unwrap());
}

#[wasm_bindgen_test]
fn test_load_givens_errors() {
    let mut engine = GridmarkEngine::new(2, 2).unwrap();

    let err = error_json(engine.load_givens(JsValue::from_str("nope")).unwrap_err());
    assert_eq!(err["code"], "INVALID_GIVENS");

    let too_many = serde_wasm_bindgen::to_value(&vec![Some("1"); 5]).unwrap();
    let err = error_json(engine.load_givens(too_many).unwrap_err());
    assert_eq!(err["code"], "OUT_OF_BOUNDS");
    assert_eq!(cell(&engine, 0, 0).value, "");
}
