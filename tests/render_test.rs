use serde_json::json;
use studentportal::cli::render;

#[test]
fn test_render_table_for_object_rows() {
    let data = json!([
        {"id": 1, "mssv": "SV001", "fullName": "Nguyen Van A"},
        {"id": 2, "mssv": "SV002", "email": "b@school.edu"}
    ]);

    let output = render(&data);

    for expected in ["id", "mssv", "fullName", "email", "SV001", "Nguyen Van A", "b@school.edu"] {
        assert!(output.contains(expected), "missing {expected} in\n{output}");
    }
    assert!(output.contains('┌'));

    let header = output.lines().nth(1).unwrap();
    assert!(header.contains("id") && header.contains("mssv") && header.contains("email"));
}

#[test]
fn test_render_missing_and_null_cells_are_blank() {
    let data = json!([{"name": "Math", "room": null}, {"name": "Physics"}]);

    let output = render(&data);

    assert!(output.contains("Math"));
    assert!(output.contains("Physics"));
    assert!(!output.contains("null"));
}

#[test]
fn test_render_strings_without_quotes() {
    let output = render(&json!([{"status": "Paid"}]));

    assert!(output.contains("Paid"));
    assert!(!output.contains("\"Paid\""));
}

#[test]
fn test_render_non_table_values_as_json() {
    assert_eq!(render(&json!([])), "[]");
    assert_eq!(
        render(&json!({"totalStudents": 120})),
        "{\n  \"totalStudents\": 120\n}"
    );
    assert_eq!(render(&json!([1, 2])), "[\n  1,\n  2\n]");
    assert_eq!(render(&json!("ok")), "\"ok\"");
}
