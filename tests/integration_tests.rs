use grade_reporter::error::RosterError;
use grade_reporter::output::{
    write_bottom_n, write_details_sorted_by_average, write_sorted_by_average, write_top_n,
    write_with_names,
};
use grade_reporter::roster::StudentRoster;
use std::env;
use std::fs;

#[test]
fn test_full_pipeline() {
    let bytes = include_bytes!("fixtures/student_dataset.csv");
    let roster = StudentRoster::load(&bytes[..]).expect("Failed to load roster");
    assert_eq!(roster.len(), 5);

    let dir = env::temp_dir().join("grade_reporter_integration");
    fs::create_dir_all(&dir).unwrap();

    write_with_names(dir.join("averages_with_names.csv"), &roster).unwrap();
    write_sorted_by_average(dir.join("sorted_averages.csv"), &roster).unwrap();
    write_top_n(dir.join("top_three_averages.csv"), &roster, 3).unwrap();
    write_bottom_n(dir.join("bottom_three_averages.csv"), &roster, 3).unwrap();
    write_details_sorted_by_average(dir.join("student_details_by_average.csv"), &roster).unwrap();

    // Load-order report keeps the input order.
    let with_names = fs::read_to_string(dir.join("averages_with_names.csv")).unwrap();
    let names: Vec<&str> = with_names
        .lines()
        .skip(1)
        .map(|l| l.split(',').next().unwrap())
        .collect();
    assert_eq!(names, ["Alice", "Bob", "Carla", "Diego", "Emma"]);

    // Ascending by average; Alice and Emma tie at 75 and keep input order.
    let sorted = fs::read_to_string(dir.join("sorted_averages.csv")).unwrap();
    let names: Vec<&str> = sorted
        .lines()
        .skip(1)
        .map(|l| l.split(',').next().unwrap())
        .collect();
    assert_eq!(names, ["Diego", "Alice", "Emma", "Carla", "Bob"]);

    let top = fs::read_to_string(dir.join("top_three_averages.csv")).unwrap();
    let lines: Vec<&str> = top.lines().collect();
    assert_eq!(lines[0], "name,average");
    assert_eq!(lines[1], "Bob,100.0");
    assert_eq!(lines[2], "Carla,90.0");
    assert_eq!(lines.len(), 4);

    let bottom = fs::read_to_string(dir.join("bottom_three_averages.csv")).unwrap();
    let lines: Vec<&str> = bottom.lines().collect();
    assert_eq!(lines, ["average", "60.0", "75.0", "75.0"]);

    let details = fs::read_to_string(dir.join("student_details_by_average.csv")).unwrap();
    let lines: Vec<&str> = details.lines().collect();
    assert_eq!(lines[0], "name,nationality,age,average");
    assert_eq!(lines[1], "Diego,Mexican,20,60.0");

    assert_eq!(roster.overall_average().unwrap(), 80.0);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_header_only_input_fails_on_aggregate() {
    let csv = "name,nationality,age,english.grade,math.grade,sciences.grade,language.grade\n";
    let roster = StudentRoster::load(csv.as_bytes()).expect("Header-only input should load");

    assert!(matches!(
        roster.overall_average(),
        Err(RosterError::EmptyDataset)
    ));
}
