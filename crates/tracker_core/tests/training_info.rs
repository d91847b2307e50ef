use std::time::Duration;

use tracker_core::{
    Activity, InputField, TrackerError, distance, mean_speed, running_spent_calories,
    spent_calories, training_info, training_metrics, walking_spent_calories,
};

#[test]
fn walking_report_in_russian_label() {
    let text = training_info("3456,Ходьба,3h00m", 85.0, 1.85).expect("report");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "Training type: Ходьба");
    assert_eq!(lines[1], "Duration: 3.00 h.");
    assert!(lines[2].starts_with("Distance: "));
    assert!(lines[3].ends_with(" km/h"));
    assert!(lines[4].starts_with("Calories burned: "));
    assert!(text.ends_with('\n'));
}

#[test]
fn metrics_follow_the_formulas() {
    let steps = 7800;
    let (weight, height) = (75.0, 1.72);
    let duration = Duration::from_secs(45 * 60);

    let report = training_metrics("7800,Running,45m", weight, height).expect("metrics");
    assert_eq!(report.distance_km, distance(steps, height));
    assert_eq!(report.mean_speed_kmh, mean_speed(steps, height, duration));
    assert_eq!(
        report.calories,
        running_spent_calories(steps, weight, height, duration).unwrap()
    );
    assert_eq!(report.duration_hours, 0.75);
}

#[test]
fn dispatch_matches_direct_calls() {
    let d = Duration::from_secs(5400);
    assert_eq!(
        spent_calories(Activity::Walking, 9000, 64.0, 1.66, d),
        walking_spent_calories(9000, 64.0, 1.66, d)
    );
    assert_eq!(
        spent_calories(Activity::Running, 9000, 64.0, 1.66, d),
        running_spent_calories(9000, 64.0, 1.66, d)
    );
}

#[test]
fn whitespace_around_fields_is_ignored() {
    let a = training_info("  5000 , Running , 1h ", 80.0, 1.8).unwrap();
    let b = training_info("5000,Running,1h", 80.0, 1.8).unwrap();
    assert_eq!(a, b);
}

#[test]
fn errors_are_surfaced() {
    assert!(matches!(
        training_info("abc,Running,1h", 80.0, 1.8),
        Err(TrackerError::InvalidSteps(_))
    ));
    assert!(matches!(
        training_info("5000,Running,1h,extra", 80.0, 1.8),
        Err(TrackerError::FieldCount {
            expected: 3,
            found: 4
        })
    ));
    assert!(matches!(
        training_info("5000,Running,1d", 80.0, 1.8),
        Err(TrackerError::InvalidDuration(_))
    ));
    assert_eq!(
        training_info("5000,Плавание,1h", 80.0, 1.8),
        Err(TrackerError::UnknownActivity("Плавание".into()))
    );
    assert_eq!(
        training_info("5000,Walking,1h", 80.0, 0.0),
        Err(TrackerError::InvalidInput {
            field: InputField::Height
        })
    );
}

#[test]
fn report_serializes_for_structured_output() {
    let report = training_metrics("6000,Walking,1h", 70.0, 1.7).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["activity"], "Walking");
    assert_eq!(json["duration_hours"], 1.0);
    assert!(json["calories"].as_f64().unwrap() > 0.0);
}
