use std::sync::LazyLock;

use fitcoach_domain as domain;

pub static COACH: LazyLock<domain::Coach> = LazyLock::new(|| domain::Coach {
    id: 1.into(),
    details: domain::CoachDetails {
        name: domain::Name::new("Dana").unwrap(),
        last_name: "Reyes".to_string(),
        profile_name: "coach_dana".to_string(),
        email: "dana@example.org".to_string(),
    },
});

pub static CLIENTS: LazyLock<Vec<domain::Client>> =
    LazyLock::new(|| vec![CLIENT.clone(), CLIENT_2.clone()]);

pub static CLIENT: LazyLock<domain::Client> = LazyLock::new(|| domain::Client {
    id: 3.into(),
    coach_id: 1.into(),
    details: domain::ClientDetails {
        name: domain::Name::new("Alice").unwrap(),
        last_name: domain::Name::new("Moreau").unwrap(),
        profile_name: String::new(),
        phone: "+33 6 12 34 56 78".to_string(),
        email: "alice@example.org".to_string(),
        city: "Lyon".to_string(),
    },
});

pub static CLIENT_2: LazyLock<domain::Client> = LazyLock::new(|| domain::Client {
    id: 4.into(),
    coach_id: 1.into(),
    details: domain::ClientDetails {
        name: domain::Name::new("Bob").unwrap(),
        last_name: domain::Name::new("Lindqvist").unwrap(),
        profile_name: "bobby".to_string(),
        phone: String::new(),
        email: "bob@example.org".to_string(),
        city: String::new(),
    },
});

pub static EXERCISES: LazyLock<Vec<domain::Exercise>> =
    LazyLock::new(|| vec![EXERCISE.clone(), EXERCISE_2.clone()]);

pub static EXERCISE: LazyLock<domain::Exercise> = LazyLock::new(|| domain::Exercise {
    id: 12.into(),
    name: domain::Name::new("Back Squat").unwrap(),
    load_type: Some("barbell".to_string()),
});

pub static EXERCISE_2: LazyLock<domain::Exercise> = LazyLock::new(|| domain::Exercise {
    id: 13.into(),
    name: domain::Name::new("Goblet Squat").unwrap(),
    load_type: None,
});

pub static WORKOUT: LazyLock<domain::Workout> = LazyLock::new(|| domain::Workout {
    id: 8.into(),
    record: domain::WorkoutRecord {
        client_id: 3.into(),
        coach_id: Some(1.into()),
        exercise_id: 12.into(),
        unit: domain::Unit::Kg,
        one_rep_max: Some(100.0),
        percentage: Some(80.0),
        max_repetitions: Some(8.0),
        rir_repetitions: Some(2.0),
        concentric: Some(2.0),
        isometric_1: Some(1.0),
        eccentric: Some(2.0),
        isometric_2: Some(1.0),
        reps: Some(10.0),
        sets: Some(3.0),
        exercise_time: None,
        rom: None,
        weight: Some(80.0),
        repetitions: None,
        metrics: domain::DerivedMetrics {
            total_tempo: 6.0,
            time_under_tension: 180.0,
            total_rest: 120.0,
            density: Some(8.0),
        },
    },
});

pub static WORKOUT_2: LazyLock<domain::Workout> = LazyLock::new(|| domain::Workout {
    id: 9.into(),
    record: domain::WorkoutRecord {
        client_id: 4.into(),
        coach_id: None,
        exercise_id: 13.into(),
        unit: domain::Unit::Lbs,
        one_rep_max: None,
        percentage: None,
        max_repetitions: None,
        rir_repetitions: None,
        concentric: None,
        isometric_1: None,
        eccentric: None,
        isometric_2: None,
        reps: Some(12.0),
        sets: Some(1.0),
        exercise_time: Some(45.0),
        rom: None,
        weight: Some(35.0),
        repetitions: None,
        metrics: domain::DerivedMetrics {
            total_tempo: 0.0,
            time_under_tension: 0.0,
            total_rest: 0.0,
            density: None,
        },
    },
});
