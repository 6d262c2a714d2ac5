use pocketlist_core::{
    filter_students, CartRemovalPolicy, GroceryService, InMemoryStudentRepository, RollNumber,
    Student, StudentService, EMPTY_ROSTER_NOTICE,
};

fn roster() -> Vec<Student> {
    [(1, "Lakshay Saini"), (2, "KamalPreet Singh"), (3, "Arpit Dogra")]
        .into_iter()
        .map(|(value, name)| Student::new(RollNumber::new(value).unwrap(), name).unwrap())
        .collect()
}

fn service() -> StudentService<InMemoryStudentRepository> {
    StudentService::new(InMemoryStudentRepository::from_students(roster()).unwrap())
}

#[test]
fn padded_roll_number_search_matches_single_student() {
    let mut service = service();
    service.set_search_text("02");
    let view = service.filtered();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].name, "KamalPreet Singh");
}

#[test]
fn name_search_is_case_insensitive_and_keeps_order() {
    let mut service = service();
    service.set_search_text("A");
    let names: Vec<&str> = service.filtered().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Lakshay Saini", "KamalPreet Singh", "Arpit Dogra"]);

    service.set_search_text("sINGh");
    assert_eq!(service.filtered().len(), 1);
}

#[test]
fn empty_search_shows_everything() {
    let service = service();
    assert_eq!(service.search_text(), "");
    assert_eq!(service.filtered().len(), 3);
}

#[test]
fn filtering_is_idempotent() {
    let students = roster();
    for query in ["", "a", "0", "03", "dogra", "zzz"] {
        let once = filter_students(&students, query);
        let twice = filter_students(once.iter().copied(), query);
        assert_eq!(once, twice, "query `{query}`");
    }
}

#[test]
fn view_tracks_store_mutations() {
    let mut service = service();
    service.set_search_text("sak");
    assert!(service.filtered().is_empty());

    service.add("Sakshi").unwrap();
    assert_eq!(service.filtered().len(), 1);

    service.set_search_text("04");
    let added = service.filtered()[0].roll_number;
    service.remove(added);
    assert!(service.filtered().is_empty());
}

#[test]
fn display_lines_number_filtered_rows_from_one() {
    let mut service = service();
    service.set_search_text("i");
    assert_eq!(
        service.display_lines(),
        vec![
            "1. RollNo: 01 — Lakshay Saini".to_string(),
            "2. RollNo: 02 — KamalPreet Singh".to_string(),
            "3. RollNo: 03 — Arpit Dogra".to_string(),
        ]
    );

    service.set_search_text("Dogra");
    assert_eq!(
        service.display_lines(),
        vec!["1. RollNo: 03 — Arpit Dogra".to_string()]
    );

    service.set_search_text("nobody");
    assert!(service.display_lines().is_empty());
    assert_eq!(EMPTY_ROSTER_NOTICE, "No students found.");
}

#[test]
fn three_digit_roll_numbers_keep_all_digits() {
    let repo = InMemoryStudentRepository::from_students([Student::new(
        RollNumber::new(99).unwrap(),
        "Ninety Nine",
    )
    .unwrap()])
    .unwrap();
    let mut service = StudentService::new(repo);
    let added = service.add("Hundred").unwrap();
    assert_eq!(added.roll_number.padded(), "100");

    service.set_search_text("100");
    assert_eq!(service.display_lines(), vec!["1. RollNo: 100 — Hundred".to_string()]);
}

#[test]
fn catalog_search_filters_by_name() {
    let mut groceries = GroceryService::with_demo_catalog(CartRemovalPolicy::default());
    assert_eq!(groceries.filtered_catalog().len(), 10);

    groceries.set_search_text("TO");
    let names: Vec<&str> = groceries
        .filtered_catalog()
        .iter()
        .map(|item| item.name.as_str())
        .collect();
    assert_eq!(names, vec!["Potatoes", "Tomatoes"]);
}
