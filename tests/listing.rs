use university_records::domain::student::Student;
use university_records::pagination::build_page;

mod common;

fn last_names(students: &[Student]) -> Vec<&str> {
    students.iter().map(|s| s.last_name.as_str()).collect()
}

#[test]
fn test_default_order_first_page() {
    let test_db = common::TestDb::new("test_default_order_first_page.db");
    let repo = test_db.seeded_repo();

    let page = build_page(repo.student_source(), "", None, None, 3).unwrap();

    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 3);
    assert!(!page.has_previous);
    assert!(page.has_next);
    assert_eq!(last_names(&page.items), vec!["Alexander", "Alonso", "Anand"]);
}

#[test]
fn test_name_desc_second_page() {
    let test_db = common::TestDb::new("test_name_desc_second_page.db");
    let repo = test_db.seeded_repo();

    let page = build_page(repo.student_source(), "name_desc", None, Some(2), 3).unwrap();

    assert_eq!(page.page, 2);
    assert!(page.has_previous);
    assert!(page.has_next);
    assert_eq!(last_names(&page.items), vec!["Justice", "Barzdukas", "Anand"]);
}

#[test]
fn test_filter_counts_matches_and_clamps_page() {
    let test_db = common::TestDb::new("test_filter_clamps_page.db");
    let repo = test_db.seeded_repo();

    let page = build_page(repo.student_source(), "", Some("a"), Some(5), 3).unwrap();

    assert_eq!(page.total_pages, 2);
    assert_eq!(page.page, 2);
    assert!(page.has_previous);
    assert!(!page.has_next);
    assert_eq!(last_names(&page.items), vec!["Li", "Norman"]);
}

#[test]
fn test_filter_is_case_sensitive() {
    let test_db = common::TestDb::new("test_filter_case_sensitive.db");
    let repo = test_db.seeded_repo();

    let lower = build_page(repo.student_source(), "", Some("alex"), None, 3).unwrap();
    assert!(lower.items.is_empty());
    assert_eq!(lower.total_pages, 1);
    assert_eq!(lower.page, 1);
    assert!(!lower.has_previous);
    assert!(!lower.has_next);

    let upper = build_page(repo.student_source(), "", Some("Alex"), None, 3).unwrap();
    assert_eq!(last_names(&upper.items), vec!["Alexander"]);
}

#[test]
fn test_filter_matches_first_mid_name() {
    let test_db = common::TestDb::new("test_filter_first_mid_name.db");
    let repo = test_db.seeded_repo();

    let page = build_page(repo.student_source(), "", Some("Peggy"), None, 3).unwrap();
    assert_eq!(last_names(&page.items), vec!["Justice"]);
}

#[test]
fn test_date_desc_order() {
    let test_db = common::TestDb::new("test_date_desc_order.db");
    let repo = test_db.seeded_repo();

    let first = build_page(repo.student_source(), "date_desc", None, Some(1), 3).unwrap();
    let mut newest = last_names(&first.items[..2]);
    newest.sort();
    assert_eq!(newest, vec!["Alexander", "Olivetto"]);

    let last = build_page(repo.student_source(), "date_desc", None, Some(3), 3).unwrap();
    assert_eq!(last.items.len(), 2);
    assert_eq!(last.items[1].last_name.as_str(), "Justice");
}

#[test]
fn test_date_asc_order() {
    let test_db = common::TestDb::new("test_date_asc_order.db");
    let repo = test_db.seeded_repo();

    let page = build_page(repo.student_source(), "Date", None, None, 3).unwrap();
    assert_eq!(page.items[0].last_name.as_str(), "Justice");
    assert!(
        page.items
            .windows(2)
            .all(|pair| pair[0].enrollment_date <= pair[1].enrollment_date)
    );
}

#[test]
fn test_unknown_token_and_bad_page_fall_back() {
    let test_db = common::TestDb::new("test_unknown_token.db");
    let repo = test_db.seeded_repo();

    let page = build_page(repo.student_source(), "shoe_size", None, Some(-3), 3).unwrap();
    assert_eq!(page.page, 1);
    assert_eq!(last_names(&page.items), vec!["Alexander", "Alonso", "Anand"]);
}

#[test]
fn test_empty_table_has_one_page() {
    let test_db = common::TestDb::new("test_empty_table.db");
    let repo = test_db.repo();

    let page = build_page(repo.student_source(), "", None, Some(3), 3).unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.page, 1);
}

#[test]
fn test_filter_whitespace_is_matched_literally() {
    use chrono::NaiveDate;
    use university_records::domain::student::NewStudent;
    use university_records::repository::StudentWriter;

    let test_db = common::TestDb::new("test_filter_whitespace.db");
    let repo = test_db.repo();
    let enrolled = NaiveDate::from_ymd_opt(2002, 9, 1).unwrap();
    for (last, first) in [("Alonso", "Mary Ann"), ("Li", "Yan"), ("Norman", "Laura")] {
        repo.create_student(&NewStudent::try_new(last, first, enrolled).unwrap())
            .unwrap();
    }

    let inner = build_page(repo.student_source(), "", Some("Mary Ann"), None, 3).unwrap();
    assert_eq!(last_names(&inner.items), vec!["Alonso"]);

    let blank = build_page(repo.student_source(), "", Some(" "), None, 3).unwrap();
    assert_eq!(last_names(&blank.items), vec!["Alonso"]);

    let trailing = build_page(repo.student_source(), "", Some("Yan "), None, 3).unwrap();
    assert!(trailing.items.is_empty());
    assert_eq!(trailing.total_pages, 1);
}
