use crate::catalog::indexed::IndexedCatalog;
use crate::catalog::simple::SimpleCatalog;
use crate::catalog::{Book, Catalog, CatalogError, Condition};

/// 계약 테스트를 수행할 카탈로그 구현체 목록
fn catalogs() -> Vec<(&'static str, Box<dyn Catalog>)> {
    vec![
        ("simple", Box::new(SimpleCatalog::new())),
        ("indexed", Box::new(IndexedCatalog::new())),
    ]
}

fn book(title: &str, authors: &[&str], year: i32) -> Book {
    Book::builder()
        .title(title.to_owned())
        .authors(authors.iter().map(|a| (*a).to_owned()).collect())
        .year(year)
        .build()
        .unwrap()
}

fn cannery_row() -> Book {
    book("Cannery Row", &["John Steinbeck"], 1945)
}

fn grapes_of_wrath() -> Book {
    book("The Grapes of Wrath", &["John Steinbeck"], 1939)
}

#[test]
fn buy_makes_copy_available() {
    for (name, mut catalog) in catalogs() {
        let copy = catalog.buy(cannery_row());

        assert!(catalog.is_available(&copy), "{}", name);
        assert!(catalog.available_copies(&cannery_row()).contains(&copy), "{}", name);
        assert!(catalog.all_copies(&cannery_row()).contains(&copy), "{}", name);
    }
}

#[test]
fn checkout_and_checkin_transitions() {
    for (name, mut catalog) in catalogs() {
        let copy = catalog.buy(cannery_row());

        assert!(catalog.checkout(&copy).is_ok(), "{}", name);
        assert!(!catalog.is_available(&copy), "{}", name);
        assert!(catalog.all_copies(&cannery_row()).contains(&copy), "{}", name);
        assert!(!catalog.available_copies(&cannery_row()).contains(&copy), "{}", name);

        assert!(catalog.checkin(&copy).is_ok(), "{}", name);
        assert!(catalog.is_available(&copy), "{}", name);
        assert!(catalog.available_copies(&cannery_row()).contains(&copy), "{}", name);
    }
}

#[test]
fn checkout_requires_available_copy() {
    for (name, mut catalog) in catalogs() {
        let copy = catalog.buy(cannery_row());
        catalog.checkout(&copy).unwrap();

        let result = catalog.checkout(&copy);
        assert!(matches!(result, Err(CatalogError::InvalidState(_))), "{}", name);

        // 실패한 연산은 상태를 바꾸지 않는다.
        assert!(!catalog.is_available(&copy), "{}", name);
        assert_eq!(catalog.all_copies(&cannery_row()).len(), 1, "{}", name);
    }
}

#[test]
fn checkin_requires_checked_out_copy() {
    for (name, mut catalog) in catalogs() {
        let copy = catalog.buy(cannery_row());

        let result = catalog.checkin(&copy);
        assert!(matches!(result, Err(CatalogError::InvalidState(_))), "{}", name);
        assert!(catalog.is_available(&copy), "{}", name);
    }
}

#[test]
fn lose_removes_copy_permanently() {
    for (name, mut catalog) in catalogs() {
        let copy = catalog.buy(cannery_row());
        catalog.lose(&copy).unwrap();

        assert!(!catalog.is_available(&copy), "{}", name);
        assert!(catalog.all_copies(&cannery_row()).is_empty(), "{}", name);
        assert!(matches!(catalog.checkout(&copy), Err(CatalogError::InvalidState(_))), "{}", name);
        assert!(matches!(catalog.lose(&copy), Err(CatalogError::InvalidState(_))), "{}", name);
    }
}

#[test]
fn lose_accepts_checked_out_copy() {
    for (name, mut catalog) in catalogs() {
        let copy = catalog.buy(cannery_row());
        catalog.checkout(&copy).unwrap();

        assert!(catalog.lose(&copy).is_ok(), "{}", name);
        assert!(catalog.all_copies(&cannery_row()).is_empty(), "{}", name);
        assert!(matches!(catalog.checkin(&copy), Err(CatalogError::InvalidState(_))), "{}", name);
    }
}

#[test]
fn foreign_copy_is_not_owned() {
    for (name, mut catalog) in catalogs() {
        catalog.buy(cannery_row());

        let mut other = SimpleCatalog::new();
        let foreign = other.buy(cannery_row());

        assert!(!catalog.is_available(&foreign), "{}", name);
        assert!(matches!(catalog.checkout(&foreign), Err(CatalogError::InvalidState(_))), "{}", name);
        assert!(matches!(catalog.lose(&foreign), Err(CatalogError::InvalidState(_))), "{}", name);
    }
}

#[test]
fn equal_book_values_share_copies() {
    for (name, mut catalog) in catalogs() {
        let first = cannery_row();
        let second = cannery_row();
        assert_eq!(first, second);

        catalog.buy(first.clone());
        catalog.buy(first.clone());

        assert_eq!(catalog.all_copies(&first), catalog.all_copies(&second), "{}", name);
        assert_eq!(catalog.available_copies(&first), catalog.available_copies(&second), "{}", name);
    }
}

#[test]
fn copies_of_same_book_are_distinct() {
    for (name, mut catalog) in catalogs() {
        let first = catalog.buy(cannery_row());
        let second = catalog.buy(cannery_row());

        assert_ne!(first, second, "{}", name);
        assert_eq!(catalog.all_copies(&cannery_row()).len(), 2, "{}", name);
    }
}

#[test]
fn find_matches_title_and_author() {
    for (name, mut catalog) in catalogs() {
        catalog.buy(cannery_row());

        assert_eq!(catalog.find("Cannery Row"), vec![cannery_row()], "{}", name);
        assert_eq!(catalog.find("John Steinbeck"), vec![cannery_row()], "{}", name);
        assert!(catalog.find("East of Eden").is_empty(), "{}", name);
    }
}

#[test]
fn find_includes_checked_out_books() {
    for (name, mut catalog) in catalogs() {
        let copy = catalog.buy(cannery_row());
        catalog.checkout(&copy).unwrap();

        assert_eq!(catalog.find("Cannery Row"), vec![cannery_row()], "{}", name);
    }
}

#[test]
fn full_loss_removes_book_and_rebuy_restores_it() {
    for (name, mut catalog) in catalogs() {
        let copy = catalog.buy(cannery_row());
        assert_eq!(catalog.find("Cannery Row"), vec![cannery_row()], "{}", name);

        catalog.lose(&copy).unwrap();
        assert!(catalog.find("Cannery Row").is_empty(), "{}", name);
        assert!(catalog.find("John Steinbeck").is_empty(), "{}", name);

        catalog.buy(cannery_row());
        assert_eq!(catalog.find("Cannery Row"), vec![cannery_row()], "{}", name);
    }
}

#[test]
fn losing_one_of_two_copies_keeps_book_findable() {
    for (name, mut catalog) in catalogs() {
        let first = catalog.buy(grapes_of_wrath());
        let second = catalog.buy(grapes_of_wrath());

        catalog.lose(&first).unwrap();
        assert_eq!(catalog.find("The Grapes of Wrath"), vec![grapes_of_wrath()], "{}", name);

        catalog.lose(&second).unwrap();
        assert!(catalog.find("The Grapes of Wrath").is_empty(), "{}", name);
    }
}

#[test]
fn find_orders_by_year_descending() {
    for (name, mut catalog) in catalogs() {
        let oldest = grapes_of_wrath();
        let older = book("East of Eden", &["John Steinbeck"], 1952);
        let newer = book("East of Eden", &["John Steinbeck"], 1970);

        catalog.buy(oldest.clone());
        catalog.buy(newer.clone());
        catalog.buy(older.clone());

        assert_eq!(
            catalog.find("John Steinbeck"),
            vec![newer.clone(), older.clone(), oldest.clone()],
            "{}",
            name
        );
    }
}

#[test]
fn find_breaks_year_ties_deterministically() {
    for (name, mut catalog) in catalogs() {
        let pearl = book("The Pearl", &["John Steinbeck"], 1947);
        let wayward = book("The Wayward Bus", &["John Steinbeck"], 1947);

        catalog.buy(wayward.clone());
        catalog.buy(pearl.clone());

        assert_eq!(catalog.find("John Steinbeck"), vec![pearl, wayward], "{}", name);
    }
}

#[test]
fn query_results_are_independent_copies() {
    for (name, mut catalog) in catalogs() {
        let copy = catalog.buy(cannery_row());

        let mut other = SimpleCatalog::new();
        let foreign = other.buy(cannery_row());

        // 반환 된 컬렉션을 수정해도 카탈로그의 상태는 변하지 않는다.
        let mut all = catalog.all_copies(&cannery_row());
        all.insert(foreign.clone());
        all.clear();

        let mut available = catalog.available_copies(&cannery_row());
        available.clear();

        let mut found = catalog.find("Cannery Row");
        found.clear();

        assert_eq!(catalog.all_copies(&cannery_row()).len(), 1, "{}", name);
        assert_eq!(catalog.available_copies(&cannery_row()).len(), 1, "{}", name);
        assert_eq!(catalog.find("Cannery Row"), vec![cannery_row()], "{}", name);
        assert!(catalog.is_available(&copy), "{}", name);
        assert!(!catalog.is_available(&foreign), "{}", name);
    }
}

#[test]
fn set_condition_is_reflected_in_later_snapshots() {
    for (name, mut catalog) in catalogs() {
        let copy = catalog.buy(cannery_row());
        assert_eq!(copy.condition(), Condition::Good, "{}", name);

        catalog.set_condition(&copy, Condition::Damaged).unwrap();

        let snapshot = catalog.all_copies(&cannery_row()).into_iter().next().unwrap();
        assert_eq!(snapshot.condition(), Condition::Damaged, "{}", name);
    }
}

#[test]
fn set_condition_requires_ownership() {
    for (name, mut catalog) in catalogs() {
        let copy = catalog.buy(cannery_row());
        catalog.lose(&copy).unwrap();

        let result = catalog.set_condition(&copy, Condition::Damaged);
        assert!(matches!(result, Err(CatalogError::InvalidState(_))), "{}", name);
    }
}

#[test]
fn book_builder_rejects_invalid_fields() {
    let blank_title = Book::builder()
        .title("   ".to_owned())
        .author("John Steinbeck".to_owned())
        .year(1945)
        .build();
    assert!(matches!(blank_title, Err(CatalogError::InvalidArgument(_))));

    let missing_title = Book::builder().author("John Steinbeck".to_owned()).year(1945).build();
    assert!(matches!(missing_title, Err(CatalogError::RequireArgumentMissing(_))));

    let no_authors = Book::builder().title("Cannery Row".to_owned()).year(1945).build();
    assert!(matches!(no_authors, Err(CatalogError::RequireArgumentMissing(_))));

    let blank_author = Book::builder()
        .title("Cannery Row".to_owned())
        .author(" ".to_owned())
        .year(1945)
        .build();
    assert!(matches!(blank_author, Err(CatalogError::InvalidArgument(_))));

    let negative_year = Book::builder()
        .title("Cannery Row".to_owned())
        .author("John Steinbeck".to_owned())
        .year(-1)
        .build();
    assert!(matches!(negative_year, Err(CatalogError::InvalidArgument(_))));
}

#[test]
fn book_authors_accessor_returns_independent_copy() {
    let book = cannery_row();

    let mut authors = book.authors();
    authors.push("Edward Ricketts".to_owned());

    assert_eq!(book.authors(), vec!["John Steinbeck".to_owned()]);
}

#[test]
fn book_equality_is_structural() {
    assert_eq!(cannery_row(), cannery_row());
    assert_ne!(cannery_row(), grapes_of_wrath());

    // 저자 순서와 대소문자도 식별에 포함 된다.
    let ab = book("Anthology", &["A", "B"], 2000);
    let ba = book("Anthology", &["B", "A"], 2000);
    assert_ne!(ab, ba);
    assert_ne!(book("Anthology", &["a", "b"], 2000), ab);
}

#[test]
fn display_formats() {
    let mut catalog = SimpleCatalog::new();
    let copy = catalog.buy(cannery_row());

    assert_eq!(cannery_row().to_string(), "Cannery Row (1945) by John Steinbeck");
    assert_eq!(copy.to_string(), "Cannery Row (1945) by John Steinbeck in good condition");

    let multi = book("Good Omens", &["Terry Pratchett", "Neil Gaiman"], 1990);
    assert_eq!(multi.to_string(), "Good Omens (1990) by Terry Pratchett, Neil Gaiman");
}
