use book_catalog_rust::catalog::{Book, Catalog, Condition};
use book_catalog_rust::{config, new_catalog, Argument};
use std::env;
use tracing::info;

fn main() {
    config::load_dotenv();

    let app_config = config::load_config()
        .unwrap_or_else(|_| panic!("Cannot loading config"));
    config::log::set_global_logging_config(app_config.logger());

    let args: Vec<String> = env::args().collect();
    let argument = Argument::new(&args)
        .unwrap_or_else(|e| panic!("Invalid arguments: {}", e));

    info!("{:?} 카탈로그로 데모를 시작 합니다.", argument.kind);
    let mut catalog = new_catalog(argument.kind);
    seed_demo_collection(catalog.as_mut());

    let query = argument.query.unwrap_or_else(|| "John Steinbeck".to_owned());
    info!("검색어: {}", query);

    for book in catalog.find(&query) {
        let available = catalog.available_copies(&book).len();
        let total = catalog.all_copies(&book).len();
        println!("{} ({}/{} available)", book, available, total);
    }
}

/// 데모 시나리오 구매, 대출, 반납, 검수, 분실을 한번씩 수행한다.
fn seed_demo_collection(catalog: &mut dyn Catalog) {
    let cannery_row = demo_book("Cannery Row", 1945);
    let grapes_of_wrath = demo_book("The Grapes of Wrath", 1939);
    let east_of_eden = demo_book("East of Eden", 1952);

    catalog.buy(cannery_row.clone());
    let first_grapes = catalog.buy(grapes_of_wrath.clone());
    let second_grapes = catalog.buy(grapes_of_wrath);
    let eden_copy = catalog.buy(east_of_eden);

    catalog.checkout(&first_grapes).expect("Failed to checkout copy");

    catalog.checkin(&first_grapes).expect("Failed to checkin copy");
    catalog.set_condition(&first_grapes, Condition::Damaged).expect("Failed to set condition");

    catalog.lose(&second_grapes).expect("Failed to lose copy");

    catalog.checkout(&eden_copy).expect("Failed to checkout copy");
}

fn demo_book(title: &str, year: i32) -> Book {
    Book::builder()
        .title(title.to_owned())
        .author("John Steinbeck".to_owned())
        .year(year)
        .build()
        .expect("Failed to build demo book")
}
