use crate::catalog::{sort_books, Book, BookCopy, Catalog, CatalogError, Condition, CopyId};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// 색인 없는 소규모 카탈로그
///
/// 개인 서재 정도의 작은 컬렉션을 가정한 구현으로 대출 가능한 사본과
/// 대출 중인 사본을 두 맵으로 나누어 보관하며 조회는 전체 순회로 한다.
///
/// 두 맵은 항상 서로소임으로 하나의 사본은 동시에 두 상태일 수 없다.
#[derive(Debug)]
pub struct SimpleCatalog {
    in_library: HashMap<CopyId, BookCopy>,
    checked_out: HashMap<CopyId, BookCopy>,
}

impl SimpleCatalog {
    pub fn new() -> Self {
        Self {
            in_library: HashMap::new(),
            checked_out: HashMap::new(),
        }
    }
}

impl Default for SimpleCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog for SimpleCatalog {
    fn buy(&mut self, book: Book) -> BookCopy {
        let copy = BookCopy::new(book);
        debug!("도서 사본을 구매 했습니다. (사본 아이디: {})", copy.id());

        self.in_library.insert(copy.id(), copy.clone());
        copy
    }

    fn checkout(&mut self, copy: &BookCopy) -> Result<(), CatalogError> {
        match self.in_library.remove(&copy.id()) {
            Some(owned) => {
                debug!("도서 사본을 대출 처리 합니다. (사본 아이디: {})", owned.id());
                self.checked_out.insert(owned.id(), owned);
                Ok(())
            }
            None => Err(CatalogError::InvalidState(format!(
                "대출 가능한 사본이 아닙니다. (사본 아이디: {})",
                copy.id()
            ))),
        }
    }

    fn checkin(&mut self, copy: &BookCopy) -> Result<(), CatalogError> {
        match self.checked_out.remove(&copy.id()) {
            Some(owned) => {
                debug!("도서 사본을 반납 처리 합니다. (사본 아이디: {})", owned.id());
                self.in_library.insert(owned.id(), owned);
                Ok(())
            }
            None => Err(CatalogError::InvalidState(format!(
                "대출 중인 사본이 아닙니다. (사본 아이디: {})",
                copy.id()
            ))),
        }
    }

    fn lose(&mut self, copy: &BookCopy) -> Result<(), CatalogError> {
        let removed = self
            .in_library
            .remove(&copy.id())
            .or_else(|| self.checked_out.remove(&copy.id()));

        match removed {
            Some(owned) => {
                debug!("도서 사본을 분실 처리 합니다. (사본 아이디: {})", owned.id());
                Ok(())
            }
            None => Err(CatalogError::InvalidState(format!(
                "이 카탈로그가 소유한 사본이 아닙니다. (사본 아이디: {})",
                copy.id()
            ))),
        }
    }

    fn set_condition(&mut self, copy: &BookCopy, condition: Condition) -> Result<(), CatalogError> {
        let owned = self
            .in_library
            .get_mut(&copy.id())
            .or_else(|| self.checked_out.get_mut(&copy.id()));

        match owned {
            Some(owned) => {
                owned.set_condition(condition);
                Ok(())
            }
            None => Err(CatalogError::InvalidState(format!(
                "이 카탈로그가 소유한 사본이 아닙니다. (사본 아이디: {})",
                copy.id()
            ))),
        }
    }

    fn is_available(&self, copy: &BookCopy) -> bool {
        self.in_library.contains_key(&copy.id())
    }

    fn all_copies(&self, book: &Book) -> HashSet<BookCopy> {
        self.in_library
            .values()
            .chain(self.checked_out.values())
            .filter(|copy| copy.book() == book)
            .cloned()
            .collect()
    }

    fn available_copies(&self, book: &Book) -> HashSet<BookCopy> {
        self.in_library
            .values()
            .filter(|copy| copy.book() == book)
            .cloned()
            .collect()
    }

    fn find(&self, query: &str) -> Vec<Book> {
        let matched: HashSet<&Book> = self
            .in_library
            .values()
            .chain(self.checked_out.values())
            .map(|copy| copy.book())
            .filter(|book| book.title() == query || book.authors().iter().any(|a| a == query))
            .collect();

        let mut result: Vec<Book> = matched.into_iter().cloned().collect();
        sort_books(&mut result);
        result
    }
}
