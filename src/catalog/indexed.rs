use crate::catalog::{
    sort_books, Book, BookCopy, Catalog, CatalogError, Condition, CopyId, CopyStatus,
};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// 카탈로그가 소유한 사본 한 권의 기록
#[derive(Debug)]
struct CopyRecord {
    copy: BookCopy,
    status: CopyStatus,
}

/// 보조 색인을 가진 대규모 카탈로그
///
/// 도시, 대학 도서관 규모의 컬렉션을 가정한 구현으로 전체 순회 없이
/// 조회할 수 있도록 도서 별 사본 색인과 검색어(제목, 저자) 색인을 유지한다.
///
/// 검색어 색인에는 사본을 하나 이상 소유한 도서만 남는다.
/// 마지막 사본이 분실 처리 되면 해당 도서는 색인에서 함께 제거 된다.
#[derive(Debug)]
pub struct IndexedCatalog {
    copies: HashMap<CopyId, CopyRecord>,
    by_book: HashMap<Book, HashSet<CopyId>>,
    keyword_index: HashMap<String, HashSet<Book>>,
}

impl IndexedCatalog {
    pub fn new() -> Self {
        Self {
            copies: HashMap::new(),
            by_book: HashMap::new(),
            keyword_index: HashMap::new(),
        }
    }

    fn keywords(book: &Book) -> Vec<String> {
        let mut keywords = book.authors();
        keywords.push(book.title().to_owned());
        keywords
    }

    fn index_book(&mut self, book: &Book) {
        for keyword in Self::keywords(book) {
            self.keyword_index
                .entry(keyword)
                .or_insert_with(HashSet::new)
                .insert(book.clone());
        }
    }

    fn deindex_book(&mut self, book: &Book) {
        for keyword in Self::keywords(book) {
            if let Some(books) = self.keyword_index.get_mut(&keyword) {
                books.remove(book);
                if books.is_empty() {
                    self.keyword_index.remove(&keyword);
                }
            }
        }
    }

    fn not_owned(copy: &BookCopy) -> CatalogError {
        CatalogError::InvalidState(format!(
            "이 카탈로그가 소유한 사본이 아닙니다. (사본 아이디: {})",
            copy.id()
        ))
    }
}

impl Default for IndexedCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog for IndexedCatalog {
    fn buy(&mut self, book: Book) -> BookCopy {
        let copy = BookCopy::new(book.clone());
        debug!("도서 사본을 구매 했습니다. (사본 아이디: {})", copy.id());

        self.by_book
            .entry(book.clone())
            .or_insert_with(HashSet::new)
            .insert(copy.id());
        self.index_book(&book);

        self.copies.insert(
            copy.id(),
            CopyRecord {
                copy: copy.clone(),
                status: CopyStatus::Available,
            },
        );
        copy
    }

    fn checkout(&mut self, copy: &BookCopy) -> Result<(), CatalogError> {
        match self.copies.get_mut(&copy.id()) {
            Some(record) if record.status == CopyStatus::Available => {
                debug!("도서 사본을 대출 처리 합니다. (사본 아이디: {})", copy.id());
                record.status = CopyStatus::CheckedOut;
                Ok(())
            }
            _ => Err(CatalogError::InvalidState(format!(
                "대출 가능한 사본이 아닙니다. (사본 아이디: {})",
                copy.id()
            ))),
        }
    }

    fn checkin(&mut self, copy: &BookCopy) -> Result<(), CatalogError> {
        match self.copies.get_mut(&copy.id()) {
            Some(record) if record.status == CopyStatus::CheckedOut => {
                debug!("도서 사본을 반납 처리 합니다. (사본 아이디: {})", copy.id());
                record.status = CopyStatus::Available;
                Ok(())
            }
            _ => Err(CatalogError::InvalidState(format!(
                "대출 중인 사본이 아닙니다. (사본 아이디: {})",
                copy.id()
            ))),
        }
    }

    fn lose(&mut self, copy: &BookCopy) -> Result<(), CatalogError> {
        let record = self.copies.remove(&copy.id()).ok_or_else(|| Self::not_owned(copy))?;
        debug!("도서 사본을 분실 처리 합니다. (사본 아이디: {})", copy.id());

        let book = record.copy.book().clone();
        if let Some(ids) = self.by_book.get_mut(&book) {
            ids.remove(&copy.id());
            if ids.is_empty() {
                self.by_book.remove(&book);
                self.deindex_book(&book);
            }
        }
        Ok(())
    }

    fn set_condition(&mut self, copy: &BookCopy, condition: Condition) -> Result<(), CatalogError> {
        match self.copies.get_mut(&copy.id()) {
            Some(record) => {
                record.copy.set_condition(condition);
                Ok(())
            }
            None => Err(Self::not_owned(copy)),
        }
    }

    fn is_available(&self, copy: &BookCopy) -> bool {
        self.copies
            .get(&copy.id())
            .map(|record| record.status == CopyStatus::Available)
            .unwrap_or(false)
    }

    fn all_copies(&self, book: &Book) -> HashSet<BookCopy> {
        self.by_book
            .get(book)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.copies.get(id))
                    .map(|record| record.copy.clone())
                    .collect()
            })
            .unwrap_or_else(HashSet::new)
    }

    fn available_copies(&self, book: &Book) -> HashSet<BookCopy> {
        self.by_book
            .get(book)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.copies.get(id))
                    .filter(|record| record.status == CopyStatus::Available)
                    .map(|record| record.copy.clone())
                    .collect()
            })
            .unwrap_or_else(HashSet::new)
    }

    fn find(&self, query: &str) -> Vec<Book> {
        let mut result: Vec<Book> = self
            .keyword_index
            .get(query)
            .map(|books| books.iter().cloned().collect())
            .unwrap_or_else(Vec::new);

        sort_books(&mut result);
        result
    }
}
