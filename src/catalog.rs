use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

pub mod indexed;
pub mod simple;

#[cfg(test)]
mod tests;

/// Catalog 모듈에서 사용할 에러 열거
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// 필수 데이터가 입력 되지 않음
    RequireArgumentMissing(String),

    /// 유효하지 않은 데이터가 입력 됨
    InvalidArgument(String),

    /// 사본의 상태가 연산의 사전 조건을 만족하지 않음
    InvalidState(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for CatalogError {}

/// 도서 사본 아이디 시퀀스
///
/// 프로세스 전체에서 공유하며 한번 발급된 아이디는 재발급 되지 않는다.
static COPY_ID_SEQ: AtomicU64 = AtomicU64::new(1);

/// 도서 사본 식별자
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct CopyId(u64);

impl CopyId {
    fn next() -> Self {
        CopyId(COPY_ID_SEQ.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl Display for CopyId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 도서
///
/// 물리적인 사본이 아닌 (제목, 저자 목록, 출판 연도)로 식별 되는 판본을 표현하며
/// 같은 필드를 가지는 두 [`Book`]은 카탈로그의 모든 연산에서 같은 도서로 취급 된다.
///
/// # Example
/// ```
/// use book_catalog_rust::catalog::Book;
///
/// let book = Book::builder()
///     .title("Cannery Row".to_owned())
///     .author("John Steinbeck".to_owned())
///     .year(1945)
///     .build()
///     .unwrap();
///
/// assert_eq!(book.title(), "Cannery Row");
/// assert_eq!(book.authors(), vec!["John Steinbeck".to_owned()]);
/// assert_eq!(book.year(), 1945);
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Book {
    title: String,
    authors: Vec<String>,
    year: i32,
}

impl Book {
    pub fn builder() -> BookBuilder {
        BookBuilder::new()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// 저자 목록의 독립적인 복사본을 반환한다.
    /// 반환된 목록을 수정해도 이 도서의 저자 목록은 변하지 않는다.
    pub fn authors(&self) -> Vec<String> {
        self.authors.to_vec()
    }

    pub fn year(&self) -> i32 {
        self.year
    }
}

impl AsRef<Book> for Book {
    fn as_ref(&self) -> &Book {
        self
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) by {}", self.title, self.year, self.authors.join(", "))
    }
}

/// Book 빌더
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookBuilder {
    title: Option<String>,
    authors: Vec<String>,
    year: Option<i32>,
}

impl BookBuilder {
    pub fn new() -> Self {
        Self {
            title: None,
            authors: Vec::new(),
            year: None,
        }
    }

    pub fn title(mut self, title: String) -> Self {
        self.title = Some(title);
        self
    }

    pub fn author(mut self, author: String) -> Self {
        self.authors.push(author);
        self
    }

    pub fn authors(mut self, authors: Vec<String>) -> Self {
        self.authors = authors;
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// 도서를 생성한다.
    ///
    /// 제목은 공백 이외의 문자를 하나 이상 포함해야 하며 저자 목록은 비어 있을 수 없고
    /// 각 저자 또한 공백 이외의 문자를 하나 이상 포함해야 한다. 출판 연도는 음수일 수 없다.
    pub fn build(self) -> Result<Book, CatalogError> {
        let title = self.title.ok_or(CatalogError::RequireArgumentMissing("title".to_owned()))?;
        if !has_visible_char(&title) {
            return Err(CatalogError::InvalidArgument("title".to_owned()));
        }

        if self.authors.is_empty() {
            return Err(CatalogError::RequireArgumentMissing("authors".to_owned()));
        }
        if !self.authors.iter().all(|author| has_visible_char(author)) {
            return Err(CatalogError::InvalidArgument("authors".to_owned()));
        }

        let year = self.year.ok_or(CatalogError::RequireArgumentMissing("year".to_owned()))?;
        if year < 0 {
            return Err(CatalogError::InvalidArgument("year".to_owned()));
        }

        Ok(Book {
            title,
            authors: self.authors,
            year,
        })
    }
}

impl Default for BookBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn has_visible_char(s: &str) -> bool {
    s.chars().any(|c| c != ' ')
}

/// 도서 사본의 보존 상태
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Condition {
    Good,
    Damaged,
}

impl Display for Condition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Good => write!(f, "good"),
            Condition::Damaged => write!(f, "damaged"),
        }
    }
}

/// 도서 사본의 대출 상태
///
/// 카탈로그가 소유한 사본은 항상 두 상태 중 정확히 하나에 속하며
/// 분실([`Catalog::lose`]) 처리된 사본은 카탈로그에서 영구히 제거 된다.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum CopyStatus {
    Available,
    CheckedOut,
}

/// 도서 사본
///
/// 같은 도서의 사본이라도 각 사본은 서로 다른 물리적 실체임으로
/// 동등성 비교는 필드 값이 아닌 사본 아이디로만 한다.
#[derive(Debug, Clone)]
pub struct BookCopy {
    id: CopyId,
    book: Book,
    condition: Condition,
}

impl BookCopy {
    fn new(book: Book) -> Self {
        Self {
            id: CopyId::next(),
            book,
            condition: Condition::Good,
        }
    }

    pub fn id(&self) -> CopyId {
        self.id
    }

    pub fn book(&self) -> &Book {
        &self.book
    }

    pub fn condition(&self) -> Condition {
        self.condition
    }

    fn set_condition(&mut self, condition: Condition) {
        self.condition = condition;
    }
}

impl PartialEq for BookCopy {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for BookCopy {}

impl std::hash::Hash for BookCopy {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for BookCopy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} in {} condition", self.book, self.condition)
    }
}

pub type SharedCatalog = Rc<RefCell<Box<dyn Catalog>>>;

/// 도서 카탈로그
///
/// 도서관이 소유한 도서 사본들과 각 사본의 대출 상태를 관리한다.
/// 조회 연산들은 모두 내부 상태의 독립적인 복사본을 반환함으로
/// 반환된 컬렉션을 수정해도 카탈로그의 상태는 변하지 않는다.
///
/// 멀티 스레드 환경에서 사용할 경우 호출자가 카탈로그 단위의 락으로
/// 변경 연산들을 직렬화해야 한다.
///
/// # Example
/// ```
/// use book_catalog_rust::catalog::{Book, Catalog};
/// use book_catalog_rust::catalog::simple::SimpleCatalog;
///
/// let book = Book::builder()
///     .title("Cannery Row".to_owned())
///     .author("John Steinbeck".to_owned())
///     .year(1945)
///     .build()
///     .unwrap();
///
/// let mut catalog = SimpleCatalog::new();
/// let copy = catalog.buy(book.clone());
/// assert!(catalog.is_available(&copy));
///
/// catalog.checkout(&copy).unwrap();
/// assert!(!catalog.is_available(&copy));
/// assert_eq!(catalog.all_copies(&book).len(), 1);
/// ```
pub trait Catalog {
    /// 전달 받은 도서의 새 사본을 구매한다.
    /// 새 사본은 좋은 상태([`Condition::Good`])로 생성 되어 즉시 대출 가능 상태가 된다.
    fn buy(&mut self, book: Book) -> BookCopy;

    /// 사본을 대출 처리한다.
    /// 사본이 이 카탈로그의 소유가 아니거나 대출 가능 상태가 아닐 경우
    /// [`CatalogError::InvalidState`]를 반환한다.
    fn checkout(&mut self, copy: &BookCopy) -> Result<(), CatalogError>;

    /// 대출 중인 사본을 반납 처리하여 다시 대출 가능 상태로 만든다.
    /// 사본이 이 카탈로그의 소유가 아니거나 대출 중이 아닐 경우
    /// [`CatalogError::InvalidState`]를 반환한다.
    fn checkin(&mut self, copy: &BookCopy) -> Result<(), CatalogError>;

    /// 사본을 분실 처리하여 카탈로그의 모든 기록에서 영구히 제거한다.
    /// 대출 가능, 대출 중 어느 상태에서도 분실 처리할 수 있으며
    /// 이미 분실 처리 되었거나 소유하지 않은 사본일 경우
    /// [`CatalogError::InvalidState`]를 반환한다.
    fn lose(&mut self, copy: &BookCopy) -> Result<(), CatalogError>;

    /// 사본의 보존 상태를 변경한다. 주로 반납 된 사본을 사서가 검수할 때 사용한다.
    /// 소유하지 않은 사본일 경우 [`CatalogError::InvalidState`]를 반환한다.
    fn set_condition(&mut self, copy: &BookCopy, condition: Condition) -> Result<(), CatalogError>;

    /// 사본이 이 카탈로그에서 대출 가능 상태인지 확인한다.
    fn is_available(&self, copy: &BookCopy) -> bool;

    /// 전달 받은 도서와 값이 같은 도서의 모든 사본을 반환한다. (대출 중인 사본 포함)
    fn all_copies(&self, book: &Book) -> HashSet<BookCopy>;

    /// 전달 받은 도서와 값이 같은 도서의 대출 가능한 사본만 반환한다.
    fn available_copies(&self, book: &Book) -> HashSet<BookCopy>;

    /// 제목 혹은 저자가 검색어와 일치하는 도서들을 검색한다.
    ///
    /// 사본을 하나 이상 소유한 도서만 결과에 포함 되며 도서는 값 기준으로 중복 제거 된다.
    /// 결과는 출판 연도 내림차순으로 정렬 되고 연도가 같을 경우 제목, 저자 순으로 정렬 된다.
    fn find(&self, query: &str) -> Vec<Book>;
}

/// 검색 결과를 출판 연도 내림차순으로 정렬한다.
/// 연도가 같은 도서들은 제목, 저자 목록 순으로 정렬하여 결과가 항상 결정적이도록 한다.
pub(crate) fn sort_books(books: &mut [Book]) {
    books.sort_by(|a, b| {
        b.year()
            .cmp(&a.year())
            .then_with(|| a.title().cmp(b.title()))
            .then_with(|| a.authors.cmp(&b.authors))
    });
}
