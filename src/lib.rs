use crate::catalog::indexed::IndexedCatalog;
use crate::catalog::simple::SimpleCatalog;
use crate::catalog::Catalog;
use std::fmt;
use std::fmt::Formatter;

pub mod catalog;
pub mod config;

#[derive(Debug)]
pub enum ArgumentError {
    InvalidArgument(String),
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// 사용할 카탈로그 구현체 열거
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CatalogKind {
    Simple,
    Indexed,
}

impl CatalogKind {
    pub fn from_str(s: &str) -> Result<Self, ArgumentError> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(CatalogKind::Simple),
            "indexed" => Ok(CatalogKind::Indexed),
            _ => Err(ArgumentError::InvalidArgument(format!("Invalid catalog kind: {}", s))),
        }
    }
}

pub struct Argument {
    pub kind: CatalogKind,
    pub query: Option<String>,
}

impl Argument {
    pub fn new(arguments: &[String]) -> Result<Self, ArgumentError> {
        let kind = match arguments.get(1) {
            Some(raw) => CatalogKind::from_str(raw)?,
            None => CatalogKind::Simple,
        };

        Ok(Self {
            kind,
            query: arguments.get(2).cloned(),
        })
    }
}

/// 전달 받은 종류의 카탈로그를 생성한다.
/// 모든 구현체는 [`Catalog`] 계약을 동일하게 만족함으로 호출자는 구현체에 의존해서는 안 된다.
pub fn new_catalog(kind: CatalogKind) -> Box<dyn Catalog> {
    match kind {
        CatalogKind::Simple => Box::new(SimpleCatalog::new()),
        CatalogKind::Indexed => Box::new(IndexedCatalog::new()),
    }
}
