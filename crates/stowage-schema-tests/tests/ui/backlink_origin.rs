use stowage::prelude::*;

#[derive(Debug, Default, Object)]
pub struct Shelf {
    #[persisted(primary_key)]
    pub id: i64,
    pub books: Vec<Book>,
}

#[derive(Debug, Default, Object)]
pub struct Book {
    #[persisted(primary_key)]
    pub id: i64,
    #[persisted(backlink = "shelf")]
    pub shelves: Backlinks<Shelf>,
}

fn main() {}
