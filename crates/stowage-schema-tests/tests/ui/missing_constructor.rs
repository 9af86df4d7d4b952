use stowage::prelude::*;

#[derive(Debug, Object)]
pub struct Gauge {
    #[persisted(primary_key)]
    pub id: i64,
}

fn main() {}
