use stowage::prelude::*;

#[derive(Debug, Default, Object)]
pub struct Account {
    #[persisted(primary_key)]
    pub id: i64,
}

#[derive(Debug, Default, Object)]
#[object(kind = "asymmetric")]
pub struct Visit {
    #[persisted(primary_key)]
    pub id: i64,
    pub account: Option<Account>,
}

fn main() {}
