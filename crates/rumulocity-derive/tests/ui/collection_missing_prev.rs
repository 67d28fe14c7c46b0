#![allow(dead_code)]

use rumulocity_derive::Collection;

#[derive(Collection)]
struct AuditPage {
    next: Option<String>,
    #[jsonc(collection)]
    records: Vec<String>,
}

fn main() {}
