#![allow(dead_code)]

use rumulocity_derive::JsonObject;

#[derive(JsonObject)]
#[jsonc(rename_all = "lowercase")]
struct Measurement {
    value: f64,
}

fn main() {}
