// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cadence_functional::{
    add, double_all, flatten_json, is_type, is_type_named, sum_from, unique, TypeTag,
};
use serde_json::json;

pub fn run() -> anyhow::Result<()> {
    println!("-- higher-order functions");
    println!("{:?}", double_all(&[1, 2, 3, 4]));
    println!("{:?}", unique(&[1, 2, 1, 2, 3, 5, 4, 5, 3, 4, 4, 4, 4]));
    println!("{}", sum_from(&[1, 2, 3, 4, 5], 10));

    println!("{}", is_type(TypeTag::String)(&json!("123")));
    println!("{}", is_type_named("Array")?(&json!([1, 2, 3])));
    println!("{}", is_type_named("Number")?(&json!(5)));

    println!("{}", add(1));
    println!("{}", add(1).add(2));
    println!("{}", add(1).add(2).add(3));
    println!("{}", add(1).add(2).add(3).add(4));

    let sum = add(5);
    sum.add(1);
    sum.add(-10);
    println!("{sum}");

    let nested = json!([[1, 2, 2], [3, 4, 5, 5], [6, 7, 8, 9, [11, 12, [12, 13, [14]]]], 10]);
    println!("{}", json!(flatten_json(&nested)));

    Ok(())
}
