// Copyright 2024 ndbroadcast developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::process;

use ndbroadcast::{add, array, Array, Axis, ShapeError};

fn run() -> Result<Array<i64>, ShapeError> {
    // shape (5, 1)
    let a = array![1, 2, 3, 4, 5].insert_axis(Axis(1));
    // shape (1, 6)
    let b = array![[1, 2, 3, 4, 5, 6]];
    // shape (6,)
    let c = array![1, 2, 3, 4, 5, 6];

    add(&add(&a, &b)?, &c)
}

fn main() {
    match run() {
        Ok(sum) => println!("{}", sum),
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}
