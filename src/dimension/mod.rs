// Copyright 2024 ndbroadcast developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

pub use self::axis::Axis;
pub use self::broadcast::{align_ranks, broadcast_shape};
pub(crate) use self::broadcast::co_broadcast;
pub use self::conversion::IntoDimension;
pub use self::dim::Dim;

mod axis;
mod broadcast;
mod conversion;
mod dim;
