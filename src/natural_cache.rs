use lazy_static::*;

use crate::natural::Natural;
use crate::natural_constants::*;

lazy_static! {
    pub static ref SMALL_CACHE: [Natural; MAX_CONSTANT + 1] = [
        Natural::from_raw(vec![    ]),
        Natural::from_raw(vec![1   ]),
        Natural::from_raw(vec![2   ]),
        Natural::from_raw(vec![3   ]),
        Natural::from_raw(vec![4   ]),
        Natural::from_raw(vec![5   ]),
        Natural::from_raw(vec![6   ]),
        Natural::from_raw(vec![7   ]),
        Natural::from_raw(vec![8   ]),
        Natural::from_raw(vec![9   ]),
        Natural::from_raw(vec![0, 1]),
        Natural::from_raw(vec![1, 1]),
        Natural::from_raw(vec![2, 1]),
        Natural::from_raw(vec![3, 1]),
        Natural::from_raw(vec![4, 1]),
        Natural::from_raw(vec![5, 1]),
        Natural::from_raw(vec![6, 1]),
    ];
}
