//! Print every physical constant in the crate as a labeled, grouped block.

use qdgrid::consts;

fn main() {
    println!("{}", consts::summary());
}
