//! Category Report
//!
//! Prints, for every access × traversal pair, the legacy label and the
//! operations a facade over such a cursor provides.

use cursor_caps::prelude::*;
use cursor_caps::Operation;

fn main() {
    println!("=== Facade surface by category ===\n");

    for traversal in Traversal::ALL {
        for access in Access::ALL {
            let category = Category::new(access, traversal);
            let surface: Vec<String> = category.surface().map(|op| op.to_string()).collect();
            println!("{:<32} [{}]", category.to_string(), category.legacy());
            println!("    {}", surface.join("  "));
        }
        println!();
    }

    println!("=== Reconciling categories ===\n");

    let pairs = [
        (
            Category::new(Access::MutableLvalue, Traversal::RandomAccess),
            Category::new(Access::Readable, Traversal::Forward),
        ),
        (
            Category::new(Access::Swappable, Traversal::Bidirectional),
            Category::new(Access::ConstantLvalue, Traversal::Bidirectional),
        ),
    ];
    for (a, b) in pairs {
        match a.meet(b) {
            Ok(m) => println!("meet({}, {}) = {}", a, b, m),
            Err(e) => println!("error: {}", e),
        }
    }

    let forward = Category::new(Access::ConstantLvalue, Traversal::Forward);
    if let Err(e) = forward.require(Operation::Subscript) {
        println!("error: {}", e);
    }
}
