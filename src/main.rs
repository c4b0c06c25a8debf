//! Sorted List - Binary Entry Point
//!
//! Walks through the list operations on small sample data and prints
//! the results, as a quick check that the crate builds and behaves.

use sorted_list::{ListError, OrderedList};

fn main() {
    println!("===========================================");
    println!("  Sorted List");
    println!("===========================================");
    println!();

    println!("Inserting 5, 3, 10, 1, 2...");
    let mut numbers: OrderedList<u64> = OrderedList::new();
    for value in [5u64, 3, 10, 1, 2] {
        if let Err(e) = numbers.insert(value) {
            println!("  ERROR: Failed to insert {}: {}", value, e);
        }
    }
    println!("  Sorted: {:?}", numbers);
    println!("  Front: {:?}  Back: {:?}", numbers.peek_front(), numbers.peek_back());
    println!();

    println!("Sub-range (2, 4)...");
    match numbers.subrange(2, 4) {
        Ok(sub) => println!("  Sub-range: {:?} (source still {:?})", sub, numbers),
        Err(e) => println!("  ERROR: {}", e),
    }
    println!();

    println!("Cursor walk with a direct insert in between...");
    let mut cursor = numbers.cursor();
    if let Ok(value) = cursor.next(&numbers) {
        println!("  First value: {}", value);
    }
    if numbers.insert(4u64).is_ok() {
        match cursor.next(&numbers) {
            Err(ListError::ConcurrentModification { expected, actual }) => {
                println!("  Detected modification (expected {}, found {})", expected, actual);
            }
            other => println!("  Unexpected cursor result: {:?}", other),
        }
    }
    println!();

    println!("Computing sequence root...");
    match numbers.state_root() {
        Ok(root) => println!("  Root: {}", root),
        Err(e) => println!("  ERROR: Failed to compute root: {}", e),
    }
    println!();

    println!("Words...");
    let words: OrderedList<&str> = ["Sorted", "Linked", "List", "Test", "Items"]
        .into_iter()
        .collect();
    println!("  Sorted: {:?}", words);
    println!();

    println!("Run 'cargo test' to verify all tests pass.");
}
