use skipset::{
    SkipList,
    SkipListError,
};

fn main() -> Result<(), SkipListError> {
    let mut list = SkipList::new(10)?;

    for key in [3, 6, 7, 9, 12, 19, 17] {
        if list.insert(key) {
            println!("Successfully inserted key {}", key);
        }
    }

    println!("\n*****Skip List*****");
    print!("{}", list);

    if list.search(6) {
        println!("Found key: 6");
    } else {
        println!("Key not found: 6");
    }

    if list.delete(6) {
        println!("Successfully deleted key 6");
    }

    println!("\n*****Skip List*****");
    print!("{}", list);

    Ok(())
}
