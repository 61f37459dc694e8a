//! Basic example walking through cursors and list algorithms.

use forward_list::ForwardList;

fn main() -> anyhow::Result<()> {
    let mut list = ForwardList::from([2, 9, 6, 10]);

    // Cursors survive insertions around them
    let six = list.cursor_at(2)?;
    list.insert(six, 5);
    println!("after insert: {:?} (cursor still at {:?})", list, list.get(six));

    // Erase returns the successor
    let next = list.erase(list.begin());
    println!("after erase: {:?} (next is {:?})", list, list.get(next));

    list.extend([1, 2, 1, 3, 3]);
    list.unique();
    println!("adjacent duplicates collapsed: {:?}", list);

    list.sort();
    list.unique();
    println!("sorted and deduplicated: {:?}", list);

    list.sort_by(|a, b| b.cmp(a));
    println!("descending: {:?}", list);

    println!("arena: {}", list.alloc_stats().report());
    Ok(())
}
