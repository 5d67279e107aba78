// Example: build, update, and query a Fenwick tree.
use fenwick::FenwickTree;

fn main() -> Result<(), fenwick::FenwickError> {
    let mut t = FenwickTree::new(5);
    t.build(&[0, 1, 3, -2, 5, 4])?;
    println!("query(3)={}", t.query(3)?);
    println!("query_range(2, 4)={}", t.query_range(2, 4)?);

    t.update(3, 3)?;
    println!("after update(3, 3): query_range(2, 4)={}", t.query_range(2, 4)?);

    // "Set" is an update by the difference from the current value.
    let current = t.point(5)?;
    t.update(5, 10 - current)?;
    println!("values={:?} total={}", t.values(), t.total());

    if let Err(e) = t.update(6, 1) {
        println!("rejected: {e}");
    }
    Ok(())
}
