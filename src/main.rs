use trifold::container::Trifold;

fn main() {
    let mut list = Trifold::new();
    for value in [17, 2, 25, 9, 3] {
        list.insert(value);
    }

    println!("elements:   {:?}", list.elements());
    println!("len:        {}", list.len());

    let ascending: Vec<i64> = list.ascending().collect();
    println!("ascending:  {:?}", ascending);

    let cross: Vec<i64> = list.side_cross().collect();
    println!("side-cross: {:?}", cross);

    let primes: Vec<i64> = list.primes().collect();
    println!("primes:     {:?}", primes);

    list.remove(25).expect("25 is present");
    println!("\nafter removing 25:");
    println!("elements:   {:?}", list.elements());

    let cross: Vec<i64> = list.side_cross().collect();
    println!("side-cross: {:?}", cross);
}
