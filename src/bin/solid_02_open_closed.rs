// Open/closed: new filter predicates are new specification types. The
// filter itself never changes.

use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Red,
    Green,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Size {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, PartialEq)]
struct Product {
    name: String,
    color: Color,
    size: Size,
}

impl Product {
    fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Self {
            name: name.into(),
            color,
            size,
        }
    }
}

// =============================================================================
// Specification seam
// =============================================================================

trait Specification<T> {
    fn is_satisfied(&self, item: &T) -> bool;
}

/// The filter is closed for modification: adding a predicate means adding
/// a Specification impl, never touching this code.
struct Filter;

impl Filter {
    fn apply<'a, T>(items: &'a [T], spec: &dyn Specification<T>) -> Vec<&'a T> {
        items.iter().filter(|item| spec.is_satisfied(item)).collect()
    }
}

struct ColorSpec {
    color: Color,
}

impl Specification<Product> for ColorSpec {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.color == self.color
    }
}

struct SizeSpec {
    size: Size,
}

impl Specification<Product> for SizeSpec {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.size == self.size
    }
}

/// Generic conjunction of two specifications, itself a specification.
struct AndSpec<'a, T> {
    first: &'a dyn Specification<T>,
    second: &'a dyn Specification<T>,
}

impl<'a, T> AndSpec<'a, T> {
    fn new(first: &'a dyn Specification<T>, second: &'a dyn Specification<T>) -> Self {
        Self { first, second }
    }
}

impl<T> Specification<T> for AndSpec<'_, T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) && self.second.is_satisfied(item)
    }
}

fn paint(name: &str, color: Color) -> colored::ColoredString {
    match color {
        Color::Red => name.red(),
        Color::Green => name.green(),
        Color::Blue => name.blue(),
    }
}

fn main() {
    let items = vec![
        Product::new("Apple", Color::Green, Size::Small),
        Product::new("Tree", Color::Green, Size::Large),
        Product::new("House", Color::Blue, Size::Large),
    ];

    println!("=== Green products ===");
    let green = ColorSpec { color: Color::Green };
    for item in Filter::apply(&items, &green) {
        println!("{} is green", paint(&item.name, item.color));
    }

    println!("\n=== Large products ===");
    let large = SizeSpec { size: Size::Large };
    for item in Filter::apply(&items, &large) {
        println!("{} is large", paint(&item.name, item.color));
    }

    println!("\n=== Green AND large ===");
    let green_and_large = AndSpec::new(&green, &large);
    for item in Filter::apply(&items, &green_and_large) {
        println!("{} is green and large", paint(&item.name, item.color));
    }
}
